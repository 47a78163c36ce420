//! Ad-hoc service invocation.
//!
//! [`InvocationController`] owns the catalog and walks one selected service
//! through `Unselected → Selected → Invoking → Resulted`. `Selected` and
//! `Resulted` both accept a new invocation; nothing is terminal.
//!
//! Invocations are split into [`InvocationController::begin_invocation`] and
//! [`InvocationController::complete_invocation`] so a front-end can keep
//! reacting to input while a call is outstanding. Only the outstanding ticket
//! is accepted back. Its completion is dropped if the operator has selected
//! again since it was issued. [`InvocationController::invoke`] chains both
//! around a single call to the port.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, warn};

use flowadmin_common::error::AdminError;
use flowadmin_common::model::binding::ParameterBinding;
use flowadmin_common::model::catalog::ServiceDescriptor;
use flowadmin_common::model::invocation::{InvocationResponse, InvocationResult, InvocationStatus};
use flowadmin_common::ports::AdminApi;

use crate::{binder, catalog};

const SERVER_ERROR: u16 = 500;

#[derive(Debug, Clone, PartialEq)]
pub enum InvocationState {
    Unselected,
    Selected {
        service: ServiceDescriptor,
        bindings: Vec<ParameterBinding>,
    },
    Invoking {
        service: ServiceDescriptor,
        bindings: Vec<ParameterBinding>,
    },
    Resulted {
        service: ServiceDescriptor,
        bindings: Vec<ParameterBinding>,
        result: InvocationResult,
    },
}

/// Everything needed to issue one invocation request.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationTicket {
    pub processing_type: String,
    pub service_name: String,
    pub bindings: Vec<ParameterBinding>,
    generation: u64,
    sequence: u64,
}

/// How an issued invocation ended, before classification.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationOutcome {
    Response(InvocationResponse),
    TimedOut(Duration),
}

#[derive(Debug)]
pub struct InvocationController {
    catalog: Vec<ServiceDescriptor>,
    state: InvocationState,
    generation: u64,
    issued: u64,
    outstanding: Option<u64>,
}

impl InvocationController {
    /// Creates a controller and selects the first service of `catalog`, if any.
    pub fn new(catalog: Vec<ServiceDescriptor>) -> Self {
        let mut controller = Self {
            catalog,
            state: InvocationState::Unselected,
            generation: 0,
            issued: 0,
            outstanding: None,
        };
        if let Some(first) = controller.catalog.first().cloned() {
            controller.enter_selected(first);
        }
        controller
    }

    pub fn catalog(&self) -> &[ServiceDescriptor] {
        &self.catalog
    }

    pub fn state(&self) -> &InvocationState {
        &self.state
    }

    pub fn selected(&self) -> Option<&ServiceDescriptor> {
        match &self.state {
            InvocationState::Unselected => None,
            InvocationState::Selected { service, .. }
            | InvocationState::Invoking { service, .. }
            | InvocationState::Resulted { service, .. } => Some(service),
        }
    }

    pub fn bindings(&self) -> &[ParameterBinding] {
        match &self.state {
            InvocationState::Unselected => &[],
            InvocationState::Selected { bindings, .. }
            | InvocationState::Invoking { bindings, .. }
            | InvocationState::Resulted { bindings, .. } => bindings,
        }
    }

    pub fn result(&self) -> Option<&InvocationResult> {
        match &self.state {
            InvocationState::Resulted { result, .. } => Some(result),
            _ => None,
        }
    }

    /// The text shown to the operator; empty until an invocation completes.
    pub fn response_text(&self) -> &str {
        self.result().map(|result| result.text.as_str()).unwrap_or_default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.outstanding.is_some()
    }

    /// Selects the first catalog entry named `name`.
    ///
    /// Bindings are always rebuilt and any previous result dropped, even when
    /// `name` is already selected.
    pub fn select_service(&mut self, name: &str) -> Result<&ServiceDescriptor, AdminError> {
        let service = catalog::find(&self.catalog, name)
            .cloned()
            .ok_or_else(|| AdminError::ServiceNotFound(name.to_string()))?;
        self.enter_selected(service);
        self.selected().ok_or(AdminError::NoServiceSelected)
    }

    /// Selects the entry named `name` within `processing_type`.
    pub fn select_service_in(
        &mut self,
        processing_type: &str,
        name: &str,
    ) -> Result<&ServiceDescriptor, AdminError> {
        let service = catalog::find_in(&self.catalog, processing_type, name)
            .cloned()
            .ok_or_else(|| AdminError::ServiceNotFound(format!("{processing_type}/{name}")))?;
        self.enter_selected(service);
        self.selected().ok_or(AdminError::NoServiceSelected)
    }

    fn enter_selected(&mut self, service: ServiceDescriptor) {
        self.generation += 1;
        debug!(service = %service.name, generation = self.generation, "service selected");
        let bindings = binder::initialize(&service.parameters);
        self.state = InvocationState::Selected { service, bindings };
    }

    /// Rebinds one parameter. A shown result stays until the next invocation.
    pub fn edit_parameter(&mut self, name: &str, value: &str) -> Result<(), AdminError> {
        match std::mem::replace(&mut self.state, InvocationState::Unselected) {
            InvocationState::Selected { service, bindings } => {
                let bindings = binder::set_value(&bindings, name, value);
                self.state = InvocationState::Selected { service, bindings };
                Ok(())
            }
            InvocationState::Resulted { service, bindings, result } => {
                let bindings = binder::set_value(&bindings, name, value);
                self.state = InvocationState::Resulted { service, bindings, result };
                Ok(())
            }
            InvocationState::Unselected => Err(AdminError::NoServiceSelected),
            invoking @ InvocationState::Invoking { .. } => {
                self.state = invoking;
                Err(AdminError::InvocationInFlight)
            }
        }
    }

    /// Moves to `Invoking` and hands out the request to issue.
    ///
    /// Fails without side effects while another invocation is outstanding,
    /// including one issued for a previous selection.
    pub fn begin_invocation(&mut self) -> Result<InvocationTicket, AdminError> {
        if self.outstanding.is_some() {
            return Err(AdminError::InvocationInFlight);
        }

        match std::mem::replace(&mut self.state, InvocationState::Unselected) {
            InvocationState::Selected { service, bindings }
            | InvocationState::Resulted { service, bindings, .. } => {
                let ticket = InvocationTicket {
                    processing_type: service.processing_type.clone(),
                    service_name: service.name.clone(),
                    bindings: bindings.clone(),
                    generation: self.generation,
                    sequence: self.issued + 1,
                };
                self.issued = ticket.sequence;
                self.state = InvocationState::Invoking { service, bindings };
                self.outstanding = Some(ticket.sequence);
                Ok(ticket)
            }
            InvocationState::Unselected => Err(AdminError::NoServiceSelected),
            invoking @ InvocationState::Invoking { .. } => {
                self.state = invoking;
                Err(AdminError::InvocationInFlight)
            }
        }
    }

    /// Stores the classified outcome of `ticket`.
    ///
    /// Returns `false` when `ticket` is not the outstanding one or belongs to
    /// an earlier selection; the outcome is then discarded and the current
    /// state is left alone.
    pub fn complete_invocation(&mut self, ticket: InvocationTicket, outcome: InvocationOutcome) -> bool {
        if !self.release(&ticket) {
            debug!(service = %ticket.service_name, sequence = ticket.sequence, "ignoring a ticket that is not outstanding");
            return false;
        }
        if ticket.generation != self.generation {
            debug!(service = %ticket.service_name, "discarding response for a previous selection");
            return false;
        }

        let result = match outcome {
            InvocationOutcome::Response(response) => classify(&response),
            InvocationOutcome::TimedOut(after) => timed_out(after),
        };

        match std::mem::replace(&mut self.state, InvocationState::Unselected) {
            InvocationState::Invoking { service, bindings } => {
                self.state = InvocationState::Resulted { service, bindings, result };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Releases `ticket` without a result, returning to `Selected`.
    pub fn abort_invocation(&mut self, ticket: &InvocationTicket) {
        if !self.release(ticket) || ticket.generation != self.generation {
            return;
        }
        self.state = match std::mem::replace(&mut self.state, InvocationState::Unselected) {
            InvocationState::Invoking { service, bindings } => {
                InvocationState::Selected { service, bindings }
            }
            other => other,
        };
    }

    /// Frees the in-flight slot if `ticket` is the one holding it.
    fn release(&mut self, ticket: &InvocationTicket) -> bool {
        if self.outstanding != Some(ticket.sequence) {
            return false;
        }
        self.outstanding = None;
        true
    }

    /// Issues exactly one call for the current selection and stores its result.
    ///
    /// A call exceeding `timeout` yields a [`InvocationStatus::TimedOut`]
    /// result. Transport failures return to `Selected` and are propagated.
    pub async fn invoke(
        &mut self,
        api: &dyn AdminApi,
        timeout: Duration,
    ) -> Result<InvocationResult, AdminError> {
        let ticket = self.begin_invocation()?;
        info!(
            service = %ticket.service_name,
            processing_type = %ticket.processing_type,
            "invoking service"
        );

        let call = api.invoke_service(&ticket.processing_type, &ticket.service_name, &ticket.bindings);
        let outcome = match tokio::time::timeout(timeout, call).await {
            Ok(Ok(response)) => InvocationOutcome::Response(response),
            Ok(Err(e)) => {
                self.abort_invocation(&ticket);
                return Err(e.into());
            }
            Err(_) => {
                warn!(service = %ticket.service_name, "invocation timed out after {} ms", timeout.as_millis());
                InvocationOutcome::TimedOut(timeout)
            }
        };

        self.complete_invocation(ticket, outcome);
        self.result().cloned().ok_or(AdminError::NoServiceSelected)
    }
}

/// Turns a raw response into the text shown to the operator.
///
/// A 500 shows the `message` of the JSON error body; every other status shows
/// the body as-is.
pub fn classify(response: &InvocationResponse) -> InvocationResult {
    if response.status != SERVER_ERROR {
        return InvocationResult {
            text: response.body.clone(),
            status: InvocationStatus::Success,
        };
    }

    let message: Option<String> = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| body.get("message").and_then(Value::as_str).map(str::to_string));

    let text = message.unwrap_or_else(|| {
        warn!("server error without a message field, showing the raw body");
        response.body.clone()
    });

    InvocationResult {
        text,
        status: InvocationStatus::ServerError,
    }
}

fn timed_out(after: Duration) -> InvocationResult {
    InvocationResult {
        text: format!("invocation timed out after {} ms", after.as_millis()),
        status: InvocationStatus::TimedOut,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
