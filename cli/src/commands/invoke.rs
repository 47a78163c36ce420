use std::time::Instant;

use anyhow::bail;
use colored::*;

use crate::terminal::{colors, format, print, spinner};
use flowadmin_common::model::catalog::ServiceDescriptor;
use flowadmin_common::model::invocation::{InvocationResult, InvocationStatus};
use flowadmin_common::{config::Config, warn};
use flowadmin_core::admin::AdminService;
use flowadmin_core::invocation::InvocationController;

pub async fn invoke(
    service: &AdminService,
    name: Option<&str>,
    within: Option<&str>,
    params: &[(String, String)],
    cfg: &Config,
) -> anyhow::Result<()> {
    let loading = spinner::start("service catalog", cfg.quiet);
    let controller = service.load_controller().await;
    drop(loading);
    let mut controller: InvocationController = controller?;

    select(&mut controller, name, within)?;
    let Some(selected) = controller.selected().cloned() else {
        bail!("the service catalog is empty, nothing to invoke");
    };

    for (param, expression) in params {
        if !selected.parameters.iter().any(|p| &p.name == param) {
            warn!("'{}' takes no parameter '{param}', ignoring it", selected.name);
            continue;
        }
        controller.edit_parameter(param, expression)?;
    }

    print_request(&selected, &controller, cfg);

    let start_time: Instant = Instant::now();
    let loading = spinner::start(&format!("response of {}", selected.name), cfg.quiet);
    let result = controller.invoke(service.api(), cfg.invoke_timeout).await;
    drop(loading);

    let result: InvocationResult = result?;
    print_result(&result, controller.response_text(), start_time, cfg);
    Ok(())
}

/// Applies the requested selection on top of the default first entry.
fn select(
    controller: &mut InvocationController,
    name: Option<&str>,
    within: Option<&str>,
) -> anyhow::Result<()> {
    match (name, within) {
        (Some(name), Some(processing_type)) => {
            controller.select_service_in(processing_type, name)?;
        }
        (Some(name), None) => {
            controller.select_service(name)?;
        }
        (None, Some(processing_type)) => {
            let Some(first) = controller
                .catalog()
                .iter()
                .find(|descriptor| descriptor.processing_type == processing_type)
                .map(|descriptor| descriptor.name.clone())
            else {
                bail!("no services for processing type '{processing_type}'");
            };
            controller.select_service_in(processing_type, &first)?;
        }
        (None, None) => {}
    }
    Ok(())
}

fn print_request(selected: &ServiceDescriptor, controller: &InvocationController, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    print::section("invocation", cfg.quiet);
    print::field_keys(&["Service", "Type", "Returns"]);
    print::field("Service", selected.name.color(colors::PRIMARY).bold());
    print::field("Type", selected.processing_type.color(colors::SECONDARY));
    print::field(
        "Returns",
        format::human_readable_type(&selected.return_type_name).color(colors::TYPE_NAME),
    );

    let details = format::bindings_to_details(selected, controller.bindings());
    if !details.is_empty() {
        print::entry(0, "Parameters");
        print::entry_details(&details);
    }
}

fn print_result(result: &InvocationResult, text: &str, start_time: Instant, cfg: &Config) {
    print::section("response", cfg.quiet);
    print::line(text);

    let elapsed: ColoredString = format!("{:.2}s", start_time.elapsed().as_secs_f64()).bold().yellow();
    let status: ColoredString = match result.status {
        InvocationStatus::Success => "Invocation Complete".green().bold(),
        InvocationStatus::ServerError => "Invocation Failed".color(colors::FAILURE).bold(),
        InvocationStatus::TimedOut => "Invocation Timed Out".color(colors::FAILURE).bold(),
    };
    let output: ColoredString = format!("{status} in {elapsed}").color(colors::TEXT_DEFAULT);

    print::summary(
        &output.to_string(),
        result.status == InvocationStatus::Success,
        cfg.quiet,
    );
}
