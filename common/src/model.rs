//! # Domain Models
//!
//! Plain data shared by the core, the HTTP adapter and the CLI.
//!
//! ## Inputs (owned by the backend, read-only here)
//! * [`process::Process`]: a process graph and its nodes.
//! * [`definition::ServiceDefinition`]: a registered service, per processing type.
//!
//! ## Derived values
//! * [`catalog::ServiceDescriptor`]: one flattened catalog entry.
//! * [`binding::ParameterBinding`]: an operator-supplied parameter value.
//! * [`invocation::InvocationResult`]: the classified outcome of an ad-hoc call.
//! * [`search::SearchHit`]: one node referencing a searched component.

pub mod binding;
pub mod catalog;
pub mod definition;
pub mod invocation;
pub mod process;
pub mod search;
