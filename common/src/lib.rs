//! # Flowadmin Common
//!
//! Shared vocabulary for every `flowadmin` crate.
//!
//! * **[`model`]**: Process graphs, service definitions, catalog entries and bindings.
//! * **[`ports`]**: The outbound [`ports::AdminApi`] contract the core talks to.
//! * **[`config`]**: Runtime settings populated by the CLI.
//! * **[`error`]**: Error enums shared across layers.

pub mod config;
pub mod error;
pub mod log;
pub mod model;
pub mod ports;
