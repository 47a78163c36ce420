//! # Flowadmin Core
//!
//! The logic behind the admin views. Everything here is independent of how the
//! backend is reached: I/O goes through [`flowadmin_common::ports::AdminApi`].
//!
//! * **[`search`]**: finds nodes that reference a component.
//! * **[`catalog`]**: flattens per-processing-type service definitions into one sorted list.
//! * **[`binder`]**: creates and edits parameter bindings.
//! * **[`invocation`]**: the select → bind → invoke → result state machine.
//! * **[`admin`]**: loads everything the admin views need at startup.

pub mod admin;
pub mod binder;
pub mod catalog;
pub mod invocation;
pub mod search;

#[cfg(test)]
pub(crate) mod testing;
