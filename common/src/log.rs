//! Logging shorthands used across the workspace.
//!
//! These forward to [`tracing`]. Front-ends decide how each target is rendered;
//! [`SUCCESS_TARGET`] events are ordinary `INFO` events that a formatter may
//! highlight as completed work.

pub use tracing;

pub const SUCCESS_TARGET: &str = "flowadmin::success";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log::tracing::warn!($($arg)*)
    };
}
