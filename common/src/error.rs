use thiserror::Error;

/// Failures raised by an [`crate::ports::AdminApi`] implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("request to the admin API failed: {0}")]
    Transport(String),

    #[error("admin API answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("could not decode admin API response: {0}")]
    Decode(String),

    #[error("invalid admin API url: {0}")]
    InvalidUrl(String),
}

/// Failures surfaced by the admin core to its callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    #[error("service '{0}' is not present in the catalog")]
    ServiceNotFound(String),

    #[error("no service is selected")]
    NoServiceSelected,

    #[error("an invocation is already in flight")]
    InvocationInFlight,

    #[error(transparent)]
    Api(#[from] ApiError),
}
