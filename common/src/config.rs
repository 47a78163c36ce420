use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8081/api";
pub const DEFAULT_PROCESSING_TYPES: [&str; 2] = ["streaming", "request-response"];
pub const DEFAULT_INVOKE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend API, without a trailing slash.
    pub api_url: String,

    /// Processing types whose service definitions make up the catalog.
    ///
    /// Order matters: services sharing a name keep this order in the catalog.
    pub processing_types: Vec<String>,

    /// Upper bound for a single ad-hoc service invocation.
    pub invoke_timeout: Duration,

    /// 0 prints everything, 1 drops headers, 2 prints bare results only.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            processing_types: DEFAULT_PROCESSING_TYPES
                .iter()
                .map(|processing_type| processing_type.to_string())
                .collect(),
            invoke_timeout: DEFAULT_INVOKE_TIMEOUT,
            quiet: 0,
        }
    }
}
