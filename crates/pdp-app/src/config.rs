//! Application configuration.

/// Default catalog API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.lumen-store.dev";

/// Configuration for the product detail application.
///
/// Provided as context at the app root so pages can build their clients
/// without reaching for globals.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the catalog API.
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl AppConfig {
    /// Create a configuration with the default API base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the catalog API base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}
