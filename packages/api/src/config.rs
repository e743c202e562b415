//! Endpoint configuration for [`HttpTestimonials`](crate::HttpTestimonials).

use serde::{Deserialize, Serialize};

/// Where the testimonials endpoint lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and authority of the backend, e.g. `https://example.org`.
    /// `None` means "same origin as the page".
    #[serde(default)]
    pub base_url: Option<String>,
    /// Path of the collection resource.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    "/testimonials".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            endpoint: default_endpoint(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Full URL of the endpoint, given the origin to fall back on.
    pub fn endpoint_url(&self, fallback_origin: &str) -> String {
        let base = self.base_url.as_deref().unwrap_or(fallback_origin);
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}
