//! # Widget configuration: `widget.toml`
//!
//! ```toml
//! [api]
//! base_url = "https://school.example"   # omit to use the page origin
//! endpoint = "/testimonials"
//!
//! [messages]
//! hide_after_ms = 5000
//! empty = "No testimonials yet."
//! ```
//!
//! Every field has a default, so a missing or empty file is equivalent to
//! [`WidgetConfig::default`].

use std::time::Duration;

use api::ApiConfig;
use serde::{Deserialize, Serialize};

/// Origin used when no `base_url` is configured and there is no page.
pub const NATIVE_FALLBACK_ORIGIN: &str = "http://127.0.0.1:8000";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
}

/// User-facing texts and the message-area timeout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    /// How long a submission message stays visible.
    pub hide_after_ms: u64,
    pub loading: String,
    pub empty: String,
    pub load_failed: String,
    /// Accepted, waiting for moderation.
    pub submitted_pending: String,
    /// Accepted and already visible.
    pub submitted_published: String,
    pub submit_failed: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            hide_after_ms: 5000,
            loading: "Loading testimonials...".into(),
            empty: "No testimonials yet.".into(),
            load_failed: "Failed to load testimonials. Please try again later.".into(),
            submitted_pending: "Thank you! Your testimonial was submitted and is pending approval."
                .into(),
            submitted_published: "Thank you! Your testimonial has been published.".into(),
            submit_failed: "Submission failed".into(),
        }
    }
}

impl MessagesConfig {
    pub fn hide_after(&self) -> Duration {
        Duration::from_millis(self.hide_after_ms)
    }
}

impl WidgetConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "widget.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Origin of the current page, used when `api.base_url` is not set.
#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| NATIVE_FALLBACK_ORIGIN.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> String {
    NATIVE_FALLBACK_ORIGIN.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(WidgetConfig::from_toml("").unwrap(), WidgetConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = WidgetConfig::from_toml(
            r#"
            [api]
            base_url = "https://school.example"

            [messages]
            hide_after_ms = 1500
            empty = "Be the first!"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url.as_deref(), Some("https://school.example"));
        assert_eq!(config.api.endpoint, "/testimonials");
        assert_eq!(config.messages.hide_after(), Duration::from_millis(1500));
        assert_eq!(config.messages.empty, "Be the first!");
        assert_eq!(config.messages.submit_failed, "Submission failed");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = WidgetConfig {
            api: ApiConfig::default().with_base_url("http://localhost:9000"),
            messages: MessagesConfig::default(),
        };
        let parsed = WidgetConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(WidgetConfig::from_toml("[messages]\nhide_after_ms = \"soon\"").is_err());
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(
            MessagesConfig::default().hide_after(),
            Duration::from_secs(5)
        );
    }
}
