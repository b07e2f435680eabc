//! Storefront configuration.
//!
//! Loaded from TOML. Every section and field has a default, so an empty
//! document is a valid configuration.

use crate::MasonError;
use mason_seo::SiteDefaults;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Site identity and metadata defaults.
    #[serde(default)]
    pub site: SiteConfig,

    /// Backend API.
    #[serde(default)]
    pub api: ApiConfig,

    /// Feedback widget.
    #[serde(default)]
    pub feedback: FeedbackConfig,

    /// Overlay timings.
    #[serde(default)]
    pub overlays: OverlayConfig,

    /// Cached order handling.
    #[serde(default)]
    pub orders: OrderConfig,

    /// Logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StoreConfig {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, MasonError> {
        let config: StoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the storefront cannot run with.
    pub fn validate(&self) -> Result<(), MasonError> {
        if !self.site.base_url.starts_with("http://") && !self.site.base_url.starts_with("https://")
        {
            return Err(MasonError::ConfigError(format!(
                "site.base_url must be absolute, got {:?}",
                self.site.base_url
            )));
        }
        if self.feedback.enabled && self.feedback.script_src.trim().is_empty() {
            return Err(MasonError::ConfigError(
                "feedback.script_src is required when the widget is enabled".to_string(),
            ));
        }
        Ok(())
    }

    /// Base URL of the backend API.
    pub fn api_base_url(&self) -> &str {
        &self.api.base_url
    }

    /// Metadata defaults for page heads.
    pub fn site_defaults(&self) -> SiteDefaults {
        let site = &self.site;
        SiteDefaults {
            site_name: site.name.clone(),
            default_title: site.default_title.clone(),
            default_description: site.description.clone(),
            default_keywords: site.keywords.clone(),
            default_image: site.default_image.clone(),
            base_url: site.base_url.clone(),
            twitter_handle: site.twitter_handle.clone(),
            seller_name: site.seller_name.clone().unwrap_or_else(|| site.name.clone()),
        }
    }
}

/// Site identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Brand name.
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Title for pages that set none.
    #[serde(default = "default_site_title")]
    pub default_title: String,

    #[serde(default = "default_site_description")]
    pub description: String,

    #[serde(default)]
    pub keywords: Vec<String>,

    /// Social preview image.
    #[serde(default = "default_site_image")]
    pub default_image: String,

    /// Public origin used for canonical URLs.
    #[serde(default = "default_site_url")]
    pub base_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_handle: Option<String>,

    /// Seller named in product offers (default: site name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_name: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            default_title: default_site_title(),
            description: default_site_description(),
            keywords: Vec::new(),
            default_image: default_site_image(),
            base_url: default_site_url(),
            twitter_handle: None,
            seller_name: None,
        }
    }
}

fn default_site_name() -> String {
    "Mason".to_string()
}

fn default_site_title() -> String {
    "Mason | Building Materials & Décor".to_string()
}

fn default_site_description() -> String {
    "Tiles, stone, flooring and finishing services for homes and projects.".to_string()
}

fn default_site_image() -> String {
    "/images/og-default.jpg".to_string()
}

fn default_site_url() -> String {
    "https://mason.store".to_string()
}

/// Backend API configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; empty means same origin.
    #[serde(default)]
    pub base_url: String,
}

/// Feedback widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Widget id, unique among mounted widgets.
    #[serde(default = "default_feedback_id")]
    pub id: String,

    /// Remote script URL.
    #[serde(default)]
    pub script_src: String,

    /// Globals the script reads on load.
    #[serde(default)]
    pub globals: BTreeMap<String, String>,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            id: default_feedback_id(),
            script_src: String::new(),
            globals: BTreeMap::new(),
        }
    }
}

fn default_feedback_id() -> String {
    "feedback".to_string()
}

/// Overlay timings in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,

    #[serde(default = "default_skeleton_ms")]
    pub skeleton_ms: u64,
}

impl OverlayConfig {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    pub fn skeleton_duration(&self) -> Duration {
        Duration::from_millis(self.skeleton_ms)
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            toast_ms: default_toast_ms(),
            skeleton_ms: default_skeleton_ms(),
        }
    }
}

fn default_toast_ms() -> u64 {
    3000
}

fn default_skeleton_ms() -> u64 {
    2000
}

/// Cached order handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfig {
    /// Hours after which a cached order is ignored.
    #[serde(default = "default_cache_max_age_hours")]
    pub cache_max_age_hours: u64,
}

impl OrderConfig {
    pub fn cache_max_age(&self) -> Duration {
        Duration::from_secs(self.cache_max_age_hours * 3600)
    }
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            cache_max_age_hours: default_cache_max_age_hours(),
        }
    }
}

fn default_cache_max_age_hours() -> u64 {
    24
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Maximum level: trace, debug, info, warn or error.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = StoreConfig::from_toml("").unwrap();

        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.site.name, "Mason");
        assert_eq!(config.api_base_url(), "");
        assert!(!config.feedback.enabled);
        assert_eq!(config.overlays.toast_duration(), Duration::from_millis(3000));
        assert_eq!(config.overlays.skeleton_duration(), Duration::from_millis(2000));
        assert_eq!(config.orders.cache_max_age(), Duration::from_secs(24 * 3600));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let config = StoreConfig::from_toml(
            r#"
            [site]
            name = "Mason Stoneworks"
            twitter_handle = "@masonstone"

            [api]
            base_url = "https://api.mason.store"

            [orders]
            cache_max_age_hours = 6
            "#,
        )
        .unwrap();

        assert_eq!(config.site.name, "Mason Stoneworks");
        assert_eq!(config.site.base_url, "https://mason.store");
        assert_eq!(config.api_base_url(), "https://api.mason.store");
        assert_eq!(config.orders.cache_max_age(), Duration::from_secs(6 * 3600));
        assert_eq!(config.overlays.toast_ms, 3000);
    }

    #[test]
    fn test_feedback_section() {
        let config = StoreConfig::from_toml(
            r#"
            [feedback]
            enabled = true
            script_src = "https://widgets.example/feedback.js"

            [feedback.globals]
            FeedbackProjectId = "mason-web"
            "#,
        )
        .unwrap();

        assert!(config.feedback.enabled);
        assert_eq!(config.feedback.id, "feedback");
        assert_eq!(
            config.feedback.globals.get("FeedbackProjectId").map(String::as_str),
            Some("mason-web")
        );
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            StoreConfig::from_toml("[site]\nbase_url = \"mason.store\""),
            Err(MasonError::ConfigError(_))
        ));
        assert!(matches!(
            StoreConfig::from_toml("[feedback]\nenabled = true"),
            Err(MasonError::ConfigError(_))
        ));
        assert!(matches!(
            StoreConfig::from_toml("[overlays]\ntoast_ms = \"soon\""),
            Err(MasonError::ConfigError(_))
        ));
    }

    #[test]
    fn test_site_defaults() {
        let mut config = StoreConfig::default();
        config.site.keywords = vec!["tiles".into()];

        let site = config.site_defaults();
        assert_eq!(site.site_name, "Mason");
        assert_eq!(site.seller_name, "Mason");
        assert_eq!(site.default_keywords, vec!["tiles".to_string()]);

        config.site.seller_name = Some("Mason Supply Co.".into());
        assert_eq!(config.site_defaults().seller_name, "Mason Supply Co.");
    }
}
