//! Site-wide metadata defaults.

use serde::{Deserialize, Serialize};

/// Values used when a page leaves a field unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDefaults {
    /// Brand name appended to page titles.
    pub site_name: String,
    /// Title used when a page sets none.
    pub default_title: String,
    pub default_description: String,
    pub default_keywords: Vec<String>,
    /// Social preview image, absolute or site-relative.
    pub default_image: String,
    /// Absolute origin, e.g. `https://mason.store`.
    pub base_url: String,
    /// Twitter handle including the `@`.
    pub twitter_handle: Option<String>,
    /// Organization named as `seller` in product offers.
    pub seller_name: String,
}

impl SiteDefaults {
    /// Make `path` absolute against the base URL.
    ///
    /// Absolute URLs pass through. Exactly one `/` joins base and path.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
            return path.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, path)
        }
    }
}

impl Default for SiteDefaults {
    fn default() -> Self {
        Self {
            site_name: "Mason".to_string(),
            default_title: "Mason | Building Materials & Décor".to_string(),
            default_description:
                "Tiles, stone, flooring and finishing services for homes and projects.".to_string(),
            default_keywords: vec![
                "building materials".to_string(),
                "tiles".to_string(),
                "home décor".to_string(),
            ],
            default_image: "/images/og-default.jpg".to_string(),
            base_url: "https://mason.store".to_string(),
            twitter_handle: None,
            seller_name: "Mason".to_string(),
        }
    }
}
