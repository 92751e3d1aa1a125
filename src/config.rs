//! Site configuration and the process-wide current year.

use std::sync::OnceLock;

use chrono::Datelike;
use serde::Deserialize;

/// Constants baked into every rendered page.
///
/// Deserializable so the binary can read overrides from a JSON file;
/// missing keys keep their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Used in "PLDB has N ..." facts and the KPI bar.
    pub site_name: String,
    /// Link target of the "page generated by" trailer fact.
    pub generator_source_url: String,
    /// Display text of the "page generated by" trailer fact.
    pub generator_name: String,
    /// `<base>/<id>` is the edit-this-page link.
    pub edit_url_base: String,
    /// `<base>/<id>.pldb` is the view-source link.
    pub view_source_base: String,
    /// Absolute image URLs starting with this prefix are rewritten to `../`.
    pub image_host_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "PLDB".to_string(),
            generator_source_url:
                "https://github.com/breck7/pldb/blob/main/code/LanguagePage.ts".to_string(),
            generator_name: "LanguagePage.ts".to_string(),
            edit_url_base: "https://build.pldb.com/edit".to_string(),
            view_source_base: "https://github.com/breck7/pldb/blob/main/database/things"
                .to_string(),
            image_host_prefix: "https://pldb.com/".to_string(),
        }
    }
}

static CURRENT_YEAR: OnceLock<i32> = OnceLock::new();

/// Calendar year read from the wall clock on first use.
///
/// Every page rendered by this process sees the same value.
pub fn current_year() -> i32 {
    *CURRENT_YEAR.get_or_init(|| chrono::Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_year_is_stable() {
        let first = current_year();
        assert!(first >= 2024);
        assert_eq!(first, current_year());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: SiteConfig = serde_json::from_str(r#"{"siteName": "LangDB"}"#).unwrap();
        assert_eq!(config.site_name, "LangDB");
        assert_eq!(config.image_host_prefix, "https://pldb.com/");
    }
}
