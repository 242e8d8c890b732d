//! Instance settings loading and access

use serde::{Deserialize, Serialize};

use crate::core::error::ShelfResult;
use crate::input::{PrefixedValue, split_prefixed_value};
use crate::locale::{LocaleOption, find_locale};

/// Scheme prefixes offered by the site-url input
pub const SITE_URL_PREFIXES: &[&str] = &["http://", "https://"];

/// Default scheme when a configured site URL carries none
pub const DEFAULT_SITE_URL_PREFIX: &str = "https://";

/// Instance settings consumed by the browsing and input components
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    /// Public base URL of the instance (e.g. "https://bi.example.com")
    pub site_url: Option<String>,

    /// Locale tag of the instance default locale (e.g. "pt-BR")
    pub site_locale: Option<String>,
}

impl SettingsConfig {
    /// Load settings from a YAML file
    pub fn from_yaml_file(path: &str) -> ShelfResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path, "loaded instance settings");
        Ok(config)
    }

    /// Load settings from a YAML string
    pub fn from_yaml_str(yaml: &str) -> ShelfResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// The site URL split into scheme prefix and host part, as the
    /// two-part site-url input presents it.
    pub fn site_url_parts(&self) -> PrefixedValue {
        split_prefixed_value(
            self.site_url.as_deref(),
            SITE_URL_PREFIXES,
            DEFAULT_SITE_URL_PREFIX,
            true,
        )
    }

    /// The locale table entry for the configured instance locale, if the
    /// tag is known.
    pub fn locale_option(&self) -> Option<&'static LocaleOption> {
        self.site_locale.as_deref().and_then(find_locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_str() {
        let yaml = r#"
site_url: "https://bi.example.com"
site_locale: "de"
"#;
        let config = SettingsConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.site_url.as_deref(), Some("https://bi.example.com"));
        assert_eq!(config.site_locale.as_deref(), Some("de"));
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let config = SettingsConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, SettingsConfig::default());
    }

    #[test]
    fn test_site_url_parts_with_scheme() {
        let config = SettingsConfig {
            site_url: Some("http://bi.example.com".to_string()),
            site_locale: None,
        };
        let parts = config.site_url_parts();
        assert_eq!(parts.prefix, "http://");
        assert_eq!(parts.remainder, "bi.example.com");
    }

    #[test]
    fn test_site_url_parts_scheme_is_case_insensitive() {
        let config = SettingsConfig {
            site_url: Some("HTTPS://bi.example.com".to_string()),
            site_locale: None,
        };
        let parts = config.site_url_parts();
        assert_eq!(parts.prefix, "https://");
        assert_eq!(parts.remainder, "bi.example.com");
    }

    #[test]
    fn test_site_url_parts_without_scheme() {
        let config = SettingsConfig {
            site_url: Some("bi.example.com".to_string()),
            site_locale: None,
        };
        let parts = config.site_url_parts();
        assert_eq!(parts.prefix, "https://");
        assert_eq!(parts.remainder, "bi.example.com");
    }

    #[test]
    fn test_site_url_parts_unset() {
        let config = SettingsConfig::default();
        let parts = config.site_url_parts();
        assert_eq!(parts.prefix, "");
        assert_eq!(parts.remainder, "");
    }

    #[test]
    fn test_locale_option_lookup() {
        let config = SettingsConfig {
            site_url: None,
            site_locale: Some("ja".to_string()),
        };
        assert_eq!(config.locale_option().unwrap().value, Some("ja"));

        let unknown = SettingsConfig {
            site_url: None,
            site_locale: Some("tlh".to_string()),
        };
        assert!(unknown.locale_option().is_none());
    }

    #[test]
    fn test_parse_error_is_typed() {
        let err = SettingsConfig::from_yaml_str("site_url: [unclosed").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
    }
}
