//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml` from the content
//! root. User config files are sparse: stock defaults are the base layer and
//! the file only needs the keys it wants to override. Unknown keys are
//! rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! [site]
//! name = "Crystal Clean"            # Business/site name
//! tagline = "..."                   # Shown in the hero and meta description
//! base_url = "https://example.com"  # Absolute origin, no trailing slash
//!
//! [business]
//! phone = "0113 000 0000"
//! email = "hello@example.com"
//! street = "1 High Street"
//! locality = "Leeds"
//! region = "West Yorkshire"
//! postcode = "LS1 1AA"
//! country = "GB"
//! opening_hours = ["Mo-Fr 08:00-18:00", "Sa 09:00-13:00"]
//!
//! [blog]
//! api_url = "https://cms.example.com/api"
//! page_size = 12                    # Posts per listing page (1-50)
//!
//! [booking]
//! widget_url = "https://booking.example.com/embed.js"  # optional
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity: name, tagline, canonical origin.
    pub site: SiteIdentity,
    /// Business contact and address details (NAP data for structured data).
    pub business: BusinessConfig,
    /// External blog content API settings.
    pub blog: BlogConfig,
    /// Third-party booking widget embed.
    pub booking: BookingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        if !self.site.base_url.starts_with("http://") && !self.site.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(
                "site.base_url must start with http:// or https://".into(),
            ));
        }
        if self.site.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must not end with a trailing slash".into(),
            ));
        }
        if self.blog.page_size == 0 || self.blog.page_size > 50 {
            return Err(ConfigError::Validation("blog.page_size must be 1-50".into()));
        }
        Ok(())
    }
}

/// Site identity settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteIdentity {
    /// Business/site name, used in titles and structured data.
    pub name: String,
    /// Short strapline shown in the hero and default meta description.
    pub tagline: String,
    /// Absolute origin the site is published at, without a trailing slash.
    pub base_url: String,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            name: "Spruce Cleaning".to_string(),
            tagline: "Professional cleaning for homes and businesses".to_string(),
            base_url: "https://example.com".to_string(),
        }
    }
}

/// Business contact and address details.
///
/// Feeds the LocalBusiness structured data and the site footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BusinessConfig {
    pub phone: String,
    pub email: String,
    pub street: String,
    pub locality: String,
    pub region: String,
    pub postcode: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    /// schema.org openingHours tokens, e.g. `"Mo-Fr 08:00-18:00"`.
    pub opening_hours: Vec<String>,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            phone: "0113 000 0000".to_string(),
            email: "hello@example.com".to_string(),
            street: "1 High Street".to_string(),
            locality: "Leeds".to_string(),
            region: "West Yorkshire".to_string(),
            postcode: "LS1 1AA".to_string(),
            country: "GB".to_string(),
            opening_hours: vec![
                "Mo-Fr 08:00-18:00".to_string(),
                "Sa 09:00-13:00".to_string(),
            ],
        }
    }
}

/// External blog content API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlogConfig {
    /// Base URL of the content API, without a trailing slash.
    pub api_url: String,
    /// Posts per listing page.
    pub page_size: u32,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            api_url: "https://cms.example.com/api".to_string(),
            page_size: 12,
        }
    }
}

/// Third-party booking widget embed settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookingConfig {
    /// Script URL of the booking widget. When absent, the contact page
    /// renders phone/email details only.
    pub widget_url: Option<String>,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Spruce Site Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
# Business/site name, used in page titles and structured data.
name = "Spruce Cleaning"

# Short strapline shown in the hero and default meta description.
tagline = "Professional cleaning for homes and businesses"

# Absolute origin the site is published at. No trailing slash.
base_url = "https://example.com"

# ---------------------------------------------------------------------------
# Business contact details (footer + LocalBusiness structured data)
# ---------------------------------------------------------------------------
[business]
phone = "0113 000 0000"
email = "hello@example.com"
street = "1 High Street"
locality = "Leeds"
region = "West Yorkshire"
postcode = "LS1 1AA"
country = "GB"                  # ISO 3166-1 alpha-2
opening_hours = ["Mo-Fr 08:00-18:00", "Sa 09:00-13:00"]

# ---------------------------------------------------------------------------
# Blog content API
# ---------------------------------------------------------------------------
[blog]
# Base URL of the external content API. No trailing slash.
api_url = "https://cms.example.com/api"

# Posts per listing page (1-50).
page_size = 12

# ---------------------------------------------------------------------------
# Booking widget
# ---------------------------------------------------------------------------
[booking]
# Script URL of the third-party booking widget embedded on the contact page.
# Omit to render phone/email contact details only.
# widget_url = "https://booking.example.com/embed.js"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_validates() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_config_has_identity() {
        let config = SiteConfig::default();
        assert_eq!(config.site.name, "Spruce Cleaning");
        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(config.blog.page_size, 12);
        assert!(config.booking.widget_url.is_none());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[site]
name = "Crystal Clean"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.site.name, "Crystal Clean");
        // Default values preserved
        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(config.business.country, "GB");
    }

    #[test]
    fn validate_rejects_empty_name() {
        let mut config = SiteConfig::default();
        config.site.name = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_non_http_base_url() {
        let mut config = SiteConfig::default();
        config.site.base_url = "ftp://example.com".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn validate_rejects_trailing_slash() {
        let mut config = SiteConfig::default();
        config.site.base_url = "https://example.com/".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_page_size_bounds() {
        let mut config = SiteConfig::default();
        config.blog.page_size = 0;
        assert!(config.validate().is_err());
        config.blog.page_size = 51;
        assert!(config.validate().is_err());
        config.blog.page_size = 50;
        assert!(config.validate().is_ok());
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.name, "Spruce Cleaning");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[site]
name = "Crystal Clean"
base_url = "https://crystalclean.example"

[blog]
page_size = 6
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.name, "Crystal Clean");
        assert_eq!(config.blog.page_size, 6);
        // Unspecified values should be defaults
        assert_eq!(config.business.country, "GB");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[blog]
page_size = 9000
"#,
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[site]
nmae = "typo"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let toml_str = r#"
[blogg]
page_size = 12
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"page_size = 12"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"page_size = 6"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("page_size").unwrap().as_integer(), Some(6));
    }

    #[test]
    fn merge_toml_table_merge_preserves_base_keys() {
        let base: toml::Value = toml::from_str(
            r#"
[blog]
api_url = "https://cms.example.com/api"
page_size = 12
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[blog]
page_size = 6
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let blog = merged.get("blog").unwrap();
        assert_eq!(blog.get("page_size").unwrap().as_integer(), Some(6));
        assert_eq!(
            blog.get("api_url").unwrap().as_str(),
            Some("https://cms.example.com/api")
        );
    }

    #[test]
    fn resolve_config_with_overlay() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str(
            r#"
[site]
name = "Overlaid"
"#,
        )
        .unwrap();
        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.site.name, "Overlaid");
        assert_eq!(config.blog.page_size, 12);
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let _: toml::Value =
            toml::from_str(stock_config_toml()).expect("stock config must be valid TOML");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config.site.name, "Spruce Cleaning");
        assert_eq!(config.blog.page_size, 12);
        assert_eq!(config.business.postcode, "LS1 1AA");
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        assert!(content.contains("[site]"));
        assert!(content.contains("[business]"));
        assert!(content.contains("[blog]"));
        assert!(content.contains("[booking]"));
    }
}
