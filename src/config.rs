//! Page Configuration
//!
//! The object passed to `initPage` from the page markup, and its validated form.

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;
use crate::i18n::Locale;

pub const DEFAULT_ENDPOINT: &str = "/api/records";

/// Which page variant is being bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Workshop page: table plus the new-record form
    Maintenance,
    /// Rental office page: table only
    #[serde(alias = "rental")]
    Listing,
}

/// Config object as written in the page
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawPageConfig {
    pub scope: Scope,
    #[serde(alias = "tableWrapId")]
    pub table_wrap: String,
    #[serde(alias = "searchId")]
    pub search: String,
    #[serde(alias = "filterId")]
    pub filter: String,
    #[serde(alias = "refreshId")]
    pub refresh: String,
    #[serde(default, alias = "formId")]
    pub form: Option<String>,
    #[serde(default, alias = "statusId")]
    pub status: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub log_level: Option<String>,
}

/// Element ids of the write path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteTargets {
    pub form: String,
    pub status: Option<String>,
}

/// Validated page configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub scope: Scope,
    pub table_wrap: String,
    pub search: String,
    pub filter: String,
    pub refresh: String,
    /// Present only on a maintenance page with a form
    pub write: Option<WriteTargets>,
    pub endpoint: String,
    pub locale: Locale,
    pub log_level: Option<LevelFilter>,
}

impl PageConfig {
    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        let raw: RawPageConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|e| ConfigError::Malformed(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawPageConfig) -> Result<Self, ConfigError> {
        let table_wrap = required("tableWrap", raw.table_wrap)?;
        let search = required("search", raw.search)?;
        let filter = required("filter", raw.filter)?;
        let refresh = required("refresh", raw.refresh)?;
        let form = optional(raw.form);
        let status = optional(raw.status);

        let write = match (raw.scope, form) {
            (Scope::Maintenance, Some(form)) => Some(WriteTargets { form, status }),
            (Scope::Maintenance, None) => {
                log::warn!("Maintenance page has no form, binding it read-only");
                None
            }
            (Scope::Listing, Some(form)) => {
                log::warn!("Ignoring form '{}' on a listing page", form);
                None
            }
            (Scope::Listing, None) => None,
        };

        let log_level = match raw.log_level {
            Some(level) => Some(
                level
                    .parse::<LevelFilter>()
                    .map_err(|_| ConfigError::LogLevel(level))?,
            ),
            None => None,
        };

        Ok(Self {
            scope: raw.scope,
            table_wrap,
            search,
            filter,
            refresh,
            write,
            endpoint: optional(raw.endpoint).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            locale: raw.locale,
            log_level,
        })
    }
}

fn required(name: &'static str, id: String) -> Result<String, ConfigError> {
    let id = id.trim().to_string();
    if id.is_empty() {
        Err(ConfigError::EmptyId(name))
    } else {
        Ok(id)
    }
}

fn optional(id: Option<String>) -> Option<String> {
    id.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<PageConfig, ConfigError> {
        let raw: RawPageConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        PageConfig::from_raw(raw)
    }

    #[test]
    fn test_maintenance_page() {
        let config = parse(
            r#"{"scope":"maintenance","tableWrap":"wrap","search":"q","filter":"limit",
                "refresh":"reload","form":"new-record","status":"status"}"#,
        )
        .unwrap();
        assert_eq!(config.scope, Scope::Maintenance);
        assert_eq!(
            config.write,
            Some(WriteTargets { form: "new-record".into(), status: Some("status".into()) })
        );
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.locale, Locale::Ar);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_legacy_id_keys_and_rental_scope() {
        let config = parse(
            r#"{"scope":"rental","tableWrapId":"wrap","searchId":"q","filterId":"limit",
                "refreshId":"reload","locale":"en","logLevel":"debug"}"#,
        )
        .unwrap();
        assert_eq!(config.scope, Scope::Listing);
        assert_eq!(config.table_wrap, "wrap");
        assert!(config.write.is_none());
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.log_level, Some(LevelFilter::Debug));
    }

    #[test]
    fn test_maintenance_without_form_binds_read_only() {
        let config = parse(
            r#"{"scope":"maintenance","tableWrapId":"wrap","searchId":"q","filterId":"limit",
                "refreshId":"reload"}"#,
        )
        .unwrap();
        assert_eq!(config.scope, Scope::Maintenance);
        assert_eq!(config.table_wrap, "wrap");
        assert_eq!(config.refresh, "reload");
        assert!(config.write.is_none());

        let config = parse(
            r#"{"scope":"maintenance","tableWrap":"wrap","search":"q","filter":"limit",
                "refresh":"reload","form":"  ","status":"status"}"#,
        )
        .unwrap();
        assert!(config.write.is_none());
    }

    #[test]
    fn test_listing_ignores_form() {
        let config = parse(
            r#"{"scope":"listing","tableWrap":"wrap","search":"q","filter":"limit",
                "refresh":"reload","form":"f","status":"s"}"#,
        )
        .unwrap();
        assert!(config.write.is_none());
    }

    #[test]
    fn test_empty_required_id() {
        let err = parse(
            r#"{"scope":"listing","tableWrap":"","search":"q","filter":"limit","refresh":"r"}"#,
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::EmptyId("tableWrap"));
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let err = parse(
            r#"{"scope":"listing","tableWrap":"w","search":"q","filter":"l","refresh":"r",
                "theme":"dark"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn test_bad_log_level() {
        let err = parse(
            r#"{"scope":"listing","tableWrap":"w","search":"q","filter":"l","refresh":"r",
                "logLevel":"loud"}"#,
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::LogLevel("loud".into()));
    }
}
