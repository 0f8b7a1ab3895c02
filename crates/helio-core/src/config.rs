//! Embedding options accepted by every page.

use std::collections::BTreeMap;

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer};

use crate::error::{ConfigError, ConfigResult};
use crate::i18n::{Language, LocalizedTexts, TextNode, merge_texts};
use crate::viewport::{Anchor, FitPolicy};

/// Optional live-data endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiConfig {
    /// Whether the page should try the endpoint at all.
    pub enabled: bool,
    /// Absolute or site-relative URL.
    pub endpoint: String,
}

impl ApiConfig {
    /// Enabled config pointing at `endpoint`.
    #[must_use]
    pub fn enabled(endpoint: impl Into<String>) -> Self {
        Self {
            enabled: true,
            endpoint: endpoint.into(),
        }
    }

    /// URL to request, or `None` when disabled or blank.
    #[must_use]
    pub fn active_url(&self) -> Option<&str> {
        let endpoint = self.endpoint.trim();
        (self.enabled && !endpoint.is_empty()).then_some(endpoint)
    }

    /// Fill a blank endpoint with the page's own REST path.
    #[must_use]
    pub fn or_default_endpoint(&self, default: Option<&str>) -> Self {
        match default {
            Some(path) if self.endpoint.trim().is_empty() => Self {
                enabled: self.enabled,
                endpoint: path.to_string(),
            },
            _ => self.clone(),
        }
    }
}

/// Options a host passes to a page. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageOptions {
    /// Width cap for the rendered area.
    pub width: Option<f64>,
    /// Height cap for the rendered area.
    pub height: Option<f64>,
    /// Explicit language code; auto-detected when absent.
    pub lang: Option<String>,
    /// Per-language partial text overrides. Unsupported language keys are dropped.
    #[serde(deserialize_with = "deserialize_texts")]
    pub texts: LocalizedTexts,
    /// Live-data endpoint.
    pub api_config: Option<ApiConfig>,
    /// Fit policy override.
    pub fit: Option<FitPolicy>,
    /// Anchor override.
    pub anchor: Option<Anchor>,
}

impl PageOptions {
    /// Parse and validate options from a JSON payload.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON or a payload that is not an
    /// object, and [`ConfigError::InvalidField`] for non-positive caps or unsupported
    /// languages.
    pub fn from_json(raw: &str) -> ConfigResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse { source })?;
        if !value.is_object() {
            return Err(ConfigError::Parse {
                source: serde_json::Error::invalid_type(unexpected(&value), &"an options object"),
            });
        }
        let options: Self =
            serde_json::from_value(value).map_err(|source| ConfigError::Parse { source })?;
        options.validate()?;
        Ok(options)
    }

    /// Check caps and language.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidField`] naming the first offending option.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_cap("width", self.width)?;
        validate_cap("height", self.height)?;
        if let Some(lang) = &self.lang {
            if Language::from_code(lang).is_none() {
                return Err(ConfigError::InvalidField {
                    field: "lang",
                    value: Some(lang.clone()),
                    reason: "unsupported_language",
                });
            }
        }
        Ok(())
    }

    /// Width and height caps as a pair.
    #[must_use]
    pub const fn caps(&self) -> (Option<f64>, Option<f64>) {
        (self.width, self.height)
    }
}

fn unexpected(value: &serde_json::Value) -> Unexpected<'_> {
    match value {
        serde_json::Value::Null => Unexpected::Unit,
        serde_json::Value::Bool(flag) => Unexpected::Bool(*flag),
        serde_json::Value::Number(_) => Unexpected::Other("number"),
        serde_json::Value::String(text) => Unexpected::Str(text),
        serde_json::Value::Array(_) => Unexpected::Seq,
        serde_json::Value::Object(_) => Unexpected::Map,
    }
}

fn deserialize_texts<'de, D>(deserializer: D) -> Result<LocalizedTexts, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, TextNode>::deserialize(deserializer)?;
    let mut texts = LocalizedTexts::new();
    for (code, overrides) in raw {
        let Some(language) = Language::from_code(&code) else {
            tracing::warn!(lang = %code, "ignoring text overrides for unsupported language");
            continue;
        };
        let merged = match texts.remove(&language) {
            Some(existing) => merge_texts(&existing, Some(&overrides)).into_owned(),
            None => overrides,
        };
        texts.insert(language, merged);
    }
    Ok(texts)
}

fn validate_cap(field: &'static str, value: Option<f64>) -> ConfigResult<()> {
    match value {
        Some(cap) if !(cap.is_finite() && cap > 0.0) => Err(ConfigError::InvalidField {
            field,
            value: Some(cap.to_string()),
            reason: "must_be_positive",
        }),
        _ => Ok(()),
    }
}
