//! Page options supplied by the embedding host.

use helio_core::{Language, PageKind, PageModel, PageOptions};

/// Attribute on the mount element that carries the options JSON.
pub const OPTIONS_ATTRIBUTE: &str = "data-options";

/// Parse the raw attribute value.
///
/// A missing or blank value yields the defaults. Malformed or invalid JSON is
/// logged and also yields the defaults so that the page still renders.
#[must_use]
pub fn parse_options(raw: Option<&str>) -> PageOptions {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return PageOptions::default();
    };
    match PageOptions::from_json(raw) {
        Ok(options) => options,
        Err(err) => {
            tracing::warn!(attribute = OPTIONS_ATTRIBUTE, error = %err, "ignoring invalid page options");
            PageOptions::default()
        }
    }
}

/// Options with the language pinned, as chosen through the language switcher.
#[must_use]
pub fn with_language(options: &PageOptions, language: Option<Language>) -> PageOptions {
    match language {
        Some(language) => PageOptions {
            lang: Some(language.code().to_string()),
            ..options.clone()
        },
        None => options.clone(),
    }
}

/// Model for `kind` in a pinned language, with the host's text overrides applied.
#[must_use]
pub fn pinned_page_model(options: &PageOptions, kind: PageKind, language: Language) -> PageModel {
    PageModel::resolve(kind, &with_language(options, Some(language)), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use helio_core::FitPolicy;

    #[test]
    fn blank_or_missing_attribute_uses_defaults() {
        assert_eq!(parse_options(None), PageOptions::default());
        assert_eq!(parse_options(Some("   ")), PageOptions::default());
    }

    #[test]
    fn invalid_payloads_degrade_to_defaults() {
        assert_eq!(parse_options(Some("{not json")), PageOptions::default());
        assert_eq!(parse_options(Some(r#"{"height": 0}"#)), PageOptions::default());
    }

    #[test]
    fn valid_payload_is_kept() {
        let options = parse_options(Some(r#"{"fit":"contain","lang":"en"}"#));
        assert_eq!(options.fit, Some(FitPolicy::Contain));
        assert_eq!(options.lang.as_deref(), Some("en"));
    }

    #[test]
    fn switcher_language_overrides_host_language() {
        let host = parse_options(Some(r#"{"lang":"en","width":800}"#));
        let pinned = with_language(&host, Some(Language::De));
        assert_eq!(pinned.lang.as_deref(), Some("de"));
        assert_eq!(pinned.width, Some(800.0));
        assert_eq!(with_language(&host, None), host);
    }

    #[test]
    fn pinned_models_carry_host_text_overrides() {
        let host = parse_options(Some(
            r#"{"texts":{"en":{"title":"Our batteries"},"fr":{"title":"Nos batteries"}}}"#,
        ));
        let english = pinned_page_model(&host, PageKind::BatteryStorage, Language::En);
        assert_eq!(english.text("title"), "Our batteries");
        let german = pinned_page_model(&host, PageKind::BatteryStorage, Language::De);
        assert_eq!(german.language, Language::De);
        assert_ne!(german.text("title"), "Our batteries");
    }
}
