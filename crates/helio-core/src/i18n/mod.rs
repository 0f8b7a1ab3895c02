//! Language resolution and JSON-backed translation dictionaries.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Deserialize;

mod merge;
pub mod tree;

pub use merge::merge_texts;
pub use tree::{Template, TextNode};

/// Supported page languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// German, the primary language.
    De,
    /// English, chosen for English-speaking browsers.
    En,
}

/// Language used when nothing points elsewhere.
pub const DEFAULT_LANGUAGE: Language = Language::De;

/// Ambient locale prefix that switches to [`Language::En`].
const ENGLISH_PREFIX: &str = "en";

impl Language {
    /// All supported languages in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::De, Self::En]
    }

    /// Two-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
        }
    }

    /// Label for language switchers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::De => "Deutsch",
            Self::En => "English",
        }
    }

    /// Case-insensitive exact code match.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::all()
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code))
    }
}

/// Pick the page language from an explicit tag and the ambient locale.
///
/// A supported explicit tag always wins. Otherwise an ambient locale starting with
/// `en` (any case) selects English, and everything else, including a missing
/// ambient signal, selects [`DEFAULT_LANGUAGE`].
#[must_use]
pub fn resolve_language(explicit: Option<&str>, ambient: Option<&str>) -> Language {
    if let Some(language) = explicit.and_then(Language::from_code) {
        return language;
    }
    match ambient {
        Some(locale) if starts_with_ignore_case(locale.trim(), ENGLISH_PREFIX) => Language::En,
        _ => DEFAULT_LANGUAGE,
    }
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Per-language partial overrides supplied by an embedding page.
pub type LocalizedTexts = BTreeMap<Language, TextNode>;

static DE_BUNDLE: LazyLock<TextNode> = LazyLock::new(|| parse_bundle(Language::De));
static EN_BUNDLE: LazyLock<TextNode> = LazyLock::new(|| parse_bundle(Language::En));
static EMPTY: LazyLock<TextNode> = LazyLock::new(TextNode::default);

/// Complete bundled dictionary for a language.
#[must_use]
pub fn bundle(language: Language) -> &'static TextNode {
    match language {
        Language::De => LazyLock::force(&DE_BUNDLE),
        Language::En => LazyLock::force(&EN_BUNDLE),
    }
}

/// Base dictionary for one page section, or an empty group when the section is absent.
#[must_use]
pub fn base_texts(language: Language, section: &str) -> &'static TextNode {
    bundle(language)
        .get(section)
        .unwrap_or_else(|| LazyLock::force(&EMPTY))
}

fn parse_bundle(language: Language) -> TextNode {
    serde_json::from_str(raw_bundle(language)).unwrap_or_else(|err| {
        tracing::error!(language = language.code(), error = %err, "translation bundle failed to parse");
        TextNode::default()
    })
}

const fn raw_bundle(language: Language) -> &'static str {
    match language {
        Language::De => include_str!("../../i18n/de.json"),
        Language::En => include_str!("../../i18n/en.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_language_wins_over_ambient() {
        for language in Language::all() {
            assert_eq!(resolve_language(Some(language.code()), Some("en-US")), language);
            assert_eq!(resolve_language(Some(language.code()), Some("fr-FR")), language);
            assert_eq!(resolve_language(Some(language.code()), None), language);
        }
        assert_eq!(resolve_language(Some("EN"), Some("de-DE")), Language::En);
    }

    #[test]
    fn ambient_english_prefix_selects_english() {
        for ambient in ["en", "EN-gb", "en-US", " en-AU"] {
            assert_eq!(resolve_language(None, Some(ambient)), Language::En);
        }
    }

    #[test]
    fn everything_else_selects_default() {
        for ambient in ["de-DE", "fr", "", "e", "de-en"] {
            assert_eq!(resolve_language(None, Some(ambient)), DEFAULT_LANGUAGE);
        }
        assert_eq!(resolve_language(None, None), DEFAULT_LANGUAGE);
        assert_eq!(resolve_language(Some("fr"), None), DEFAULT_LANGUAGE);
        assert_eq!(resolve_language(Some(""), Some("en")), Language::En);
    }

    #[test]
    fn non_ascii_ambient_does_not_panic() {
        assert_eq!(resolve_language(None, Some("é")), DEFAULT_LANGUAGE);
    }

    #[test]
    fn bundles_define_identical_paths() {
        let de = bundle(Language::De).leaf_paths();
        let en = bundle(Language::En).leaf_paths();
        assert!(!de.is_empty());
        assert_eq!(de, en);
    }

    #[test]
    fn missing_section_yields_empty_group() {
        assert!(base_texts(Language::En, "no_such_page").is_empty_group());
    }
}
