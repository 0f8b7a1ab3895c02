//! Routing definitions for the Helio gallery.
use helio_core::{Language, PageKind};
use yew_router::prelude::*;

/// Gallery routes. The language segment pins the page language.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Page overview in the resolved language.
    #[at("/")]
    Gallery,
    /// Page overview in a chosen language.
    #[at("/:lang")]
    LocalizedGallery {
        /// Language code.
        lang: String,
    },
    /// One dashboard page.
    #[at("/:lang/:page")]
    Page {
        /// Language code.
        lang: String,
        /// Page slug.
        page: String,
    },
    /// Fallback for unknown paths.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Overview route for `language`, or the unpinned overview.
    #[must_use]
    pub fn gallery(language: Option<Language>) -> Self {
        language.map_or(Self::Gallery, |language| Self::LocalizedGallery {
            lang: language.code().to_string(),
        })
    }

    /// Route to `kind` in `language`.
    #[must_use]
    pub fn page(kind: PageKind, language: Language) -> Self {
        Self::Page {
            lang: language.code().to_string(),
            page: kind.slug().to_string(),
        }
    }

    /// Language pinned by the route; `None` when absent or unsupported.
    #[must_use]
    pub fn language(&self) -> Option<Language> {
        match self {
            Self::LocalizedGallery { lang } | Self::Page { lang, .. } => Language::from_code(lang),
            Self::Gallery | Self::NotFound => None,
        }
    }

    /// Page addressed by the route.
    #[must_use]
    pub fn page_kind(&self) -> Option<PageKind> {
        match self {
            Self::Page { page, .. } => PageKind::from_slug(page),
            _ => None,
        }
    }

    /// Same destination in another language.
    #[must_use]
    pub fn with_language(&self, language: Language) -> Self {
        match self.page_kind() {
            Some(kind) => Self::page(kind, language),
            None => Self::gallery(Some(language)),
        }
    }
}
