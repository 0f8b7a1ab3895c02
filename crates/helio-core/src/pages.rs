//! Page catalog and the per-render composition of language, texts, layout and data config.

use std::borrow::Cow;

use crate::config::{ApiConfig, PageOptions};
use crate::data::{
    Dataset, demo_batteries, demo_charging_stations, demo_co2_series, demo_energy_mix,
    demo_solar_yield,
};
use crate::i18n::{Language, TextNode, base_texts, merge_texts, resolve_language};
use crate::viewport::{Anchor, DesignCanvas, FitPolicy, FitResult, PageLayout, ViewportSize};

/// Dashboard page templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// Home battery comparison.
    BatteryStorage,
    /// Charging station availability.
    ChargingStations,
    /// Monthly solar yield distribution.
    SolarYield,
    /// CO₂ savings with tree equivalent.
    Co2Savings,
    /// Chart-only generation mix.
    EnergyMix,
}

impl PageKind {
    /// All pages in gallery order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::BatteryStorage,
            Self::ChargingStations,
            Self::SolarYield,
            Self::Co2Savings,
            Self::EnergyMix,
        ]
    }

    /// Section key in the translation bundles.
    #[must_use]
    pub const fn section(self) -> &'static str {
        match self {
            Self::BatteryStorage => "battery_storage",
            Self::ChargingStations => "charging_stations",
            Self::SolarYield => "solar_yield",
            Self::Co2Savings => "co2_savings",
            Self::EnergyMix => "energy_mix",
        }
    }

    /// URL slug.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::BatteryStorage => "battery-storage",
            Self::ChargingStations => "charging-stations",
            Self::SolarYield => "solar-yield",
            Self::Co2Savings => "co2-savings",
            Self::EnergyMix => "energy-mix",
        }
    }

    /// Page for a URL slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all().into_iter().find(|kind| kind.slug() == slug)
    }

    /// Authored canvas with its default fit policy and anchor.
    #[must_use]
    pub const fn layout(self) -> PageLayout {
        let (width, height, policy, anchor) = match self {
            Self::BatteryStorage => (1280.0, 720.0, FitPolicy::CoverScale, Anchor::Center),
            Self::ChargingStations => (1200.0, 600.0, FitPolicy::CoverResize, Anchor::TopLeft),
            Self::SolarYield => (1920.0, 1080.0, FitPolicy::CoverScale, Anchor::TopLeft),
            Self::Co2Savings => (1440.0, 810.0, FitPolicy::CoverResize, Anchor::TopLeft),
            Self::EnergyMix => (800.0, 600.0, FitPolicy::Contain, Anchor::Center),
        };
        PageLayout {
            canvas: DesignCanvas::new(width, height),
            policy,
            anchor,
        }
    }

    /// Built-in REST path used when live data is enabled without an explicit endpoint.
    #[must_use]
    pub const fn default_endpoint(self) -> Option<&'static str> {
        match self {
            Self::BatteryStorage => Some("/api/batteries"),
            Self::ChargingStations => Some("/api/charging-stations"),
            Self::SolarYield => Some("/api/solar-yield"),
            Self::Co2Savings | Self::EnergyMix => None,
        }
    }

    /// Bundled dataset shown until (and unless) live data arrives.
    #[must_use]
    pub fn fallback_dataset(self) -> Dataset {
        match self {
            Self::BatteryStorage => Dataset::Batteries(demo_batteries()),
            Self::ChargingStations => Dataset::ChargingStations(demo_charging_stations()),
            Self::SolarYield => Dataset::SolarYield(demo_solar_yield()),
            Self::Co2Savings => Dataset::Series(demo_co2_series()),
            Self::EnergyMix => Dataset::Series(demo_energy_mix()),
        }
    }
}

/// Everything a page derives from its options before rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct PageModel {
    /// Page template.
    pub kind: PageKind,
    /// Resolved language.
    pub language: Language,
    /// Base texts with caller overrides applied.
    pub texts: Cow<'static, TextNode>,
    /// Canvas, policy and anchor after option overrides.
    pub layout: PageLayout,
    /// Effective live-data config, if any.
    pub api_config: Option<ApiConfig>,
}

impl PageModel {
    /// Derive the model for `kind` from embedding options and the ambient locale.
    #[must_use]
    pub fn resolve(kind: PageKind, options: &PageOptions, ambient_locale: Option<&str>) -> Self {
        let language = resolve_language(options.lang.as_deref(), ambient_locale);
        let texts = merge_texts(
            base_texts(language, kind.section()),
            options.texts.get(&language),
        );
        let defaults = kind.layout();
        let layout = PageLayout {
            policy: options.fit.unwrap_or(defaults.policy),
            anchor: options.anchor.unwrap_or(defaults.anchor),
            ..defaults
        };
        let api_config = options
            .api_config
            .as_ref()
            .map(|config| config.or_default_endpoint(kind.default_endpoint()));
        Self {
            kind,
            language,
            texts,
            layout,
            api_config,
        }
    }

    /// Text at `path`; the path itself when missing.
    #[must_use]
    pub fn text(&self, path: &str) -> String {
        self.texts.text_or(path, path)
    }

    /// Rendered template (or text) at `path`; the path itself when missing.
    #[must_use]
    pub fn render(&self, path: &str, args: &[(&str, f64)]) -> String {
        self.texts
            .render(path, args, self.language)
            .unwrap_or_else(|| path.to_string())
    }

    /// Fit the page canvas onto `viewport` after applying the width/height caps.
    #[must_use]
    pub fn fit(&self, viewport: Option<ViewportSize>, caps: (Option<f64>, Option<f64>)) -> FitResult {
        self.layout.fit(viewport.map(|v| v.capped(caps.0, caps.1)))
    }
}
