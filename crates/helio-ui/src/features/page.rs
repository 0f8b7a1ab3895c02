//! Composition root shared by every dashboard page.
//!
//! # Design
//! - Options and ambient locale resolve into a `PageModel` once per input change.
//! - The fitted canvas follows viewport changes; content is laid out at the effective size.
//! - Data starts as the bundled fallback and is replaced at most once per mount.

use std::rc::Rc;

use helio_core::{Dataset, PageKind, PageModel, PageOptions};
use yew::prelude::*;

use crate::components::fitted_canvas::FittedCanvas;
use crate::features::battery_storage::BatteryStorageView;
use crate::features::charging_stations::ChargingStationsView;
use crate::features::co2_savings::Co2SavingsView;
use crate::features::energy_mix::EnergyMixView;
use crate::features::solar_yield::SolarYieldView;
use crate::hooks::{use_dataset, use_fit, use_page_model};

#[derive(Properties, PartialEq)]
pub(crate) struct DashboardPageProps {
    pub kind: PageKind,
    pub options: Rc<PageOptions>,
}

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page(props: &DashboardPageProps) -> Html {
    let model = use_page_model(props.kind, Rc::clone(&props.options));
    let caps = props.options.caps();
    let fit = use_fit(model.layout, caps);
    let dataset = use_dataset(props.kind, model.api_config.clone());

    html! {
        <FittedCanvas layout={model.layout} fit={fit} caps={caps}>
            <article
                class={classes!("helio-page", model.kind.slug())}
                lang={model.language.code()}>
                {page_body(&model, dataset)}
            </article>
        </FittedCanvas>
    }
}

fn page_body(model: &Rc<PageModel>, dataset: Dataset) -> Html {
    let model = Rc::clone(model);
    match (model.kind, dataset) {
        (PageKind::BatteryStorage, Dataset::Batteries(batteries)) => {
            html! { <BatteryStorageView model={model} batteries={batteries} /> }
        }
        (PageKind::ChargingStations, Dataset::ChargingStations(stations)) => {
            html! { <ChargingStationsView model={model} stations={stations} /> }
        }
        (PageKind::SolarYield, Dataset::SolarYield(distribution)) => {
            html! { <SolarYieldView model={model} distribution={distribution} /> }
        }
        (PageKind::Co2Savings, Dataset::Series(series)) => {
            html! { <Co2SavingsView model={model} series={series} /> }
        }
        (PageKind::EnergyMix, Dataset::Series(series)) => {
            html! { <EnergyMixView model={model} series={series} /> }
        }
        (kind, dataset) => {
            tracing::error!(page = kind.slug(), kind = dataset.kind().as_str(), "dataset does not match page");
            html! {}
        }
    }
}
