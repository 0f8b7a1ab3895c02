//! Charging station availability.

use std::rc::Rc;

use helio_core::PageModel;
use helio_core::data::ChargingStation;
use helio_core::format::{format_kw, format_number};
use yew::prelude::*;

use crate::components::charts::{BarChart, SeriesView, to_f64};
use crate::components::page_header::PageHeader;
use crate::components::stat_card::StatCard;

#[derive(Properties, PartialEq)]
pub(crate) struct ChargingStationsViewProps {
    pub model: Rc<PageModel>,
    pub stations: Vec<ChargingStation>,
}

#[function_component(ChargingStationsView)]
pub(crate) fn charging_stations_view(props: &ChargingStationsViewProps) -> Html {
    let model = &props.model;
    let language = model.language;
    let t = |path: &str| model.text(path);

    let available = props.stations.iter().filter(|s| s.available).count();
    let summary = {
        let model = Rc::clone(model);
        Callback::from(move |value: f64| model.render("summary", &[("count", value.round())]))
    };
    let series = vec![SeriesView {
        label: t("measures.power"),
        values: props.stations.iter().map(|s| s.power_kw).collect(),
    }];
    let labels: Vec<String> = props.stations.iter().map(|s| s.name.clone()).collect();

    html! {
        <>
            <PageHeader title={t("title")} subtitle={Some(AttrValue::from(t("subtitle")))} />
            <section class="helio-row">
                <StatCard label={t("available")} value={to_f64(available)} format={summary} />
                <BarChart
                    title={t("chart_title")}
                    labels={labels}
                    series={series}
                    width={model.layout.canvas.width * 0.55}
                    height={model.layout.canvas.height * 0.5} />
            </section>
            <ul class="helio-stations">
                {for props.stations.iter().map(|station| {
                    let (state_class, state_label) = if station.available {
                        ("available", t("available"))
                    } else {
                        ("occupied", t("occupied"))
                    };
                    html! {
                        <li class={classes!("helio-station", state_class)} key={station.id.clone()}>
                            <span class="helio-name">{station.name.clone()}</span>
                            <span class="helio-badge">{state_label}</span>
                            <dl>
                                <dt>{t("measures.power")}</dt>
                                <dd>{format_kw(station.power_kw, language)}</dd>
                                <dt>{t("measures.connectors")}</dt>
                                <dd>{format_number(f64::from(station.connectors), language)}</dd>
                                <dt>{t("measures.city")}</dt>
                                <dd>{station.city.clone()}</dd>
                            </dl>
                        </li>
                    }
                })}
            </ul>
        </>
    }
}
