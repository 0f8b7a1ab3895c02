//! CO₂ balance with a tree equivalent.

use std::rc::Rc;

use helio_core::PageModel;
use helio_core::data::ChartSeries;
use helio_core::format::{format_kg, trees_equivalent};
use yew::prelude::*;

use crate::components::charts::{BarChart, SeriesView, to_f64};
use crate::components::page_header::PageHeader;
use crate::components::stat_card::StatCard;

#[derive(Properties, PartialEq)]
pub(crate) struct Co2SavingsViewProps {
    pub model: Rc<PageModel>,
    pub series: ChartSeries,
}

#[function_component(Co2SavingsView)]
pub(crate) fn co2_savings_view(props: &Co2SavingsViewProps) -> Html {
    let model = &props.model;
    let language = model.language;
    let t = |path: &str| model.text(path);

    let saved: f64 = props
        .series
        .datasets
        .first()
        .map_or(0.0, |set| set.data.iter().sum());
    let per_year = if props.series.labels.is_empty() {
        0.0
    } else {
        saved / to_f64(props.series.labels.len())
    };
    let trees = trees_equivalent(per_year);
    let trees_label = model.render("trees", &[("count", trees), ("kg", per_year.round())]);
    let series: Vec<SeriesView> = props
        .series
        .datasets
        .iter()
        .map(|set| SeriesView {
            label: model.texts.text_or(&format!("legend.{}", set.label), &set.label),
            values: set.data.clone(),
        })
        .collect();
    let as_kg = Callback::from(move |value: f64| format_kg(value, language));

    html! {
        <>
            <PageHeader title={t("title")} subtitle={Some(AttrValue::from(t("subtitle")))} />
            <section class="helio-row">
                <div class="helio-stack">
                    <StatCard label={t("measures.total")} value={saved} format={as_kg.clone()} />
                    <StatCard
                        label={t("measures.per_year")}
                        value={per_year}
                        format={as_kg}
                        caption={Some(AttrValue::from(trees_label))} />
                </div>
                <BarChart
                    title={t("chart_title")}
                    labels={props.series.labels.clone()}
                    series={series}
                    width={model.layout.canvas.width * 0.6}
                    height={model.layout.canvas.height * 0.55} />
            </section>
        </>
    }
}
