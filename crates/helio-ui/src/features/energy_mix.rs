//! Chart-only generation mix.

use std::rc::Rc;

use helio_core::PageModel;
use helio_core::data::ChartSeries;
use yew::prelude::*;

use crate::components::charts::{BarChart, SeriesView};

#[derive(Properties, PartialEq)]
pub(crate) struct EnergyMixViewProps {
    pub model: Rc<PageModel>,
    pub series: ChartSeries,
}

#[function_component(EnergyMixView)]
pub(crate) fn energy_mix_view(props: &EnergyMixViewProps) -> Html {
    let model = &props.model;
    let canvas = model.layout.canvas;
    let series: Vec<SeriesView> = props
        .series
        .datasets
        .iter()
        .map(|set| SeriesView {
            label: set.label.clone(),
            values: set.data.clone(),
        })
        .collect();
    let total = model.render("total", &[("kwh", props.series.total().round())]);

    html! {
        <>
            <BarChart
                title={model.text("chart_title")}
                labels={props.series.labels.clone()}
                series={series}
                width={canvas.width}
                height={canvas.height * 0.85} />
            <p class="helio-total">{total}</p>
        </>
    }
}
