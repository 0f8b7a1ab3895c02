//! Inline SVG charts.
//!
//! # Design
//! - Geometry comes from `helio_core::chart`; this module only emits markup.
//! - Series are styled through `series-{index}` classes so themes stay in CSS.

use helio_core::chart::{PlotArea, bar_layout, line_points, nice_ceiling, series_max};
use yew::prelude::*;

const PADDING: f64 = 32.0;
const BAR_GAP: f64 = 0.25;

/// One plotted series.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SeriesView {
    pub label: String,
    pub values: Vec<f64>,
}

#[derive(Properties, PartialEq)]
pub(crate) struct BarChartProps {
    pub title: AttrValue,
    pub labels: Vec<String>,
    pub series: Vec<SeriesView>,
    #[prop_or(640.0)]
    pub width: f64,
    #[prop_or(320.0)]
    pub height: f64,
}

#[function_component(BarChart)]
pub(crate) fn bar_chart(props: &BarChartProps) -> Html {
    let area = PlotArea::inset(props.width, props.height, PADDING);
    let slices: Vec<&[f64]> = props.series.iter().map(|s| s.values.as_slice()).collect();
    let bars = bar_layout(&slices, area, BAR_GAP);
    let group_width = if props.labels.is_empty() {
        0.0
    } else {
        area.width / to_f64(props.labels.len())
    };

    html! {
        <figure class="helio-chart">
            <figcaption>{props.title.clone()}</figcaption>
            <svg
                viewBox={format!("0 0 {} {}", props.width, props.height)}
                role="img"
                aria-label={props.title.clone()}>
                <line
                    class="helio-axis"
                    x1={fmt(area.x)} y1={fmt(area.bottom())}
                    x2={fmt(area.x + area.width)} y2={fmt(area.bottom())} />
                {for bars.iter().map(|bar| html! {
                    <rect
                        class={format!("helio-bar series-{}", bar.series)}
                        x={fmt(bar.x)} y={fmt(bar.y)}
                        width={fmt(bar.width)} height={fmt(bar.height)} />
                })}
                {for props.labels.iter().enumerate().map(|(idx, label)| html! {
                    <text
                        class="helio-tick"
                        x={fmt(area.x + group_width * (to_f64(idx) + 0.5))}
                        y={fmt(area.bottom() + PADDING * 0.6)}
                        text-anchor="middle">
                        {label.clone()}
                    </text>
                })}
            </svg>
            {legend(&props.series)}
        </figure>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct LineChartProps {
    pub title: AttrValue,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    #[prop_or(640.0)]
    pub width: f64,
    #[prop_or(320.0)]
    pub height: f64,
}

#[function_component(LineChart)]
pub(crate) fn line_chart(props: &LineChartProps) -> Html {
    let area = PlotArea::inset(props.width, props.height, PADDING);
    let ceiling = nice_ceiling(series_max([props.values.as_slice()]));
    let points = line_points(&props.values, area, ceiling);
    let step = if props.labels.len() > 1 {
        area.width / to_f64(props.labels.len() - 1)
    } else {
        0.0
    };

    html! {
        <figure class="helio-chart">
            <figcaption>{props.title.clone()}</figcaption>
            <svg
                viewBox={format!("0 0 {} {}", props.width, props.height)}
                role="img"
                aria-label={props.title.clone()}>
                <line
                    class="helio-axis"
                    x1={fmt(area.x)} y1={fmt(area.bottom())}
                    x2={fmt(area.x + area.width)} y2={fmt(area.bottom())} />
                <polyline class="helio-line series-0" fill="none" points={points} />
                {for props.labels.iter().enumerate().map(|(idx, label)| html! {
                    <text
                        class="helio-tick"
                        x={fmt(area.x + step * to_f64(idx))}
                        y={fmt(area.bottom() + PADDING * 0.6)}
                        text-anchor="middle">
                        {label.clone()}
                    </text>
                })}
            </svg>
        </figure>
    }
}

fn legend(series: &[SeriesView]) -> Html {
    if series.len() < 2 {
        return html! {};
    }
    html! {
        <ul class="helio-legend">
            {for series.iter().enumerate().map(|(idx, s)| html! {
                <li class={format!("series-{idx}")}>
                    <span class="helio-swatch"></span>
                    {s.label.clone()}
                </li>
            })}
        </ul>
    }
}

fn fmt(value: f64) -> String {
    format!("{value:.1}")
}

#[allow(clippy::cast_precision_loss)]
pub(crate) const fn to_f64(count: usize) -> f64 {
    count as f64
}
