//! Monthly distribution of the annual solar yield.

use std::rc::Rc;

use helio_core::PageModel;
use helio_core::data::SolarDistribution;
use helio_core::format::{format_kwh, format_percent};
use yew::prelude::*;

use crate::components::charts::LineChart;
use crate::components::page_header::PageHeader;
use crate::components::stat_card::StatCard;

/// Reference annual yield of a 10 kWp system, used for the headline figure.
const REFERENCE_ANNUAL_KWH: f64 = 9_500.0;

#[derive(Properties, PartialEq)]
pub(crate) struct SolarYieldViewProps {
    pub model: Rc<PageModel>,
    pub distribution: SolarDistribution,
}

#[function_component(SolarYieldView)]
pub(crate) fn solar_yield_view(props: &SolarYieldViewProps) -> Html {
    let model = &props.model;
    let language = model.language;
    let t = |path: &str| model.text(path);

    let annual = {
        let model = Rc::clone(model);
        Callback::from(move |value: f64| model.render("annual", &[("kwh", value.round())]))
    };
    let peak = props.distribution.peak().map(|(idx, share)| {
        let month = props.distribution.months.get(idx).cloned().unwrap_or_default();
        let share_label = model.render("peak_share", &[("share", share)]);
        (month, share, share_label)
    });
    let monthly_kwh = |share: f64| format_kwh((REFERENCE_ANNUAL_KWH * share / 100.0).round(), language);

    html! {
        <>
            <PageHeader title={t("title")} subtitle={Some(AttrValue::from(t("subtitle")))} />
            <section class="helio-row">
                <LineChart
                    title={t("chart_title")}
                    labels={props.distribution.months.clone()}
                    values={props.distribution.distribution.clone()}
                    width={model.layout.canvas.width * 0.65}
                    height={model.layout.canvas.height * 0.5} />
                <div class="helio-stack">
                    <StatCard label={t("title")} value={REFERENCE_ANNUAL_KWH} format={annual} />
                    {for peak.map(|(month, share, share_label)| html! {
                        <div class="helio-stat">
                            <p class="helio-stat-label">{t("legend.peak")}</p>
                            <p class="helio-stat-value">{month}</p>
                            <p class="helio-stat-caption">{share_label}</p>
                            <p class="helio-stat-caption">{monthly_kwh(share)}</p>
                        </div>
                    })}
                </div>
            </section>
            <table class="helio-table">
                <thead>
                    <tr>
                        {for props.distribution.months.iter().map(|month| html! { <th>{month.clone()}</th> })}
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        {for props.distribution.distribution.iter().map(|share| html! {
                            <td title={t("legend.share")}>{format_percent(*share, language)}</td>
                        })}
                    </tr>
                </tbody>
            </table>
        </>
    }
}
