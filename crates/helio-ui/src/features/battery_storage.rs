//! Home battery comparison.

use std::rc::Rc;

use helio_core::PageModel;
use helio_core::data::BatterySpec;
use helio_core::format::{format_eur, format_kw, format_kwh, format_number, format_percent};
use yew::prelude::*;

use crate::components::charts::{BarChart, SeriesView, to_f64};
use crate::components::page_header::PageHeader;
use crate::components::stat_card::StatCard;

#[derive(Properties, PartialEq)]
pub(crate) struct BatteryStorageViewProps {
    pub model: Rc<PageModel>,
    pub batteries: Vec<BatterySpec>,
}

#[function_component(BatteryStorageView)]
pub(crate) fn battery_storage_view(props: &BatteryStorageViewProps) -> Html {
    let model = &props.model;
    let language = model.language;
    let t = |path: &str| model.text(path);

    let labels: Vec<String> = props.batteries.iter().map(|b| b.name.clone()).collect();
    let series = vec![
        SeriesView {
            label: t("legend.capacity"),
            values: props.batteries.iter().map(|b| b.capacity_kwh).collect(),
        },
        SeriesView {
            label: t("legend.power"),
            values: props.batteries.iter().map(|b| b.power_kw).collect(),
        },
    ];
    let count = props.batteries.len();
    let count_label = {
        let model = Rc::clone(model);
        Callback::from(move |value: f64| model.render("count", &[("count", value.round())]))
    };
    let chart_width = model.layout.canvas.width * 0.6;
    let chart_height = model.layout.canvas.height * 0.45;

    html! {
        <>
            <PageHeader title={t("title")} subtitle={Some(AttrValue::from(t("subtitle")))} />
            <section class="helio-row">
                <BarChart
                    title={t("chart_title")}
                    labels={labels}
                    series={series}
                    width={chart_width}
                    height={chart_height} />
                <StatCard label={t("title")} value={to_f64(count)} format={count_label} />
            </section>
            <table class="helio-table">
                <thead>
                    <tr>
                        <th></th>
                        <th>{t("measures.capacity")}</th>
                        <th>{t("measures.power")}</th>
                        <th>{t("measures.efficiency")}</th>
                        <th>{t("measures.cycles")}</th>
                        <th>{t("measures.price")}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.batteries.iter().map(|battery| html! {
                        <tr>
                            <th>
                                <span class="helio-name">{battery.name.clone()}</span>
                                <span class="helio-maker">{battery.manufacturer.clone()}</span>
                            </th>
                            <td>{format_kwh(battery.capacity_kwh, language)}</td>
                            <td>{format_kw(battery.power_kw, language)}</td>
                            <td>{format_percent(battery.efficiency_pct, language)}</td>
                            <td>{format_number(f64::from(battery.cycles), language)}</td>
                            <td>{battery.price_eur.map_or_else(|| "–".to_string(), |price| format_eur(price, language))}</td>
                        </tr>
                    })}
                </tbody>
            </table>
            <a class="helio-cta" href="#contact">{t("cta")}</a>
        </>
    }
}
