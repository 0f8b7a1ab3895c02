//! Headline figure with a count-up animation.

use yew::prelude::*;

use crate::hooks::use_count_up;

const COUNT_UP_MS: f64 = 1_200.0;

#[derive(Properties, PartialEq)]
pub(crate) struct StatCardProps {
    pub label: AttrValue,
    pub value: f64,
    /// Formats the animated value for display.
    pub format: Callback<f64, String>,
    #[prop_or_default]
    pub caption: Option<AttrValue>,
}

#[function_component(StatCard)]
pub(crate) fn stat_card(props: &StatCardProps) -> Html {
    let shown = use_count_up(props.value, COUNT_UP_MS);

    html! {
        <div class="helio-stat">
            <p class="helio-stat-label">{props.label.clone()}</p>
            <p class="helio-stat-value">{props.format.emit(shown)}</p>
            {for props.caption.clone().map(|caption| html! {
                <p class="helio-stat-caption">{caption}</p>
            })}
        </div>
    }
}
