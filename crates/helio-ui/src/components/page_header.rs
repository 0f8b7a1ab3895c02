use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(PageHeader)]
pub(crate) fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <header class="helio-header">
            <h1 class="helio-title">{props.title.clone()}</h1>
            {for props.subtitle.clone().map(|subtitle| html! {
                <p class="helio-subtitle">{subtitle}</p>
            })}
        </header>
    }
}
