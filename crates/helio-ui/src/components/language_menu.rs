//! Language links shown above every view.

use helio_core::Language;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub(crate) struct LanguageMenuProps {
    pub route: Route,
    pub active: Language,
    pub label: AttrValue,
}

#[function_component(LanguageMenu)]
pub(crate) fn language_menu(props: &LanguageMenuProps) -> Html {
    html! {
        <nav class="helio-languages" aria-label={props.label.clone()}>
            {for Language::all().into_iter().map(|language| {
                let classes = classes!(
                    "helio-language",
                    (language == props.active).then_some("active")
                );
                html! {
                    <Link<Route> to={props.route.with_language(language)} classes={classes}>
                        {language.label()}
                    </Link<Route>>
                }
            })}
        </nav>
    }
}
