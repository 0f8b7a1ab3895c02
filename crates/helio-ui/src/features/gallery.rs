//! Overview of every dashboard page.

use std::rc::Rc;

use helio_core::i18n::bundle;
use helio_core::{Language, PageKind, PageOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page_header::PageHeader;
use crate::options::pinned_page_model;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub(crate) struct GalleryProps {
    pub language: Language,
    pub options: Rc<PageOptions>,
}

#[function_component(Gallery)]
pub(crate) fn gallery(props: &GalleryProps) -> Html {
    let language = props.language;
    let texts = bundle(language);
    let t = |path: &str| texts.text_or(&format!("gallery.{path}"), path);
    let open = t("open");

    html! {
        <main class="helio-gallery" lang={language.code()}>
            <PageHeader title={t("title")} subtitle={Some(AttrValue::from(t("intro")))} />
            <ul class="helio-cards">
                {for PageKind::all().into_iter().map(|kind| {
                    let model = pinned_page_model(&props.options, kind, language);
                    html! {
                        <li class={classes!("helio-card", kind.slug())} key={kind.slug()}>
                            <h2>{model.texts.text_or("title", kind.slug())}</h2>
                            <p>{model.texts.text_or("subtitle", "")}</p>
                            <Link<Route> to={Route::page(kind, language)} classes="helio-open">
                                {open.clone()}
                            </Link<Route>>
                        </li>
                    }
                })}
            </ul>
        </main>
    }
}
