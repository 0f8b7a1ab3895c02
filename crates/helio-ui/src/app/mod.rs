//! Gallery app shell, routing and boot.

use std::rc::Rc;

use gloo::utils::document;
use helio_core::i18n::bundle;
use helio_core::{EnvironmentProvider, PageOptions, resolve_language};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::language_menu::LanguageMenu;
use crate::features::{DashboardPage, Gallery};
use crate::options::{OPTIONS_ATTRIBUTE, parse_options, with_language};
use crate::routes::Route;

mod environment;
mod telemetry;

pub(crate) use environment::BrowserEnvironment;

const ROOT_ID: &str = "root";

#[derive(Properties, PartialEq)]
struct HelioAppProps {
    options: Rc<PageOptions>,
}

#[function_component(HelioApp)]
fn helio_app(props: &HelioAppProps) -> Html {
    let options = Rc::clone(&props.options);

    html! {
        <BrowserRouter>
            <Switch<Route> render={move |route: Route| render_route(&route, &options)} />
        </BrowserRouter>
    }
}

fn render_route(route: &Route, options: &Rc<PageOptions>) -> Html {
    let language = route.language().unwrap_or_else(|| {
        let locale = BrowserEnvironment.locale();
        resolve_language(options.lang.as_deref(), locale.as_deref())
    });
    let gallery_texts = bundle(language);
    let t = |path: &str| gallery_texts.text_or(&format!("gallery.{path}"), path);
    let menu = html! {
        <LanguageMenu route={route.clone()} active={language} label={t("language")} />
    };

    match (route.language(), route.page_kind()) {
        (Some(language), Some(kind)) => {
            let options = Rc::new(with_language(options, Some(language)));
            html! {
                <>
                    <nav class="helio-nav">
                        <Link<Route> to={Route::gallery(Some(language))} classes="helio-back">
                            {t("back")}
                        </Link<Route>>
                        {menu}
                    </nav>
                    <DashboardPage kind={kind} options={options} />
                </>
            }
        }
        _ => html! {
            <>
                <nav class="helio-nav">{menu}</nav>
                <Gallery language={language} options={Rc::clone(options)} />
            </>
        },
    }
}

fn read_options() -> PageOptions {
    let raw = document()
        .get_element_by_id(ROOT_ID)
        .and_then(|root| root.get_attribute(OPTIONS_ATTRIBUTE));
    parse_options(raw.as_deref())
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Err(err) = telemetry::init_logging(&telemetry::LoggingConfig::default()) {
        gloo::console::warn!(err.to_string());
    }
    let options = Rc::new(read_options());
    tracing::debug!(lang = options.lang.as_deref(), "helio ui starting");
    let props = HelioAppProps { options };
    if let Some(root) = document().get_element_by_id(ROOT_ID) {
        yew::Renderer::<HelioApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<HelioApp>::with_props(props).render();
    }
}
