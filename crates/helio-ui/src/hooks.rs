//! Hooks wiring the core page contracts into components.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use helio_core::format::{count_up, count_up_done};
use helio_core::viewport::watch_fit;
use helio_core::{
    ApiConfig, CancelFlag, DataSource, Dataset, EnvironmentProvider, FitResult, PageKind,
    PageLayout, PageModel, PageOptions,
};
use yew::prelude::*;

use crate::app::BrowserEnvironment;
use crate::services::api::GlooTransport;

const FRAME_MS: u32 = 16;

/// Language, merged texts, layout and data config for `kind`.
#[hook]
pub(crate) fn use_page_model(kind: PageKind, options: Rc<PageOptions>) -> Rc<PageModel> {
    use_memo(
        |(kind, options)| {
            let locale = BrowserEnvironment.locale();
            PageModel::resolve(*kind, options, locale.as_deref())
        },
        (kind, options),
    )
}

/// Current fit of `layout`, recomputed on every resize or orientation change.
#[hook]
pub(crate) fn use_fit(layout: PageLayout, caps: (Option<f64>, Option<f64>)) -> FitResult {
    let fit = use_state_eq(|| {
        let (cap_w, cap_h) = caps;
        layout.fit(
            BrowserEnvironment
                .viewport_size()
                .map(|viewport| viewport.capped(cap_w, cap_h)),
        )
    });
    {
        let fit = fit.clone();
        use_effect_with_deps(
            move |(layout, caps)| {
                let subscription = watch_fit(&BrowserEnvironment, *layout, *caps, move |next| {
                    fit.set(next);
                });
                move || drop(subscription)
            },
            (layout, caps),
        );
    }
    *fit
}

/// Bundled dataset for `kind`, replaced at most once by a live response.
///
/// A pending response is discarded when the page unmounts or the inputs change.
#[hook]
pub(crate) fn use_dataset(kind: PageKind, api: Option<ApiConfig>) -> Dataset {
    let dataset = use_state_eq(|| kind.fallback_dataset());
    {
        let dataset = dataset.clone();
        use_effect_with_deps(
            move |(kind, api)| {
                let flag = CancelFlag::new();
                let kind = *kind;
                dataset.set(kind.fallback_dataset());
                if api.as_ref().and_then(ApiConfig::active_url).is_some() {
                    let api = api.clone();
                    let flag = flag.clone();
                    yew::platform::spawn_local(async move {
                        DataSource::new(GlooTransport)
                            .load_into(&flag, api.as_ref(), kind.fallback_dataset(), |loaded| {
                                dataset.set(loaded);
                            })
                            .await;
                    });
                }
                move || flag.cancel()
            },
            (kind, api),
        );
    }
    (*dataset).clone()
}

/// Value animated from zero to `target` over `duration_ms`.
///
/// The frame timer is released once the target is reached.
#[hook]
pub(crate) fn use_count_up(target: f64, duration_ms: f64) -> f64 {
    let value = use_state_eq(|| 0.0_f64);
    {
        let value = value.clone();
        use_effect_with_deps(
            move |&(target, duration_ms)| {
                let started = js_sys::Date::now();
                value.set(count_up(target, 0.0, duration_ms));
                let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if !count_up_done(0.0, duration_ms) {
                    let ticking = Rc::clone(&slot);
                    let interval = Interval::new(FRAME_MS, move || {
                        let elapsed = js_sys::Date::now() - started;
                        value.set(count_up(target, elapsed, duration_ms));
                        if count_up_done(elapsed, duration_ms) {
                            // The running callback cannot drop its own timer.
                            let ticking = Rc::clone(&ticking);
                            yew::platform::spawn_local(async move {
                                ticking.borrow_mut().take();
                            });
                        }
                    });
                    *slot.borrow_mut() = Some(interval);
                }
                move || {
                    slot.borrow_mut().take();
                }
            },
            (target, duration_ms),
        );
    }
    *value
}
