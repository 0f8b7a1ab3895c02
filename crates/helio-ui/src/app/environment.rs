//! Browser-backed locale and viewport access.

use std::rc::Rc;

use gloo::events::EventListener;
use gloo::utils::window;
use helio_core::ViewportSize;
use helio_core::env::{EnvironmentProvider, ResizeCallback};

/// Reads `navigator.language` and the window's inner size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct BrowserEnvironment;

/// Keeps the resize and orientation listeners attached until dropped.
pub(crate) struct ResizeSubscription {
    _listeners: [EventListener; 2],
}

impl EnvironmentProvider for BrowserEnvironment {
    type Subscription = ResizeSubscription;

    fn locale(&self) -> Option<String> {
        window()
            .navigator()
            .language()
            .filter(|locale| !locale.trim().is_empty())
    }

    fn viewport_size(&self) -> Option<ViewportSize> {
        let window = window();
        let width = window.inner_width().ok().and_then(|w| w.as_f64())?;
        let height = window.inner_height().ok().and_then(|h| h.as_f64())?;
        Some(ViewportSize::new(width, height))
    }

    fn on_resize(&self, callback: ResizeCallback) -> Self::Subscription {
        let callback: Rc<dyn Fn(Option<ViewportSize>)> = Rc::from(callback);
        let listen = |event: &'static str| {
            let callback = Rc::clone(&callback);
            EventListener::new(&window(), event, move |_event| {
                callback(Self.viewport_size());
            })
        };
        ResizeSubscription {
            _listeners: [listen("resize"), listen("orientationchange")],
        }
    }
}
