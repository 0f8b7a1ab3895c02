//! Ambient locale and viewport access behind an injectable provider.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::viewport::ViewportSize;

/// Callback invoked with the new viewport after each resize or orientation change.
pub type ResizeCallback = Box<dyn Fn(Option<ViewportSize>)>;

/// Read-only access to the host's locale and viewport.
pub trait EnvironmentProvider {
    /// Handle that keeps a resize listener registered; dropping it unsubscribes.
    type Subscription;

    /// Host locale string (for example `en-US`), when the host exposes one.
    fn locale(&self) -> Option<String>;

    /// Current viewport size, when known.
    fn viewport_size(&self) -> Option<ViewportSize>;

    /// Register `callback` for resize events.
    fn on_resize(&self, callback: ResizeCallback) -> Self::Subscription;
}

#[derive(Default)]
struct EnvState {
    viewport: Option<ViewportSize>,
    listeners: BTreeMap<u64, Rc<dyn Fn(Option<ViewportSize>)>>,
    next_id: u64,
}

/// In-memory environment for tests and non-browser hosts.
#[derive(Clone, Default)]
pub struct StaticEnvironment {
    locale: Option<String>,
    state: Rc<RefCell<EnvState>>,
}

impl StaticEnvironment {
    /// Environment with a fixed locale and an initial viewport.
    #[must_use]
    pub fn new(locale: Option<&str>, viewport: Option<ViewportSize>) -> Self {
        Self {
            locale: locale.map(ToString::to_string),
            state: Rc::new(RefCell::new(EnvState {
                viewport,
                ..EnvState::default()
            })),
        }
    }

    /// Change the viewport and notify listeners in registration order.
    pub fn resize_to(&self, viewport: Option<ViewportSize>) {
        let listeners: Vec<_> = {
            let mut state = self.state.borrow_mut();
            state.viewport = viewport;
            state.listeners.values().cloned().collect()
        };
        for listener in listeners {
            listener(viewport);
        }
    }

    /// Number of live resize subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

/// Subscription handed out by [`StaticEnvironment`].
pub struct StaticSubscription {
    id: u64,
    state: Weak<RefCell<EnvState>>,
}

impl Drop for StaticSubscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().listeners.remove(&self.id);
        }
    }
}

impl EnvironmentProvider for StaticEnvironment {
    type Subscription = StaticSubscription;

    fn locale(&self) -> Option<String> {
        self.locale.clone()
    }

    fn viewport_size(&self) -> Option<ViewportSize> {
        self.state.borrow().viewport
    }

    fn on_resize(&self, callback: ResizeCallback) -> Self::Subscription {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.insert(id, Rc::from(callback));
        StaticSubscription {
            id,
            state: Rc::downgrade(&self.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn dropping_subscription_unregisters_listener() {
        let env = StaticEnvironment::new(Some("en-GB"), None);
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let subscription = env.on_resize(Box::new(move |_| counter.set(counter.get() + 1)));
        assert_eq!(env.listener_count(), 1);

        env.resize_to(Some(ViewportSize::new(10.0, 10.0)));
        drop(subscription);
        env.resize_to(Some(ViewportSize::new(20.0, 20.0)));

        assert_eq!(hits.get(), 1);
        assert_eq!(env.listener_count(), 0);
        assert_eq!(env.viewport_size(), Some(ViewportSize::new(20.0, 20.0)));
        assert_eq!(env.locale().as_deref(), Some("en-GB"));
    }

    #[test]
    fn subscription_outliving_environment_is_harmless() {
        let env = StaticEnvironment::new(None, None);
        let subscription = env.on_resize(Box::new(|_| {}));
        drop(env);
        drop(subscription);
    }
}
