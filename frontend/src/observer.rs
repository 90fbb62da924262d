//! Viewport observation as a subscription.
//!
//! A [`ViewportSubscription`] owns the browser `IntersectionObserver` and the
//! closure it calls back into; dropping the subscription disconnects both.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::functional::hook;
use yew::prelude::*;

use crate::error::PageError;

#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl ObserverOptions {
    pub fn new(threshold: f64, root_margin: impl Into<String>) -> Self {
        Self {
            threshold,
            root_margin: root_margin.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserveMode {
    /// Report the first time the element shows up, then stop watching it.
    Once,
    /// Report every crossing for as long as the subscription lives.
    Continuous,
}

impl ObserveMode {
    pub fn reports(self, crossing: &Crossing) -> bool {
        match self {
            ObserveMode::Once => crossing.intersecting,
            ObserveMode::Continuous => true,
        }
    }

    pub fn unobserve_after(self, crossing: &Crossing) -> bool {
        self == ObserveMode::Once && crossing.intersecting
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    pub intersecting: bool,
    pub ratio: f64,
}

pub struct ViewportSubscription {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportSubscription {
    pub fn observe<F>(
        element: &Element,
        options: &ObserverOptions,
        mode: ObserveMode,
        mut on_crossing: F,
    ) -> Result<Self, PageError>
    where
        F: FnMut(Crossing) + 'static,
    {
        let callback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let crossing = Crossing {
                        intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    if !mode.reports(&crossing) {
                        continue;
                    }
                    on_crossing(crossing);
                    if mode.unobserve_after(&crossing) {
                        observer.unobserve(&entry.target());
                    }
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Whether the element behind `node` is currently in view, as far as `mode`
/// reports it. `None` until the first notification arrives; in
/// [`ObserveMode::Once`] the value latches at `Some(true)`.
#[hook]
pub fn use_viewport(node: NodeRef, options: ObserverOptions, mode: ObserveMode) -> Option<bool> {
    let visible = use_state_eq(|| None);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options, mode)| {
                let mode = *mode;
                let subscription = node.cast::<Element>().and_then(|element| {
                    ViewportSubscription::observe(&element, options, mode, move |crossing| {
                        debug!("viewport crossing {:?} ({:?})", crossing, mode);
                        visible.set(Some(crossing.intersecting));
                    })
                    .map_err(|e| warn!("could not observe element: {}", e))
                    .ok()
                });
                move || drop(subscription)
            },
            (node, options, mode),
        );
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    const IN: Crossing = Crossing {
        intersecting: true,
        ratio: 0.4,
    };
    const OUT: Crossing = Crossing {
        intersecting: false,
        ratio: 0.0,
    };

    #[test]
    fn once_reports_and_stops_on_first_entry() {
        assert!(!ObserveMode::Once.reports(&OUT));
        assert!(!ObserveMode::Once.unobserve_after(&OUT));
        assert!(ObserveMode::Once.reports(&IN));
        assert!(ObserveMode::Once.unobserve_after(&IN));
    }

    #[test]
    fn continuous_reports_everything_and_never_stops() {
        for crossing in [IN, OUT] {
            assert!(ObserveMode::Continuous.reports(&crossing));
            assert!(!ObserveMode::Continuous.unobserve_after(&crossing));
        }
    }
}
