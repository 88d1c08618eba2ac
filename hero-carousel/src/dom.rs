//! Browser bindings (wasm32 only).
//!
//! Every listener, interval and observer the carousel registers is wrapped in
//! a guard that owns the JS closure and unregisters it on drop. Components keep
//! the guards for exactly as long as the subscription should live; there is no
//! `Closure::forget`.

use std::time::Duration;

use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::host::Environment;
use crate::reveal::IntersectionSample;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Live answers from `window` / `document`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomEnvironment;

impl Environment for DomEnvironment {
    fn tab_hidden(&self) -> Option<bool> {
        web_sys::window()?.document().map(|doc| doc.hidden())
    }

    fn prefers_reduced_motion(&self) -> Option<bool> {
        let window = web_sys::window()?;
        match window.match_media(REDUCED_MOTION_QUERY) {
            Ok(Some(list)) => Some(list.matches()),
            Ok(None) => None,
            Err(err) => {
                warn!(?err, "matchMedia failed, assuming no motion preference");
                None
            }
        }
    }
}

/// `addEventListener` for as long as the value lives.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// `setInterval` for as long as the value lives.
pub struct IntervalSubscription {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl IntervalSubscription {
    pub fn every<F>(period: Duration, tick: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        let millis = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            millis,
        )?;
        Ok(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for IntervalSubscription {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

/// `IntersectionObserver` on one element for as long as the value lives.
///
/// The handler also receives the observer so it can `disconnect()` from inside
/// the callback; dropping the guard there would free the running closure.
pub struct IntersectionSubscription {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl IntersectionSubscription {
    pub fn observe<F>(target: &Element, threshold: f64, mut on_sample: F) -> Result<Self, JsValue>
    where
        F: FnMut(IntersectionSample, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_sample(
                        IntersectionSample {
                            is_intersecting: entry.is_intersecting(),
                            ratio: entry.intersection_ratio(),
                        },
                        &observer,
                    );
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for IntersectionSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
