//! The stateful carousel component

use std::time::Duration;

use leptos::prelude::*;
use tracing::error;

use super::compact::CompactLayout;
use super::wide::WideLayout;
use crate::config::CarouselConfig;
use crate::controller::{CarouselController, CarouselEvent};
use crate::types::Slide;

const DEFAULT_LABEL: &str = "Highlights";

/// Hero carousel.
///
/// Owns one [`CarouselController`] in a signal and renders it through both
/// [`CompactLayout`] and [`WideLayout`]; CSS picks which one shows. In the
/// browser it also registers the global keyboard and visibility listeners and
/// keeps the autoplay interval in step with `{interval, paused}`. Everything
/// registered here is released when the component unmounts.
///
/// An empty `slides` list logs an error and renders an empty shell.
#[component]
pub fn HeroCarousel(
    slides: Vec<Slide>,
    #[prop(optional)] config: CarouselConfig,
    /// Overrides `config.interval_ms`; may change while mounted.
    #[prop(optional, into)]
    interval_ms: MaybeProp<u64>,
    /// Accessible name of the carousel region.
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| DEFAULT_LABEL.to_string());

    let mut controller = match CarouselController::new(slides.len(), &config) {
        Ok(controller) => controller,
        Err(err) => {
            error!(%err, "hero carousel not started");
            return view! {
                <section
                    class="hero-carousel hero-carousel--empty"
                    role="region"
                    aria-roledescription="carousel"
                    aria-label=label
                ></section>
            }
            .into_any();
        }
    };
    if let Some(ms) = interval_ms.get_untracked() {
        controller.set_interval(Duration::from_millis(ms));
    }

    let state = RwSignal::new(controller);
    let active: Signal<usize> = Memo::new(move |_| state.with(CarouselController::active_index)).into();
    let on_event = Callback::new(move |event: CarouselEvent| {
        state.try_update(|carousel| {
            carousel.handle(event);
        });
    });

    #[cfg(target_arch = "wasm32")]
    attach_browser_host(state, interval_ms);

    view! {
        <section
            class="hero-carousel"
            role="region"
            aria-roledescription="carousel"
            aria-label=label
            on:mouseenter=move |_| on_event.run(CarouselEvent::PointerEnter)
            on:mouseleave=move |_| on_event.run(CarouselEvent::PointerLeave)
            on:focusin=move |_| on_event.run(CarouselEvent::FocusIn)
            on:focusout=move |ev: web_sys::FocusEvent| {
                if !focus_stays_inside(&ev) {
                    on_event.run(CarouselEvent::FocusOut);
                }
            }
            on:touchstart=move |ev: web_sys::TouchEvent| {
                if let Some(touch) = ev.touches().get(0) {
                    on_event.run(CarouselEvent::TouchStart { x: f64::from(touch.client_x()) });
                }
            }
            on:touchend=move |ev: web_sys::TouchEvent| {
                match ev.changed_touches().get(0) {
                    Some(touch) => on_event.run(CarouselEvent::TouchEnd { x: f64::from(touch.client_x()) }),
                    None => on_event.run(CarouselEvent::TouchCancel),
                }
            }
            on:touchcancel=move |_| on_event.run(CarouselEvent::TouchCancel)
        >
            <CompactLayout slides=slides.clone() active=active on_event=on_event />
            <WideLayout slides=slides active=active on_event=on_event />
        </section>
    }
    .into_any()
}

/// Focus moving between two controls of the same carousel is not a blur.
fn focus_stays_inside(ev: &web_sys::FocusEvent) -> bool {
    use wasm_bindgen::JsCast;

    let region = ev
        .current_target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
    let next = ev
        .related_target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
    match (region, next) {
        (Some(region), Some(next)) => region.contains(Some(&next)),
        _ => false,
    }
}

#[cfg(target_arch = "wasm32")]
fn attach_browser_host(state: RwSignal<CarouselController>, interval_ms: MaybeProp<u64>) {
    use tracing::debug;
    use wasm_bindgen::JsCast;

    use crate::autoplay::TimerCommand;
    use crate::controller::Direction;
    use crate::dom::{DomEnvironment, EventSubscription, IntervalSubscription};
    use crate::host::Environment;

    let listeners = StoredValue::new_local(Vec::<EventSubscription>::new());
    let timer = StoredValue::new_local(None::<IntervalSubscription>);
    let paused = Memo::new(move |_| state.with(CarouselController::is_paused));

    if let Some(window) = web_sys::window() {
        let keys = EventSubscription::listen(&window, "keydown", move |event| {
            let Some(key) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            if let Some(direction) = Direction::from_key(&key.key()) {
                state.try_update(|carousel| {
                    carousel.handle(CarouselEvent::Key(direction));
                });
            }
        });
        match keys {
            Ok(sub) => listeners.update_value(|subs| subs.push(sub)),
            Err(err) => error!(?err, "keyboard navigation unavailable"),
        }

        if let Some(document) = window.document() {
            let visibility = EventSubscription::listen(&document, "visibilitychange", move |_| {
                let hidden = DomEnvironment.tab_hidden().unwrap_or(false);
                state.try_update(|carousel| {
                    carousel.handle(CarouselEvent::VisibilityChanged { hidden });
                });
            });
            match visibility {
                Ok(sub) => listeners.update_value(|subs| subs.push(sub)),
                Err(err) => error!(?err, "visibility tracking unavailable"),
            }
        }
    }

    // Re-armed whenever the interval or the pause state changes.
    Effect::new(move |_| {
        let requested = interval_ms.get();
        paused.track();

        let command = state.try_update_untracked(|carousel| {
            if let Some(ms) = requested {
                carousel.set_interval(Duration::from_millis(ms));
            }
            carousel.reconcile_autoplay(DomEnvironment.prefers_reduced_motion())
        });
        timer.set_value(None);

        if let Some(TimerCommand::Arm { id, every }) = command {
            let tick = move || {
                state.try_update(|carousel| {
                    carousel.handle(CarouselEvent::Tick(id));
                });
            };
            match IntervalSubscription::every(every, tick) {
                Ok(sub) => {
                    debug!(timer = id.get(), ?every, "autoplay armed");
                    timer.set_value(Some(sub));
                }
                Err(err) => error!(?err, "autoplay timer unavailable"),
            }
        }
    });

    on_cleanup(move || {
        state.try_update_untracked(|carousel| carousel.teardown());
        timer.dispose();
        listeners.dispose();
    });
}
