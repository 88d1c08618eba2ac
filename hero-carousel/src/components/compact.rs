//! Stacked layout for narrow viewports

use leptos::prelude::*;

use super::controls::{ArrowButton, CtaLink, PaginationDots, panel_label};
use crate::controller::{CarouselEvent, Direction};
use crate::types::Slide;

/// Slide text over its image (or gradient), prev/dots/next bar underneath.
///
/// Stateless: renders whatever `active` says and forwards input to `on_event`.
#[component]
pub fn CompactLayout(
    slides: Vec<Slide>,
    active: Signal<usize>,
    on_event: Callback<CarouselEvent>,
) -> impl IntoView {
    let count = slides.len();

    let panels = slides
        .into_iter()
        .enumerate()
        .map(|(index, slide)| {
            let is_active = move || active.get() == index;
            let style = format!("background: {}", slide.background(index).css());

            view! {
                <div
                    class=move || if is_active() { "hc-panel is-active" } else { "hc-panel" }
                    role="group"
                    aria-roledescription="slide"
                    aria-label=panel_label(index, count)
                    aria-hidden=move || (!is_active()).then_some("true")
                    inert=move || !is_active()
                    style=style
                >
                    <div class="hc-panel-content">
                        <h3 class="hc-title">{slide.title}</h3>
                        <p class="hc-subtitle">{slide.subtitle}</p>
                        {slide.cta.map(|cta| view! { <CtaLink cta=cta /> })}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="hc-compact">
            <div class="hc-track" aria-live="polite">
                {panels}
            </div>
            <div class="hc-controls">
                <ArrowButton direction=Direction::Previous on_event=on_event />
                <PaginationDots count=count active=active on_event=on_event />
                <ArrowButton direction=Direction::Next on_event=on_event />
            </div>
        </div>
    }
}
