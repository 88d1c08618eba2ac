//! Split layout for wide viewports

use leptos::prelude::*;

use super::controls::{ArrowButton, CtaLink, PaginationDots, panel_label};
use crate::controller::{CarouselEvent, Direction};
use crate::types::Slide;

/// Arrow gutters either side of a stage; each panel splits into an image half
/// and a text half, with the dots overlaid on the stage.
#[component]
pub fn WideLayout(
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
            let media_style = format!("background: {}", slide.background(index).css());

            view! {
                <div
                    class=move || if is_active() { "hc-panel is-active" } else { "hc-panel" }
                    role="group"
                    aria-roledescription="slide"
                    aria-label=panel_label(index, count)
                    aria-hidden=move || (!is_active()).then_some("true")
                    inert=move || !is_active()
                >
                    <div class="hc-media" style=media_style aria-hidden="true"></div>
                    <div class="hc-text">
                        <h3 class="hc-title">{slide.title}</h3>
                        <p class="hc-subtitle">{slide.subtitle}</p>
                        {slide.cta.map(|cta| view! { <CtaLink cta=cta /> })}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="hc-wide">
            <div class="hc-gutter">
                <ArrowButton direction=Direction::Previous on_event=on_event />
            </div>
            <div class="hc-stage">
                <div class="hc-track" aria-live="polite">
                    {panels}
                </div>
                <PaginationDots count=count active=active on_event=on_event />
            </div>
            <div class="hc-gutter">
                <ArrowButton direction=Direction::Next on_event=on_event />
            </div>
        </div>
    }
}
