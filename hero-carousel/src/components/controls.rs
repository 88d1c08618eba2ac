//! Controls shared by both layouts

use leptos::prelude::*;

use crate::controller::{CarouselEvent, Direction};
use crate::types::CallToAction;

/// `aria-label` of the panel at `index`, e.g. "2 of 3".
pub fn panel_label(index: usize, count: usize) -> String {
    format!("{} of {}", index + 1, count)
}

/// `aria-label` of the pagination dot for `index`.
pub fn dot_label(index: usize) -> String {
    format!("Go to slide {}", index + 1)
}

pub fn arrow_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Previous => "Previous slide",
        Direction::Next => "Next slide",
    }
}

/// Previous / Next button
#[component]
pub fn ArrowButton(direction: Direction, on_event: Callback<CarouselEvent>) -> impl IntoView {
    let glyph = match direction {
        Direction::Previous => "‹",
        Direction::Next => "›",
    };

    view! {
        <button
            type="button"
            class="hc-arrow"
            aria-label=arrow_label(direction)
            on:click=move |_| on_event.run(CarouselEvent::Control(direction))
        >
            <span aria-hidden="true">{glyph}</span>
        </button>
    }
}

/// One dot per slide; the active one carries `aria-current`.
#[component]
pub fn PaginationDots(
    count: usize,
    active: Signal<usize>,
    on_event: Callback<CarouselEvent>,
) -> impl IntoView {
    view! {
        <div class="hc-dots">
            {(0..count)
                .map(|index| {
                    view! {
                        <button
                            type="button"
                            class="hc-dot"
                            aria-label=dot_label(index)
                            aria-current=move || (active.get() == index).then_some("true")
                            on:click=move |_| on_event.run(CarouselEvent::GoTo(index))
                        ></button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Slide call-to-action link
#[component]
pub fn CtaLink(cta: CallToAction) -> impl IntoView {
    let target = cta.target();
    let rel = cta.rel();

    view! {
        <a class="hc-cta" href=cta.href target=target rel=rel>
            {cta.label}
            <span aria-hidden="true">"→"</span>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_one_based() {
        assert_eq!(panel_label(0, 3), "1 of 3");
        assert_eq!(panel_label(2, 3), "3 of 3");
        assert_eq!(dot_label(1), "Go to slide 2");
        assert_eq!(arrow_label(Direction::Previous), "Previous slide");
        assert_eq!(arrow_label(Direction::Next), "Next slide");
    }
}
