//! Browser subscription guards and the mounted carousel. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use hero_carousel::components::HeroCarousel;
use hero_carousel::dom::{DomEnvironment, EventSubscription, IntervalSubscription};
use hero_carousel::{CarouselConfig, Environment, Slide};
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("test runs in a browser")
}

#[wasm_bindgen_test]
fn environment_answers_in_a_browser() {
    assert!(DomEnvironment.tab_hidden().is_some());
    assert!(DomEnvironment.prefers_reduced_motion().is_some());
}

#[wasm_bindgen_test]
fn listener_is_removed_on_drop() {
    let doc = document();
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let sub = EventSubscription::listen(&doc, "hc-ping", move |_| counter.set(counter.get() + 1))
        .expect("listener registers");

    let ping = web_sys::Event::new("hc-ping").expect("event constructs");
    doc.dispatch_event(&ping).expect("dispatch");
    assert_eq!(hits.get(), 1);

    drop(sub);
    let ping = web_sys::Event::new("hc-ping").expect("event constructs");
    doc.dispatch_event(&ping).expect("dispatch");
    assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
fn interval_arms_and_clears() {
    let sub = IntervalSubscription::every(Duration::from_millis(10), || {});
    assert!(sub.is_ok());
    drop(sub);
}

// Mounted component: the real browser host, not the headless one.

fn three_slides() -> Vec<Slide> {
    ["Ship", "Scale", "Secure"]
        .into_iter()
        .map(|title| Slide {
            title: title.into(),
            subtitle: format!("{title} faster"),
            ..Slide::default()
        })
        .collect()
}

fn fast(interval_ms: u64) -> CarouselConfig {
    CarouselConfig {
        interval_ms,
        ..CarouselConfig::default()
    }
}

fn host_element() -> web_sys::HtmlElement {
    let doc = document();
    let host: web_sys::HtmlElement = doc
        .create_element("div")
        .expect("div creates")
        .unchecked_into();
    doc.body()
        .expect("document has a body")
        .append_child(&host)
        .expect("host attaches");
    host
}

fn find(host: &web_sys::HtmlElement, selector: &str) -> web_sys::Element {
    host.query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("{selector} is rendered"))
}

/// `aria-label` of the active wide panel, e.g. "1 of 3".
fn active_panel(host: &web_sys::HtmlElement) -> Option<String> {
    host.query_selector(".hc-wide .hc-panel.is-active")
        .ok()
        .flatten()
        .and_then(|panel| panel.get_attribute("aria-label"))
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .expect("test runs in a browser")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("timeout schedules");
    });
    JsFuture::from(promise).await.expect("timeout resolves");
}

fn dispatch(target: &web_sys::EventTarget, event: &web_sys::Event) {
    target.dispatch_event(event).expect("dispatch");
}

fn arrow_right() -> web_sys::KeyboardEvent {
    let init = web_sys::KeyboardEventInit::new();
    init.set_key("ArrowRight");
    web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keydown constructs")
}

fn focus_event(kind: &str, related: Option<&web_sys::EventTarget>) -> web_sys::FocusEvent {
    let init = web_sys::FocusEventInit::new();
    init.set_bubbles(true);
    init.set_related_target(related);
    web_sys::FocusEvent::new_with_focus_event_init_dict(kind, &init).expect("focus event constructs")
}

fn reduced_motion() -> bool {
    DomEnvironment.prefers_reduced_motion() == Some(true)
}

#[wasm_bindgen_test]
async fn mounted_carousel_holds_while_hovered() {
    if reduced_motion() {
        return;
    }
    let host = host_element();
    let _mounted = mount_to(host.clone(), || {
        view! { <HeroCarousel slides=three_slides() config=fast(40) /> }
    });
    let region = find(&host, ".hero-carousel");

    dispatch(&region, &web_sys::Event::new("mouseenter").expect("event constructs"));
    sleep(200).await;
    assert_eq!(active_panel(&host).as_deref(), Some("1 of 3"));

    dispatch(&region, &web_sys::Event::new("mouseleave").expect("event constructs"));
    sleep(200).await;
    assert_ne!(active_panel(&host).as_deref(), Some("1 of 3"));
}

#[wasm_bindgen_test]
async fn unmounting_stops_keys_and_autoplay() {
    let window = web_sys::window().expect("test runs in a browser");
    let host = host_element();
    let mounted = mount_to(host.clone(), || {
        view! { <HeroCarousel slides=three_slides() config=fast(100) /> }
    });

    dispatch(&window, &arrow_right());
    sleep(10).await;
    assert_eq!(active_panel(&host).as_deref(), Some("2 of 3"));

    let third = find(&host, r#".hc-wide .hc-panel[aria-label="3 of 3"]"#);
    drop(mounted);
    assert_eq!(host.child_element_count(), 0);

    dispatch(&window, &arrow_right());
    sleep(350).await;
    let class = third.get_attribute("class").unwrap_or_default();
    assert!(!class.contains("is-active"), "detached panel changed: {class}");
}

#[wasm_bindgen_test]
async fn focus_moving_between_controls_keeps_the_pause() {
    if reduced_motion() {
        return;
    }
    let host = host_element();
    let _mounted = mount_to(host.clone(), || {
        view! { <HeroCarousel slides=three_slides() config=fast(40) /> }
    });
    let arrow = find(&host, ".hc-wide .hc-arrow");
    let dot = find(&host, ".hc-wide .hc-dot");

    dispatch(&arrow, &focus_event("focusin", None));
    dispatch(&arrow, &focus_event("focusout", Some(dot.as_ref())));
    dispatch(&dot, &focus_event("focusin", Some(arrow.as_ref())));
    sleep(200).await;
    assert_eq!(active_panel(&host).as_deref(), Some("1 of 3"));

    dispatch(&dot, &focus_event("focusout", None));
    sleep(200).await;
    assert_ne!(active_panel(&host).as_deref(), Some("1 of 3"));
}
