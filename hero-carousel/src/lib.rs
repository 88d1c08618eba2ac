//! # hero-carousel
//!
//! Leptos hero carousel and reveal-on-scroll wrapper for landing pages.
//!
//! The interesting part is not the markup but the state: one carousel merges
//! an autoplay timer, tab visibility, hover, focus, global arrow keys, touch
//! swipes, arrow buttons and pagination dots into a single active index,
//! without timers leaking past unmount or pause sources stepping on each other.
//!
//! ## Features
//!
//! - **One funnel** - every input is a [`CarouselEvent`] fed to [`CarouselController::handle`]
//! - **Host-agnostic core** - the controller never touches the DOM; timer work comes out as [`TimerCommand`]s
//! - **Scoped subscriptions** - browser listeners, intervals and observers are RAII guards
//! - **Headless** - [`HeadlessCarousel`] drives the same controller on a virtual clock
//! - **Two layouts, one state** - compact and wide renderers share a single controller signal
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use hero_carousel::{CarouselConfig, CarouselEvent, HeadlessCarousel, StaticEnvironment};
//!
//! let mut carousel =
//!     HeadlessCarousel::mount(3, &CarouselConfig::default(), StaticEnvironment::visible())?;
//!
//! carousel.elapse(Duration::from_secs(5));
//! assert_eq!(carousel.active_index(), 1);
//!
//! // Hovering holds the slide still
//! carousel.dispatch(CarouselEvent::PointerEnter);
//! carousel.elapse(Duration::from_secs(60));
//! assert_eq!(carousel.active_index(), 1);
//! # Ok::<(), hero_carousel::CarouselError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`controller`] - the state machine and its event/outcome types
//! - [`pause`], [`swipe`], [`autoplay`], [`reveal`] - the pieces it is built from
//! - [`host`] / `dom` - environment queries; browser subscriptions (wasm32 only)
//! - [`headless`] - DOM-free host
//! - [`components`] - Leptos components
//! - [`types`], [`config`], [`error`], [`styles`]
//!
//! ## Leptos 0.8 SSR
//!
//! Components render to static HTML with `RenderHtml::to_html`, which is how
//! the markup is tested natively:
//!
//! ```rust,ignore
//! let html = hero_carousel::render_carousel_html(&slides, &CarouselConfig::default());
//! assert!(html.contains(r#"aria-roledescription="carousel""#));
//! ```
//!
//! The `ssr` cargo feature only forwards `leptos/ssr` for hosts that render to
//! HTML; nothing in this crate is compiled differently under it.
//!
//! ---
//!
//! Developed with 💀 by the NovaGrid web team (c)2026

#![doc(html_root_url = "https://docs.rs/hero-carousel/0.3.0")]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod autoplay;
pub mod components;
pub mod config;
pub mod controller;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod error;
pub mod headless;
pub mod host;
pub mod pause;
pub mod reveal;
pub mod styles;
pub mod swipe;
pub mod types;

use components::HeroCarousel;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use autoplay::{ManualTimer, TimerCommand, TimerId};
pub use config::{CarouselConfig, RevealConfig};
pub use controller::{CarouselController, CarouselEvent, Direction, Outcome};
pub use error::CarouselError;
pub use headless::HeadlessCarousel;
pub use host::{Environment, StaticEnvironment};
pub use pause::{PausePolicy, PauseSource};
pub use reveal::{IntersectionSample, RevealLatch};
pub use types::{Background, CallToAction, Slide};

/// Render a carousel to static HTML.
///
/// Useful for previews and for asserting on markup. Nothing interactive is
/// attached; the output shows the first slide.
///
/// ```rust
/// use hero_carousel::{render_carousel_html, CarouselConfig, Slide};
///
/// let slides = vec![Slide { title: "Hello".into(), ..Default::default() }];
/// let html = render_carousel_html(&slides, &CarouselConfig::default());
/// assert!(html.contains("Hello"));
/// ```
pub fn render_carousel_html(slides: &[Slide], config: &CarouselConfig) -> String {
    let owner = Owner::new();
    owner.with(|| {
        view! { <HeroCarousel slides=slides.to_vec() config=config.clone() /> }.to_html()
    })
}
