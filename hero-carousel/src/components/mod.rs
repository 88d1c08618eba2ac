//! Leptos components for the hero carousel and the reveal wrapper.
//!
//! # Component Hierarchy
//!
//! ```text
//! HeroCarousel (owns the CarouselController signal + browser subscriptions)
//! ├── CompactLayout (narrow viewports)
//! │   ├── panels: slide text over image / gradient
//! │   └── ArrowButton · PaginationDots · ArrowButton
//! └── WideLayout (wide viewports)
//!     ├── ArrowButton (left gutter)
//!     ├── stage: panels split image | text, PaginationDots overlaid
//!     └── ArrowButton (right gutter)
//!
//! Reveal (independent; wraps any content)
//! ```
//!
//! Both layouts are stateless. They read the active index from a signal and
//! send every click back through the same `Callback<CarouselEvent>`, so they
//! can never disagree about which slide is showing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use hero_carousel::components::{HeroCarousel, Reveal};
//!
//! view! {
//!     <Reveal>
//!         <HeroCarousel slides=slides interval_ms=7000 />
//!     </Reveal>
//! }
//! ```

mod carousel;
mod compact;
mod controls;
mod reveal;
mod wide;

pub use carousel::HeroCarousel;
pub use compact::CompactLayout;
pub use controls::{ArrowButton, CtaLink, PaginationDots, arrow_label, dot_label, panel_label};
pub use reveal::Reveal;
pub use wide::WideLayout;
