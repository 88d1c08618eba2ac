//! CSS for the carousel and the reveal wrapper.
//!
//! Both layouts are always in the DOM; a `min-width: 768px` media query
//! decides which one is displayed. Colors come from custom properties so a host page can restyle
//! the carousel without touching this sheet:
//!
//! ```rust
//! use hero_carousel::styles::CAROUSEL_CSS;
//!
//! let page_css = ":root { --hc-accent: #e11d48; }";
//! let combined = format!("{}\n{}", CAROUSEL_CSS, page_css);
//! assert!(combined.contains(".hero-carousel"));
//! ```

/// Complete stylesheet for [`crate::components::HeroCarousel`] and
/// [`crate::components::Reveal`].
pub const CAROUSEL_CSS: &str = r#"
:root {
  --hc-accent: #2563eb;
  --hc-accent-contrast: #ffffff;
  --hc-surface: rgba(255, 255, 255, 0.04);
  --hc-border: rgba(148, 163, 184, 0.25);
  --hc-text: inherit;
  --hc-muted: rgba(148, 163, 184, 0.95);
  --hc-radius: 1rem;
  --hc-fade: 500ms;
}

.hero-carousel {
  position: relative;
  width: 100%;
  color: var(--hc-text);
  outline: none;
}

.hero-carousel:focus-visible {
  box-shadow: 0 0 0 2px var(--hc-accent);
  border-radius: var(--hc-radius);
}

.hero-carousel--empty {
  min-height: 8rem;
  border: 1px dashed var(--hc-border);
  border-radius: var(--hc-radius);
}

/* Panels stack in one grid cell so the tallest slide sets the height. */
.hc-track {
  display: grid;
}

.hc-panel {
  grid-area: 1 / 1;
  opacity: 0;
  visibility: hidden;
  transition: opacity var(--hc-fade) ease, visibility 0s linear var(--hc-fade);
}

.hc-panel.is-active {
  opacity: 1;
  visibility: visible;
  transition: opacity var(--hc-fade) ease;
}

.hc-title {
  margin: 0 0 0.5rem;
  font-size: 1.5rem;
  font-weight: 700;
  line-height: 1.2;
}

.hc-subtitle {
  margin: 0 0 1.25rem;
  color: var(--hc-muted);
}

.hc-cta {
  display: inline-flex;
  align-items: center;
  gap: 0.375rem;
  padding: 0.5rem 1rem;
  border-radius: 0.75rem;
  background: var(--hc-accent);
  color: var(--hc-accent-contrast);
  font-weight: 600;
  text-decoration: none;
}

.hc-cta:hover {
  filter: brightness(1.1);
}

.hc-arrow,
.hc-dot {
  border: 0;
  cursor: pointer;
  font: inherit;
}

.hc-arrow {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 999px;
  background: var(--hc-surface);
  color: inherit;
  border: 1px solid var(--hc-border);
}

.hc-arrow:hover {
  border-color: var(--hc-accent);
}

.hc-dots {
  display: flex;
  gap: 0.5rem;
  justify-content: center;
}

.hc-dot {
  width: 0.625rem;
  height: 0.625rem;
  padding: 0;
  border-radius: 999px;
  background: var(--hc-border);
  transition: width 200ms ease, background 200ms ease;
}

.hc-dot[aria-current="true"] {
  width: 1.5rem;
  background: var(--hc-accent);
}

/* Compact: content over the slide background, controls underneath. */
.hc-compact .hc-panel {
  min-height: 16rem;
  padding: 1.5rem;
  border-radius: var(--hc-radius);
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
}

.hc-compact .hc-panel-content {
  padding: 1rem;
  border-radius: 0.75rem;
  background: rgba(15, 23, 42, 0.55);
  backdrop-filter: blur(4px);
  color: #f8fafc;
}

.hc-controls {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-top: 1rem;
}

.hc-wide {
  display: none;
}

@media (min-width: 768px) {
  .hc-compact {
    display: none;
  }

  /* Wide: arrow gutters around a split stage. */
  .hc-wide {
    display: grid;
    grid-template-columns: 96px 1fr 96px;
    align-items: center;
  }

  .hc-gutter {
    display: flex;
    justify-content: center;
  }

  .hc-stage {
    position: relative;
    border: 1px solid var(--hc-border);
    border-radius: var(--hc-radius);
    background: var(--hc-surface);
    overflow: hidden;
  }

  .hc-wide .hc-panel {
    display: grid;
    grid-template-columns: 1fr 1fr;
    min-height: 22rem;
  }

  .hc-media {
    min-height: 100%;
  }

  .hc-text {
    display: flex;
    flex-direction: column;
    justify-content: center;
    padding: 2.5rem;
  }

  .hc-wide .hc-title {
    font-size: 2rem;
  }

  .hc-stage .hc-dots {
    position: absolute;
    left: 0;
    right: 0;
    bottom: 1rem;
  }
}

.reveal {
  will-change: opacity, transform;
}

@media (prefers-reduced-motion: reduce) {
  .hc-panel,
  .hc-panel.is-active,
  .hc-dot,
  .reveal {
    transition: none !important;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_layout_replaces_compact_at_768px() {
        let (narrow, wide) = CAROUSEL_CSS
            .split_once("@media (min-width: 768px)")
            .expect("breakpoint query present");
        assert!(narrow.contains(".hc-wide {\n  display: none;"));
        assert!(wide.trim_start().starts_with("{\n  .hc-compact {\n    display: none;"));
    }
}
