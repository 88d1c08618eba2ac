//! Slide data types for the hero carousel.
//!
//! These types define the content a carousel renders. They're designed to be:
//!
//! - **Serializable** - Slides usually come from a JSON content file via serde
//! - **Clone-friendly** - Both layouts render the same slides without borrowing issues
//! - **Immutable** - The controller only ever needs the slide count; it never edits slides
//!
//! # Example
//!
//! ```rust
//! use hero_carousel::types::{CallToAction, Slide};
//!
//! let slide = Slide {
//!     title: "Dynamic Forms".into(),
//!     subtitle: "Schema-driven forms with validation.".into(),
//!     cta: Some(CallToAction::internal("Form Guide", "/docs#forms")),
//!     image_url: None,
//! };
//!
//! // No image: the slide gets a generated gradient instead of a broken image
//! assert!(slide.background(0).css().starts_with("linear-gradient"));
//! ```

use serde::{Deserialize, Serialize};

/// Action link shown under a slide's subtitle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    /// Button text
    pub label: String,
    /// Navigation target
    pub href: String,
    /// Open in a new tab instead of the current one
    #[serde(default)]
    pub external: bool,
}

impl CallToAction {
    /// Same-tab action.
    pub fn internal(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            external: false,
        }
    }

    /// New-tab action.
    pub fn external(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            external: true,
        }
    }

    /// `target` attribute for the rendered anchor.
    pub fn target(&self) -> Option<&'static str> {
        self.external.then_some("_blank")
    }

    /// `rel` attribute for the rendered anchor.
    pub fn rel(&self) -> Option<&'static str> {
        self.external.then_some("noopener noreferrer")
    }
}

/// One carousel entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Headline
    pub title: String,
    /// Supporting line under the headline
    pub subtitle: String,
    /// Optional action button
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<CallToAction>,
    /// Optional background/illustration image. `None` renders a generated gradient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Slide {
    /// Resolve what sits behind (compact layout) or beside (wide layout) the slide text.
    ///
    /// `position` is the slide's 0-based index; it seeds the placeholder gradient so
    /// neighbouring image-less slides do not look identical.
    pub fn background(&self, position: usize) -> Background {
        match self.image_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Background::Image(url.to_string()),
            _ => Background::Gradient {
                hue: placeholder_hue(position),
            },
        }
    }
}

/// Base hue of the brand primary; placeholders rotate around it.
const PRIMARY_HUE: u16 = 212;
const HUE_STEP: u16 = 37;

fn placeholder_hue(position: usize) -> u16 {
    let step = (position % 360) as u16;
    (PRIMARY_HUE + step.wrapping_mul(HUE_STEP) % 360) % 360
}

/// Visual behind a slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Background {
    /// Caller-supplied image
    Image(String),
    /// Decorative gradient generated when no image is available
    Gradient {
        /// HSL hue of the gradient's leading color
        hue: u16,
    },
}

impl Background {
    /// CSS `background` shorthand value.
    pub fn css(&self) -> String {
        match self {
            Background::Image(url) => {
                format!("url('{}') center / cover no-repeat", escape_css_url(url))
            }
            Background::Gradient { hue } => format!(
                "linear-gradient(135deg, hsl({hue} 85% 55% / 0.35), hsl({hue} 85% 55% / 0.10) 45%, transparent)"
            ),
        }
    }

    /// Image URL, if this background is an image.
    pub fn image_url(&self) -> Option<&str> {
        match self {
            Background::Image(url) => Some(url),
            Background::Gradient { .. } => None,
        }
    }
}

fn escape_css_url(url: &str) -> String {
    url.replace('\\', "\\\\").replace('\'', "\\'")
}
