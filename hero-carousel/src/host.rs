//! Host environment queries.
//!
//! The controller asks two questions of whatever it runs in: is the tab hidden,
//! and did the user ask for reduced motion. Either answer may be unknown
//! (`None`) when the platform lacks the API; callers treat unknown as "no".

/// Read-only view of the host the carousel is mounted in.
pub trait Environment {
    /// `document.hidden`, if there is a document.
    fn tab_hidden(&self) -> Option<bool>;

    /// `(prefers-reduced-motion: reduce)`, if media queries are available.
    /// Queried on every autoplay re-arm; implementations must not cache.
    fn prefers_reduced_motion(&self) -> Option<bool>;
}

/// Fixed answers, changed by hand. Used by the headless host and in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticEnvironment {
    pub hidden: Option<bool>,
    pub reduced_motion: Option<bool>,
}

impl StaticEnvironment {
    /// A visible tab with no motion preference.
    pub fn visible() -> Self {
        Self {
            hidden: Some(false),
            reduced_motion: Some(false),
        }
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = Some(reduced);
        self
    }
}

impl Environment for StaticEnvironment {
    fn tab_hidden(&self) -> Option<bool> {
        self.hidden
    }

    fn prefers_reduced_motion(&self) -> Option<bool> {
        self.reduced_motion
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn tab_hidden(&self) -> Option<bool> {
        (**self).tab_hidden()
    }

    fn prefers_reduced_motion(&self) -> Option<bool> {
        (**self).prefers_reduced_motion()
    }
}
