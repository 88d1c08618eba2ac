use thiserror::Error;

/// Errors produced by carousel constructors and configuration validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    EmptySlides,

    #[error("autoplay interval must be at least 1 ms")]
    ZeroInterval,

    #[error("swipe threshold must be a finite, non-negative pixel distance (got {0})")]
    InvalidSwipeThreshold(f64),

    #[error("reveal threshold must lie within [0, 1] (got {0})")]
    InvalidRevealThreshold(f64),

    #[error("reveal offset must be a finite, non-negative pixel distance (got {0})")]
    InvalidRevealOffset(f64),
}

pub type Result<T> = std::result::Result<T, CarouselError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_value() {
        let err = CarouselError::InvalidRevealThreshold(1.5);
        assert_eq!(err.to_string(), "reveal threshold must lie within [0, 1] (got 1.5)");
        assert_eq!(
            CarouselError::EmptySlides.to_string(),
            "carousel needs at least one slide"
        );
    }
}
