//! Problems the carousel tolerates while wiring itself to a page.
//!
//! None of these abort anything: [`MissingContainer`](CarouselError::MissingContainer)
//! turns initialization into a no-op and [`CountMismatch`](CarouselError::CountMismatch)
//! shrinks the carousel to the shorter element list. They exist so the
//! decision is logged with a stable label.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// No element with the given id exists in the document.
    #[error("container #{id} not found; carousel left inactive")]
    MissingContainer { id: String },

    /// Navigation and slide collections have different lengths.
    #[error("{nav} navigation elements but {slides} slides")]
    CountMismatch { nav: usize, slides: usize },
}

impl CarouselError {
    /// Short snake_case label for log fields.
    pub fn as_label(&self) -> &'static str {
        match self {
            CarouselError::MissingContainer { .. } => "carousel_missing_container",
            CarouselError::CountMismatch { .. } => "carousel_count_mismatch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        let missing = CarouselError::MissingContainer { id: "x".into() };
        let mismatch = CarouselError::CountMismatch { nav: 3, slides: 2 };
        assert_eq!(missing.as_label(), "carousel_missing_container");
        assert_eq!(mismatch.as_label(), "carousel_count_mismatch");
    }

    #[test]
    fn mismatch_message_names_both_lengths() {
        let err = CarouselError::CountMismatch { nav: 3, slides: 2 };
        assert_eq!(err.to_string(), "3 navigation elements but 2 slides");
    }
}
