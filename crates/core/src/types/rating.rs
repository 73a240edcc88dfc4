//! Customer testimonial rating, always out of five stars.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error building a [`Rating`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("rating must be between 0 and 5 stars (got {0})")]
    OutOfRange(u8),
}

/// A star rating between 0 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MAX_STARS: u8 = 5;

    /// Create a rating, rejecting values above five stars.
    ///
    /// # Errors
    ///
    /// Returns `RatingError::OutOfRange` if `stars > 5`.
    pub const fn new(stars: u8) -> Result<Self, RatingError> {
        if stars > Self::MAX_STARS {
            Err(RatingError::OutOfRange(stars))
        } else {
            Ok(Self(stars))
        }
    }

    /// Number of filled stars.
    #[must_use]
    pub const fn stars(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_stars_is_valid() {
        assert_eq!(Rating::new(5).expect("valid").stars(), 5);
    }

    #[test]
    fn test_six_stars_is_rejected() {
        assert_eq!(Rating::new(6), Err(RatingError::OutOfRange(6)));
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let ok: Rating = serde_json::from_str("4").expect("deserialize");
        assert_eq!(ok.stars(), 4);
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }
}
