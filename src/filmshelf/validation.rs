use crate::model::{Movie, MovieDraft};
use std::ops::RangeInclusive;
use thiserror::Error;

pub const RATING_RANGE: RangeInclusive<f64> = 1.0..=10.0;
pub const YEAR_RANGE: RangeInclusive<i32> = 1888..=2100;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("rating must be between 1 and 10")]
    RatingOutOfRange,

    #[error("release year must be between 1888 and 2100")]
    InvalidYear,
}

/// Checks a draft against the catalog rules and builds the [`Movie`].
///
/// Rules are checked in order and the first failure is returned. Director,
/// media path, categories and external id are accepted as-is, empty included.
pub fn validate(draft: MovieDraft) -> Result<Movie, ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    // NaN fails `contains`
    if !RATING_RANGE.contains(&draft.rating) {
        return Err(ValidationError::RatingOutOfRange);
    }
    if !YEAR_RANGE.contains(&draft.release_year) {
        return Err(ValidationError::InvalidYear);
    }

    Ok(Movie {
        title: draft.title,
        director: draft.director,
        release_year: draft.release_year,
        media_path: draft.media_path,
        categories: draft.categories,
        rating: draft.rating,
        external_id: draft.external_id,
    })
}
