//! # Record Codec
//!
//! One record per line, fields joined by [`DELIMITER`]. There is no quoting or
//! escaping, so a field holding the delimiter or a line break cannot be
//! stored: encoding refuses it with [`EncodeError`] rather than writing a
//! line that would load back as something else.
//!
//! Field orders are fixed:
//!
//! ```text
//! credentials:  username,password
//! catalog:      title,director,year,mediaPath,categories,rating,externalId
//! ```
//!
//! Decoding trims surrounding whitespace from every field. Encoding writes
//! fields as-is.

use crate::model::{Movie, User};
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

pub const DELIMITER: char = ',';

const USER_FIELDS: usize = 2;
const MOVIE_FIELDS: usize = 7;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid year '{value}': {source}")]
    Year {
        value: String,
        source: ParseIntError,
    },

    #[error("invalid rating '{value}': {source}")]
    Rating {
        value: String,
        source: ParseFloatError,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    #[error("the {field} cannot contain ',' or a line break")]
    Unstorable { field: &'static str },
}

/// Refuse a value that would split its record when written.
pub fn check_field(field: &'static str, value: &str) -> Result<(), EncodeError> {
    if value.contains([DELIMITER, '\n', '\r']) {
        return Err(EncodeError::Unstorable { field });
    }
    Ok(())
}

fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, DecodeError> {
    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    if fields.len() != expected {
        return Err(DecodeError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

pub fn encode_user(user: &User) -> Result<String, EncodeError> {
    check_field("username", &user.username)?;
    check_field("password", &user.password)?;
    Ok(format!("{}{}{}", user.username, DELIMITER, user.password))
}

pub fn decode_user(line: &str) -> Result<User, DecodeError> {
    let fields = split_fields(line, USER_FIELDS)?;
    Ok(User::new(fields[0], fields[1]))
}

pub fn encode_movie(movie: &Movie) -> Result<String, EncodeError> {
    check_field("title", &movie.title)?;
    check_field("director", &movie.director)?;
    check_field("path", &movie.media_path)?;
    check_field("categories", &movie.categories)?;
    check_field("external id", &movie.external_id)?;

    let year = movie.release_year.to_string();
    let rating = format_rating(movie.rating);
    let delimiter = DELIMITER.to_string();
    Ok([
        movie.title.as_str(),
        movie.director.as_str(),
        year.as_str(),
        movie.media_path.as_str(),
        movie.categories.as_str(),
        rating.as_str(),
        movie.external_id.as_str(),
    ]
    .join(delimiter.as_str()))
}

pub fn decode_movie(line: &str) -> Result<Movie, DecodeError> {
    let fields = split_fields(line, MOVIE_FIELDS)?;

    let release_year: i32 = fields[2].parse().map_err(|source| DecodeError::Year {
        value: fields[2].to_string(),
        source,
    })?;
    let rating: f64 = fields[5].parse().map_err(|source| DecodeError::Rating {
        value: fields[5].to_string(),
        source,
    })?;

    Ok(Movie {
        title: fields[0].to_string(),
        director: fields[1].to_string(),
        release_year,
        media_path: fields[3].to_string(),
        categories: fields[4].to_string(),
        rating,
        external_id: fields[6].to_string(),
    })
}

/// Whole ratings keep one decimal place (`8.0`, not `8`), matching files
/// written by earlier versions.
fn format_rating(rating: f64) -> String {
    if rating.is_finite() && rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        rating.to_string()
    }
}
