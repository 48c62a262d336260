//! # Catalog Report
//!
//! Renders a plain text report of a catalog snapshot, grouped by the
//! `categories` field:
//!
//! ```text
//! ==========================================
//!          MOVIE COLLECTION REPORT
//! ==========================================
//!
//! CATEGORY: Drama
//! ------------------------------------------
//! - Alpha | Director: A. Person | Year: 1999 | Rating: 7.0 | IMDB: tt01
//! - Zeta | Director: Z. Person | Year: 2004 | Rating: 8.5 | IMDB: tt02
//!
//! ```
//!
//! Groups key on the whole categories string (`"Drama,Crime"` and `"Drama"` are
//! different groups) and appear in order of first occurrence. Movies with no
//! categories land in [`UNCATEGORIZED`]. Within a group, movies are sorted by
//! title, byte-wise; equal titles keep catalog order.

use crate::error::{FilmshelfError, Result};
use crate::model::Movie;
use log::info;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub const UNCATEGORIZED: &str = "Uncategorized";
pub const DEFAULT_TITLE: &str = "MOVIE COLLECTION REPORT";

const BANNER_WIDTH: usize = 42;

/// A category group with its movies in report order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportGroup<'a> {
    pub name: &'a str,
    pub movies: Vec<&'a Movie>,
}

/// Group and sort `movies` the way the report presents them.
pub fn group_movies(movies: &[Movie]) -> Vec<ReportGroup<'_>> {
    let mut groups: Vec<ReportGroup<'_>> = Vec::new();

    for movie in movies {
        let name = if movie.categories.is_empty() {
            UNCATEGORIZED
        } else {
            movie.categories.as_str()
        };
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.movies.push(movie),
            None => groups.push(ReportGroup {
                name,
                movies: vec![movie],
            }),
        }
    }

    for group in &mut groups {
        // Stable, so equal titles keep insertion order
        group.movies.sort_by(|a, b| a.title.cmp(&b.title));
    }
    groups
}

/// One decimal place, halves rounded away from zero (`7.25` gives `7.3`).
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", (rating * 10.0).round() / 10.0)
}

/// Render the report with the default title.
pub fn generate(movies: &[Movie]) -> String {
    generate_titled(movies, DEFAULT_TITLE)
}

pub fn generate_titled(movies: &[Movie], title: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "{:^width$}", title, width = BANNER_WIDTH);
    let _ = writeln!(out, "{}", rule);
    out.push('\n');

    for group in group_movies(movies) {
        let _ = writeln!(out, "CATEGORY: {}", group.name);
        let _ = writeln!(out, "{}", "-".repeat(BANNER_WIDTH));
        for m in group.movies {
            let _ = writeln!(
                out,
                "- {} | Director: {} | Year: {} | Rating: {} | IMDB: {}",
                m.title,
                m.director,
                m.release_year,
                format_rating(m.rating),
                m.external_id
            );
        }
        out.push('\n');
    }

    out
}

/// Render and write the report to `path`, replacing any existing file.
pub fn write_report(movies: &[Movie], title: &str, path: &Path) -> Result<()> {
    let report = generate_titled(movies, title);
    fs::write(path, report).map_err(FilmshelfError::Io)?;
    info!("report written to {}", path.display());
    Ok(())
}
