//! Text filtering over movies.
//!
//! A [`MovieFilter`] holds a search text and decides whether a movie belongs in
//! the filtered view. It holds no reference to any catalog, so the same filter
//! can be applied to whatever list is current when the view is read.

use crate::model::Movie;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
    // Lowercased once; None accepts everything
    needle: Option<String>,
}

impl MovieFilter {
    /// A filter that accepts every movie.
    pub fn all() -> Self {
        Self::default()
    }

    /// Case-insensitive substring search. An empty text accepts everything.
    pub fn text(text: &str) -> Self {
        if text.is_empty() {
            return Self::all();
        }
        Self {
            needle: Some(text.to_lowercase()),
        }
    }

    /// Matches title, director, the decimal release year, or the categories
    /// string when one is set.
    pub fn matches(&self, movie: &Movie) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };

        movie.title.to_lowercase().contains(needle)
            || movie.director.to_lowercase().contains(needle)
            || movie.release_year.to_string().contains(needle)
            || (!movie.categories.is_empty() && movie.categories.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, director: &str, year: i32, categories: &str) -> Movie {
        Movie {
            title: title.into(),
            director: director.into(),
            release_year: year,
            media_path: "/films/x".into(),
            categories: categories.into(),
            rating: 8.0,
            external_id: "tt42".into(),
        }
    }

    #[test]
    fn empty_text_accepts_all() {
        let filter = MovieFilter::text("");
        assert_eq!(filter, MovieFilter::all());
        assert!(filter.matches(&movie("", "", 1900, "")));
    }

    #[test]
    fn matches_each_searchable_field() {
        let m = movie("Inception", "Christopher Nolan", 2010, "Sci-Fi,Thriller");
        assert!(MovieFilter::text("CEPT").matches(&m));
        assert!(MovieFilter::text("nolan").matches(&m));
        assert!(MovieFilter::text("201").matches(&m));
        assert!(MovieFilter::text("thrill").matches(&m));
        assert!(MovieFilter::text("fi,th").matches(&m));
    }

    #[test]
    fn ignores_path_rating_and_external_id() {
        let m = movie("Up", "Docter", 2009, "");
        assert!(!MovieFilter::text("films").matches(&m));
        assert!(!MovieFilter::text("8.0").matches(&m));
        assert!(!MovieFilter::text("tt42").matches(&m));
    }
}
