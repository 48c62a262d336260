#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    // Either plaintext or a bcrypt hash, see `auth::password_matches`
    pub password: String,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// A single catalog entry.
///
/// Movies have no identity of their own: two entries with the same field
/// values are interchangeable, and a catalog may hold both.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub director: String,
    pub release_year: i32,
    /// Directory holding the video file and cover image. May be empty.
    pub media_path: String,
    /// Comma-separated tag list, kept verbatim. May be empty.
    pub categories: String,
    pub rating: f64,
    /// External database identifier (e.g. an IMDb id). Free-form.
    pub external_id: String,
}

/// Unvalidated movie fields as entered by a user.
///
/// Turned into a [`Movie`] by [`crate::validation::validate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub director: String,
    pub release_year: i32,
    pub media_path: String,
    pub categories: String,
    pub rating: f64,
    pub external_id: String,
}

impl MovieDraft {
    pub fn new(title: impl Into<String>, director: impl Into<String>, year: i32, rating: f64) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            release_year: year,
            rating,
            ..Default::default()
        }
    }

    pub fn with_media_path(mut self, path: impl Into<String>) -> Self {
        self.media_path = path.into();
        self
    }

    pub fn with_categories(mut self, categories: impl Into<String>) -> Self {
        self.categories = categories.into();
        self
    }

    pub fn with_external_id(mut self, id: impl Into<String>) -> Self {
        self.external_id = id.into();
        self
    }
}

impl From<Movie> for MovieDraft {
    fn from(movie: Movie) -> Self {
        Self {
            title: movie.title,
            director: movie.director,
            release_year: movie.release_year,
            media_path: movie.media_path,
            categories: movie.categories,
            rating: movie.rating,
            external_id: movie.external_id,
        }
    }
}
