//! # Filtered Catalog
//!
//! [`FilteredCatalog`] owns a user's movies for the length of a session. It
//! keeps two things:
//!
//! - the **authoritative** list, in insertion order, which is the only copy
//!   that mutations touch, and
//! - a [`MovieFilter`] describing the current search.
//!
//! The filtered view is never stored. [`FilteredCatalog::view`] walks the
//! authoritative list with the current filter every time it is called, so it
//! cannot go stale after an add, a delete or a filter change.
//!
//! ## Persistence
//!
//! Every successful `add` and every `delete` writes the full list through
//! [`CatalogStore::save_all`] before returning. If that write fails the error
//! is returned but the in-memory change stays: memory and disk disagree until
//! the next successful save.

use crate::codec;
use crate::error::{FilmshelfError, Result};
use crate::filter::MovieFilter;
use crate::model::{Movie, MovieDraft};
use crate::store::CatalogStore;
use crate::validation::validate;
use log::{debug, warn};

/// Movies from `movies` accepted by `filter`, in order.
pub fn filtered<'a>(movies: &'a [Movie], filter: &'a MovieFilter) -> impl Iterator<Item = &'a Movie> + 'a {
    movies.iter().filter(move |m| filter.matches(m))
}

pub struct FilteredCatalog<S: CatalogStore> {
    store: S,
    movies: Vec<Movie>,
    filter: MovieFilter,
    skipped_on_load: usize,
}

impl<S: CatalogStore> FilteredCatalog<S> {
    /// Load the catalog from `store` with an accept-all filter.
    pub fn open(store: S) -> Self {
        let load = store.load_all();
        if load.skipped > 0 {
            warn!("{} catalog records could not be read and were dropped", load.skipped);
        }
        debug!("loaded {} movies", load.movies.len());
        Self {
            store,
            movies: load.movies,
            filter: MovieFilter::all(),
            skipped_on_load: load.skipped,
        }
    }

    /// Validate and append a movie, then persist the whole catalog.
    ///
    /// A [`FilmshelfError::Validation`] or [`FilmshelfError::Encode`] means
    /// nothing changed. Any other error means the movie was added in memory
    /// but the save failed.
    pub fn add(&mut self, draft: MovieDraft) -> Result<()> {
        let movie = validate(draft)?;
        codec::encode_movie(&movie)?;
        self.movies.push(movie);
        self.persist()
    }

    /// Remove the first movie equal to `movie`, then persist the whole catalog.
    ///
    /// Returns whether a movie was removed. The catalog is saved either way.
    pub fn delete(&mut self, movie: &Movie) -> Result<bool> {
        let removed = match self.movies.iter().position(|m| m == movie) {
            Some(pos) => {
                self.movies.remove(pos);
                true
            }
            None => false,
        };
        self.persist()?;
        Ok(removed)
    }

    /// Replace the current filter; see [`MovieFilter::text`].
    pub fn set_filter(&mut self, text: &str) {
        self.filter = MovieFilter::text(text);
    }

    /// The movies accepted by the current filter, in catalog order.
    ///
    /// Re-evaluated on every call.
    pub fn view(&self) -> impl Iterator<Item = &Movie> + '_ {
        filtered(&self.movies, &self.filter)
    }

    /// The authoritative list, unfiltered.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn snapshot(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Records dropped as unreadable when the catalog was opened.
    pub fn skipped_on_load(&self) -> usize {
        self.skipped_on_load
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save_all(&self.movies).map_err(|e| match e {
            FilmshelfError::Io(io) => {
                FilmshelfError::Store(format!("catalog changed in memory but not saved: {}", io))
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs::FileCatalogStore;
    use crate::store::memory::InMemoryCatalogStore;
    use crate::validation::ValidationError;
    use tempfile::TempDir;

    fn inception() -> MovieDraft {
        MovieDraft::new("Inception", "Nolan", 2010, 8.8).with_categories("Sci-Fi")
    }

    fn up() -> MovieDraft {
        MovieDraft::new("Up", "Docter", 2009, 8.3).with_categories("Animation")
    }

    fn titles<'a>(movies: impl Iterator<Item = &'a Movie>) -> Vec<&'a str> {
        movies.map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn add_persists_full_catalog() {
        let mut catalog = FilteredCatalog::open(InMemoryCatalogStore::new());
        catalog.add(inception()).unwrap();
        catalog.add(up()).unwrap();

        assert_eq!(catalog.store().saves, 2);
        assert_eq!(catalog.store().movies, catalog.movies());
    }

    #[test]
    fn invalid_add_changes_nothing() {
        let mut catalog = FilteredCatalog::open(InMemoryCatalogStore::new());
        catalog.add(inception()).unwrap();

        let cases = [
            (MovieDraft::new("A", "", 2000, 0.9), ValidationError::RatingOutOfRange),
            (MovieDraft::new("A", "", 2000, 10.1), ValidationError::RatingOutOfRange),
            (MovieDraft::new("A", "", 1887, 5.0), ValidationError::InvalidYear),
            (MovieDraft::new("A", "", 2101, 5.0), ValidationError::InvalidYear),
            (MovieDraft::new("  ", "", 2000, 5.0), ValidationError::EmptyTitle),
        ];
        for (draft, expected) in cases {
            match catalog.add(draft) {
                Err(FilmshelfError::Validation(e)) => assert_eq!(e, expected),
                other => panic!("expected {:?}, got {:?}", expected, other),
            }
        }

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.store().saves, 1);
    }

    #[test]
    fn boundary_values_are_accepted() {
        let mut catalog = FilteredCatalog::open(InMemoryCatalogStore::new());
        catalog.add(MovieDraft::new("A", "", 1888, 1.0)).unwrap();
        catalog.add(MovieDraft::new("B", "", 2100, 10.0)).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn filter_is_a_live_projection() {
        let mut catalog = FilteredCatalog::open(InMemoryCatalogStore::new());
        catalog.add(inception()).unwrap();
        catalog.add(up()).unwrap();

        catalog.set_filter("nol");
        assert_eq!(titles(catalog.view()), ["Inception"]);

        catalog.set_filter("2009");
        assert_eq!(titles(catalog.view()), ["Up"]);

        catalog.set_filter("");
        assert_eq!(titles(catalog.view()), ["Inception", "Up"]);

        // Mutations show up without touching the filter
        catalog.set_filter("pixar");
        assert_eq!(catalog.view().count(), 0);
        catalog
            .add(MovieDraft::new("Coco", "Unkrich", 2017, 8.4).with_categories("Pixar"))
            .unwrap();
        assert_eq!(titles(catalog.view()), ["Coco"]);
    }

    #[test]
    fn view_is_restartable() {
        let mut catalog = FilteredCatalog::open(InMemoryCatalogStore::new());
        catalog.add(inception()).unwrap();
        catalog.set_filter("incep");
        assert_eq!(catalog.view().count(), 1);
        assert_eq!(catalog.view().count(), 1);
    }

    #[test]
    fn delete_removes_first_equal_movie_only() {
        let mut catalog = FilteredCatalog::open(InMemoryCatalogStore::new());
        catalog.add(inception()).unwrap();
        catalog.add(up()).unwrap();
        catalog.add(inception()).unwrap();

        let target = catalog.movies()[0].clone();
        assert!(catalog.delete(&target).unwrap());
        assert_eq!(titles(catalog.movies().iter()), ["Up", "Inception"]);
    }

    #[test]
    fn deleting_missing_movie_is_a_noop_that_still_saves() {
        let mut catalog = FilteredCatalog::open(InMemoryCatalogStore::new());
        catalog.add(inception()).unwrap();
        let stranger = validate(up()).unwrap();

        assert!(!catalog.delete(&stranger).unwrap());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.store().saves, 2);
    }

    #[test]
    fn failed_save_keeps_memory_state() {
        let mut store = InMemoryCatalogStore::new();
        store.fail_writes = true;
        let mut catalog = FilteredCatalog::open(store);

        let err = catalog.add(inception()).unwrap_err();
        assert!(matches!(err, FilmshelfError::Store(_)));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.store().movies.is_empty());
    }

    #[test]
    fn unstorable_movie_is_refused_before_mutation() {
        let dir = TempDir::new().unwrap();
        let mut catalog = FilteredCatalog::open(FileCatalogStore::new(dir.path(), "alice").unwrap());
        catalog.add(inception()).unwrap();

        let err = catalog.add(MovieDraft::new("Two\nLines", "", 2000, 5.0)).unwrap_err();
        assert!(matches!(err, FilmshelfError::Encode(_)));
        assert!(catalog
            .add(MovieDraft::new("Heat", "Mann", 1995, 8.3).with_categories("Crime,Drama"))
            .is_err());
        assert_eq!(catalog.len(), 1);

        let reloaded = FilteredCatalog::open(FileCatalogStore::new(dir.path(), "alice").unwrap());
        assert_eq!(reloaded.movies(), catalog.movies());
        assert_eq!(reloaded.skipped_on_load(), 0);
    }

    #[test]
    fn delete_then_reload_from_disk() {
        let dir = TempDir::new().unwrap();
        let mut catalog = FilteredCatalog::open(FileCatalogStore::new(dir.path(), "alice").unwrap());
        catalog.add(inception()).unwrap();
        catalog.add(up()).unwrap();
        let first = catalog.movies()[0].clone();
        catalog.delete(&first).unwrap();

        let reloaded = FilteredCatalog::open(FileCatalogStore::new(dir.path(), "alice").unwrap());
        assert_eq!(titles(reloaded.movies().iter()), ["Up"]);
        assert_eq!(reloaded.movies(), catalog.movies());
    }

    #[test]
    fn open_reports_skipped_records() {
        let dir = TempDir::new().unwrap();
        let store = FileCatalogStore::new(dir.path(), "alice").unwrap();
        std::fs::write(
            store.path(),
            "Inception,Nolan,2010,,Sci-Fi,8.8,tt1375666\nUp,Docter,2009,,Animation,8.3\n",
        )
        .unwrap();

        let catalog = FilteredCatalog::open(store);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.skipped_on_load(), 1);
    }
}
