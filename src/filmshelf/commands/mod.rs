use crate::catalog::FilteredCatalog;
use crate::config::FilmshelfConfig;
use crate::error::{FilmshelfError, Result};
use crate::media::MediaFiles;
use crate::model::Movie;
use crate::store::CatalogStore;
use std::path::PathBuf;

pub mod account;
pub mod add;
pub mod config;
pub mod delete;
pub mod export;
pub mod list;
pub mod media;

/// A movie as shown in a listing, with its 1-based position in the view.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayMovie {
    pub index: usize,
    pub movie: Movie,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_movies: Vec<Movie>,
    pub listed_movies: Vec<DisplayMovie>,
    pub media: Option<MediaFiles>,
    pub report_path: Option<PathBuf>,
    pub config: Option<FilmshelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_movies(mut self, movies: Vec<DisplayMovie>) -> Self {
        self.listed_movies = movies;
        self
    }

    pub fn with_media(mut self, media: MediaFiles) -> Self {
        self.media = Some(media);
        self
    }

    pub fn with_report_path(mut self, path: PathBuf) -> Self {
        self.report_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: FilmshelfConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// The current filtered view, numbered from 1.
pub fn indexed_view<S: CatalogStore>(catalog: &FilteredCatalog<S>) -> Vec<DisplayMovie> {
    catalog
        .view()
        .enumerate()
        .map(|(i, movie)| DisplayMovie {
            index: i + 1,
            movie: movie.clone(),
        })
        .collect()
}

/// Resolve display indexes against the current view.
///
/// Repeated indexes resolve once, in ascending order. Fails on the first index
/// that is not in the view, before anything is touched.
pub fn resolve_indexes<S: CatalogStore>(
    catalog: &FilteredCatalog<S>,
    indexes: &[usize],
) -> Result<Vec<DisplayMovie>> {
    let mut wanted = indexes.to_vec();
    wanted.sort_unstable();
    wanted.dedup();

    let view = indexed_view(catalog);
    wanted
        .iter()
        .map(|idx| {
            view.iter()
                .find(|dm| dm.index == *idx)
                .cloned()
                .ok_or_else(|| FilmshelfError::Api(format!("Index {} not found in current view", idx)))
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::catalog::FilteredCatalog;
    use crate::model::MovieDraft;
    use crate::store::memory::InMemoryCatalogStore;

    /// Catalog with Inception (2010) and Up (2009), in that order.
    pub fn sample_catalog() -> FilteredCatalog<InMemoryCatalogStore> {
        let mut catalog = FilteredCatalog::open(InMemoryCatalogStore::new());
        catalog
            .add(MovieDraft::new("Inception", "Nolan", 2010, 8.8).with_categories("Sci-Fi"))
            .unwrap();
        catalog
            .add(MovieDraft::new("Up", "Docter", 2009, 8.3).with_categories("Animation"))
            .unwrap();
        catalog
    }
}
