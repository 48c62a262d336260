//! # API Facade
//!
//! The single entry point for front ends. It does no business logic of its
//! own: it authenticates, builds the per-user catalog, and dispatches to
//! `commands/*.rs`, returning [`CmdResult`] values for the caller to present.
//!
//! Accounts and catalogs are split:
//!
//! - [`FilmshelfApi`] owns the credential store and configuration and is
//!   usable before anyone logs in.
//! - [`Session`] is what a successful [`FilmshelfApi::login`] returns. It owns
//!   the logged-in user's [`FilteredCatalog`] and lives until logout (drop).
//!
//! Both are generic over their stores, so tests run against
//! [`crate::store::memory`] and the binary against [`crate::store::fs`].

use crate::auth::CredentialStore;
use crate::catalog::FilteredCatalog;
use crate::commands;
use crate::config::FilmshelfConfig;
use crate::error::{FilmshelfError, Result};
use crate::model::MovieDraft;
use crate::store::fs::{FileAccountStore, FileCatalogStore};
use crate::store::{AccountStore, CatalogStore};
use log::info;
use std::path::{Path, PathBuf};

pub use commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, DisplayMovie, MessageLevel};

pub struct FilmshelfApi<A: AccountStore> {
    credentials: CredentialStore<A>,
    config: FilmshelfConfig,
    data_dir: PathBuf,
}

impl FilmshelfApi<FileAccountStore> {
    /// File-backed API rooted at `data_dir`, honoring its `config.json`.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let config = FilmshelfConfig::load(&data_dir)?;
        let store = FileAccountStore::new(&data_dir);
        Ok(Self::new(store, config, data_dir))
    }

    /// Log in and open the user's catalog file.
    pub fn login_files(&self, username: &str, password: &str) -> Result<Session<FileCatalogStore>> {
        let store = FileCatalogStore::with_ext(&self.data_dir, username, &self.config.catalog_ext)?;
        self.login(username, password, store)
    }
}

impl<A: AccountStore> FilmshelfApi<A> {
    pub fn new(store: A, config: FilmshelfConfig, data_dir: PathBuf) -> Self {
        let credentials = CredentialStore::new(store).with_hashing(config.hash_passwords);
        Self {
            credentials,
            config,
            data_dir,
        }
    }

    pub fn register(&mut self, username: &str, password: &str) -> Result<CmdResult> {
        commands::account::register(&mut self.credentials, username, password)
    }

    /// Check credentials and, on success, load `catalog_store` into a session.
    pub fn login<C: CatalogStore>(
        &self,
        username: &str,
        password: &str,
        catalog_store: C,
    ) -> Result<Session<C>> {
        if !self.credentials.authenticate(username, password) {
            return Err(FilmshelfError::Auth(username.to_string()));
        }
        info!("user '{}' logged in", username);
        Ok(Session {
            username: username.to_string(),
            report_title: self.config.report_title.clone(),
            catalog: FilteredCatalog::open(catalog_store),
        })
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// An authenticated user's catalog.
pub struct Session<C: CatalogStore> {
    username: String,
    report_title: String,
    catalog: FilteredCatalog<C>,
}

impl<C: CatalogStore> Session<C> {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn catalog(&self) -> &FilteredCatalog<C> {
        &self.catalog
    }

    pub fn add_movie(&mut self, draft: MovieDraft) -> Result<CmdResult> {
        commands::add::run(&mut self.catalog, draft)
    }

    pub fn list_movies(&mut self, search: Option<&str>) -> Result<CmdResult> {
        commands::list::run(&mut self.catalog, search)
    }

    pub fn delete_movies(&mut self, search: Option<&str>, indexes: &[usize]) -> Result<CmdResult> {
        commands::delete::run(&mut self.catalog, search, indexes)
    }

    pub fn export_report(&self, output: &Path) -> Result<CmdResult> {
        commands::export::run(&self.catalog, &self.report_title, output)
    }

    pub fn media(&mut self, search: Option<&str>, index: usize) -> Result<CmdResult> {
        commands::media::run(&mut self.catalog, search, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{InMemoryAccountStore, InMemoryCatalogStore};

    fn api() -> FilmshelfApi<InMemoryAccountStore> {
        FilmshelfApi::new(
            InMemoryAccountStore::new(),
            FilmshelfConfig::default(),
            PathBuf::from("unused"),
        )
    }

    #[test]
    fn login_requires_registered_account() {
        let mut api = api();
        assert!(matches!(
            api.login("u", "p", InMemoryCatalogStore::new()),
            Err(FilmshelfError::Auth(_))
        ));

        api.register("u", "p").unwrap();
        let session = api.login("u", "p", InMemoryCatalogStore::new()).unwrap();
        assert_eq!(session.username(), "u");
    }

    #[test]
    fn session_dispatches_to_catalog() {
        let mut api = api();
        api.register("u", "p").unwrap();
        let mut session = api.login("u", "p", InMemoryCatalogStore::new()).unwrap();

        session.add_movie(MovieDraft::new("Heat", "Mann", 1995, 8.3)).unwrap();
        session.add_movie(MovieDraft::new("Up", "Docter", 2009, 8.3)).unwrap();
        let listed = session.list_movies(Some("mann")).unwrap();
        assert_eq!(listed.listed_movies.len(), 1);

        session.delete_movies(None, &[2]).unwrap();
        assert_eq!(session.catalog().len(), 1);
        assert_eq!(session.catalog().store().saves, 3);
    }

    #[test]
    fn file_backed_session_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut api = FilmshelfApi::open(dir.path()).unwrap();
        api.register("alice", "pw").unwrap();

        {
            let mut session = api.login_files("alice", "pw").unwrap();
            session.add_movie(MovieDraft::new("Heat", "Mann", 1995, 8.3)).unwrap();
        }

        let session = api.login_files("alice", "pw").unwrap();
        assert_eq!(session.catalog().movies()[0].title, "Heat");
        assert!(dir.path().join("movies_alice.txt").exists());
        assert!(api.login_files("alice", "nope").is_err());
    }
}
