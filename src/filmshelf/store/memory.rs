use super::{AccountLoad, AccountStore, CatalogLoad, CatalogStore};
use crate::error::{FilmshelfError, Result};
use crate::model::{Movie, User};

/// In-memory account registry for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryAccountStore {
    users: Vec<User>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn load_users(&self) -> AccountLoad {
        AccountLoad {
            users: self.users.clone(),
            skipped: 0,
        }
    }

    fn append_user(&mut self, user: &User) -> Result<()> {
        self.users.push(user.clone());
        Ok(())
    }
}

/// In-memory catalog that records every save.
///
/// `fail_writes` makes `save_all` return an error without touching the
/// stored snapshot, to exercise persistence failures.
#[derive(Default)]
pub struct InMemoryCatalogStore {
    pub movies: Vec<Movie>,
    pub saves: usize,
    pub fail_writes: bool,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies,
            ..Self::default()
        }
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn load_all(&self) -> CatalogLoad {
        CatalogLoad {
            movies: self.movies.clone(),
            skipped: 0,
        }
    }

    fn save_all(&mut self, movies: &[Movie]) -> Result<()> {
        if self.fail_writes {
            return Err(FilmshelfError::Store("write rejected".to_string()));
        }
        self.movies = movies.to_vec();
        self.saves += 1;
        Ok(())
    }
}
