//! # Storage Layer
//!
//! Two record files back the application, both plain text with one record per
//! line (see [`crate::codec`] for the line format):
//!
//! ```text
//! <base_dir>/
//! ├── credentials.txt         # every account, append-only
//! ├── movies_<username>.txt   # one catalog per user, rewritten on every save
//! └── config.json
//! ```
//!
//! Storage sits behind the [`AccountStore`] and [`CatalogStore`] traits so the
//! catalog and auth logic can be tested against [`memory`] stores without
//! touching the filesystem.
//!
//! ## Lenient loading
//!
//! Loading never fails. A missing file is created empty, an unreadable one is
//! logged and treated as empty, and lines that don't decode are skipped. The
//! number of skipped lines is reported back so callers can surface it.
//!
//! ## Full-rewrite saves
//!
//! [`CatalogStore::save_all`] replaces the whole catalog file with the given
//! sequence. It is the only way a catalog is written, so the file can never
//! hold records that are no longer in memory.

use crate::error::Result;
use crate::model::{Movie, User};

pub mod fs;
pub mod memory;

/// Result of reading the account registry.
#[derive(Debug, Default, Clone)]
pub struct AccountLoad {
    pub users: Vec<User>,
    pub skipped: usize,
}

/// Result of reading a catalog file.
#[derive(Debug, Default, Clone)]
pub struct CatalogLoad {
    pub movies: Vec<Movie>,
    pub skipped: usize,
}

/// Persistence for the global account list.
pub trait AccountStore {
    /// Read every account currently stored. Never fails, see module docs.
    fn load_users(&self) -> AccountLoad;

    /// Append one account. Does not check for duplicates.
    fn append_user(&mut self, user: &User) -> Result<()>;
}

/// Persistence for a single user's catalog.
pub trait CatalogStore {
    /// Read the whole catalog in file order. Never fails, see module docs.
    fn load_all(&self) -> CatalogLoad;

    /// Replace the stored catalog with `movies`, preserving their order.
    fn save_all(&mut self, movies: &[Movie]) -> Result<()>;
}
