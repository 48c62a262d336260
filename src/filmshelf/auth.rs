//! # Credential Store
//!
//! Accounts are re-read from the backing [`AccountStore`] on every call, so a
//! registration made by another instance is visible to the next
//! `authenticate` or `register`.
//!
//! Passwords are stored in plain text unless [`CredentialStore::with_hashing`]
//! is enabled, in which case new registrations store a bcrypt hash.
//! Authentication accepts both forms so a registry can hold a mix of old and
//! new entries.
//!
//! Uniqueness is checked only at registration time and only within this
//! process: two processes registering the same name at the same moment can
//! both succeed.

use crate::codec;
use crate::error::Result;
use crate::model::User;
use crate::store::AccountStore;
use log::{debug, info};

pub struct CredentialStore<S: AccountStore> {
    store: S,
    hash_passwords: bool,
}

impl<S: AccountStore> CredentialStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            hash_passwords: false,
        }
    }

    pub fn with_hashing(mut self, enabled: bool) -> Self {
        self.hash_passwords = enabled;
        self
    }

    pub fn load_all(&self) -> Vec<User> {
        let load = self.store.load_users();
        if load.skipped > 0 {
            debug!("skipped {} malformed credential lines", load.skipped);
        }
        load.users
    }

    /// True iff some stored account matches both username and password exactly.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.load_all()
            .iter()
            .any(|user| user.username == username && password_matches(password, &user.password))
    }

    /// Add a new account. Returns `Ok(false)` without writing if the username
    /// is already taken.
    ///
    /// Credentials that cannot be stored as a single record are refused with
    /// [`crate::error::FilmshelfError::Encode`] before anything is written.
    pub fn register(&mut self, username: &str, password: &str) -> Result<bool> {
        codec::check_field("username", username)?;
        codec::check_field("password", password)?;
        if self.load_all().iter().any(|user| user.username == username) {
            debug!("registration refused, '{}' already exists", username);
            return Ok(false);
        }

        let stored = if self.hash_passwords {
            bcrypt::hash(password, bcrypt::DEFAULT_COST)?
        } else {
            password.to_string()
        };
        self.store.append_user(&User::new(username, stored))?;
        info!("registered user '{}'", username);
        Ok(true)
    }
}

fn looks_like_bcrypt(stored: &str) -> bool {
    stored.len() == 60 && ["$2a$", "$2b$", "$2y$"].iter().any(|p| stored.starts_with(p))
}

/// Compare a login attempt with a stored password, plaintext or bcrypt.
pub fn password_matches(attempt: &str, stored: &str) -> bool {
    if looks_like_bcrypt(stored) {
        return bcrypt::verify(attempt, stored).unwrap_or(false);
    }
    attempt == stored
}
