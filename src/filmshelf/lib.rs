//! # Filmshelf Architecture
//!
//! Filmshelf keeps a private movie catalog per user in plain text files. The
//! library is UI-agnostic: the bundled CLI is one client, but nothing from
//! `api.rs` inward prints, exits, or assumes a terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, formats output, owns stdout/stderr     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Login gate, per-user session, dispatch to commands       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One operation each, returns CmdResult                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - auth: CredentialStore (authenticate / register)          │
//! │  - catalog: FilteredCatalog (authoritative list + filter)   │
//! │  - validation, filter, report, codec                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - AccountStore / CatalogStore traits                       │
//! │  - File stores (production), in-memory stores (testing)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data flow
//!
//! A login re-reads the account file and, on success, loads the user's
//! catalog into a [`catalog::FilteredCatalog`]. Every add is validated first;
//! every add or delete rewrites the whole catalog file before returning.
//! Searches only change the catalog's filter, and the filtered view is
//! recomputed whenever it is read. Reports are built from a snapshot of the
//! unfiltered catalog.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade and sessions
//! - [`commands`]: One module per operation
//! - [`auth`]: Account registry checks
//! - [`catalog`]: The per-session movie list and its live view
//! - [`filter`]: Search predicate
//! - [`validation`]: Rules a movie must pass to enter a catalog
//! - [`report`]: Grouped text report
//! - [`codec`]: Line format of the record files
//! - [`store`]: Storage traits and implementations
//! - [`media`]: Finding video and cover files in a movie's directory
//! - [`config`]: `config.json` and the data directory
//! - [`model`]: `User`, `Movie`, `MovieDraft`
//! - [`error`]: Error types

pub mod api;
pub mod auth;
pub mod catalog;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod media;
pub mod model;
pub mod report;
pub mod store;
pub mod validation;
