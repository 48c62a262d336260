use super::{AccountLoad, AccountStore, CatalogLoad, CatalogStore};
use crate::codec;
use crate::error::{FilmshelfError, Result};
use crate::model::{Movie, User};
use log::{debug, error, info, warn};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const CREDENTIALS_FILENAME: &str = "credentials.txt";
pub const DEFAULT_CATALOG_EXT: &str = ".txt";

/// Usernames become part of a path; anything that would leave the base
/// directory is refused.
pub fn catalog_filename(username: &str, ext: &str) -> Result<String> {
    let name = format!("movies_{}{}", username, ext);
    if name.contains(['/', '\\', '\0']) {
        return Err(FilmshelfError::Store(format!(
            "'{}' cannot be used as a catalog file name",
            name
        )));
    }
    Ok(name)
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(FilmshelfError::Io)?;
    }
    Ok(())
}

/// Make sure `path` exists, creating its directory and an empty file if needed.
fn ensure_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, "").map_err(FilmshelfError::Io)?;
    Ok(true)
}

/// Read the non-blank lines of a record file, creating it when missing.
///
/// Any I/O failure is logged and reported as an empty file.
fn read_record_lines(path: &Path) -> Vec<String> {
    match ensure_file(path) {
        Ok(true) => {
            debug!("created empty record file {}", path.display());
            return Vec::new();
        }
        Ok(false) => {}
        Err(e) => {
            error!("cannot create {}: {}", path.display(), e);
            return Vec::new();
        }
    }

    match fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect(),
        Err(e) => {
            error!("cannot read {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Account registry backed by a single append-only text file.
pub struct FileAccountStore {
    path: PathBuf,
}

impl FileAccountStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            path: base_dir.as_ref().join(CREDENTIALS_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AccountStore for FileAccountStore {
    fn load_users(&self) -> AccountLoad {
        let mut load = AccountLoad::default();
        for line in read_record_lines(&self.path) {
            match codec::decode_user(&line) {
                Ok(user) => load.users.push(user),
                Err(e) => {
                    debug!("skipping credential line: {}", e);
                    load.skipped += 1;
                }
            }
        }
        load
    }

    fn append_user(&mut self, user: &User) -> Result<()> {
        let line = codec::encode_user(user)?;
        ensure_file(&self.path)?;

        // A hand-edited file may lack the final newline
        let needs_newline = fs::read(&self.path)
            .map_err(FilmshelfError::Io)?
            .last()
            .is_some_and(|b| *b != b'\n');

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(FilmshelfError::Io)?;
        if needs_newline {
            writeln!(file).map_err(FilmshelfError::Io)?;
        }
        writeln!(file, "{}", line).map_err(FilmshelfError::Io)?;
        Ok(())
    }
}

/// One user's catalog, stored as `movies_<username><ext>` under the base dir.
pub struct FileCatalogStore {
    path: PathBuf,
}

impl FileCatalogStore {
    pub fn new(base_dir: impl AsRef<Path>, username: &str) -> Result<Self> {
        Self::with_ext(base_dir, username, DEFAULT_CATALOG_EXT)
    }

    pub fn with_ext(base_dir: impl AsRef<Path>, username: &str, ext: &str) -> Result<Self> {
        Ok(Self {
            path: base_dir.as_ref().join(catalog_filename(username, ext)?),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomic(&self, content: &str) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| FilmshelfError::Store(format!("no parent for {}", self.path.display())))?;
        ensure_dir(dir)?;

        let tmp_file = dir.join(format!(".movies-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(FilmshelfError::Io(e));
        }
        fs::rename(&tmp_file, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_file);
            FilmshelfError::Io(e)
        })
    }
}

impl CatalogStore for FileCatalogStore {
    fn load_all(&self) -> CatalogLoad {
        let mut load = CatalogLoad::default();
        for (n, line) in read_record_lines(&self.path).iter().enumerate() {
            match codec::decode_movie(line) {
                Ok(movie) => load.movies.push(movie),
                Err(e) => {
                    warn!("{}: discarding record {}: {}", self.path.display(), n + 1, e);
                    load.skipped += 1;
                }
            }
        }
        load
    }

    fn save_all(&mut self, movies: &[Movie]) -> Result<()> {
        let mut content = String::new();
        for movie in movies {
            content.push_str(&codec::encode_movie(movie)?);
            content.push('\n');
        }

        self.write_atomic(&content).inspect_err(|e| {
            error!("failed to save {}: {}", self.path.display(), e);
        })?;
        info!("saved {} movies to {}", movies.len(), self.path.display());
        Ok(())
    }
}
