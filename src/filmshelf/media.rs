//! Locating the files a movie's media directory holds.
//!
//! Playback and image decoding belong to the front end; this only answers
//! "which file would it open". Directory entries are sorted by name so the
//! answer does not depend on filesystem enumeration order.

use crate::model::Movie;
use std::fs;
use std::path::{Path, PathBuf};

const VIDEO_EXTS: &[&str] = &["mp4"];
const COVER_EXTS: &[&str] = &["jpg", "png"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaFiles {
    pub video: Option<PathBuf>,
    pub cover: Option<PathBuf>,
}

pub fn locate(movie: &Movie) -> MediaFiles {
    if movie.media_path.is_empty() {
        return MediaFiles::default();
    }
    let dir = Path::new(&movie.media_path);
    MediaFiles {
        video: first_with_ext(dir, VIDEO_EXTS),
        cover: first_with_ext(dir, COVER_EXTS),
    }
}

fn has_ext(path: &Path, exts: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| exts.iter().any(|x| e.eq_ignore_ascii_case(x)))
        .unwrap_or(false)
}

fn first_with_ext(dir: &Path, exts: &[&str]) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    let mut matches: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && has_ext(p, exts))
        .collect();
    matches.sort();
    matches.into_iter().next()
}
