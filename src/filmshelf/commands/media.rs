use crate::catalog::FilteredCatalog;
use crate::commands::{resolve_indexes, CmdMessage, CmdResult};
use crate::error::Result;
use crate::media;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(
    catalog: &mut FilteredCatalog<S>,
    search: Option<&str>,
    index: usize,
) -> Result<CmdResult> {
    catalog.set_filter(search.unwrap_or(""));
    let dm = resolve_indexes(catalog, &[index])?.remove(0);
    let files = media::locate(&dm.movie);

    let mut result = CmdResult::default();
    if files.video.is_none() {
        result.add_message(CmdMessage::warning(format!(
            "No video file found for {}",
            dm.movie.title
        )));
    }
    if files.cover.is_none() {
        result.add_message(CmdMessage::info(format!(
            "No cover image found for {}",
            dm.movie.title
        )));
    }
    result.affected_movies.push(dm.movie);
    Ok(result.with_media(files))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::sample_catalog;

    #[test]
    fn movie_without_media_path_warns() {
        let mut catalog = sample_catalog();
        let result = run(&mut catalog, None, 2).unwrap();

        assert_eq!(result.affected_movies[0].title, "Up");
        assert_eq!(result.media, Some(media::MediaFiles::default()));
        assert_eq!(result.messages.len(), 2);
    }
}
