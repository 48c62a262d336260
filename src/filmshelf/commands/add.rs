use crate::catalog::FilteredCatalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MovieDraft;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(catalog: &mut FilteredCatalog<S>, draft: MovieDraft) -> Result<CmdResult> {
    catalog.add(draft)?;

    let mut result = CmdResult::default();
    if let Some(movie) = catalog.movies().last() {
        result.add_message(CmdMessage::success(format!(
            "Movie added: {} ({})",
            movie.title, movie.release_year
        )));
        result.affected_movies.push(movie.clone());
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::sample_catalog;
    use crate::error::FilmshelfError;
    use crate::validation::ValidationError;

    #[test]
    fn adds_and_reports_movie() {
        let mut catalog = sample_catalog();
        let result = run(&mut catalog, MovieDraft::new("Heat", "Mann", 1995, 8.3)).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(result.affected_movies[0].title, "Heat");
    }

    #[test]
    fn validation_errors_pass_through() {
        let mut catalog = sample_catalog();
        let err = run(&mut catalog, MovieDraft::new("", "Mann", 1995, 8.3)).unwrap_err();
        assert!(matches!(err, FilmshelfError::Validation(ValidationError::EmptyTitle)));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn delimiter_in_fields_is_refused() {
        let mut catalog = sample_catalog();
        let draft = MovieDraft::new("Heat", "Mann", 1995, 8.3).with_categories("Crime,Drama");
        assert!(matches!(run(&mut catalog, draft), Err(FilmshelfError::Encode(_))));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn line_breaks_in_fields_are_refused() {
        let mut catalog = sample_catalog();
        let drafts = [
            MovieDraft::new("Two\nLines", "Mann", 1995, 8.3),
            MovieDraft::new("Heat", "Mann\r", 1995, 8.3),
            MovieDraft::new("Heat", "Mann", 1995, 8.3).with_media_path("/m\n"),
            MovieDraft::new("Heat", "Mann", 1995, 8.3).with_external_id("tt1\ntt2"),
        ];
        for draft in drafts {
            assert!(matches!(run(&mut catalog, draft), Err(FilmshelfError::Encode(_))));
        }
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.store().movies.len(), 2);
    }
}
