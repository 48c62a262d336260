use crate::catalog::FilteredCatalog;
use crate::commands::{resolve_indexes, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

/// Delete the movies at `indexes` in the view produced by `search`.
pub fn run<S: CatalogStore>(
    catalog: &mut FilteredCatalog<S>,
    search: Option<&str>,
    indexes: &[usize],
) -> Result<CmdResult> {
    catalog.set_filter(search.unwrap_or(""));
    let resolved = resolve_indexes(catalog, indexes)?;
    let mut result = CmdResult::default();

    for dm in resolved {
        if catalog.delete(&dm.movie)? {
            result.add_message(CmdMessage::success(format!(
                "Movie deleted ({}): {}",
                dm.index, dm.movie.title
            )));
            result.affected_movies.push(dm.movie);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::sample_catalog;
    use crate::model::MovieDraft;

    #[test]
    fn deletes_by_display_index() {
        let mut catalog = sample_catalog();
        run(&mut catalog, None, &[1]).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.movies()[0].title, "Up");
        assert_eq!(catalog.store().movies.len(), 1);
    }

    #[test]
    fn indexes_refer_to_searched_view() {
        let mut catalog = sample_catalog();
        let result = run(&mut catalog, Some("docter"), &[1]).unwrap();

        assert_eq!(result.affected_movies[0].title, "Up");
        assert_eq!(catalog.movies()[0].title, "Inception");
    }

    #[test]
    fn duplicate_movies_can_both_be_deleted() {
        let mut catalog = sample_catalog();
        catalog.add(MovieDraft::new("Up", "Docter", 2009, 8.3).with_categories("Animation")).unwrap();

        let result = run(&mut catalog, Some("up"), &[1, 2]).unwrap();
        assert_eq!(result.affected_movies.len(), 2);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn repeated_index_deletes_once() {
        let mut catalog = sample_catalog();
        catalog.add(MovieDraft::new("Up", "Docter", 2009, 8.3).with_categories("Animation")).unwrap();

        let result = run(&mut catalog, Some("up"), &[1, 1]).unwrap();
        assert_eq!(result.affected_movies.len(), 1);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.store().movies.len(), 2);
    }

    #[test]
    fn unknown_index_deletes_nothing() {
        let mut catalog = sample_catalog();
        assert!(run(&mut catalog, None, &[1, 9]).is_err());
        assert_eq!(catalog.len(), 2);
    }
}
