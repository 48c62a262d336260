use crate::catalog::FilteredCatalog;
use crate::commands::{indexed_view, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(catalog: &mut FilteredCatalog<S>, search: Option<&str>) -> Result<CmdResult> {
    catalog.set_filter(search.unwrap_or(""));

    let listed = indexed_view(catalog);
    let mut result = CmdResult::default();
    if catalog.skipped_on_load() > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} unreadable records were skipped when loading the catalog",
            catalog.skipped_on_load()
        )));
    }
    Ok(result.with_listed_movies(listed))
}
