use crate::catalog::FilteredCatalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::report;
use crate::store::CatalogStore;
use std::path::Path;

/// Write the grouped report for the whole catalog, ignoring any filter.
pub fn run<S: CatalogStore>(catalog: &FilteredCatalog<S>, title: &str, output: &Path) -> Result<CmdResult> {
    let snapshot = catalog.snapshot();
    report::write_report(&snapshot, title, output)?;

    let mut result = CmdResult::default();
    if snapshot.is_empty() {
        result.add_message(CmdMessage::info("Catalog is empty; report has no entries."));
    }
    result.add_message(CmdMessage::success(format!(
        "Report written to {}",
        output.display()
    )));
    Ok(result.with_report_path(output.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::sample_catalog;
    use tempfile::TempDir;

    #[test]
    fn report_covers_whole_catalog_despite_filter() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.txt");
        let mut catalog = sample_catalog();
        catalog.set_filter("nolan");

        let result = run(&catalog, report::DEFAULT_TITLE, &output).unwrap();
        assert_eq!(result.report_path.as_deref(), Some(output.as_path()));

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.contains("CATEGORY: Sci-Fi"));
        assert!(text.contains("CATEGORY: Animation"));
    }
}
