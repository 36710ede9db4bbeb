use std::collections::HashSet;
use std::path::Path;

use markdown_lexical_engine::ConvertOptions;

use crate::record::PostRecord;
use crate::source::{self, SourceError};

/// Outcome of converting a whole directory of legacy posts.
#[derive(Debug, Default)]
pub struct MigrationReport {
    pub records: Vec<PostRecord>,
    /// Files whose slug was already produced earlier in the run.
    pub skipped: usize,
    /// Files that could not be read.
    pub errors: usize,
}

/// Converts every markdown file in `dir`, oldest name first.
///
/// A file that cannot be read is logged and counted rather than aborting
/// the run. Only a missing or unreadable directory is an error.
pub fn migrate_dir(dir: &Path, opts: &ConvertOptions) -> Result<MigrationReport, SourceError> {
    let files = source::scan_markdown_files(dir)?;
    log::info!("Found {} markdown files in {}", files.len(), dir.display());

    let mut report = MigrationReport::default();
    let mut seen_slugs = HashSet::new();

    for path in files {
        log::info!("Processing {}", path.display());

        let record = match PostRecord::from_path(&path, opts) {
            Ok(record) => record,
            Err(e) => {
                log::error!("Failed to read {}: {e}", path.display());
                report.errors += 1;
                continue;
            }
        };
        log::debug!(
            "title {:?}, slug {:?}, published {}",
            record.meta.title,
            record.meta.slug,
            record.published_at
        );

        if !seen_slugs.insert(record.meta.slug.clone()) {
            log::warn!(
                "Slug {:?} already produced, skipping {}",
                record.meta.slug,
                path.display()
            );
            report.skipped += 1;
            continue;
        }

        report.records.push(record);
    }

    log::info!(
        "Migration complete: {} converted, {} skipped, {} failed",
        report.records.len(),
        report.skipped,
        report.errors
    );
    Ok(report)
}
