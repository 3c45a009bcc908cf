use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use super::error::{PipelineError, Result};
use super::models::{FeatureRow, OUTPUT_COLUMNS};

/// Sibling path the output is staged at before being renamed into place.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Serialize feature rows with a header row and no index column.
pub fn write_features_to<W: Write>(out: W, rows: &[FeatureRow], delimiter: u8) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(out);
    writer.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the feature table to `path`.
///
/// Rows are staged in a sibling `.tmp` file and renamed over `path` once fully
/// flushed, so a failed run never leaves a truncated output behind.
pub fn write_features(path: &Path, rows: &[FeatureRow], delimiter: u8) -> Result<()> {
    let staging = staging_path(path);
    let to_write_error = |source: std::io::Error| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::create(&staging).map_err(to_write_error)?;
    if let Err(e) = write_features_to(file, rows, delimiter) {
        let _ = fs::remove_file(&staging);
        return Err(to_write_error(e.into()));
    }
    if let Err(e) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(to_write_error(e));
    }

    info!("Wrote {} feature row(s) to {}", rows.len(), path.display());
    Ok(())
}
