use std::io::Write;
use std::path::Path;

use thiserror::Error;

use super::filter::{FilterSpec, FilteredView};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("writing CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("writing '{}': {source}", path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write the view as CSV: a header row in dataset column order, then one
/// row per song. Null cells are written empty.
pub fn write_csv<W: Write>(view: &FilteredView, writer: W) -> Result<(), ExportError> {
    let columns = &view.dataset().columns;
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(columns)?;
    for song in view.iter() {
        out.write_record(columns.iter().map(|c| song.cell(c).to_string()))?;
    }
    out.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// The view as UTF-8 CSV bytes, ready to be offered as a download.
pub fn to_csv_bytes(view: &FilteredView) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    write_csv(view, &mut buf)?;
    Ok(buf)
}

/// Write the view to `path`, replacing any existing file.
pub fn save_csv(view: &FilteredView, path: &Path) -> Result<(), ExportError> {
    let bytes = to_csv_bytes(view)?;
    std::fs::write(path, bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Exported {} songs to {}", view.len(), path.display());
    Ok(())
}

/// Download name embedding the active year range, e.g.
/// `spotify_filtered_2012_2016.csv`.
pub fn export_file_name(prefix: &str, spec: &FilterSpec) -> String {
    format!("{prefix}_{}_{}.csv", spec.year_min, spec.year_max)
}
