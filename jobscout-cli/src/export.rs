//! File exporters, selected by output path extension.
use jobscout_common::JobListing;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported output format '{0}'; use a .json or .csv path")]
    UnsupportedExtension(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// Infer the format from the path's extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(ExportError::UnsupportedExtension(other.to_string())),
        }
    }
}

/// Write the listings to `path` in the format its extension selects.
pub fn write_output(jobs: &[JobListing], path: &Path) -> Result<(), ExportError> {
    match ExportFormat::from_path(path)? {
        ExportFormat::Json => write_json(jobs, path),
        ExportFormat::Csv => write_csv(jobs, path),
    }
}

fn write_json(jobs: &[JobListing], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, jobs)?;
    Ok(())
}

/// Column order matches `JobListing`'s field order, which `serialize` below
/// also follows.
const CSV_HEADERS: [&str; 6] = [
    "title",
    "company",
    "location",
    "posted_at",
    "description",
    "url",
];

fn write_csv(jobs: &[JobListing], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    // `serialize` only emits headers alongside the first record, so an empty
    // result set still needs the header row written by hand.
    if jobs.is_empty() {
        writer.write_record(CSV_HEADERS)?;
    }
    for job in jobs {
        writer.serialize(job)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_format_from_extension() {
        assert_eq!(
            ExportFormat::from_path(Path::new("jobs.json")).unwrap(),
            ExportFormat::Json
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("out/JOBS.CSV")).unwrap(),
            ExportFormat::Csv
        );
    }

    #[test]
    fn rejects_unknown_and_missing_extensions() {
        assert!(matches!(
            ExportFormat::from_path(Path::new("jobs.xlsx")),
            Err(ExportError::UnsupportedExtension(ext)) if ext == "xlsx"
        ));
        assert!(ExportFormat::from_path(Path::new("jobs")).is_err());
    }
}
