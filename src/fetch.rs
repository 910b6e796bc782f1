//! Reference-image download pipeline.
//!
//! Reads `(identifier, url)` rows from a two-column CSV (header row ignored,
//! short rows tolerated) and downloads each URL into
//! `<dest>/<identifier>.jpg`. Response bytes are written verbatim — the
//! content is trusted to already be a usable image. One timeout is one
//! permanent per-row failure; there are no retries.

use crate::report::BatchReport;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Bound on each GET, connection setup included.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// One catalog item to download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRow {
    /// Used verbatim as the output filename stem.
    pub identifier: String,
    pub url: String,
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("destination folder not found: {0}")]
    DestinationMissing(PathBuf),
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP status {0}")]
    Status(reqwest::StatusCode),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read download rows from a CSV file. The header row is skipped; rows with
/// fewer than two fields are dropped silently and never count toward a
/// batch's total.
pub fn read_rows(path: &Path) -> Result<Vec<DownloadRow>, FetchError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < 2 {
            continue;
        }
        rows.push(DownloadRow {
            identifier: record[0].to_string(),
            url: record[1].to_string(),
        });
    }
    Ok(rows)
}

fn fetch_one(
    client: &reqwest::blocking::Client,
    row: &DownloadRow,
    dest: &Path,
) -> Result<(), FetchError> {
    let response = client.get(&row.url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let bytes = response.bytes()?;
    std::fs::write(dest.join(format!("{}.jpg", row.identifier)), &bytes)?;
    Ok(())
}

/// Download every row into the destination folder, sequentially.
///
/// A missing destination is fatal before any row is attempted. Network
/// errors and non-2xx statuses are per-row failures, recorded with the
/// identifier and URL and surfaced in the report; the batch always runs to
/// completion. `on_progress(done, total)` fires after every row.
pub fn fetch_all(
    rows: &[DownloadRow],
    dest: &Path,
    mut on_progress: impl FnMut(usize, usize),
) -> Result<BatchReport, FetchError> {
    if !dest.is_dir() {
        return Err(FetchError::DestinationMissing(dest.to_path_buf()));
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;

    let total = rows.len();
    let mut report = BatchReport::new(total);

    for (i, row) in rows.iter().enumerate() {
        match fetch_one(&client, row, dest) {
            Ok(()) => report.record_success(),
            Err(e) => report.record_failure(
                format!("{} ({})", row.identifier, row.url),
                e.to_string(),
            ),
        }
        on_progress(i + 1, total);
    }

    Ok(report)
}
