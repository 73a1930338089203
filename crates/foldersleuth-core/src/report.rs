/// Scan report export.
///
/// The JSON report is `{ "summary": { totalFiles, totalSize, timestamp },
/// "files": [...] }`, pretty-printed with two-space indentation. The CSV
/// export is one row per record with the same camelCase column names.
use crate::error::ReportError;
use crate::model::file_record::rfc3339_millis;
use crate::model::FileRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_files: usize,
    pub total_size: u64,
    /// ISO 8601 UTC time the report was generated.
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ScanReport<'a> {
    pub summary: ReportSummary,
    pub files: &'a [FileRecord],
}

impl<'a> ScanReport<'a> {
    pub fn new(records: &'a [FileRecord], generated_at: DateTime<Utc>) -> Self {
        Self {
            summary: ReportSummary {
                total_files: records.len(),
                total_size: records.iter().map(|r| r.size_bytes).sum(),
                timestamp: rfc3339_millis(&generated_at),
            },
            files: records,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the pretty JSON report to `path`, replacing any existing file.
    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        let mut out = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut out, self)?;
        out.flush()?;
        info!(
            "Wrote JSON report ({} files) to {}",
            self.summary.total_files,
            path.display()
        );
        Ok(())
    }
}

/// `scan_report_<epoch-millis>.json`
pub fn default_file_name(now: DateTime<Utc>) -> String {
    format!("scan_report_{}.json", now.timestamp_millis())
}

/// `scan_report_<epoch-millis>.csv`
pub fn default_csv_file_name(now: DateTime<Utc>) -> String {
    format!("scan_report_{}.csv", now.timestamp_millis())
}

/// Serialise `records` as CSV into any writer, header row first.
pub fn write_csv_to<W: Write>(records: &[FileRecord], writer: W) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `records` as CSV to `path`, replacing any existing file.
pub fn write_csv(records: &[FileRecord], path: &Path) -> Result<(), ReportError> {
    write_csv_to(records, File::create(path)?)?;
    info!("Wrote CSV export ({} rows) to {}", records.len(), path.display());
    Ok(())
}
