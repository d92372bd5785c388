//! CSV report writer.

use super::atomic::{calculate_file_size, write_atomically};
use super::tables::ReportTable;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::path::Path;

/// Write a report table to a CSV file
///
/// **Public** - main entry point for CSV output
///
/// The file is replaced atomically; on error any previous file at
/// `output_path` is left untouched.
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::Csv` - CSV encoding error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_table(table: &ReportTable, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    debug!("Writing {} rows to: {}", table.len(), output_path.display());

    write_atomically(output_path, |file| {
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(&table.header)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    })?;

    info!(
        "✓ {} written ({} rows, {} bytes)",
        output_path.display(),
        table.len(),
        calculate_file_size(output_path)
    );

    Ok(())
}
