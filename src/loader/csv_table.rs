//! CSV loading for snapshot tables.
//!
//! Two file shapes are supported:
//! - aggregate count tables with `name` and `count` columns
//! - raw name lists (one display name per row) that get left-joined onto counts
//!
//! Unparsable rows are skipped with a warning and recorded in a `LoadReport`.
//! Missing required columns are a schema error and are never guessed.

use super::schema::{CountTable, LoadReport, LoadedTable, SkippedRow, SnapshotSource};
use crate::utils::config::{COUNT_COLUMN, FALLBACK_FILE_PREFIX, MAX_COUNT, NAME_COLUMN};
use crate::utils::error::LoadError;
use csv::{ByteRecord, Reader, ReaderBuilder, Trim};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Raw names read from a name-list file, in file order
#[derive(Debug, Clone)]
pub struct NameList {
    pub names: Vec<String>,
    pub report: LoadReport,
}

/// Load an aggregate count table
///
/// **Public** - main entry point for count files
///
/// If `path` lacks the `name`/`count` columns, the sibling file
/// `parent_<file name>` is tried instead. This matches datasets where
/// `2023.csv` holds raw rows and `parent_2023.csv` holds the aggregates.
///
/// # Errors
/// * `LoadError::Io` - File cannot be opened
/// * `LoadError::Schema` - Neither file has the required columns
pub fn load_count_table(path: impl AsRef<Path>) -> Result<LoadedTable, LoadError> {
    let path = path.as_ref();
    info!("Loading count table: {}", path.display());

    let (reader, headers) = open_reader(path)?;
    if let Some(columns) = count_columns(&headers) {
        return read_count_rows(path, reader, columns);
    }

    let alt_path = fallback_path(path);
    if let Some(alt) = alt_path.as_deref().filter(|p| p.exists()) {
        warn!(
            "{} has no '{}'/'{}' columns, falling back to {}",
            path.display(),
            NAME_COLUMN,
            COUNT_COLUMN,
            alt.display()
        );
        let (reader, headers) = open_reader(alt)?;
        if let Some(columns) = count_columns(&headers) {
            return read_count_rows(alt, reader, columns);
        }
    }

    let tried = match &alt_path {
        Some(alt) => format!("{} or {}", path.display(), alt.display()),
        None => path.display().to_string(),
    };
    Err(LoadError::Schema {
        path: path.to_path_buf(),
        detail: format!(
            "expected columns '{}' and '{}' in {}",
            NAME_COLUMN, COUNT_COLUMN, tried
        ),
    })
}

/// Load a raw name list, keeping the values of `column`
///
/// Blank names are dropped (and counted as skipped).
pub fn load_name_list(path: impl AsRef<Path>, column: &str) -> Result<NameList, LoadError> {
    let path = path.as_ref();
    info!("Loading name list: {}", path.display());

    let (mut reader, headers) = open_reader(path)?;
    let name_idx = column_position(&headers, column).ok_or_else(|| LoadError::Schema {
        path: path.to_path_buf(),
        detail: format!("expected column '{}'", column),
    })?;

    let mut report = LoadReport::new(path);
    let mut names = Vec::new();

    for (i, result) in reader.byte_records().enumerate() {
        let line = i as u64 + 2;
        report.rows_read += 1;

        let record = match next_record(result, line)? {
            Ok(record) => record,
            Err(skip) => {
                skip_row(&mut report, skip);
                continue;
            }
        };

        match field(&record, name_idx) {
            Some(name) => names.push(name),
            None => skip_row(&mut report, SkippedRow::new(line, "blank name")),
        }
    }

    report.rows_kept = names.len();
    debug!(
        "Read {} names from {} ({} skipped)",
        names.len(),
        path.display(),
        report.skipped_count()
    );

    Ok(NameList { names, report })
}

/// Left-join a name list onto a count table
///
/// Every listed name takes its count from `counts`; names with no match
/// resolve to zero. Repeated names collapse to their first occurrence.
/// Zero-count rows are left out of the table, since a zero count cannot be
/// told apart from absence downstream; they are tallied in the report.
pub fn join_names_with_counts(names: &NameList, counts: &CountTable) -> LoadedTable {
    let mut report = names.report.clone();
    report.rows_kept = 0;

    let mut table = CountTable::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut unmatched = 0usize;

    for name in &names.names {
        if !seen.insert(name.as_str()) {
            continue;
        }

        match counts.get(name) {
            Some(count) if count > 0 => table.accumulate(name.as_str(), count),
            Some(_) => report.zero_count_rows += 1,
            None => {
                unmatched += 1;
                report.zero_count_rows += 1;
            }
        }
    }

    report.rows_kept = table.len();
    if unmatched > 0 {
        warn!(
            "{} names in {} have no count and were treated as 0",
            unmatched,
            report.source.display()
        );
    }

    LoadedTable { table, report }
}

/// Load one snapshot from its source files
pub fn load_snapshot(source: &SnapshotSource, name_column: &str) -> Result<LoadedTable, LoadError> {
    let counts = load_count_table(&source.counts)?;
    log_report(&counts.report);

    match &source.names {
        Some(names_path) => {
            let names = load_name_list(names_path, name_column)?;
            let joined = join_names_with_counts(&names, &counts.table);
            log_report(&joined.report);
            Ok(joined)
        }
        None => Ok(counts),
    }
}

/// Read aggregate rows using the resolved column positions
///
/// **Private** - shared by the primary and fallback paths
fn read_count_rows(
    path: &Path,
    mut reader: Reader<File>,
    (name_idx, count_idx): (usize, usize),
) -> Result<LoadedTable, LoadError> {
    let mut report = LoadReport::new(path);
    let mut table = CountTable::new();
    let mut seen_zero: HashSet<String> = HashSet::new();

    for (i, result) in reader.byte_records().enumerate() {
        let line = i as u64 + 2;
        report.rows_read += 1;

        let record = match next_record(result, line)? {
            Ok(record) => record,
            Err(skip) => {
                skip_row(&mut report, skip);
                continue;
            }
        };

        let Some(name) = field(&record, name_idx) else {
            skip_row(&mut report, SkippedRow::new(line, "blank name"));
            continue;
        };

        let count = match parse_count(field(&record, count_idx).as_deref()) {
            Ok(count) => count,
            Err(reason) => {
                skip_row(&mut report, SkippedRow::new(line, reason));
                continue;
            }
        };

        if table.contains(&name) || seen_zero.contains(&name) {
            skip_row(
                &mut report,
                SkippedRow::new(line, format!("duplicate name '{}'", name)),
            );
            continue;
        }

        if count == 0 {
            report.zero_count_rows += 1;
            seen_zero.insert(name);
            continue;
        }

        table.accumulate(name, count);
    }

    report.rows_kept = table.len();
    debug!(
        "Loaded {} rows from {} (total count {})",
        table.len(),
        path.display(),
        table.total()
    );

    Ok(LoadedTable { table, report })
}

/// Parse a count cell
///
/// Accepts plain integers and integral non-negative floats ("12.0"),
/// which is how counts look after a spreadsheet round-trip.
fn parse_count(raw: Option<&str>) -> Result<u64, String> {
    let raw = match raw {
        Some(raw) => raw,
        None => return Err("missing count".to_string()),
    };

    let value = match raw.parse::<u64>() {
        Ok(value) => value,
        Err(_) => match raw.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 && value.fract() == 0.0 => {
                if value >= MAX_COUNT as f64 {
                    return Err(format!("count '{}' exceeds {}", raw, MAX_COUNT));
                }
                value as u64
            }
            _ => return Err(format!("unparsable count '{}'", raw)),
        },
    };

    if value > MAX_COUNT {
        return Err(format!("count '{}' exceeds {}", raw, MAX_COUNT));
    }
    Ok(value)
}

/// Open a CSV file and read its header row
fn open_reader(path: &Path) -> Result<(Reader<File>, Vec<String>), LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let headers = reader
        .byte_headers()?
        .iter()
        .map(|h| decode(h).trim_start_matches('\u{feff}').to_string())
        .collect();

    Ok((reader, headers))
}

/// Unwrap one record; row-level errors become a skip, I/O errors abort
fn next_record(
    result: csv::Result<ByteRecord>,
    line: u64,
) -> Result<Result<ByteRecord, SkippedRow>, LoadError> {
    match result {
        Ok(record) => Ok(Ok(record)),
        Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => Err(e.into()),
        Err(e) => {
            let line = e.position().map(|p| p.line()).unwrap_or(line);
            Ok(Err(SkippedRow::new(line, e.to_string())))
        }
    }
}

fn skip_row(report: &mut LoadReport, skip: SkippedRow) {
    warn!(
        "Skipping {} line {}: {}",
        report.source.display(),
        skip.line,
        skip.reason
    );
    report.skipped.push(skip);
}

fn log_report(report: &LoadReport) {
    info!(
        "{}: {} rows read, {} kept, {} zero-count, {} skipped",
        report.source.display(),
        report.rows_read,
        report.rows_kept,
        report.zero_count_rows,
        report.skipped_count()
    );
}

fn count_columns(headers: &[String]) -> Option<(usize, usize)> {
    Some((
        column_position(headers, NAME_COLUMN)?,
        column_position(headers, COUNT_COLUMN)?,
    ))
}

fn column_position(headers: &[String], column: &str) -> Option<usize> {
    headers.iter().position(|h| h == column)
}

/// Non-blank field value, lossily decoded
fn field(record: &ByteRecord, idx: usize) -> Option<String> {
    record
        .get(idx)
        .map(decode)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn fallback_path(path: &Path) -> Option<PathBuf> {
    let file_name = path.file_name()?.to_str()?;
    Some(path.with_file_name(format!("{}{}", FALLBACK_FILE_PREFIX, file_name)))
}
