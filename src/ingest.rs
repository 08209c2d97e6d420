// =============================================================================
// CSV ingestion: trending-video exports into the record store
// =============================================================================

use std::ffi::OsStr;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use walkdir::WalkDir;

use crate::config::CsvLayout;
use crate::error::{AnalyzerError, Result, RowError};
use crate::record::{RecordStore, VideoRecord};

/// How many records one CSV file contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub file_name: String,
    pub records: usize,
}

#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub store: RecordStore,
    pub datasets: Vec<DatasetSummary>,
}

fn parse_count(row: &StringRecord, column: usize, field: &'static str) -> std::result::Result<f64, RowError> {
    let raw = row.get(column).unwrap_or_default();
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(RowError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Split the delimited tag field
/// Role: Strip embedded quotes, drop empty tokens, keep order
pub fn split_tags(field: &str, delimiter: char) -> Vec<String> {
    field
        .split(delimiter)
        .map(|token| token.replace('"', ""))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Convert one CSV row into a record
pub fn parse_row(row: &StringRecord, layout: &CsvLayout) -> std::result::Result<VideoRecord, RowError> {
    if row.len() < layout.min_fields {
        return Err(RowError::TooFewFields {
            expected: layout.min_fields,
            actual: row.len(),
        });
    }

    let views = parse_count(row, layout.views_column, "views")?;
    let likes = parse_count(row, layout.likes_column, "likes")?;
    let title = row.get(layout.title_column).unwrap_or_default();
    let tags = split_tags(
        row.get(layout.tags_column).unwrap_or_default(),
        layout.tag_delimiter,
    );

    Ok(VideoRecord::new(title, tags, views, likes))
}

/// Read records from any CSV source with a header line
/// Role: Skip malformed rows, fail only on I/O errors
pub fn read_records<R: io::Read>(source: R, layout: &CsvLayout) -> Result<Vec<VideoRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    let mut records = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                log::debug!("Skipping row {}: {err}", index + 1);
                continue;
            }
        };

        match parse_row(&row, layout) {
            Ok(record) => records.push(record),
            Err(err) => log::debug!("Skipping row {}: {err}", index + 1),
        }
    }

    Ok(records)
}

/// Load a single CSV file
pub fn load_dataset(path: &Path, layout: &CsvLayout) -> Result<Vec<VideoRecord>> {
    let file = std::fs::File::open(path)?;
    read_records(io::BufReader::new(file), layout)
}

/// Load and combine every `*.csv` file directly inside `dir`
/// Role: Visit files in name order; unreadable files contribute nothing
pub fn load_data_dir(dir: &Path, layout: &CsvLayout) -> Result<LoadOutcome> {
    if !dir.is_dir() {
        return Err(AnalyzerError::DataDirMissing(dir.to_path_buf()));
    }

    let mut all_records = Vec::new();
    let mut datasets = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension() != Some(OsStr::new("csv")) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        log::info!("Loading: {file_name}");
        let records = match load_dataset(path, layout) {
            Ok(records) => records,
            Err(err) => {
                log::warn!("Could not load {}: {err}", path.display());
                Vec::new()
            }
        };
        log::info!("Loaded {} videos from {file_name}", records.len());

        datasets.push(DatasetSummary {
            file_name,
            records: records.len(),
        });
        all_records.extend(records);
    }

    log::info!("Total videos loaded from all datasets: {}", all_records.len());
    Ok(LoadOutcome {
        store: RecordStore::new(all_records),
        datasets,
    })
}
