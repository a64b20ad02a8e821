//! Offline data preparation.
//!
//! Turns the source spreadsheet into the flat file the lookup service loads at startup:
//!
//! ```text
//! data/final_data.xlsx ──read_table──▶ Table ──prepare_table──▶ Table ──write_table──▶ data/to_show.csv
//! ```
//!
//! `prepare_table` lowercases the Ayurveda name column, cuts each value at the first `" ("`
//! (so `"Vata Vyadhi (cold type)"` becomes `"vata vyadhi"`), and removes the coded
//! identifier column. Any missing column or unreadable input aborts the run.

use crate::constants::{AYURVEDA_NAME_COLUMN, ICD11_COLUMN, QUALIFIER_SEPARATOR};
use crate::{CoreError, CoreResult};
use calamine::Reader;
use std::path::Path;

/// A header row plus string cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn column_index(&self, column: &str) -> CoreResult<usize> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| CoreError::MissingColumn(column.to_string()))
    }

    fn check_shape(&self) -> CoreResult<()> {
        let expected = self.headers.len();
        for (idx, row) in self.rows.iter().enumerate() {
            if row.len() != expected {
                return Err(CoreError::RaggedRow {
                    row: idx + 1,
                    found: row.len(),
                    expected,
                });
            }
        }
        Ok(())
    }
}

/// Column choices for a preparation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrepareOptions {
    pub ayurveda_column: String,
    pub drop_column: String,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            ayurveda_column: AYURVEDA_NAME_COLUMN.into(),
            drop_column: ICD11_COLUMN.into(),
        }
    }
}

/// Outcome of [`prepare`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrepareSummary {
    pub rows: usize,
    pub columns: Vec<String>,
}

/// Lowercase `value` and keep only the part before the first `" ("`.
pub fn normalise_ayurveda_name(value: &str) -> String {
    let lowered = value.to_lowercase();
    match lowered.split_once(QUALIFIER_SEPARATOR) {
        Some((head, _)) => head.to_string(),
        None => lowered,
    }
}

/// Read the source table.
///
/// Spreadsheets (`xlsx`, `xlsm`, `xlsb`, `xls`, `ods`) are read from their first worksheet;
/// `csv` files are read as-is. The first row is the header.
pub fn read_table(path: &Path) -> CoreResult<Table> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => read_spreadsheet(path),
        "csv" => {
            let reader = csv::Reader::from_path(path).map_err(|source| {
                CoreError::DataFileOpen {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            read_csv(reader)
        }
        other => Err(CoreError::UnsupportedSource(other.to_string())),
    }
}

fn read_spreadsheet(path: &Path) -> CoreResult<Table> {
    let mut workbook =
        calamine::open_workbook_auto(path).map_err(|source| CoreError::SpreadsheetOpen {
            path: path.to_path_buf(),
            source,
        })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(CoreError::NoWorksheet)?
        .map_err(|source| CoreError::SpreadsheetOpen {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<_>>());
    let headers = rows.next().unwrap_or_default();
    Ok(Table::new(headers, rows.collect()))
}

fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> CoreResult<Table> {
    let headers = reader
        .headers()
        .map_err(CoreError::CsvRead)?
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|row| {
            row.map(|r| r.iter().map(str::to_string).collect())
                .map_err(CoreError::CsvRead)
        })
        .collect::<CoreResult<Vec<Vec<String>>>>()?;
    Ok(Table::new(headers, rows))
}

/// Normalise the Ayurveda column and drop the coded identifier column.
pub fn prepare_table(table: Table, options: &PrepareOptions) -> CoreResult<Table> {
    table.check_shape()?;
    let ayurveda_idx = table.column_index(&options.ayurveda_column)?;
    let drop_idx = table.column_index(&options.drop_column)?;

    let headers = without(table.headers, drop_idx);
    let rows = table
        .rows
        .into_iter()
        .map(|mut row| {
            row[ayurveda_idx] = normalise_ayurveda_name(&row[ayurveda_idx]);
            without(row, drop_idx)
        })
        .collect();

    Ok(Table::new(headers, rows))
}

fn without(mut cells: Vec<String>, idx: usize) -> Vec<String> {
    cells.remove(idx);
    cells
}

/// Write `table` as comma-delimited text with its header row and no index column.
///
/// The parent directory is created if needed.
pub fn write_table(table: &Table, path: &Path) -> CoreResult<()> {
    table.check_shape()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| CoreError::DirCreation {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(CoreError::CsvWrite)?;
    writer
        .write_record(&table.headers)
        .map_err(CoreError::CsvWrite)?;
    for row in &table.rows {
        writer.write_record(row).map_err(CoreError::CsvWrite)?;
    }
    writer.flush().map_err(CoreError::CsvFlush)?;
    Ok(())
}

/// Run the whole preparation: read `input`, transform, write `output`.
pub fn prepare(
    input: &Path,
    output: &Path,
    options: &PrepareOptions,
) -> CoreResult<PrepareSummary> {
    tracing::info!("preparing {} -> {}", input.display(), output.display());
    let table = prepare_table(read_table(input)?, options)?;
    write_table(&table, output)?;

    let summary = PrepareSummary {
        rows: table.rows.len(),
        columns: table.headers,
    };
    tracing::info!(
        "wrote {} rows with columns {:?} to {}",
        summary.rows,
        summary.columns,
        output.display()
    );
    Ok(summary)
}
