//! In-memory disease catalogue.
//!
//! The catalogue is built once from the prepared flat file and never changes afterwards.
//! Handlers share it behind an `Arc` and only ever read it, so no locking is involved.

use crate::constants::{AYURVEDA_NAME_COLUMN, NAME_COLUMN};
use crate::record::DiseaseRecord;
use crate::{CoreError, CoreResult};
use namaste_types::SearchTerm;
use std::io::Read;
use std::path::Path;

/// Immutable, ordered collection of disease records.
#[derive(Clone, Debug)]
pub struct DiseaseCatalogue {
    records: Vec<DiseaseRecord>,
}

impl DiseaseCatalogue {
    /// Loads the catalogue from a comma-delimited file with a header row.
    ///
    /// # Errors
    /// Returns an error if:
    /// - the file cannot be opened,
    /// - a row cannot be parsed, or
    /// - the header lacks the `name` or `Ayurveda_Name` column.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let reader = csv::Reader::from_path(path).map_err(|source| CoreError::DataFileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let catalogue = Self::from_csv(reader)?;
        tracing::info!(
            "loaded {} disease records from {}",
            catalogue.len(),
            path.display()
        );
        Ok(catalogue)
    }

    /// Loads the catalogue from any CSV source.
    pub fn from_reader<R: Read>(reader: R) -> CoreResult<Self> {
        Self::from_csv(csv::Reader::from_reader(reader))
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> CoreResult<Self> {
        let headers = reader.headers().map_err(CoreError::CsvRead)?.clone();
        let position = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| CoreError::MissingColumn(column.to_string()))
        };
        let name_idx = position(NAME_COLUMN)?;
        let ayurveda_idx = position(AYURVEDA_NAME_COLUMN)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(CoreError::CsvRead)?;
            let cell = |idx: usize| row.get(idx).unwrap_or_default().to_string();

            let extra = headers
                .iter()
                .enumerate()
                .filter(|(idx, _)| *idx != name_idx && *idx != ayurveda_idx)
                .map(|(idx, header)| (header.to_string(), cell(idx)))
                .collect();

            records.push(DiseaseRecord {
                name: cell(name_idx),
                ayurveda_name: cell(ayurveda_idx),
                extra,
            });
        }

        Ok(Self { records })
    }

    /// Returns every record whose name or Ayurveda name contains the term, in load order.
    pub fn search(&self, term: &SearchTerm) -> Vec<&DiseaseRecord> {
        let needle = term.as_str();
        let results: Vec<&DiseaseRecord> =
            self.records.iter().filter(|r| r.matches(needle)).collect();
        tracing::debug!("search {:?} matched {} records", needle, results.len());
        results
    }

    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
