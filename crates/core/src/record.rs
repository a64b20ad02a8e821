//! The disease record held by the catalogue.

use crate::constants::{AYURVEDA_NAME_COLUMN, NAME_COLUMN};
use serde::ser::SerializeMap;

/// One row of the prepared disease table.
///
/// `name` and `ayurveda_name` are the two search keys. Every other column of the source file
/// is carried through untouched in `extra`, in file order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiseaseRecord {
    pub name: String,
    pub ayurveda_name: String,
    pub extra: Vec<(String, String)>,
}

impl DiseaseRecord {
    pub fn new(name: impl Into<String>, ayurveda_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ayurveda_name: ayurveda_name.into(),
            extra: Vec::new(),
        }
    }

    /// Adds an extra column value.
    pub fn with_column(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((column.into(), value.into()));
        self
    }

    /// Looks up a column by its header, including the two key columns.
    pub fn get(&self, column: &str) -> Option<&str> {
        match column {
            NAME_COLUMN => Some(&self.name),
            AYURVEDA_NAME_COLUMN => Some(&self.ayurveda_name),
            _ => self
                .extra
                .iter()
                .find(|(c, _)| c == column)
                .map(|(_, v)| v.as_str()),
        }
    }

    /// True when the lowercased term is a substring of the name (compared lowercased) or of
    /// the stored Ayurveda name (compared as stored).
    pub fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term) || self.ayurveda_name.contains(term)
    }
}

impl serde::Serialize for DiseaseRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(2 + self.extra.len()))?;
        map.serialize_entry(NAME_COLUMN, &self.name)?;
        map.serialize_entry(AYURVEDA_NAME_COLUMN, &self.ayurveda_name)?;
        for (column, value) in &self.extra {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialises_source_column_names_in_order() {
        let record = DiseaseRecord::new("Diabetes Mellitus", "madhumeha")
            .with_column("namaste", "NAM-DM-001");

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Diabetes Mellitus","Ayurveda_Name":"madhumeha","namaste":"NAM-DM-001"}"#
        );
    }

    #[test]
    fn test_get_covers_key_and_extra_columns() {
        let record = DiseaseRecord::new("Asthma", "tamaka shwasa").with_column("namaste", "1234");
        assert_eq!(record.get("name"), Some("Asthma"));
        assert_eq!(record.get("Ayurveda_Name"), Some("tamaka shwasa"));
        assert_eq!(record.get("namaste"), Some("1234"));
        assert_eq!(record.get("icd11"), None);
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let record = DiseaseRecord::new("Hypertension", "raktagata vata");
        assert!(record.matches("hyper"));
        assert!(record.matches("gata"));
        assert!(!record.matches("asthma"));
    }
}
