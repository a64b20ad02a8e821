//! Constants used throughout the core crate.
//!
//! Column names match the headers of the source spreadsheet; paths are relative to the
//! process working directory unless overridden through configuration.

/// Header of the disease name column.
pub const NAME_COLUMN: &str = "name";

/// Header of the Ayurveda name column.
pub const AYURVEDA_NAME_COLUMN: &str = "Ayurveda_Name";

/// Header of the coded identifier column removed during preparation.
pub const ICD11_COLUMN: &str = "icd11";

/// Separator that introduces a parenthetical qualifier in Ayurveda names.
pub const QUALIFIER_SEPARATOR: &str = " (";

/// Default spreadsheet read by the data preparer.
pub const DEFAULT_SOURCE_FILE: &str = "data/final_data.xlsx";

/// Default flat file written by the preparer and loaded by the service.
pub const DEFAULT_DATA_FILE: &str = "data/to_show.csv";

/// Default directory holding the entry page.
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// Default directory served under `/static`.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Filename of the entry page inside the template directory.
pub const INDEX_PAGE_FILENAME: &str = "index.html";

/// Default bind address for the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:5000";

/// Asset subdirectories created under the static directory at startup.
pub const STATIC_SUBDIRS: [&str; 2] = ["css", "js"];
