//! # NAMASTE Core
//!
//! Core logic for the NAMASTE disease lookup service.
//!
//! This crate contains pure data operations:
//! - Loading the prepared disease table into an immutable [`DiseaseCatalogue`]
//! - Substring search over disease and Ayurveda names
//! - The keyword [`Chatbot`] rule table
//! - Offline preparation of the source spreadsheet ([`preparer`])
//!
//! **No API concerns**: HTTP servers and wire types belong in `api-rest` and `api-shared`.

pub mod catalogue;
pub mod chatbot;
pub mod config;
pub mod constants;
pub mod error;
pub mod preparer;
pub mod record;

pub use catalogue::DiseaseCatalogue;
pub use chatbot::{ChatRule, Chatbot};
pub use config::CoreConfig;
pub use constants::*;
pub use error::{CoreError, CoreResult};
pub use namaste_types::{ChatMessage, SearchTerm, TextError};
pub use preparer::{prepare, PrepareOptions, PrepareSummary, Table};
pub use record::DiseaseRecord;
