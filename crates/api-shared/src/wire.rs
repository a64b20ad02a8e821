//! JSON bodies returned by the REST API.
//!
//! Field names are part of the public contract: `results`, `error` and `response` are the
//! keys clients read.

use namaste_core::DiseaseRecord;
use serde::Serialize;
use utoipa::{IntoParams, ToSchema};

/// Error message for a search without a query.
pub const QUERY_REQUIRED: &str = "Query parameter required";

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Matching disease records, in catalogue order.
///
/// Each record is a flat object keyed by the data file's column headers, always including
/// `name` and `Ayurveda_Name`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchRes {
    #[schema(value_type = Vec<Object>)]
    pub results: Vec<DiseaseRecord>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

impl ErrorRes {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn query_required() -> Self {
        Self::new(QUERY_REQUIRED)
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChatbotRes {
    pub response: String,
}

/// Query string of `GET /api/search`.
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Text matched against disease and Ayurveda names
    pub q: Option<String>,
}

impl SearchParams {
    /// Build from raw query pairs; a repeated `q` keeps its first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            q: first_value(pairs, "q"),
        }
    }
}

/// Query string of `GET /api/chatbot`.
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ChatbotParams {
    /// Free-text message; absent is treated as empty
    pub message: Option<String>,
}

impl ChatbotParams {
    /// Build from raw query pairs; a repeated `message` keeps its first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            message: first_value(pairs, "message"),
        }
    }
}

fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_res_shape() {
        let json = serde_json::to_value(ErrorRes::query_required()).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Query parameter required"}));
    }

    #[test]
    fn test_search_res_shape() {
        let res = SearchRes {
            results: vec![DiseaseRecord::new("Asthma", "tamaka shwasa").with_column("namaste", "1234")],
        };
        let json = serde_json::to_value(res).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"results": [{"name": "Asthma", "Ayurveda_Name": "tamaka shwasa", "namaste": "1234"}]})
        );
    }

    #[test]
    fn test_empty_search_res_shape() {
        let json = serde_json::to_value(SearchRes { results: vec![] }).unwrap();
        assert_eq!(json, serde_json::json!({"results": []}));
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_params_from_pairs_take_first_repeated_value() {
        let raw = pairs(&[("q", "vata"), ("q", "x"), ("message", "diabetes"), ("message", "x")]);
        assert_eq!(SearchParams::from_pairs(&raw).q.as_deref(), Some("vata"));
        assert_eq!(
            ChatbotParams::from_pairs(&raw).message.as_deref(),
            Some("diabetes")
        );
    }

    #[test]
    fn test_params_from_pairs_missing_key_is_none() {
        let raw = pairs(&[("other", "1")]);
        assert_eq!(SearchParams::from_pairs(&raw).q, None);
        assert_eq!(ChatbotParams::from_pairs(&raw).message, None);
    }
}
