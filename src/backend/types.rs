//! Shared types for backend communication

use serde::{Deserialize, Serialize};
use std::fmt;

/// Search strategy. Picks the endpoint and which result fields get shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Vector,
    Traditional,
}

impl SearchMode {
    /// Every selectable mode, in selector order.
    pub const ALL: [SearchMode; 2] = [SearchMode::Vector, SearchMode::Traditional];

    /// Route served by the backend for this mode.
    pub fn endpoint_path(self) -> &'static str {
        match self {
            SearchMode::Vector => "/api/search",
            SearchMode::Traditional => "/api/traditional_search",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchMode::Vector => "Vector Search",
            SearchMode::Traditional => "Traditional Search",
        })
    }
}

/// Request body shared by both search endpoints.
#[derive(Debug, Serialize)]
pub struct SearchQuery<'a> {
    pub query: &'a str,
}

/// One expert profile match returned by the backend.
///
/// Field names mirror the backend's JSON casing. Every field is defaulted:
/// the backend omits fields per mode (vector responses carry `Similarity` and
/// `Explanation`, traditional ones `Profile_Chunk`) and a missing field must
/// never fail the parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "Label", default)]
    pub label: String,
    #[serde(rename = "URL", default)]
    pub url: Option<String>,
    #[serde(rename = "Similarity", default)]
    pub similarity: Option<f64>,
    #[serde(rename = "Explanation", default)]
    pub explanation: Option<String>,
    #[serde(rename = "Profile_Chunk", default)]
    pub profile_chunk: Option<String>,
}

/// Response from the backend's `/health` route.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vector_result_parses_all_fields() {
        let body = json!({
            "Name": "Ada",
            "Category": "CS",
            "Label": "Pioneer",
            "URL": "https://example.com/ada",
            "Similarity": 0.873,
            "Explanation": "Strong overlap with the query."
        });

        let result: SearchResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.name, "Ada");
        assert_eq!(result.category, "CS");
        assert_eq!(result.label, "Pioneer");
        assert_eq!(result.url.as_deref(), Some("https://example.com/ada"));
        assert_eq!(result.similarity, Some(0.873));
        assert_eq!(
            result.explanation.as_deref(),
            Some("Strong overlap with the query.")
        );
        assert_eq!(result.profile_chunk, None);
    }

    #[test]
    fn test_traditional_result_defaults_missing_fields() {
        let body = json!({ "Name": "Bob", "Profile_Chunk": "Works in ops" });

        let result: SearchResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.name, "Bob");
        assert_eq!(result.category, "");
        assert_eq!(result.label, "");
        assert_eq!(result.url, None);
        assert_eq!(result.similarity, None);
        assert_eq!(result.profile_chunk.as_deref(), Some("Works in ops"));
    }

    #[test]
    fn test_empty_object_parses_to_defaults() {
        let result: SearchResult = serde_json::from_value(json!({})).unwrap();
        assert_eq!(result.name, "");
        assert!(result.url.is_none());
        assert!(result.similarity.is_none());
        assert!(result.explanation.is_none());
        assert!(result.profile_chunk.is_none());
    }

    #[test]
    fn test_null_optionals_parse_as_absent() {
        let body = json!({ "Name": "Eve", "Similarity": null, "URL": null });

        let result: SearchResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.similarity, None);
        assert_eq!(result.url, None);
    }

    #[test]
    fn test_search_query_wire_shape() {
        let body = serde_json::to_value(SearchQuery { query: "rust experts" }).unwrap();
        assert_eq!(body, json!({ "query": "rust experts" }));
    }

    #[test]
    fn test_mode_maps_to_endpoint() {
        assert_eq!(SearchMode::Vector.endpoint_path(), "/api/search");
        assert_eq!(
            SearchMode::Traditional.endpoint_path(),
            "/api/traditional_search"
        );
    }

    #[test]
    fn test_mode_defaults_to_vector() {
        assert_eq!(SearchMode::default(), SearchMode::Vector);
    }

    #[test]
    fn test_mode_selector_labels() {
        assert_eq!(SearchMode::Vector.to_string(), "Vector Search");
        assert_eq!(SearchMode::Traditional.to_string(), "Traditional Search");
    }
}
