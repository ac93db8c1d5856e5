//! Everything HTTP server response types and shape validation.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::everything::EverythingError;

/// One entry of Everything's `results` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSearchResult {
    /// Entry kind as reported by Everything (`"file"` or `"folder"`).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
    /// Size in bytes, as decimal text.
    #[serde(default, deserialize_with = "text_or_number", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// FILETIME ticks, as decimal text.
    #[serde(default, deserialize_with = "text_or_number", skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
}

impl RawSearchResult {
    pub fn is_folder(&self) -> bool {
        self.kind.as_deref() == Some("folder")
    }
}

/// Validated search response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResponse {
    /// Total number of matches Everything reported, independent of paging.
    pub total_results: u64,
    /// Entries in the order Everything returned them.
    pub results: Vec<RawSearchResult>,
}

impl SearchResponse {
    /// Parse and validate a raw response body.
    ///
    /// `totalResults` must be a non-negative integer. A missing or null
    /// `results` field is treated as an empty page.
    pub fn parse(body: &str) -> Result<Self, EverythingError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| EverythingError::InvalidResponse(format!("body is not JSON: {e}")))?;

        let total_results = value
            .get("totalResults")
            .and_then(Value::as_u64)
            .ok_or_else(|| EverythingError::InvalidResponse("missing numeric totalResults".into()))?;

        let results = match value.get("results") {
            None | Some(Value::Null) => Vec::new(),
            Some(raw) => Vec::<RawSearchResult>::deserialize(raw)
                .map_err(|e| EverythingError::InvalidResponse(format!("malformed results: {e}")))?,
        };

        Ok(Self { total_results, results })
    }

    /// Get the number of entries on this page.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}

/// Everything reports sizes and dates as strings, but accept plain numbers too.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(de::Error::custom(format!("expected string or number, found {other}"))),
    }
}
