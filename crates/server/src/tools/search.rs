//! search tool implementation.
//!
//! Queries Everything's HTTP server and returns the matches as plain text.

use everything_client::everything::DEFAULT_MAX_RESULTS;
use everything_client::{EverythingClient, EverythingError, SearchRequest, SortBy, render_results};
use everything_core::Error;
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input parameters for the search tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Search query (required). Accepts Everything syntax, e.g. `*.txt` or `report ext:pdf`.
    pub query: String,

    /// Path prefix to search under (default "C:"). An empty string searches every indexed volume.
    #[serde(default)]
    pub scope: Option<String>,

    /// Match case (default false).
    #[serde(default)]
    pub case_sensitive: Option<bool>,

    /// Match whole words only (default false).
    #[serde(default)]
    pub whole_word: Option<bool>,

    /// Treat the query as a regular expression (default false).
    #[serde(default)]
    pub regex: Option<bool>,

    /// Match against full paths instead of file names (default false).
    #[serde(default)]
    pub path: Option<bool>,

    /// Maximum number of results (1-1000, default 100).
    #[serde(default)]
    pub max_results: Option<i64>,

    /// Sort column: name (default), path, size, date_modified.
    #[serde(default)]
    pub sort_by: Option<String>,

    /// Sort ascending (default true).
    #[serde(default)]
    pub ascending: Option<bool>,

    /// Number of results to skip (default 0).
    #[serde(default)]
    pub offset: Option<i64>,
}

impl SearchParams {
    /// Apply defaults and validate, producing the request sent to Everything.
    pub fn into_request(self, default_scope: &str) -> Result<SearchRequest, EverythingError> {
        let max_results = match self.max_results {
            Some(n) => u32::try_from(n).map_err(|_| EverythingError::InvalidMaxResults(n))?,
            None => DEFAULT_MAX_RESULTS,
        };

        let offset = match self.offset {
            Some(n) => u64::try_from(n).map_err(|_| EverythingError::InvalidOffset(n))?,
            None => 0,
        };

        let sort_by = self
            .sort_by
            .as_deref()
            .map(str::parse::<SortBy>)
            .transpose()?
            .unwrap_or_default();

        let req = SearchRequest {
            query: self.query,
            scope: self.scope.unwrap_or_else(|| default_scope.to_string()),
            case_sensitive: self.case_sensitive.unwrap_or(false),
            whole_word: self.whole_word.unwrap_or(false),
            regex: self.regex.unwrap_or(false),
            path: self.path.unwrap_or(false),
            max_results,
            sort_by,
            ascending: self.ascending.unwrap_or(true),
            offset,
        };

        req.validate()?;

        Ok(req)
    }
}

/// Implementation of the search tool.
pub async fn search_impl(client: &EverythingClient, params: SearchParams) -> Result<CallToolResult, McpError> {
    let req = params
        .into_request(client.default_scope())
        .map_err(classify)?;

    let response = client.search(&req).await.map_err(classify)?;

    Ok(CallToolResult::success(vec![Content::text(render_results(&response))]))
}

/// Map client failures onto the tool's error taxonomy.
fn classify(err: EverythingError) -> Error {
    match err {
        e if e.is_validation() => Error::Validation(e.to_string()),
        e @ EverythingError::Unavailable { .. } => Error::Unavailable(e.to_string()),
        EverythingError::Timeout(after) => Error::Timeout(format!("no response within {}ms", after.as_millis())),
        EverythingError::InvalidResponse(_) => Error::Protocol("invalid response shape".into()),
        EverythingError::HttpError { status } => Error::ExternalService(format!("HTTP {}", status)),
        e => Error::ExternalService(e.to_string()),
    }
}
