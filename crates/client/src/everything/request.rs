//! Everything search request types and validation.

use std::fmt;
use std::str::FromStr;

use crate::everything::EverythingError;

/// Largest page size accepted for a single search.
pub const MAX_RESULTS_LIMIT: u32 = 1000;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_MAX_RESULTS: u32 = 100;

/// Scope used when neither the caller nor the configuration provide one.
pub const DEFAULT_SCOPE: &str = "C:";

/// Column Everything sorts results by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    Name,
    Path,
    Size,
    DateModified,
}

impl SortBy {
    /// Value of the `sort` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Name => "name",
            SortBy::Path => "path",
            SortBy::Size => "size",
            SortBy::DateModified => "date_modified",
        }
    }
}

impl FromStr for SortBy {
    type Err = EverythingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortBy::Name),
            "path" => Ok(SortBy::Path),
            "size" => Ok(SortBy::Size),
            "date_modified" => Ok(SortBy::DateModified),
            other => Err(EverythingError::InvalidSort(other.to_string())),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search request parameters for Everything's HTTP server.
///
/// All fields are resolved; defaults are applied by whoever builds the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text Everything query (required).
    pub query: String,
    /// Path prefix joined in front of the query. Empty searches every volume.
    pub scope: String,
    pub case_sensitive: bool,
    pub whole_word: bool,
    pub regex: bool,
    /// Match the query against full paths instead of names.
    pub path: bool,
    /// Page size (1-1000).
    pub max_results: u32,
    pub sort_by: SortBy,
    pub ascending: bool,
    /// Number of results to skip.
    pub offset: u64,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            scope: DEFAULT_SCOPE.to_string(),
            case_sensitive: false,
            whole_word: false,
            regex: false,
            path: false,
            max_results: DEFAULT_MAX_RESULTS,
            sort_by: SortBy::default(),
            ascending: true,
            offset: 0,
        }
    }
}

impl SearchRequest {
    /// Create a request for `query` with every other field at its default.
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), ..Default::default() }
    }

    /// Validate the search request parameters.
    ///
    /// Returns an error if any parameters are out of range or malformed.
    pub fn validate(&self) -> Result<(), EverythingError> {
        if self.query.trim().is_empty() {
            return Err(EverythingError::InvalidQuery("query cannot be empty".to_string()));
        }

        if !(1..=MAX_RESULTS_LIMIT).contains(&self.max_results) {
            return Err(EverythingError::InvalidMaxResults(i64::from(self.max_results)));
        }

        Ok(())
    }

    /// The search term actually sent to Everything.
    ///
    /// A non-empty scope is joined to the query with a `\`, unless the scope
    /// already ends in a path separator.
    pub fn effective_search(&self) -> String {
        let scope = self.scope.trim();
        if scope.is_empty() {
            return self.query.clone();
        }

        if scope.ends_with('\\') || scope.ends_with('/') {
            format!("{}{}", scope, self.query)
        } else {
            format!("{}\\{}", scope, self.query)
        }
    }

    /// Query-string parameters in the order Everything documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("search", self.effective_search()),
            ("json", "1".to_string()),
            ("path_column", "1".to_string()),
            ("size_column", "1".to_string()),
            ("date_modified_column", "1".to_string()),
            ("case", flag(self.case_sensitive)),
            ("wholeword", flag(self.whole_word)),
            ("regex", flag(self.regex)),
            ("path", flag(self.path)),
            ("count", self.max_results.clamp(1, MAX_RESULTS_LIMIT).to_string()),
            ("offset", self.offset.to_string()),
            ("sort", self.sort_by.as_str().to_string()),
            ("ascending", flag(self.ascending)),
        ]
    }
}

fn flag(value: bool) -> String {
    if value { "1".to_string() } else { "0".to_string() }
}
