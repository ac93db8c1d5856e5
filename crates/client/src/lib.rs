//! Client code for mcp-everything.
//!
//! This crate provides the Everything HTTP client (request normalization,
//! transport, response validation) and the plain-text result formatter used
//! by the server.

pub mod everything;
pub mod format;

pub use everything::{
    EverythingClient, EverythingConfig, EverythingError, HttpTransport, RawSearchResult, SearchRequest, SearchResponse,
    SortBy, Transport,
};

pub use format::{format_entry, format_filetime, format_size, render_results};
