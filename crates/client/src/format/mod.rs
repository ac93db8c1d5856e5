//! Plain-text rendering of Everything search results.
//!
//! Output is stable for a given response: entries keep Everything's order
//! (sorting is requested upstream via `sort`/`ascending`), and every entry is
//! rendered as a fixed four-line block.
//!
//! ```text
//! Found 2 results:
//!
//! Name: notes.txt
//! Path: C:\Users\dev\Documents
//! Size: 2.00 KB
//! Modified: 1/15/2024, 10:30:00 AM
//!
//! Name: Documents
//! Path: C:\Users\dev
//! Size: (folder)
//! Modified: No date
//! ```

pub mod size;
pub mod time;

pub use size::format_size;
pub use time::{filetime_to_utc, format_filetime, format_filetime_in};

use std::fmt;

use chrono::{Local, TimeZone};

use crate::everything::{RawSearchResult, SearchResponse};

pub const NO_RESULTS: &str = "No results found";

/// Render a single entry, dates in the local time zone.
pub fn format_entry(entry: &RawSearchResult) -> String {
    format_entry_in(entry, &Local)
}

/// Render a single entry, dates in `tz`.
pub fn format_entry_in<Tz>(entry: &RawSearchResult, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!(
        "Name: {}\nPath: {}\nSize: {}\nModified: {}\n",
        entry.name,
        entry.path,
        format_size(entry.size.as_deref(), entry.is_folder()),
        format_filetime_in(entry.date_modified.as_deref(), tz),
    )
}

/// Render a whole response, dates in the local time zone.
pub fn render_results(response: &SearchResponse) -> String {
    render_results_in(response, &Local)
}

/// Render a whole response, dates in `tz`.
///
/// The header reports Everything's `totalResults`, which may exceed the
/// number of entries on this page. A page with no entries renders
/// `No results found` under the header even if the total is non-zero.
pub fn render_results_in<Tz>(response: &SearchResponse, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if response.total_results == 0 && response.results.is_empty() {
        return NO_RESULTS.to_string();
    }

    let body = if response.results.is_empty() {
        NO_RESULTS.to_string()
    } else {
        response
            .results
            .iter()
            .map(|entry| format_entry_in(entry, tz))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!("Found {} results:\n\n{}", response.total_results, body)
}
