//! MCP tool implementations.
//!
//! This module contains all tools exposed by the mcp-everything server.

pub mod search;

