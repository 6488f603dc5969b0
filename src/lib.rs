//! MCP server for the Codeforces public API.
//!
//! Exposes fifteen read-only tools (`get_contest_list`, `get_user_profiles`,
//! `get_problemset_problems`, ...) that each make one GET against
//! <https://codeforces.com/api> and return the result as plain text. The
//! server speaks JSON-RPC 2.0 over stdio or over an HTTP listener.

pub mod client;
pub mod config;
pub mod format;
pub mod handlers;
pub mod http;
pub mod protocol;
pub mod server;
pub mod tools;

pub mod schema;
