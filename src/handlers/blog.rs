use crate::client::{CodeforcesApi, QueryParams};
use crate::format;
use crate::protocol::BlogEntryParams;

use super::{extract_result, render_list, Messages};

pub const COMMENTS: Messages = Messages {
    unavailable: "Unable to fetch blog comments.",
    empty: "No comments found.",
};

pub const ENTRY_UNAVAILABLE: &str = "Unable to fetch blog entry.";

/// Handle a `get_blog_comments` tool call (`blogEntry.comments`).
pub async fn get_blog_comments(api: &CodeforcesApi, params: BlogEntryParams) -> String {
    let query = QueryParams::new().with("blogEntryId", params.blog_entry_id);
    let payload = api.request("blogEntry.comments", &query).await;
    render_list(payload, COMMENTS, None, format::comment)
}

/// Handle a `get_blog_entry` tool call (`blogEntry.view`).
///
/// Single-record endpoint: there is no "not found" text, a missing entry
/// comes back from the API as a failure.
pub async fn get_blog_entry(api: &CodeforcesApi, params: BlogEntryParams) -> String {
    let query = QueryParams::new().with("blogEntryId", params.blog_entry_id);
    let payload = api.request("blogEntry.view", &query).await;
    match extract_result(payload) {
        Some(entry) => format::blog_entry_detail(&entry),
        None => ENTRY_UNAVAILABLE.to_string(),
    }
}
