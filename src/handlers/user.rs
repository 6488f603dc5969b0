use crate::client::{semicolon_list, CodeforcesApi, QueryParams};
use crate::format;
use crate::protocol::{HandleParams, UserProfilesParams, UserRatedListParams, UserSubmissionsParams};

use super::{render_list, Messages};

pub const RATED_LIST_LIMIT: usize = 50;

pub const PROFILES: Messages = Messages {
    unavailable: "Unable to fetch profiles or no profiles found.",
    empty: "No profiles found.",
};

pub const BLOG_ENTRIES: Messages = Messages {
    unavailable: "Unable to fetch blog entries.",
    empty: "No blog entries found.",
};

pub const RATED_USERS: Messages = Messages {
    unavailable: "Unable to fetch rated users.",
    empty: "No rated users found.",
};

pub const RATING_HISTORY: Messages = Messages {
    unavailable: "Unable to fetch rating history.",
    empty: "No rating history found.",
};

pub const SUBMISSIONS: Messages = Messages {
    unavailable: "Unable to fetch user submissions.",
    empty: "No submissions found.",
};

/// Handle a `get_user_profiles` tool call (`user.info`).
///
/// Handles may be separated by commas or semicolons; the API only takes `;`.
pub async fn get_user_profiles(api: &CodeforcesApi, params: UserProfilesParams) -> String {
    let Some(handles) = semicolon_list(&params.handles) else {
        return PROFILES.empty.to_string();
    };
    let query = QueryParams::new()
        .with("handles", handles)
        .flag("checkHistoricHandles", !params.check_historic_handles, "false");
    let payload = api.request("user.info", &query).await;
    render_list(payload, PROFILES, None, format::profile)
}

/// Handle a `get_user_blog_entries` tool call (`user.blogEntries`).
pub async fn get_user_blog_entries(api: &CodeforcesApi, params: HandleParams) -> String {
    let query = QueryParams::new().with("handle", params.handle.trim());
    let payload = api.request("user.blogEntries", &query).await;
    render_list(payload, BLOG_ENTRIES, None, format::blog_entry)
}

/// Handle a `get_user_rated_list` tool call (`user.ratedList`).
pub async fn get_user_rated_list(api: &CodeforcesApi, params: UserRatedListParams) -> String {
    let query = QueryParams::new()
        .flag("activeOnly", params.active_only, "true")
        .flag("includeRetired", !params.include_retired, "false")
        .with_opt("contestId", params.contest_id.filter(|id| *id != 0));
    let payload = api.request("user.ratedList", &query).await;
    render_list(payload, RATED_USERS, Some(RATED_LIST_LIMIT), format::profile)
}

/// Handle a `get_user_rating_history` tool call (`user.rating`).
pub async fn get_user_rating_history(api: &CodeforcesApi, params: HandleParams) -> String {
    let query = QueryParams::new().with("handle", params.handle.trim());
    let payload = api.request("user.rating", &query).await;
    render_list(payload, RATING_HISTORY, None, format::rating_history_entry)
}

/// Handle a `get_user_submissions` tool call (`user.status`).
pub async fn get_user_submissions(api: &CodeforcesApi, params: UserSubmissionsParams) -> String {
    let query = QueryParams::new()
        .with("handle", params.handle.trim())
        .with("from", params.from_sub.max(1))
        .with("count", params.count.max(1));
    let payload = api.request("user.status", &query).await;
    render_list(payload, SUBMISSIONS, None, format::submission)
}
