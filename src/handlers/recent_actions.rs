use crate::client::{CodeforcesApi, QueryParams};
use crate::format;
use crate::protocol::RecentActionsParams;

use super::{clamp_count, render_list, Messages};

/// Upper bound the API accepts for `recentActions?maxCount=`.
pub const MAX_COUNT: i64 = 100;

pub const RECENT_ACTIONS: Messages = Messages {
    unavailable: "Unable to fetch recent actions.",
    empty: "No recent actions found.",
};

/// Handle a `get_recent_actions` tool call (`recentActions`).
pub async fn get_recent_actions(api: &CodeforcesApi, params: RecentActionsParams) -> String {
    let query = QueryParams::new().with("maxCount", clamp_count(params.max_count, MAX_COUNT));
    let payload = api.request("recentActions", &query).await;
    render_list(payload, RECENT_ACTIONS, None, format::recent_action)
}
