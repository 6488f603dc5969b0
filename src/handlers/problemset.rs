use crate::client::{semicolon_list, CodeforcesApi, QueryParams};
use crate::format;
use crate::protocol::{ProblemsetProblemsParams, ProblemsetRecentStatusParams};

use super::{clamp_count, extract_result, render_items, render_list, Messages};

pub const PROBLEMS_LIMIT: usize = 50;

/// Upper bound the API accepts for `problemset.recentStatus?count=`.
pub const RECENT_STATUS_MAX: i64 = 1000;

pub const PROBLEMS: Messages = Messages {
    unavailable: "Unable to fetch problems.",
    empty: "No problems found.",
};

pub const RECENT_SUBMISSIONS: Messages = Messages {
    unavailable: "Unable to fetch recent submissions.",
    empty: "No submissions found.",
};

/// Handle a `get_problemset_problems` tool call (`problemset.problems`).
pub async fn get_problemset_problems(
    api: &CodeforcesApi,
    params: ProblemsetProblemsParams,
) -> String {
    let query = QueryParams::new()
        .with_opt("tags", params.tags.as_deref().and_then(semicolon_list))
        .with_opt(
            "problemsetName",
            params.problemset_name.filter(|n| !n.trim().is_empty()),
        );
    let payload = api.request("problemset.problems", &query).await;
    match extract_result(payload) {
        Some(result) => {
            let problems = result.get("problems").cloned().unwrap_or_default();
            render_items(&problems, PROBLEMS.empty, Some(PROBLEMS_LIMIT), format::problem)
        }
        None => PROBLEMS.unavailable.to_string(),
    }
}

/// Handle a `get_problemset_recent_status` tool call (`problemset.recentStatus`).
pub async fn get_problemset_recent_status(
    api: &CodeforcesApi,
    params: ProblemsetRecentStatusParams,
) -> String {
    let query = QueryParams::new()
        .with("count", clamp_count(params.count, RECENT_STATUS_MAX))
        .with_opt(
            "problemsetName",
            params.problemset_name.filter(|n| !n.trim().is_empty()),
        );
    let payload = api.request("problemset.recentStatus", &query).await;
    render_list(payload, RECENT_SUBMISSIONS, None, format::submission)
}
