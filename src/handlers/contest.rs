use crate::client::{semicolon_list, CodeforcesApi, QueryParams};
use crate::format;
use crate::protocol::{
    ContestHacksParams, ContestIdParams, ContestListParams, ContestStandingsParams,
    ContestStatusParams,
};

use super::{extract_result, render_list, Messages};

/// `contest.list` returns every contest ever held; only the head is shown.
pub const CONTEST_LIST_LIMIT: usize = 20;
pub const RATING_CHANGES_LIMIT: usize = 50;

pub const HACKS: Messages = Messages {
    unavailable: "Unable to fetch contest hacks.",
    empty: "No hacks found.",
};

pub const CONTESTS: Messages = Messages {
    unavailable: "Unable to fetch contest list.",
    empty: "No contests found.",
};

pub const RATING_CHANGES: Messages = Messages {
    unavailable: "Unable to fetch rating changes.",
    empty: "No rating changes found.",
};

pub const STANDINGS_UNAVAILABLE: &str = "Unable to fetch contest standings.";

pub const SUBMISSIONS: Messages = Messages {
    unavailable: "Unable to fetch contest submissions.",
    empty: "No submissions found.",
};

/// Handle a `get_contest_hacks` tool call (`contest.hacks`).
pub async fn get_contest_hacks(api: &CodeforcesApi, params: ContestHacksParams) -> String {
    let query = QueryParams::new()
        .with("contestId", params.contest_id)
        .flag("asManager", params.as_manager, "true");
    let payload = api.request("contest.hacks", &query).await;
    render_list(payload, HACKS, None, format::hack)
}

/// Handle a `get_contest_list` tool call (`contest.list`).
pub async fn get_contest_list(api: &CodeforcesApi, params: ContestListParams) -> String {
    let query = QueryParams::new()
        .flag("gym", params.gym, "true")
        .with_opt("groupCode", params.group_code.filter(|g| !g.trim().is_empty()));
    let payload = api.request("contest.list", &query).await;
    render_list(payload, CONTESTS, Some(CONTEST_LIST_LIMIT), format::contest)
}

/// Handle a `get_contest_rating_changes` tool call (`contest.ratingChanges`).
pub async fn get_contest_rating_changes(api: &CodeforcesApi, params: ContestIdParams) -> String {
    let query = QueryParams::new().with("contestId", params.contest_id);
    let payload = api.request("contest.ratingChanges", &query).await;
    render_list(
        payload,
        RATING_CHANGES,
        Some(RATING_CHANGES_LIMIT),
        format::contest_rating_change,
    )
}

/// Handle a `get_contest_standings` tool call (`contest.standings`).
///
/// The result is an object with the contest header and the requested rows,
/// so there is no empty-collection text: an empty page still shows the header.
pub async fn get_contest_standings(api: &CodeforcesApi, params: ContestStandingsParams) -> String {
    let query = QueryParams::new()
        .with("contestId", params.contest_id)
        .with("from", params.from_rank.max(1))
        .with("count", params.count.max(1))
        .with_opt("handles", params.handles.as_deref().and_then(semicolon_list))
        .flag("showUnofficial", params.show_unofficial, "true");
    let payload = api.request("contest.standings", &query).await;
    match extract_result(payload) {
        Some(result) => format::standings(&result),
        None => STANDINGS_UNAVAILABLE.to_string(),
    }
}

/// Handle a `get_contest_status` tool call (`contest.status`).
pub async fn get_contest_status(api: &CodeforcesApi, params: ContestStatusParams) -> String {
    let query = QueryParams::new()
        .with("contestId", params.contest_id)
        .with("from", params.from_sub.max(1))
        .with("count", params.count.max(1))
        .with_opt("handle", params.handle.filter(|h| !h.trim().is_empty()));
    let payload = api.request("contest.status", &query).await;
    render_list(payload, SUBMISSIONS, None, format::submission)
}
