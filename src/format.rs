//! Plain-text rendering of Codeforces API records.
//!
//! Records are read as loose JSON: every lookup falls back to a fixed
//! default, and `null` counts as absent. The output of each function is a
//! pure function of its input.

use serde_json::Value;

/// Separator placed between formatted items.
pub const ITEM_SEPARATOR: &str = "\n---\n";

/// Marker appended after truncated free text.
pub const ELLIPSIS: &str = "...";

pub const COMMENT_TEXT_LIMIT: usize = 200;
pub const BLOG_TEXT_LIMIT: usize = 500;
pub const ACTION_COMMENT_LIMIT: usize = 100;

/// Look up a nested key path, treating `null` as missing.
fn lookup<'a>(record: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = record;
    for key in path {
        current = current.get(key)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render the value at `path`, or `default` when it is absent.
pub fn field(record: &Value, path: &[&str], default: &str) -> String {
    lookup(record, path)
        .map(render_scalar)
        .unwrap_or_else(|| default.to_string())
}

/// Render a string array joined with `", "`; absent or non-array renders empty.
pub fn tags(record: &Value) -> String {
    lookup(record, &["tags"])
        .and_then(Value::as_array)
        .map(|items| items.iter().map(render_scalar).collect::<Vec<_>>().join(", "))
        .unwrap_or_default()
}

/// First member's handle of a party-like object (`author`, `party`).
pub fn first_member_handle(record: &Value, party_key: &str) -> String {
    lookup(record, &[party_key, "members"])
        .and_then(Value::as_array)
        .and_then(|members| members.first())
        .map(|member| field(member, &["handle"], "Unknown"))
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Handle of a hack participant: `handle` if present, else the first party member.
pub fn participant_handle(record: &Value, key: &str) -> String {
    match lookup(record, &[key, "handle"]) {
        Some(handle) => render_scalar(handle),
        None => first_member_handle(record, key),
    }
}

/// Keep the first `limit` characters and append [`ELLIPSIS`].
pub fn truncate(text: &str, limit: usize) -> String {
    let mut out: String = text.chars().take(limit).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Join formatted blocks with [`ITEM_SEPARATOR`].
pub fn join_items<I>(items: I) -> String
where
    I: IntoIterator<Item = String>,
{
    items.into_iter().collect::<Vec<_>>().join(ITEM_SEPARATOR)
}

pub fn profile(p: &Value) -> String {
    format!(
        "Handle: {}\n\
         Name: {} {}\n\
         Rating: {}\n\
         Rank: {}\n\
         Max Rating: {}\n\
         Max Rank: {}\n\
         Country: {}\n\
         City: {}\n\
         Organization: {}\n\
         Contribution: {}\n\
         Friend Count: {}",
        field(p, &["handle"], "Unknown"),
        field(p, &["firstName"], ""),
        field(p, &["lastName"], ""),
        field(p, &["rating"], "Unrated"),
        field(p, &["rank"], "Unranked"),
        field(p, &["maxRating"], "N/A"),
        field(p, &["maxRank"], "N/A"),
        field(p, &["country"], "Unknown"),
        field(p, &["city"], "Unknown"),
        field(p, &["organization"], "None"),
        field(p, &["contribution"], "0"),
        field(p, &["friendOfCount"], "0"),
    )
}

pub fn blog_entry(e: &Value) -> String {
    format!(
        "ID: {}\n\
         Title: {}\n\
         Author: {}\n\
         Creation Time: {}\n\
         Rating: {}\n\
         Tags: {}",
        field(e, &["id"], "N/A"),
        field(e, &["title"], "No Title"),
        field(e, &["authorHandle"], "Unknown"),
        field(e, &["creationTimeSeconds"], "N/A"),
        field(e, &["rating"], "0"),
        tags(e),
    )
}

/// Blog entry header plus the first [`BLOG_TEXT_LIMIT`] characters of its body.
pub fn blog_entry_detail(e: &Value) -> String {
    format!(
        "{}\nContent: {}",
        blog_entry(e),
        truncate(&field(e, &["text"], "No content"), BLOG_TEXT_LIMIT)
    )
}

pub fn contest(c: &Value) -> String {
    format!(
        "ID: {}\n\
         Name: {}\n\
         Type: {}\n\
         Phase: {}\n\
         Duration: {} seconds\n\
         Start Time: {}\n\
         Difficulty: {}",
        field(c, &["id"], "N/A"),
        field(c, &["name"], "No Name"),
        field(c, &["type"], "Unknown"),
        field(c, &["phase"], "Unknown"),
        field(c, &["durationSeconds"], "0"),
        field(c, &["startTimeSeconds"], "N/A"),
        field(c, &["difficulty"], "N/A"),
    )
}

pub fn problem(p: &Value) -> String {
    format!(
        "Contest ID: {}\n\
         Index: {}\n\
         Name: {}\n\
         Type: {}\n\
         Points: {}\n\
         Rating: {}\n\
         Tags: {}",
        field(p, &["contestId"], "N/A"),
        field(p, &["index"], "N/A"),
        field(p, &["name"], "No Name"),
        field(p, &["type"], "Unknown"),
        field(p, &["points"], "N/A"),
        field(p, &["rating"], "Unrated"),
        tags(p),
    )
}

pub fn submission(s: &Value) -> String {
    format!(
        "ID: {}\n\
         Contest ID: {}\n\
         Problem: {} - {}\n\
         Author: {}\n\
         Programming Language: {}\n\
         Verdict: {}\n\
         Time Consumed: {} ms\n\
         Memory Consumed: {} bytes\n\
         Creation Time: {}",
        field(s, &["id"], "N/A"),
        field(s, &["contestId"], "N/A"),
        field(s, &["problem", "index"], "N/A"),
        field(s, &["problem", "name"], "No Name"),
        first_member_handle(s, "author"),
        field(s, &["programmingLanguage"], "Unknown"),
        field(s, &["verdict"], "Unknown"),
        field(s, &["timeConsumedMillis"], "0"),
        field(s, &["memoryConsumedBytes"], "0"),
        field(s, &["creationTimeSeconds"], "N/A"),
    )
}

pub fn comment(c: &Value) -> String {
    format!(
        "ID: {}\n\
         Author: {}\n\
         Text: {}\n\
         Creation Time: {}\n\
         Rating: {}",
        field(c, &["id"], "N/A"),
        field(c, &["commentatorHandle"], "Unknown"),
        truncate(&field(c, &["text"], "No text"), COMMENT_TEXT_LIMIT),
        field(c, &["creationTimeSeconds"], "N/A"),
        field(c, &["rating"], "0"),
    )
}

pub fn hack(h: &Value) -> String {
    format!(
        "ID: {}\n\
         Hacker: {}\n\
         Defender: {}\n\
         Problem: {}\n\
         Verdict: {}\n\
         Creation Time: {}",
        field(h, &["id"], "N/A"),
        participant_handle(h, "hacker"),
        participant_handle(h, "defender"),
        field(h, &["problem", "index"], "N/A"),
        field(h, &["verdict"], "Unknown"),
        field(h, &["creationTimeSeconds"], "N/A"),
    )
}

/// One row of `contest.ratingChanges`.
pub fn contest_rating_change(r: &Value) -> String {
    format!(
        "Handle: {}\n\
         Rank: {}\n\
         Old Rating: {}\n\
         New Rating: {}",
        field(r, &["handle"], "Unknown"),
        field(r, &["rank"], "N/A"),
        field(r, &["oldRating"], "N/A"),
        field(r, &["newRating"], "N/A"),
    )
}

/// One row of `user.rating`.
pub fn rating_history_entry(r: &Value) -> String {
    format!(
        "Contest: {}\n\
         Rank: {}\n\
         Old Rating: {}\n\
         New Rating: {}\n\
         Contest Time: {}",
        field(r, &["contestName"], "Unknown"),
        field(r, &["rank"], "N/A"),
        field(r, &["oldRating"], "N/A"),
        field(r, &["newRating"], "N/A"),
        field(r, &["ratingUpdateTimeSeconds"], "N/A"),
    )
}

pub fn standings_row(row: &Value) -> String {
    format!(
        "Rank: {}\n\
         Handle: {}\n\
         Points: {}\n\
         Penalty: {}\n\
         Successful Hacks: {}\n\
         Unsuccessful Hacks: {}",
        field(row, &["rank"], "N/A"),
        first_member_handle(row, "party"),
        field(row, &["points"], "0"),
        field(row, &["penalty"], "0"),
        field(row, &["successfulHackCount"], "0"),
        field(row, &["unsuccessfulHackCount"], "0"),
    )
}

/// Contest header followed by its standings rows.
pub fn standings(result: &Value) -> String {
    let header = contest(result.get("contest").unwrap_or(&Value::Null));
    let rows = lookup(result, &["rows"])
        .and_then(Value::as_array)
        .map(|rows| join_items(rows.iter().map(standings_row)))
        .unwrap_or_default();
    format!("Contest Info:\n{header}\n\nStandings:\n{rows}")
}

pub fn recent_action(a: &Value) -> String {
    // An empty comment object counts as no comment.
    let attached =
        lookup(a, &["comment"]).filter(|c| c.as_object().map_or(true, |o| !o.is_empty()));
    let comment = match attached {
        Some(c) => field(c, &["text"], "No comment")
            .chars()
            .take(ACTION_COMMENT_LIMIT)
            .collect(),
        None => "N/A".to_string(),
    };
    format!(
        "Time: {}\n\
         Blog Entry: {}\n\
         Comment: {}{}",
        field(a, &["timeSeconds"], "N/A"),
        field(a, &["blogEntry", "title"], "No Title"),
        comment,
        ELLIPSIS,
    )
}
