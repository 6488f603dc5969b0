//! Shared helpers: a wiremock stand-in for the Codeforces API.

#![allow(dead_code)]

use std::time::Duration;

use mcp_codeforces_server::client::CodeforcesApi;
use mcp_codeforces_server::handlers;
use mcp_codeforces_server::protocol::ToolCallParams;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Gateway pointed at `server`, with the API rooted at `/api`.
pub fn api_for(server: &MockServer) -> CodeforcesApi {
    api_with_timeout(server, Duration::from_secs(5))
}

pub fn api_with_timeout(server: &MockServer, timeout: Duration) -> CodeforcesApi {
    CodeforcesApi::new(format!("{}/api", server.uri()), timeout)
}

/// `{"status":"OK","result":...}`
pub fn ok(result: Value) -> Value {
    json!({ "status": "OK", "result": result })
}

/// Serve `body` with HTTP 200 for `GET /api/{endpoint}`.
pub async fn mount_ok(server: &MockServer, endpoint: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/{endpoint}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Answer every GET with `template`.
pub async fn mount_any(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Run a tool through the same path `tools/call` uses and return its text.
pub async fn call_tool(api: &CodeforcesApi, name: &str, arguments: Value) -> String {
    let params = ToolCallParams {
        name: name.to_string(),
        arguments: Some(arguments),
    };
    let result = handlers::dispatch_tool_call(&params, api).await;
    assert!(!result.is_error, "{name} returned an error result: {:?}", result.content);
    result.content[0].text.clone()
}

/// One case per tool: (name, arguments, failure text, empty text, empty result).
pub struct ToolCase {
    pub name: &'static str,
    pub endpoint: &'static str,
    pub arguments: Value,
    pub unavailable: &'static str,
    pub empty: Option<(&'static str, Value)>,
}

pub fn all_tool_cases() -> Vec<ToolCase> {
    vec![
        ToolCase {
            name: "get_blog_comments",
            endpoint: "blogEntry.comments",
            arguments: json!({"blog_entry_id": 79}),
            unavailable: "Unable to fetch blog comments.",
            empty: Some(("No comments found.", json!([]))),
        },
        ToolCase {
            name: "get_blog_entry",
            endpoint: "blogEntry.view",
            arguments: json!({"blog_entry_id": 79}),
            unavailable: "Unable to fetch blog entry.",
            empty: None,
        },
        ToolCase {
            name: "get_contest_hacks",
            endpoint: "contest.hacks",
            arguments: json!({"contest_id": 566}),
            unavailable: "Unable to fetch contest hacks.",
            empty: Some(("No hacks found.", json!([]))),
        },
        ToolCase {
            name: "get_contest_list",
            endpoint: "contest.list",
            arguments: json!({}),
            unavailable: "Unable to fetch contest list.",
            empty: Some(("No contests found.", json!([]))),
        },
        ToolCase {
            name: "get_contest_rating_changes",
            endpoint: "contest.ratingChanges",
            arguments: json!({"contest_id": 566}),
            unavailable: "Unable to fetch rating changes.",
            empty: Some(("No rating changes found.", json!([]))),
        },
        ToolCase {
            name: "get_contest_standings",
            endpoint: "contest.standings",
            arguments: json!({"contest_id": 566}),
            unavailable: "Unable to fetch contest standings.",
            empty: None,
        },
        ToolCase {
            name: "get_contest_status",
            endpoint: "contest.status",
            arguments: json!({"contest_id": 566}),
            unavailable: "Unable to fetch contest submissions.",
            empty: Some(("No submissions found.", json!([]))),
        },
        ToolCase {
            name: "get_problemset_problems",
            endpoint: "problemset.problems",
            arguments: json!({}),
            unavailable: "Unable to fetch problems.",
            empty: Some(("No problems found.", json!({"problems": [], "problemStatistics": []}))),
        },
        ToolCase {
            name: "get_problemset_recent_status",
            endpoint: "problemset.recentStatus",
            arguments: json!({}),
            unavailable: "Unable to fetch recent submissions.",
            empty: Some(("No submissions found.", json!([]))),
        },
        ToolCase {
            name: "get_recent_actions",
            endpoint: "recentActions",
            arguments: json!({}),
            unavailable: "Unable to fetch recent actions.",
            empty: Some(("No recent actions found.", json!([]))),
        },
        ToolCase {
            name: "get_user_profiles",
            endpoint: "user.info",
            arguments: json!({"handles": "tourist"}),
            unavailable: "Unable to fetch profiles or no profiles found.",
            empty: Some(("No profiles found.", json!([]))),
        },
        ToolCase {
            name: "get_user_blog_entries",
            endpoint: "user.blogEntries",
            arguments: json!({"handle": "tourist"}),
            unavailable: "Unable to fetch blog entries.",
            empty: Some(("No blog entries found.", json!([]))),
        },
        ToolCase {
            name: "get_user_rated_list",
            endpoint: "user.ratedList",
            arguments: json!({}),
            unavailable: "Unable to fetch rated users.",
            empty: Some(("No rated users found.", json!([]))),
        },
        ToolCase {
            name: "get_user_rating_history",
            endpoint: "user.rating",
            arguments: json!({"handle": "tourist"}),
            unavailable: "Unable to fetch rating history.",
            empty: Some(("No rating history found.", json!([]))),
        },
        ToolCase {
            name: "get_user_submissions",
            endpoint: "user.status",
            arguments: json!({"handle": "tourist"}),
            unavailable: "Unable to fetch user submissions.",
            empty: Some(("No submissions found.", json!([]))),
        },
    ]
}
