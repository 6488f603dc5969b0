//! Golden output tests: fixture payloads in, expected text out.

#[path = "../common/mod.rs"]
mod common;

use std::fs;
use std::path::PathBuf;

use common::{api_for, call_tool, mount_ok};
use serde_json::{json, Value};
use wiremock::MockServer;

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/fixtures")
}

fn expected_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden/expected")
        .join(name)
}

fn read_fixture(name: &str) -> Value {
    let raw = fs::read_to_string(fixtures_root().join(name)).expect("fixture missing");
    serde_json::from_str(&raw).expect("fixture is not JSON")
}

fn read_expected(name: &str) -> String {
    fs::read_to_string(expected_path(name))
        .expect("expected file missing")
        .trim_end()
        .to_string()
}

async fn golden(tool: &str, endpoint: &str, arguments: Value, name: &str) {
    let server = MockServer::start().await;
    mount_ok(&server, endpoint, read_fixture(&format!("{name}.json"))).await;

    let actual = call_tool(&api_for(&server), tool, arguments).await;
    let expected = read_expected(&format!("{name}.txt"));

    assert_eq!(actual.trim_end(), expected, "{tool} output drifted from golden {name}.txt");
}

#[tokio::test]
async fn golden_contest_list() {
    golden("get_contest_list", "contest.list", json!({}), "contest_list").await;
}

#[tokio::test]
async fn golden_user_submissions() {
    golden(
        "get_user_submissions",
        "user.status",
        json!({"handle": "tourist"}),
        "user_status",
    )
    .await;
}

#[tokio::test]
async fn golden_contest_standings() {
    golden(
        "get_contest_standings",
        "contest.standings",
        json!({"contest_id": 1950}),
        "contest_standings",
    )
    .await;
}

#[tokio::test]
async fn golden_problemset_problems() {
    golden(
        "get_problemset_problems",
        "problemset.problems",
        json!({}),
        "problemset_problems",
    )
    .await;
}

#[tokio::test]
async fn golden_recent_actions() {
    golden("get_recent_actions", "recentActions", json!({}), "recent_actions").await;
}
