use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 ID: a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(i64),
    Str(String),
}

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

/// MCP `initialize` params.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: Option<String>,
    #[serde(rename = "clientInfo")]
    pub client_info: Option<ClientInfo>,
}

/// Client information sent during `initialize`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Parameters for `tools/call`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Tool arguments
// ---------------------------------------------------------------------------

fn default_true() -> bool {
    true
}

fn default_one() -> i64 {
    1
}

fn default_ten() -> i64 {
    10
}

fn default_thirty() -> i64 {
    30
}

/// `get_blog_comments` and `get_blog_entry`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogEntryParams {
    pub blog_entry_id: i64,
}

/// `get_contest_hacks`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContestHacksParams {
    pub contest_id: i64,
    #[serde(default)]
    pub as_manager: bool,
}

/// `get_contest_list`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContestListParams {
    #[serde(default)]
    pub gym: bool,
    #[serde(default)]
    pub group_code: Option<String>,
}

/// `get_contest_rating_changes`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContestIdParams {
    pub contest_id: i64,
}

/// `get_contest_standings`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContestStandingsParams {
    pub contest_id: i64,
    #[serde(default = "default_one")]
    pub from_rank: i64,
    #[serde(default = "default_ten")]
    pub count: i64,
    /// Comma- or semicolon-separated handles.
    #[serde(default)]
    pub handles: Option<String>,
    #[serde(default)]
    pub show_unofficial: bool,
}

/// `get_contest_status`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContestStatusParams {
    pub contest_id: i64,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default = "default_one")]
    pub from_sub: i64,
    #[serde(default = "default_ten")]
    pub count: i64,
}

/// `get_problemset_problems`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProblemsetProblemsParams {
    /// Comma- or semicolon-separated tags.
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub problemset_name: Option<String>,
}

/// `get_problemset_recent_status`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemsetRecentStatusParams {
    #[serde(default = "default_ten")]
    pub count: i64,
    #[serde(default)]
    pub problemset_name: Option<String>,
}

/// `get_recent_actions`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentActionsParams {
    #[serde(default = "default_thirty")]
    pub max_count: i64,
}

/// `get_user_profiles`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfilesParams {
    /// Comma- or semicolon-separated handles.
    pub handles: String,
    #[serde(default = "default_true")]
    pub check_historic_handles: bool,
}

/// `get_user_blog_entries` and `get_user_rating_history`.
#[derive(Debug, Clone, Deserialize)]
pub struct HandleParams {
    pub handle: String,
}

/// `get_user_rated_list`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRatedListParams {
    #[serde(default)]
    pub active_only: bool,
    #[serde(default = "default_true")]
    pub include_retired: bool,
    #[serde(default)]
    pub contest_id: Option<i64>,
}

/// `get_user_submissions`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSubmissionsParams {
    pub handle: String,
    #[serde(default = "default_one")]
    pub from_sub: i64,
    #[serde(default = "default_ten")]
    pub count: i64,
}
