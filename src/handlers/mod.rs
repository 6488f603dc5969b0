pub mod blog;
pub mod contest;
pub mod problemset;
pub mod recent_actions;
pub mod user;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::{ApiError, CodeforcesApi};
use crate::format;
use crate::protocol::{
    InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse, ToolCallParams, ToolResult,
};
use crate::schema;
use crate::tools;

/// Fixed texts a tool shows instead of formatted records.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    /// Request failed or the payload has no `result`.
    pub unavailable: &'static str,
    /// `result` is an empty collection.
    pub empty: &'static str,
}

/// Pull `result` out of a gateway payload. `None` means "unable to fetch".
pub(crate) fn extract_result(payload: Result<Value, ApiError>) -> Option<Value> {
    let mut payload = payload.ok()?;
    payload.get_mut("result").map(Value::take)
}

/// Format a list-valued payload, keeping at most `limit` items.
pub(crate) fn render_list(
    payload: Result<Value, ApiError>,
    messages: Messages,
    limit: Option<usize>,
    formatter: fn(&Value) -> String,
) -> String {
    match extract_result(payload) {
        Some(result) => render_items(&result, messages.empty, limit, formatter),
        None => messages.unavailable.to_string(),
    }
}

pub(crate) fn render_items(
    items: &Value,
    empty: &str,
    limit: Option<usize>,
    formatter: fn(&Value) -> String,
) -> String {
    match items.as_array() {
        Some(items) if !items.is_empty() => {
            let limit = limit.unwrap_or(items.len());
            format::join_items(items.iter().take(limit).map(formatter))
        }
        _ => empty.to_string(),
    }
}

/// Clamp a requested count into `1..=max`.
pub(crate) fn clamp_count(count: i64, max: i64) -> i64 {
    count.clamp(1, max)
}

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch(req: &JsonRpcRequest, api: &CodeforcesApi) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => {
            let init: InitializeParams = req
                .params
                .as_ref()
                .and_then(|v| serde_json::from_value(v.clone()).ok())
                .unwrap_or_default();
            let client = init.client_info.as_ref();
            tracing::info!(
                client = client.and_then(|c| c.name.as_deref()).unwrap_or("unknown"),
                client_version = client.and_then(|c| c.version.as_deref()).unwrap_or("unknown"),
                protocol = init.protocol_version.as_deref().unwrap_or("unspecified"),
                "initialize"
            );

            let result = serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "mcp-codeforces-server",
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "notifications/initialized" => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "tools/list" => Some(JsonRpcResponse::success(req.id.clone(), tools::list_json())),

        "tools/call" => {
            let params: ToolCallParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid tools/call params: {e}"
                            )),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for tools/call"),
                    ));
                }
            };

            let tool_result = dispatch_tool_call(&params, api).await;
            match serde_json::to_value(&tool_result) {
                Ok(result_json) => Some(JsonRpcResponse::success(req.id.clone(), result_json)),
                Err(e) => Some(JsonRpcResponse::error(
                    req.id.clone(),
                    JsonRpcError::internal_error(format!("Failed to serialize tool result: {e}")),
                )),
            }
        }

        // Other notifications need no answer.
        method if method.starts_with("notifications/") && req.id.is_none() => None,

        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}

/// Run one `tools/call`. Argument problems become `isError` results.
pub async fn dispatch_tool_call(params: &ToolCallParams, api: &CodeforcesApi) -> ToolResult {
    let Some(tool) = tools::find(&params.name) else {
        return ToolResult::error(format!("Unknown tool: {}", params.name));
    };

    let arguments = params
        .arguments
        .clone()
        .filter(|v| !v.is_null())
        .unwrap_or_else(|| serde_json::json!({}));

    if let Err(e) = schema::validate_value(&tool.input_schema(), &arguments) {
        return ToolResult::error(format!("Invalid arguments for {}: {e}", tool.name));
    }

    tracing::debug!(tool = tool.name, "tools/call");
    match run_tool(tool.name, arguments, api).await {
        Ok(text) => ToolResult::text(text),
        Err(reason) => ToolResult::error(format!("Invalid arguments for {}: {reason}", tool.name)),
    }
}

fn parse<T: DeserializeOwned>(arguments: Value) -> Result<T, String> {
    serde_json::from_value(arguments).map_err(|e| e.to_string())
}

async fn run_tool(name: &str, arguments: Value, api: &CodeforcesApi) -> Result<String, String> {
    let text = match name {
        "get_blog_comments" => blog::get_blog_comments(api, parse(arguments)?).await,
        "get_blog_entry" => blog::get_blog_entry(api, parse(arguments)?).await,
        "get_contest_hacks" => contest::get_contest_hacks(api, parse(arguments)?).await,
        "get_contest_list" => contest::get_contest_list(api, parse(arguments)?).await,
        "get_contest_rating_changes" => {
            contest::get_contest_rating_changes(api, parse(arguments)?).await
        }
        "get_contest_standings" => contest::get_contest_standings(api, parse(arguments)?).await,
        "get_contest_status" => contest::get_contest_status(api, parse(arguments)?).await,
        "get_problemset_problems" => {
            problemset::get_problemset_problems(api, parse(arguments)?).await
        }
        "get_problemset_recent_status" => {
            problemset::get_problemset_recent_status(api, parse(arguments)?).await
        }
        "get_recent_actions" => recent_actions::get_recent_actions(api, parse(arguments)?).await,
        "get_user_profiles" => user::get_user_profiles(api, parse(arguments)?).await,
        "get_user_blog_entries" => user::get_user_blog_entries(api, parse(arguments)?).await,
        "get_user_rated_list" => user::get_user_rated_list(api, parse(arguments)?).await,
        "get_user_rating_history" => user::get_user_rating_history(api, parse(arguments)?).await,
        "get_user_submissions" => user::get_user_submissions(api, parse(arguments)?).await,
        other => return Err(format!("no handler registered for {other}")),
    };
    Ok(text)
}
