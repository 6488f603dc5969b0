//! Static registry of the tools this server advertises.

use serde_json::{json, Value};

/// A named tool with its description and JSON input schema.
#[derive(Debug, Clone, Copy)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    schema: fn() -> Value,
}

impl ToolDescriptor {
    pub fn input_schema(&self) -> Value {
        (self.schema)()
    }

    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema(),
        })
    }
}

/// Every tool, in the order `tools/list` reports them.
pub const TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "get_blog_comments",
        description: "Get comments for a specific blog entry",
        schema: blog_entry_schema,
    },
    ToolDescriptor {
        name: "get_blog_entry",
        description: "Get a specific blog entry",
        schema: blog_entry_schema,
    },
    ToolDescriptor {
        name: "get_contest_hacks",
        description: "Get hacks for a specific contest",
        schema: contest_hacks_schema,
    },
    ToolDescriptor {
        name: "get_contest_list",
        description: "Get list of contests (first 20)",
        schema: contest_list_schema,
    },
    ToolDescriptor {
        name: "get_contest_rating_changes",
        description: "Get rating changes for a specific contest (first 50)",
        schema: contest_id_schema,
    },
    ToolDescriptor {
        name: "get_contest_standings",
        description: "Get contest standings",
        schema: contest_standings_schema,
    },
    ToolDescriptor {
        name: "get_contest_status",
        description: "Get contest submissions",
        schema: contest_status_schema,
    },
    ToolDescriptor {
        name: "get_problemset_problems",
        description: "Get problems from the problemset (first 50)",
        schema: problemset_problems_schema,
    },
    ToolDescriptor {
        name: "get_problemset_recent_status",
        description: "Get recent submissions from the problemset",
        schema: problemset_recent_status_schema,
    },
    ToolDescriptor {
        name: "get_recent_actions",
        description: "Get recent actions (blog entries and comments)",
        schema: recent_actions_schema,
    },
    ToolDescriptor {
        name: "get_user_profiles",
        description: "Get profiles for a list of users",
        schema: user_profiles_schema,
    },
    ToolDescriptor {
        name: "get_user_blog_entries",
        description: "Get a user's blog entries",
        schema: handle_schema,
    },
    ToolDescriptor {
        name: "get_user_rated_list",
        description: "Get list of rated users (first 50)",
        schema: user_rated_list_schema,
    },
    ToolDescriptor {
        name: "get_user_rating_history",
        description: "Get a user's rating history",
        schema: handle_schema,
    },
    ToolDescriptor {
        name: "get_user_submissions",
        description: "Get a user's submissions",
        schema: user_submissions_schema,
    },
];

pub fn find(name: &str) -> Option<&'static ToolDescriptor> {
    TOOLS.iter().find(|t| t.name == name)
}

/// The `tools/list` result object.
pub fn list_json() -> Value {
    json!({ "tools": TOOLS.iter().map(ToolDescriptor::to_json).collect::<Vec<_>>() })
}

fn object_schema(required: &[&str], properties: Value) -> Value {
    json!({
        "type": "object",
        "required": required,
        "properties": properties,
    })
}

fn blog_entry_schema() -> Value {
    object_schema(
        &["blog_entry_id"],
        json!({
            "blog_entry_id": { "type": "integer", "description": "ID of the blog entry" }
        }),
    )
}

fn contest_id_schema() -> Value {
    object_schema(
        &["contest_id"],
        json!({
            "contest_id": { "type": "integer", "description": "ID of the contest" }
        }),
    )
}

fn contest_hacks_schema() -> Value {
    object_schema(
        &["contest_id"],
        json!({
            "contest_id": { "type": "integer", "description": "ID of the contest" },
            "as_manager": {
                "type": "boolean",
                "description": "Whether to get manager-level information",
                "default": false
            }
        }),
    )
}

fn contest_list_schema() -> Value {
    object_schema(
        &[],
        json!({
            "gym": { "type": "boolean", "description": "Whether to get gym contests", "default": false },
            "group_code": { "type": ["string", "null"], "description": "Group code to filter contests" }
        }),
    )
}

fn contest_standings_schema() -> Value {
    object_schema(
        &["contest_id"],
        json!({
            "contest_id": { "type": "integer", "description": "ID of the contest" },
            "from_rank": { "type": "integer", "description": "Starting rank (1-based)", "default": 1 },
            "count": { "type": "integer", "description": "Number of standings rows to return", "default": 10 },
            "handles": {
                "type": ["string", "null"],
                "description": "Comma- or semicolon-separated list of handles"
            },
            "show_unofficial": {
                "type": "boolean",
                "description": "Whether to show unofficial participants",
                "default": false
            }
        }),
    )
}

fn contest_status_schema() -> Value {
    object_schema(
        &["contest_id"],
        json!({
            "contest_id": { "type": "integer", "description": "ID of the contest" },
            "handle": { "type": ["string", "null"], "description": "Only submissions of this user" },
            "from_sub": { "type": "integer", "description": "Starting submission index (1-based)", "default": 1 },
            "count": { "type": "integer", "description": "Number of submissions to return", "default": 10 }
        }),
    )
}

fn problemset_problems_schema() -> Value {
    object_schema(
        &[],
        json!({
            "tags": { "type": ["string", "null"], "description": "Comma- or semicolon-separated list of tags" },
            "problemset_name": { "type": ["string", "null"], "description": "Custom problemset name" }
        }),
    )
}

fn problemset_recent_status_schema() -> Value {
    object_schema(
        &[],
        json!({
            "count": {
                "type": "integer",
                "description": "Number of submissions to return (max 1000)",
                "default": 10
            },
            "problemset_name": { "type": ["string", "null"], "description": "Custom problemset name" }
        }),
    )
}

fn recent_actions_schema() -> Value {
    object_schema(
        &[],
        json!({
            "max_count": {
                "type": "integer",
                "description": "Number of recent actions to return (max 100)",
                "default": 30
            }
        }),
    )
}

fn user_profiles_schema() -> Value {
    object_schema(
        &["handles"],
        json!({
            "handles": { "type": "string", "description": "Comma- or semicolon-separated list of handles" },
            "check_historic_handles": {
                "type": "boolean",
                "description": "Whether to resolve handles the users had in the past",
                "default": true
            }
        }),
    )
}

fn handle_schema() -> Value {
    object_schema(
        &["handle"],
        json!({
            "handle": { "type": "string", "description": "Codeforces user handle" }
        }),
    )
}

fn user_rated_list_schema() -> Value {
    object_schema(
        &[],
        json!({
            "active_only": {
                "type": "boolean",
                "description": "Whether to return only recently active users",
                "default": false
            },
            "include_retired": {
                "type": "boolean",
                "description": "Whether to include retired users",
                "default": true
            },
            "contest_id": { "type": ["integer", "null"], "description": "Only users who took part in this contest" }
        }),
    )
}

fn user_submissions_schema() -> Value {
    object_schema(
        &["handle"],
        json!({
            "handle": { "type": "string", "description": "Codeforces user handle" },
            "from_sub": { "type": "integer", "description": "Starting submission index (1-based)", "default": 1 },
            "count": { "type": "integer", "description": "Number of submissions to return", "default": 10 }
        }),
    )
}
