pub mod request;
pub mod response;

pub use request::{
    BlogEntryParams, ClientInfo, ContestHacksParams, ContestIdParams, ContestListParams,
    ContestStandingsParams, ContestStatusParams, HandleParams, InitializeParams, JsonRpcRequest,
    ProblemsetProblemsParams, ProblemsetRecentStatusParams, RecentActionsParams, RpcId,
    ToolCallParams, UserProfilesParams, UserRatedListParams, UserSubmissionsParams,
};
pub use response::{JsonRpcError, JsonRpcResponse, ToolResult, ToolResultContent};
