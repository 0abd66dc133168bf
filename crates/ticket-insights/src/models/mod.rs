pub mod catalog;
pub mod params;
pub mod response;

pub use catalog::{CATALOG_SCHEMA_VERSION, ToolCatalog, ToolDescriptor, ToolName, tool_catalog};
pub use params::{
    AgentPerformanceParams, CategorySummaryParams, DEFAULT_LOOK_BACK_DAYS, DEFAULT_TOP_N,
    FetchParams,
};
pub use response::{
    AgentBreakdown, AgentPerformanceResponse, AgentStats, CategoryBreakdown,
    CategorySummaryResponse, CategoryStats, ErrorCode, FetchTicketsResponse, ResponseStatus,
    TicketRows, ToolResponse,
};
