use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dataset::CellValue;
use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    SourceNotFound,
    MalformedSource,
    QueryError,
}

impl ErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SourceNotFound => "source_not_found",
            Self::MalformedSource => "malformed_source",
            Self::QueryError => "query_error",
        }
    }
}

/// Payload handed back across the operation boundary.
///
/// Success and failure share one shape: failures carry `message` and
/// `error_code` next to empty data fields, so callers only branch on
/// `status`.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ToolResponse<T> {
    pub status: ResponseStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,

    #[serde(flatten)]
    pub data: T,
}

impl<T: Default> ToolResponse<T> {
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            error_code: None,
            data,
        }
    }

    #[must_use]
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: Some(message.into()),
            error_code: Some(code),
            data: T::default(),
        }
    }

    /// Folds an engine result into a response, prefixing failures with
    /// `context`.
    #[must_use]
    pub fn from_result(result: Result<T, EngineError>, context: &str) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(error) => Self::error(error.code(), format!("{context}: {error}")),
        }
    }
}

impl<T> ToolResponse<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

/// Rows returned by `fetch_tickets`, positionally aligned to `columns`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
pub struct TicketRows {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    pub count: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryStats {
    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Total Tickets")]
    pub total_tickets: usize,

    #[serde(rename = "SLA Breaches")]
    pub sla_breaches: usize,

    #[serde(rename = "Avg Resolution Time (min)")]
    pub avg_resolution_minutes: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryBreakdown {
    pub summary: Vec<CategoryStats>,
    pub total_categories: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AgentStats {
    #[serde(rename = "Agent")]
    pub agent: String,

    #[serde(rename = "Tickets Resolved")]
    pub tickets_resolved: usize,

    #[serde(rename = "Avg Resolution Time (min)")]
    pub avg_resolution_minutes: Option<f64>,

    #[serde(rename = "SLA Compliance (%)")]
    pub sla_compliance_pct: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AgentBreakdown {
    pub summary: Vec<AgentStats>,
}

pub type FetchTicketsResponse = ToolResponse<TicketRows>;
pub type CategorySummaryResponse = ToolResponse<CategoryBreakdown>;
pub type AgentPerformanceResponse = ToolResponse<AgentBreakdown>;
