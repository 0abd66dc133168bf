use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use super::params::{AgentPerformanceParams, CategorySummaryParams, FetchParams};
use super::response::{AgentPerformanceResponse, CategorySummaryResponse, FetchTicketsResponse};

pub const CATALOG_SCHEMA_VERSION: &str = "ticket-insights.tool-catalog.v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    FetchTickets,
    CategorySummary,
    AgentPerformance,
}

impl ToolName {
    pub const ALL: [Self; 3] = [
        Self::FetchTickets,
        Self::CategorySummary,
        Self::AgentPerformance,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FetchTickets => "fetch_tickets",
            Self::CategorySummary => "get_category_summary",
            Self::AgentPerformance => "get_agent_performance",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::FetchTickets => {
                "Fetch support tickets with optional filtering by look-back window, \
                 main category and SLA status. Returns column names, positional rows, \
                 a count and a one-line summary."
            }
            Self::CategorySummary => {
                "Summarize tickets per main category: ticket count, SLA breaches and \
                 average resolution time in minutes, largest categories first."
            }
            Self::AgentPerformance => {
                "Summarize performance per support agent: tickets resolved, average \
                 resolution time and SLA compliance percentage. Ghost and unassigned \
                 tickets are excluded."
            }
        }
    }

    #[must_use]
    pub fn parameters_schema(self) -> Value {
        match self {
            Self::FetchTickets => schema_value::<FetchParams>(),
            Self::CategorySummary => schema_value::<CategorySummaryParams>(),
            Self::AgentPerformance => schema_value::<AgentPerformanceParams>(),
        }
    }

    #[must_use]
    pub fn response_schema(self) -> Value {
        match self {
            Self::FetchTickets => schema_value::<FetchTicketsResponse>(),
            Self::CategorySummary => schema_value::<CategorySummaryResponse>(),
            Self::AgentPerformance => schema_value::<AgentPerformanceResponse>(),
        }
    }
}

/// Registration record an agent framework needs to expose one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolCatalog {
    pub schema_version: &'static str,
    pub tools: Vec<ToolDescriptor>,
}

#[must_use]
pub fn tool_catalog() -> ToolCatalog {
    ToolCatalog {
        schema_version: CATALOG_SCHEMA_VERSION,
        tools: ToolName::ALL
            .into_iter()
            .map(|tool| ToolDescriptor {
                name: tool.as_str(),
                description: tool.description(),
                parameters: tool.parameters_schema(),
            })
            .collect(),
    }
}

fn schema_value<T: JsonSchema>() -> Value {
    let schema = schemars::schema_for!(T);
    match serde_json::to_value(schema) {
        Ok(value) => value,
        Err(error) => {
            panic!("failed to serialize generated tool schema: {error}");
        }
    }
}
