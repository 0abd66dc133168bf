use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::models::ToolName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaTarget {
    Fetch,
    Categories,
    Agents,
}

impl SchemaTarget {
    #[must_use]
    pub const fn tool(self) -> ToolName {
        match self {
            Self::Fetch => ToolName::FetchTickets,
            Self::Categories => ToolName::CategorySummary,
            Self::Agents => ToolName::AgentPerformance,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct SchemaArgs {
    #[arg(value_enum, value_name = "TOOL")]
    pub target: SchemaTarget,
}

pub fn run(args: &SchemaArgs, pretty: bool) -> Result<()> {
    let schema = args.target.tool().response_schema();
    println!("{}", super::encode_json(&schema, pretty)?);
    Ok(())
}
