use anyhow::Result;
use clap::Args;

use crate::engine::TicketQueryEngine;
use crate::models::ToolName;

#[derive(Debug, Clone, Args)]
pub struct AgentsArgs {}

pub fn run(_args: &AgentsArgs, engine: &TicketQueryEngine, pretty: bool) -> Result<()> {
    let response = engine.get_agent_performance();
    super::emit_response(ToolName::AgentPerformance.as_str(), &response, pretty)
}
