use anyhow::Result;
use clap::Args;

use crate::engine::TicketQueryEngine;
use crate::models::{CategorySummaryParams, DEFAULT_TOP_N, ToolName};

#[derive(Debug, Clone, Args)]
pub struct CategoriesArgs {
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,
}

pub fn run(args: &CategoriesArgs, engine: &TicketQueryEngine, pretty: bool) -> Result<()> {
    let params = CategorySummaryParams { top_n: args.top_n };
    let response = engine.get_category_summary(&params);
    super::emit_response(ToolName::CategorySummary.as_str(), &response, pretty)
}
