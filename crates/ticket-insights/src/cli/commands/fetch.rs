use anyhow::Result;
use clap::Args;

use crate::engine::TicketQueryEngine;
use crate::models::{DEFAULT_LOOK_BACK_DAYS, FetchParams, ToolName};

#[derive(Debug, Clone, Args)]
pub struct FetchArgs {
    /// Days to look back from now; 0 returns every date.
    #[arg(long, default_value_t = DEFAULT_LOOK_BACK_DAYS, allow_negative_numbers = true)]
    pub days: i64,

    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    #[arg(long, value_name = "STATUS")]
    pub sla_status: Option<String>,
}

impl FetchArgs {
    #[must_use]
    pub fn params(&self) -> FetchParams {
        FetchParams {
            days: Some(self.days),
            category: self.category.clone(),
            sla_status: self.sla_status.clone(),
        }
    }
}

pub fn run(args: &FetchArgs, engine: &TicketQueryEngine, pretty: bool) -> Result<()> {
    let response = engine.fetch_tickets(&args.params());
    super::emit_response(ToolName::FetchTickets.as_str(), &response, pretty)
}
