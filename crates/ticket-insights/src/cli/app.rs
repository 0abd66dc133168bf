use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands::{
    agents::AgentsArgs, catalog::CatalogArgs, categories::CategoriesArgs, fetch::FetchArgs,
    schema::SchemaArgs,
};

#[derive(Debug, Parser)]
#[command(
    name = "ticket-insights",
    version,
    about = "Read-only support ticket analytics for agent tool calls"
)]
pub struct Cli {
    #[command(flatten)]
    pub runtime: RuntimeArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Args)]
pub struct RuntimeArgs {
    /// Ticket CSV to query. Defaults to $TICKET_INSIGHTS_DATASET, then ./Support_Metrics.csv.
    #[arg(long, global = true, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    #[arg(long, global = true, value_name = "PATH")]
    pub home_dir: Option<PathBuf>,

    #[arg(long, global = true, value_name = "PATH")]
    pub cwd: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[arg(short, long, global = true, default_value_t = false, conflicts_with = "quiet")]
    pub verbose: bool,

    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
}

impl RuntimeArgs {
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch tickets filtered by look-back window, category and SLA status.
    Fetch(FetchArgs),
    /// Ticket counts, SLA breaches and mean resolution time per category.
    Categories(CategoriesArgs),
    /// Ticket counts, mean resolution time and SLA compliance per agent.
    Agents(AgentsArgs),
    /// Print the tool manifest for agent registration.
    Catalog(CatalogArgs),
    /// Print the JSON schema of one operation's response.
    Schema(SchemaArgs),
}
