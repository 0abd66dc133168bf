#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use clap::error::ErrorKind;
use ticket_insights::cli::app::{Cli, Command, RuntimeArgs};
use ticket_insights::cli::commands;
use ticket_insights::config::{DATASET_ENV_VAR, RuntimePaths};
use ticket_insights::models::ErrorCode;
use ticket_insights::utils::time::reference_offset;
use ticket_insights::{DatasetSource, TicketQueryEngine};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_RUNTIME_FAILURE: i32 = 1;
const EXIT_TOOL_FAILURE: i32 = 2;
const EXIT_USAGE_ERROR: i32 = 64;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    // Still single-threaded here, so the local offset can be read.
    let offset = reference_offset();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return exit_code_for_parse_error(error),
    };
    init_logging(&cli.runtime);
    let command_name = command_name(&cli.command);
    debug!(command = command_name, %offset, "starting");

    match execute(cli) {
        Ok(()) => {
            debug!(command = command_name, exit_code = EXIT_SUCCESS, "completed");
            EXIT_SUCCESS
        }
        Err(err) => {
            let exit_code = classify_runtime_error(&err);
            match err.downcast_ref::<commands::ToolCommandFailure>() {
                Some(failure) => error!(
                    command = command_name,
                    exit_code,
                    tool = failure.tool(),
                    code = failure.code().map_or("unknown", ErrorCode::as_str),
                    "tool reported an error"
                ),
                None => error!(command = command_name, exit_code, "failed"),
            }
            eprintln!("{err:#}");
            exit_code
        }
    }
}

fn init_logging(args: &RuntimeArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().as_str().to_ascii_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

fn execute(cli: Cli) -> Result<()> {
    let pretty = cli.runtime.pretty;
    match cli.command {
        Command::Fetch(args) => {
            let engine = build_engine(&cli.runtime)?;
            commands::fetch::run(&args, &engine, pretty)
        }
        Command::Categories(args) => {
            let engine = build_engine(&cli.runtime)?;
            commands::categories::run(&args, &engine, pretty)
        }
        Command::Agents(args) => {
            let engine = build_engine(&cli.runtime)?;
            commands::agents::run(&args, &engine, pretty)
        }
        Command::Catalog(args) => commands::catalog::run(&args, pretty),
        Command::Schema(args) => commands::schema::run(&args, pretty),
    }
}

fn classify_runtime_error(error: &anyhow::Error) -> i32 {
    if error
        .downcast_ref::<commands::ToolCommandFailure>()
        .is_some()
    {
        EXIT_TOOL_FAILURE
    } else {
        EXIT_RUNTIME_FAILURE
    }
}

fn exit_code_for_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = error.print();
            EXIT_SUCCESS
        }
        _ => {
            let _ = error.print();
            EXIT_USAGE_ERROR
        }
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Fetch(_) => "fetch",
        Command::Categories(_) => "categories",
        Command::Agents(_) => "agents",
        Command::Catalog(_) => "catalog",
        Command::Schema(_) => "schema",
    }
}

fn build_engine(args: &RuntimeArgs) -> Result<TicketQueryEngine> {
    let runtime_paths = resolve_runtime_paths(args)?;
    debug!(dataset = %runtime_paths.dataset_path.display(), "resolved dataset");
    Ok(TicketQueryEngine::new(DatasetSource::new(
        runtime_paths.dataset_path,
    )))
}

fn resolve_runtime_paths(args: &RuntimeArgs) -> Result<RuntimePaths> {
    let home_dir = match &args.home_dir {
        Some(path) => path.clone(),
        None => std::env::var_os("HOME")
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("HOME is not set; pass --home-dir"))?,
    };

    let cwd = match &args.cwd {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };

    ticket_insights::config::resolve_runtime_paths(
        &home_dir,
        &cwd,
        args.dataset.as_deref(),
        std::env::var_os(DATASET_ENV_VAR),
    )
}
