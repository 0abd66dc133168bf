#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::app::{Cli, Command};
pub use dataset::{Dataset, DatasetSource};
pub use engine::TicketQueryEngine;
pub use error::EngineError;
