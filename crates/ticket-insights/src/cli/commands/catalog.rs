use anyhow::Result;
use clap::Args;

use crate::models::tool_catalog;

#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {}

pub fn run(_args: &CatalogArgs, pretty: bool) -> Result<()> {
    println!("{}", super::encode_json(&tool_catalog(), pretty)?);
    Ok(())
}
