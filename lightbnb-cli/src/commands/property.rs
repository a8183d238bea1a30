//! `add-property` command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lightbnb_db::{NewProperty, PropertyRepo};
use tracing::info;

use super::{print_json, CommandContext};

#[derive(Parser, Debug)]
pub struct AddPropertyArgs {
    /// JSON file with the property fields (cost_per_night in cents)
    #[arg(long, value_name = "FILE")]
    from: PathBuf,
}

pub async fn run(ctx: &CommandContext, args: AddPropertyArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.from)
        .with_context(|| format!("Failed to read {}", args.from.display()))?;
    let property: NewProperty = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid property JSON in {}", args.from.display()))?;

    let pool = ctx.connect().await?;
    let created = PropertyRepo::new(&pool).create(&property).await?;
    info!(id = created.id, "Created property");
    print_json(&created)
}
