//! `search` command

use anyhow::Result;
use clap::Parser;
use lightbnb_db::query::property_search;
use lightbnb_db::{PropertyRepo, SearchCriteria};

use super::{print_json, CommandContext};

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// City substring to match
    #[arg(long)]
    city: Option<String>,

    /// Only properties owned by this user id
    #[arg(long)]
    owner_id: Option<i32>,

    /// Minimum nightly price in dollars
    #[arg(long, value_name = "DOLLARS")]
    min_price: Option<i64>,

    /// Maximum nightly price in dollars
    #[arg(long, value_name = "DOLLARS")]
    max_price: Option<i64>,

    /// Minimum average rating (inclusive)
    #[arg(long)]
    min_rating: Option<f64>,

    /// Maximum number of results (default from config, else 10)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    limit: Option<u32>,

    /// Print the SQL and parameters instead of running the query
    #[arg(long)]
    dry_run: bool,
}

impl SearchArgs {
    fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            city: self.city.clone(),
            owner_id: self.owner_id,
            minimum_price_per_night: self.min_price,
            maximum_price_per_night: self.max_price,
            minimum_rating: self.min_rating,
        }
    }
}

pub async fn run(ctx: &CommandContext, args: SearchArgs) -> Result<()> {
    let limit = ctx.limit(args.limit)?;
    let plan = property_search(&args.criteria(), limit);

    if args.dry_run {
        return print_json(&plan);
    }

    let pool = ctx.connect().await?;
    let listings = PropertyRepo::new(&pool).run_search(&plan).await?;
    print_json(&listings)
}
