//! `reservations` command

use anyhow::Result;
use clap::Parser;
use lightbnb_db::ReservationRepo;

use super::{print_json, CommandContext};

#[derive(Parser, Debug)]
pub struct ReservationsArgs {
    /// Guest (user) id
    #[arg(long)]
    guest_id: i32,

    /// Maximum number of reservations (default from config, else 10)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    limit: Option<u32>,
}

pub async fn run(ctx: &CommandContext, args: ReservationsArgs) -> Result<()> {
    let limit = ctx.limit(args.limit)?;
    let pool = ctx.connect().await?;

    let reservations = ReservationRepo::new(&pool)
        .list_for_guest(args.guest_id, limit)
        .await?;
    print_json(&reservations)
}
