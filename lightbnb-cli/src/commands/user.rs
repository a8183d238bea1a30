//! `user` and `add-user` commands

use anyhow::{bail, Result};
use clap::{Args, Parser};
use lightbnb_db::{Email, NewUser, UserRepo};
use tracing::info;

use super::{print_json, CommandContext};

#[derive(Parser, Debug)]
pub struct UserArgs {
    #[command(flatten)]
    by: UserKey,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct UserKey {
    /// Email address of the user
    #[arg(long)]
    email: Option<Email>,

    /// Numeric user id
    #[arg(long)]
    id: Option<i32>,
}

#[derive(Parser, Debug)]
pub struct AddUserArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// Email address (must be unique in practice)
    #[arg(long)]
    email: Email,

    /// Password value as stored (hash it before passing)
    #[arg(long)]
    password: String,
}

pub async fn run(ctx: &CommandContext, args: UserArgs) -> Result<()> {
    let pool = ctx.connect().await?;
    let users = UserRepo::new(&pool);

    let (user, key) = match (args.by.email, args.by.id) {
        (Some(email), _) => {
            let user = users.get_by_email(&email).await?;
            (user, format!("email {}", email.as_str()))
        }
        (None, Some(id)) => (users.get_by_id(id).await?, format!("id {}", id)),
        (None, None) => bail!("either --email or --id is required"),
    };

    match user {
        Some(user) => print_json(&user),
        None => bail!("No user with {}", key),
    }
}

pub async fn run_add(ctx: &CommandContext, args: AddUserArgs) -> Result<()> {
    let new_user = NewUser {
        name: args.name,
        email: args.email,
        password: args.password,
    };

    let pool = ctx.connect().await?;
    let user = UserRepo::new(&pool).create(&new_user).await?;
    info!(id = user.id, "Created user");
    print_json(&user)
}
