//! Command-line frontend: parse arguments, run the lookup, print one line.

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::{prelude::*, EnvFilter};

use psnow_core::{find_current_game, parse_account_args, PsnClient, NOT_PLAYING};

/// Print the game the first online account in a list is currently playing.
///
/// Queries the PlayStation Network presence of each account in order and
/// prints the first online account's current game title, or `Not playing`
/// when no account qualifies.
#[derive(Debug, Parser)]
#[command(name = "psnow", version)]
struct Cli {
    /// NPSSO credential used to authenticate against the network.
    npsso: String,

    /// Account identifiers to check, in priority order. Each argument may
    /// be a comma-separated list; `[`, `]` and `"` are stripped as
    /// decoration, so `["id1","id2"]` and `id1,id2` are equivalent.
    #[arg(required = true)]
    accounts: Vec<String>,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let account_ids = parse_account_args(&cli.accounts);
    if account_ids.is_empty() {
        bail!("no account identifiers given after stripping decoration");
    }

    let client = PsnClient::new(cli.npsso);
    let title = find_current_game(&client, &account_ids)?;

    match title {
        Some(title) => println!("{}", title.name),
        None => println!("{NOT_PLAYING}"),
    }

    Ok(())
}

/// Diagnostics go to stderr so stdout stays a single result line.
fn init_logging() {
    let env_filter = EnvFilter::from_default_env();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
