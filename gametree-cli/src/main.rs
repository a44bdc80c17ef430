//! GAMETREE CLI - Command-line interface
//!
//! Commands:
//! - tictactoe: Solve tic-tac-toe by backward induction and write strategy tables
//! - notakto: Solve multi-board Notakto with alpha-beta and/or memoized maxmin
//! - coins: Solve the coin-row end-picking game

mod coins_cmd;
mod notakto_cmd;
mod tictactoe_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gametree")]
#[command(about = "Exhaustive solvers for small combinatorial games")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve tic-tac-toe and write per-player strategy tables
    Tictactoe(tictactoe_cmd::TictactoeArgs),
    /// Solve Notakto on N boards
    Notakto(notakto_cmd::NotaktoArgs),
    /// Solve the coin-row game
    Coins(coins_cmd::CoinsArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tictactoe(args) => tictactoe_cmd::run(args),
        Commands::Notakto(args) => notakto_cmd::run(args),
        Commands::Coins(args) => coins_cmd::run(args),
    }
}
