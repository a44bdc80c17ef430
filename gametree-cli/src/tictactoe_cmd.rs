//! Tic-tac-toe command - backward induction with strategy-table export
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_position(), write_policies()
//! - Level 3: write_table()

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use gametree_core::{BackwardInduction, Position, Strategies, StrategyTable};

/// File receiving X's strategy table
pub const POLICY_X_FILE: &str = "policy_x.json";
/// File receiving O's strategy table
pub const POLICY_O_FILE: &str = "policy_o.json";

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct TictactoeArgs {
    /// Directory receiving policy_x.json and policy_o.json
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Starting history as comma-separated cells 0-8 (default: empty board)
    #[arg(long, value_delimiter = ',')]
    pub history: Vec<usize>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run tictactoe command
pub fn run(args: TictactoeArgs) -> Result<()> {
    let position = build_position(&args.history)?;

    tracing::info!("Solving tic-tac-toe from history {:?}", args.history);

    let mut solver = BackwardInduction::new();
    let value = solver.solve(&position);
    let strategies = solver.into_strategies();

    let (x_path, o_path) = write_policies(&args.out_dir, &strategies)?;

    println!("Game value: {}", value);
    println!(
        "X strategy: {} decision points -> {}",
        strategies.x.len(),
        x_path.display()
    );
    println!(
        "O strategy: {} decision points -> {}",
        strategies.o.len(),
        o_path.display()
    );

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_position(history: &[usize]) -> Result<Position> {
    Position::from_history(history)
        .with_context(|| format!("Invalid tic-tac-toe history {:?}", history))
}

/// Write both strategy tables into `dir`, returning the two file paths
pub fn write_policies(dir: &Path, strategies: &Strategies) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let x_path = dir.join(POLICY_X_FILE);
    let o_path = dir.join(POLICY_O_FILE);
    write_table(&x_path, &strategies.x)?;
    write_table(&o_path, &strategies.o)?;
    Ok((x_path, o_path))
}

// ============================================================================
// LEVEL 3 - UTILITIES
// ============================================================================

fn write_table(path: &Path, table: &StrategyTable) -> Result<()> {
    let json = table.to_json_string()?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write strategy table: {}", path.display()))?;
    tracing::info!("Saved {} entries to {}", table.len(), path.display());
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
