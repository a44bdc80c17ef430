//! Notakto command - alpha-beta and memoized maxmin solves
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: solve(), report()
//! - Level 3: formatting utilities

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use gametree_core::{AlphaBetaConfig, AlphaBetaSolver, MaxminSolver, NotaktoPosition};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

/// Which solver(s) to run
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SolverChoice {
    AlphaBeta,
    Maxmin,
    /// Run both and require agreement
    Both,
}

#[derive(Args)]
pub struct NotaktoArgs {
    /// Number of 3x3 boards
    #[arg(long, default_value = "2")]
    pub boards: usize,

    /// Starting history as comma-separated global cell indices
    #[arg(long, value_delimiter = ',')]
    pub history: Vec<usize>,

    /// Solver to run
    #[arg(long, value_enum, default_value = "both")]
    pub solver: SolverChoice,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Alpha-beta outcome
#[derive(Clone, Debug, Serialize)]
pub struct AlphaBetaReport {
    pub value: f64,
    pub visited: usize,
}

/// Maxmin outcome
#[derive(Clone, Debug, Serialize)]
pub struct MaxminReport {
    pub value: f64,
    pub entries: usize,
    pub hits: u64,
}

/// Combined solve results
#[derive(Clone, Debug, Serialize)]
pub struct NotaktoReport {
    pub boards: usize,
    pub history: Vec<usize>,
    pub alpha_beta: Option<AlphaBetaReport>,
    pub maxmin: Option<MaxminReport>,
    /// 1 or 2
    pub winner: u8,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run notakto command
pub fn run(args: NotaktoArgs) -> Result<()> {
    let position = NotaktoPosition::from_history(args.boards, &args.history)
        .with_context(|| format!("Invalid Notakto history {:?}", args.history))?;

    tracing::info!(
        "Solving Notakto: {} boards, history {:?}, solver {:?}",
        args.boards,
        args.history,
        args.solver
    );

    let report = solve(&position, args.solver)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text_report(&report);
    }

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Solve `position` with the chosen solver(s)
pub fn solve(position: &NotaktoPosition, choice: SolverChoice) -> Result<NotaktoReport> {
    let maximizing = position.history().len() % 2 == 0;

    let alpha_beta = matches!(choice, SolverChoice::AlphaBeta | SolverChoice::Both).then(|| {
        let mut solver = AlphaBetaSolver::new(AlphaBetaConfig::default());
        let value = solver.solve_full(position, maximizing);
        AlphaBetaReport {
            value,
            visited: solver.visited().len(),
        }
    });

    let maxmin = matches!(choice, SolverChoice::Maxmin | SolverChoice::Both).then(|| {
        let mut solver = MaxminSolver::new();
        let value = solver.solve(position, maximizing);
        MaxminReport {
            value,
            entries: solver.table().len(),
            hits: solver.table().hits(),
        }
    });

    if let (Some(ab), Some(mm)) = (&alpha_beta, &maxmin) {
        if ab.value != mm.value {
            bail!("Solvers disagree: alpha-beta={} maxmin={}", ab.value, mm.value);
        }
    }
    let value = alpha_beta
        .as_ref()
        .map(|r| r.value)
        .or_else(|| maxmin.as_ref().map(|r| r.value))
        .context("No solver selected")?;

    Ok(NotaktoReport {
        boards: position.num_boards(),
        history: position.history().to_vec(),
        alpha_beta,
        maxmin,
        winner: winner_for(value),
    })
}

// ============================================================================
// LEVEL 3 - UTILITIES
// ============================================================================

fn winner_for(value: f64) -> u8 {
    if value > 0.0 {
        1
    } else {
        2
    }
}

fn print_text_report(report: &NotaktoReport) {
    println!("\n=== Notakto ({} boards) ===", report.boards);
    if let Some(ab) = &report.alpha_beta {
        println!("Alpha-beta value: {}", ab.value);
        println!("Histories visited: {}", ab.visited);
    }
    if let Some(mm) = &report.maxmin {
        println!("Maxmin value:     {}", mm.value);
        println!("Board positions:  {} ({} cache hits)", mm.entries, mm.hits);
    }
    println!("Winner under perfect play: Player {}", report.winner);
}

// ============================================================================
// TESTS
// ============================================================================
