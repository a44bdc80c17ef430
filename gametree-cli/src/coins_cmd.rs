//! Coins command - solve the coin-row end-picking game

use anyhow::Result;
use clap::Args;

use gametree_core::coins::{best_difference, Outcome};

#[derive(Args)]
pub struct CoinsArgs {
    /// Row of values, comma-separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
    pub values: Vec<i64>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run coins command
pub fn run(args: CoinsArgs) -> Result<()> {
    let difference = best_difference(&args.values);
    let outcome = Outcome::from_difference(difference);
    tracing::info!("Coin row of {} values: difference={}", args.values.len(), difference);

    if args.json {
        #[derive(serde::Serialize)]
        struct JsonOutput {
            difference: i64,
            outcome: Outcome,
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOutput {
                difference,
                outcome
            })?
        );
    } else {
        println!("{}", outcome_label(outcome));
    }

    Ok(())
}

fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Player1 => "Player 1",
        Outcome::Player2 => "Player 2",
        Outcome::Draw => "Draw",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_label() {
        assert_eq!(outcome_label(Outcome::from_difference(7)), "Player 1");
        assert_eq!(outcome_label(Outcome::from_difference(-2)), "Player 2");
        assert_eq!(outcome_label(Outcome::from_difference(0)), "Draw");
    }
}
