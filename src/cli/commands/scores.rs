//! Scores command - show or clear the score record

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::JsonScoreRepository,
    cli::{config::resolve_scores_path, output::format_scores},
    ports::ScoreRepository,
    scores::ScoreBoard,
};

#[derive(Parser, Debug)]
#[command(about = "Show or reset the score record")]
pub struct ScoresArgs {
    /// Score file (defaults to $TTT_SCORES, then ./ttt-scores.json)
    #[arg(long)]
    pub scores: Option<PathBuf>,

    /// Clear the record
    #[arg(long)]
    pub reset: bool,
}

pub fn execute(args: ScoresArgs) -> Result<()> {
    let path = resolve_scores_path(args.scores);
    let repo = JsonScoreRepository::new(&path);

    let scores = if args.reset {
        let cleared = ScoreBoard::default();
        repo.save(&cleared)
            .with_context(|| format!("failed to reset {}", path.display()))?;
        cleared
    } else {
        repo.load()
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    println!("{}", format_scores(&scores));
    Ok(())
}
