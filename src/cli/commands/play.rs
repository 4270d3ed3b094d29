//! Play command - interactive game against the engine

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    thread,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::{
    adapters::JsonScoreRepository,
    cli::{
        config::{PlayConfig, resolve_scores_path},
        output::{format_scores, render_board},
    },
    ports::ScoreRepository,
    scores::ScoreBoard,
    tictactoe::{Game, GameOutcome, Player, TurnReport},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the computer (you are X and move first)")]
pub struct PlayArgs {
    /// Score file (defaults to $TTT_SCORES, then ./ttt-scores.json)
    #[arg(long)]
    pub scores: Option<PathBuf>,

    /// Pause before the computer moves, in milliseconds
    #[arg(long, default_value_t = 250)]
    pub think_ms: u64,

    /// Number cells 1-9 instead of 0-8
    #[arg(long)]
    pub one_based: bool,

    /// Do not write the score file
    #[arg(long)]
    pub no_save: bool,
}

impl From<PlayArgs> for PlayConfig {
    fn from(args: PlayArgs) -> Self {
        PlayConfig {
            scores_path: resolve_scores_path(args.scores),
            think_ms: args.think_ms,
            one_based: args.one_based,
            persist: !args.no_save,
        }
    }
}

/// A line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(usize),
    Restart,
    ResetScores,
    Help,
    Quit,
}

/// Parse a line of input. Cell numbers follow the configured numbering.
pub fn parse_command(line: &str, one_based: bool) -> Result<Command, String> {
    let trimmed = line.trim().to_lowercase();
    match trimmed.as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "r" | "restart" => return Ok(Command::Restart),
        "reset" => return Ok(Command::ResetScores),
        "h" | "help" | "?" => return Ok(Command::Help),
        _ => {}
    }

    let (low, high) = if one_based { (1, 9) } else { (0, 8) };
    let number: usize = trimmed
        .parse()
        .map_err(|_| format!("'{}' is not a command or a cell number", line.trim()))?;
    if !(low..=high).contains(&number) {
        return Err(format!("cells are numbered {low}-{high}"));
    }
    Ok(Command::Move(number - low))
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = PlayConfig::from(args);
    let repo = JsonScoreRepository::new(&config.scores_path);
    let stdin = io::stdin();
    run_session(stdin.lock(), io::stdout().lock(), &config, &repo)
}

/// Drive games from `input` until it ends or the player quits.
///
/// Returns after the input is exhausted; the score record is saved after
/// every finished game when `config.persist` is set.
pub fn run_session<R, W>(
    input: R,
    mut out: W,
    config: &PlayConfig,
    repo: &dyn ScoreRepository,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut scores = repo.load().context("failed to load scores")?;
    let mut game = Game::new();

    writeln!(out, "{}", format_scores(&scores))?;
    print_help(&mut out, config)?;
    writeln!(out, "\n{}", render_board(game.board(), config.one_based))?;
    prompt(&mut out, &game)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            prompt(&mut out, &game)?;
            continue;
        }

        match parse_command(&line, config.one_based) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => print_help(&mut out, config)?,
            Ok(Command::Restart) => {
                game.restart();
                writeln!(out, "\n{}", render_board(game.board(), config.one_based))?;
            }
            Ok(Command::ResetScores) => {
                scores.reset();
                store(repo, config, &scores)?;
                writeln!(out, "{}", format_scores(&scores))?;
            }
            Ok(Command::Move(position)) => {
                play_round(&mut game, position, &mut scores, config, repo, &mut out)?;
            }
            Err(message) => writeln!(out, "{message}")?,
        }

        prompt(&mut out, &game)?;
    }

    writeln!(out)?;
    Ok(())
}

fn play_round<W: Write>(
    game: &mut Game,
    position: usize,
    scores: &mut ScoreBoard,
    config: &PlayConfig,
    repo: &dyn ScoreRepository,
    out: &mut W,
) -> Result<()> {
    let report = match game.play_human(position) {
        Ok(report) => report,
        Err(err) => {
            writeln!(out, "{err}")?;
            return Ok(());
        }
    };
    writeln!(out, "\n{}", render_board(game.board(), config.one_based))?;
    if finish_if_over(report, scores, config, repo, out)? {
        return Ok(());
    }

    writeln!(out, "Computer's turn (O)")?;
    out.flush()?;
    if config.think_ms > 0 {
        thread::sleep(config.think_delay());
    }

    let reply = game.play_computer()?;
    debug!(position = reply.position, "computer moved");
    writeln!(
        out,
        "Computer plays {}\n\n{}",
        config.cell_label(reply.position),
        render_board(game.board(), config.one_based)
    )?;
    finish_if_over(reply, scores, config, repo, out)?;
    Ok(())
}

fn finish_if_over<W: Write>(
    report: TurnReport,
    scores: &mut ScoreBoard,
    config: &PlayConfig,
    repo: &dyn ScoreRepository,
    out: &mut W,
) -> Result<bool> {
    let Some(outcome) = report.outcome else {
        return Ok(false);
    };

    let message = match outcome {
        GameOutcome::Win(Player::X) => "You win! 🎉",
        GameOutcome::Win(Player::O) => "Computer wins! 🤖",
        GameOutcome::Draw => "It's a draw!",
    };
    scores.record(outcome);
    store(repo, config, scores)?;

    writeln!(out, "{message}\n{}", format_scores(scores))?;
    Ok(true)
}

fn store(repo: &dyn ScoreRepository, config: &PlayConfig, scores: &ScoreBoard) -> Result<()> {
    if config.persist {
        repo.save(scores).with_context(|| {
            format!("failed to save scores to {}", config.scores_path.display())
        })?;
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W, game: &Game) -> Result<()> {
    if game.is_active() {
        write!(out, "Your turn (X)> ")?;
    } else {
        write!(out, "Game over: 'r' to play again, 'q' to quit> ")?;
    }
    out.flush()?;
    Ok(())
}

fn print_help<W: Write>(out: &mut W, config: &PlayConfig) -> Result<()> {
    let (low, high) = if config.one_based { (1, 9) } else { (0, 8) };
    writeln!(
        out,
        "Enter a cell number ({low}-{high}) to move, 'r' to restart, 'reset' to clear scores, 'q' to quit."
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_zero_based_moves() {
        assert_eq!(parse_command("4", false), Ok(Command::Move(4)));
        assert_eq!(parse_command(" 0 ", false), Ok(Command::Move(0)));
        assert!(parse_command("9", false).is_err());
    }

    #[test]
    fn parses_one_based_moves() {
        assert_eq!(parse_command("1", true), Ok(Command::Move(0)));
        assert_eq!(parse_command("9", true), Ok(Command::Move(8)));
        assert!(parse_command("0", true).is_err());
    }

    #[test]
    fn parses_words() {
        assert_eq!(parse_command("Q", false), Ok(Command::Quit));
        assert_eq!(parse_command("restart", false), Ok(Command::Restart));
        assert_eq!(parse_command("reset", false), Ok(Command::ResetScores));
        assert_eq!(parse_command("?", false), Ok(Command::Help));
        assert!(parse_command("center", false).is_err());
    }
}
