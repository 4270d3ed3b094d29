//! The score record survives between sessions in a JSON file

use std::{fs, io::Cursor};

use tempfile::TempDir;
use unbeatable::{
    adapters::JsonScoreRepository,
    cli::{
        commands::play::run_session,
        config::{DEFAULT_SCORES_FILE, PlayConfig, resolve_scores_path},
    },
    ports::ScoreRepository,
    scores::ScoreBoard,
};

fn session(repo: &JsonScoreRepository, input: &str) {
    let config = PlayConfig {
        scores_path: repo.path().to_path_buf(),
        think_ms: 0,
        ..PlayConfig::default()
    };
    let mut out = Vec::new();
    run_session(Cursor::new(input), &mut out, &config, repo).unwrap();
}

#[test]
fn first_run_starts_from_zero() {
    let dir = TempDir::new().unwrap();
    let repo = JsonScoreRepository::new(dir.path().join("scores.json"));
    assert_eq!(repo.load().unwrap(), ScoreBoard::default());
}

#[test]
fn scores_accumulate_across_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("scores.json");
    let repo = JsonScoreRepository::new(&path);

    session(&repo, "0\n1\n2\n3\n4\n5\n6\n7\n8\n");
    assert!(path.exists());
    assert_eq!(repo.load().unwrap().total(), 1);

    // A new repository on the same file sees the earlier game.
    let reopened = JsonScoreRepository::new(&path);
    session(&reopened, "0\n1\n2\n3\n4\n5\n6\n7\n8\n");
    let scores = reopened.load().unwrap();
    assert_eq!(scores.total(), 2);
    assert_eq!(scores.player, 0);
}

#[test]
fn file_uses_readable_field_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.json");
    let repo = JsonScoreRepository::new(&path);
    repo.save(&ScoreBoard {
        player: 0,
        computer: 7,
        ties: 3,
    })
    .unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["player"], 0);
    assert_eq!(json["computer"], 7);
    assert_eq!(json["ties"], 3);
}

#[test]
fn damaged_file_is_replaced_on_next_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.json");
    fs::write(&path, "{ not json").unwrap();

    let repo = JsonScoreRepository::new(&path);
    assert_eq!(repo.load().unwrap(), ScoreBoard::default());

    session(&repo, "0\n1\n2\n3\n4\n5\n6\n7\n8\n");
    assert_eq!(repo.load().unwrap().total(), 1);
}

#[test]
fn partial_file_fills_missing_counts_with_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.json");
    fs::write(&path, r#"{"computer": 4}"#).unwrap();

    let scores = JsonScoreRepository::new(&path).load().unwrap();
    assert_eq!(
        scores,
        ScoreBoard {
            player: 0,
            computer: 4,
            ties: 0
        }
    );
}

#[test]
fn explicit_path_overrides_default() {
    let dir = TempDir::new().unwrap();
    let chosen = dir.path().join("mine.json");
    assert_eq!(resolve_scores_path(Some(chosen.clone())), chosen);
    assert_ne!(chosen.file_name().unwrap(), DEFAULT_SCORES_FILE);
}
