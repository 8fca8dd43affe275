#[path = "../common/mod.rs"]
mod common;

use common::processor_command;
use squad_progression::io::MatchdayOutput;
use std::fs;
use tempfile::tempdir;

const MATCHDAY: &str = r#"{
    "played_at": "2024-08-17T15:00:00+01:00",
    "players": [
        { "player_id": 1, "name": "Rafael", "current_rating": 550, "potential_rating": 800,
          "history": [530, 541, 550] },
        { "player_id": 2, "current_rating": 850, "potential_rating": 950 },
        { "player_id": 3, "current_rating": 580, "potential_rating": 800, "badges": ["Trabalhador"] },
        { "player_id": 4, "current_rating": 720, "potential_rating": 850, "badges": ["Consistente", "Capitão"] },
        { "player_id": 5, "current_rating": 700, "potential_rating": 750 }
    ],
    "performances": [
        { "player_id": 1, "phase_grade": 9.0 },
        { "player_id": 2, "phase_grade": 4.0 },
        { "player_id": 3, "phase_grade": 8.5 },
        { "player_id": 4, "phase_grade": 5.0 }
    ]
}"#;

/// Test that a full match day is processed and written to the output file
#[test]
fn test_matchday_report_written_to_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("matchday.json"), MATCHDAY).unwrap();

    let output = processor_command(dir.path())
        .args(["--input", "matchday.json", "--output", "report.json", "--history-length", "3"])
        .output()
        .expect("Failed to execute processor");

    assert!(
        output.status.success(),
        "Processor failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let report: MatchdayOutput =
        serde_json::from_str(&fs::read_to_string(dir.path().join("report.json")).unwrap()).unwrap();

    let after = report
        .outcomes
        .iter()
        .map(|o| (o.player_id, o.rating_after))
        .collect::<Vec<_>>();
    assert_eq!(after, vec![(1, 573), (2, 849), (3, 603), (4, 718)]);

    // Player 5 did not play and is carried over untouched
    let bench = report.players.iter().find(|p| p.player_id == 5).unwrap();
    assert_eq!(bench.current_rating, 700);
    assert!(bench.history.is_empty());

    let rafael = report.players.iter().find(|p| p.player_id == 1).unwrap();
    assert_eq!(rafael.current_rating, 573);
    assert_eq!(rafael.history, vec![541, 550, 573]);
    assert!(report.played_at.is_some());
}

/// Test that the report goes to stdout when no output file is given
#[test]
fn test_matchday_report_written_to_stdout() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("matchday.json"), MATCHDAY).unwrap();

    let output = processor_command(dir.path())
        .env("MATCHDAY_INPUT", "matchday.json")
        .output()
        .expect("Failed to execute processor");

    assert!(output.status.success());

    let report: MatchdayOutput = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report.outcomes.len(), 4);
    assert_eq!(report.players.len(), 5);
}

/// Test that a config file overrides the game balance
#[test]
fn test_config_file_overrides_balance() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("matchday.json"), MATCHDAY).unwrap();
    fs::write(dir.path().join("balance.json"), r#"{ "base_multiplier": 0.0 }"#).unwrap();

    let output = processor_command(dir.path())
        .args(["-i", "matchday.json", "-c", "balance.json"])
        .output()
        .expect("Failed to execute processor");

    assert!(output.status.success());

    let report: MatchdayOutput = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report.outcomes.iter().all(|o| o.delta == 0));
}

/// Test that the application exits with error code when a performance names an unknown player
#[test]
fn test_application_exits_on_unknown_player() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("matchday.json"),
        r#"{
            "players": [ { "player_id": 1, "current_rating": 600, "potential_rating": 700 } ],
            "performances": [ { "player_id": 42, "phase_grade": 7.5 } ]
        }"#
    )
    .unwrap();

    let output = processor_command(dir.path())
        .args(["-i", "matchday.json", "-o", "report.json"])
        .output()
        .expect("Failed to execute processor");

    assert!(!output.status.success(), "Process should fail on unknown player");
    assert!(!dir.path().join("report.json").exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unknown player 42"),
        "Should report the unknown player. Got: {}",
        stderr
    );
}

/// Test that the application exits with error code when the input file is missing
#[test]
fn test_application_exits_on_missing_input() {
    let dir = tempdir().unwrap();

    let output = processor_command(dir.path())
        .args(["-i", "missing.json"])
        .output()
        .expect("Failed to execute processor");

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to access missing.json"), "Got: {}", stderr);
}

/// Test that the application refuses to start without an input file
#[test]
fn test_application_exits_without_input_argument() {
    let dir = tempdir().unwrap();

    let output = processor_command(dir.path()).output().expect("Failed to execute processor");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--input"));
}
