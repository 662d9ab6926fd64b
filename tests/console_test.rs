//! Integration tests for the interactive console, driven by scripted input

use players_selection::{console::Console, storage::*, DatabaseConfig, PlayerId, ScoreId};
use tempfile::TempDir;

fn create_test_db() -> (TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("players.db").display()),
        username: "admin".to_string(),
        password: "secret".to_string(),
    };
    let db = Database::new(&config).unwrap();
    db.initialize().unwrap();
    (dir, db)
}

/// Run a full session over `input` and return everything written to the console.
fn run_session(db: &Database, input: &str) -> String {
    let mut out = Vec::new();
    Console::new(db, input.as_bytes(), &mut out).run().unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_exit_immediately() {
    let (_dir, db) = create_test_db();
    let out = run_session(&db, "0\n");

    assert!(out.starts_with("Select an option:"));
    assert!(out.ends_with("Exiting the application.\n"));
}

#[test]
fn test_end_of_input_exits() {
    let (_dir, db) = create_test_db();
    let out = run_session(&db, "");
    assert!(out.contains("Exiting the application."));
}

#[test]
fn test_invalid_menu_input_reprompts() {
    let (_dir, db) = create_test_db();
    let out = run_session(&db, "abc\n9\n0\n");

    assert!(out.contains("Invalid input!"));
    assert!(out.contains("Invalid option!"));
    assert_eq!(out.matches("Select an option:").count(), 3);
}

#[test]
fn test_end_to_end_session() {
    let (_dir, db) = create_test_db();
    let input = "1\nRao\nMI\n\
                 2\n1\n42\n\
                 3\n1\n\nCSK\n\
                 5\n1\n\
                 0\n";
    let out = run_session(&db, input);

    assert!(out.contains("Player added successfully with ID 1."));
    assert!(out.contains("Score added successfully with ID 1."));
    assert!(out.contains("Player [id=1, name=Rao, domesticTeam=MI, average=0]"));
    assert!(out.contains("Player updated successfully."));
    assert!(out.contains("Player deleted successfully."));

    assert!(PlayerStore::new(&db)
        .find_player(PlayerId::new(1))
        .unwrap()
        .is_none());
    assert!(ScoreStore::new(&db)
        .find_score(ScoreId::new(1))
        .unwrap()
        .is_none());
}

#[test]
fn test_update_player_blank_keeps_values() {
    let (_dir, db) = create_test_db();
    let players = PlayerStore::new(&db);
    let id = players.add_player("Rao", "MI").unwrap();

    let out = run_session(&db, &format!("3\n{id}\n\n\n0\n"));

    assert!(out.contains("Player updated successfully."));
    let player = players.find_player(id).unwrap().unwrap();
    assert_eq!(player.name, "Rao");
    assert_eq!(player.domestic_team, "MI");
}

#[test]
fn test_update_player_name_only() {
    let (_dir, db) = create_test_db();
    let players = PlayerStore::new(&db);
    let id = players.add_player("Rao", "MI").unwrap();

    run_session(&db, &format!("3\n{id}\nSharma\n\n0\n"));

    let player = players.find_player(id).unwrap().unwrap();
    assert_eq!(player.name, "Sharma");
    assert_eq!(player.domestic_team, "MI");
}

#[test]
fn test_update_score_blank_and_value() {
    let (_dir, db) = create_test_db();
    let player_id = PlayerStore::new(&db).add_player("Rao", "MI").unwrap();
    let scores = ScoreStore::new(&db);
    let id = scores.add_score(player_id, 42).unwrap();

    let out = run_session(&db, &format!("4\n{id}\n\n0\n"));
    assert!(out.contains("Score [id=1, playerId=1, score=42]"));
    assert_eq!(scores.find_score(id).unwrap().unwrap().score, 42);

    run_session(&db, &format!("4\n{id}\n77\n0\n"));
    assert_eq!(scores.find_score(id).unwrap().unwrap().score, 77);
}

#[test]
fn test_missing_ids_report_not_found() {
    let (_dir, db) = create_test_db();
    let player_id = PlayerStore::new(&db).add_player("Rao", "MI").unwrap();

    let out = run_session(&db, "3\n99\n4\n99\n5\n99\n6\n99\n0\n");

    assert_eq!(out.matches("Player not found!").count(), 2);
    assert_eq!(out.matches("Score not found!").count(), 2);
    // Nothing else was touched
    let player = PlayerStore::new(&db).find_player(player_id).unwrap().unwrap();
    assert_eq!(player.name, "Rao");
}

#[test]
fn test_malformed_field_input_does_not_end_session() {
    let (_dir, db) = create_test_db();
    let player_id = PlayerStore::new(&db).add_player("Rao", "MI").unwrap();
    let scores = ScoreStore::new(&db);
    let id = scores.add_score(player_id, 42).unwrap();

    let out = run_session(&db, &format!("2\nx\n4\n{id}\nlots\n0\n"));

    assert_eq!(out.matches("Invalid input!").count(), 2);
    assert!(out.ends_with("Exiting the application.\n"));
    assert_eq!(scores.find_score(id).unwrap().unwrap().score, 42);
}

#[test]
fn test_store_error_is_reported_and_loop_continues() {
    let (_dir, db) = create_test_db();

    // No player 5, so the foreign key rejects the insert
    let out = run_session(&db, "2\n5\n10\n1\nRao\nMI\n0\n");

    assert!(out.contains("Error: Database error"));
    assert!(out.contains("Player added successfully with ID 1."));
}

#[test]
fn test_delete_score_via_menu() {
    let (_dir, db) = create_test_db();
    let player_id = PlayerStore::new(&db).add_player("Rao", "MI").unwrap();
    let scores = ScoreStore::new(&db);
    let id = scores.add_score(player_id, 42).unwrap();

    let out = run_session(&db, &format!("6\n{id}\n0\n"));

    assert!(out.contains("Score deleted successfully."));
    assert!(scores.find_score(id).unwrap().is_none());
    assert!(PlayerStore::new(&db).find_player(player_id).unwrap().is_some());
}

#[test]
fn test_non_utf8_menu_input_reprompts() {
    let (_dir, db) = create_test_db();
    let mut out = Vec::new();
    Console::new(&db, &b"\xff\xfe\n1\nRao\nMI\n0\n"[..], &mut out)
        .run()
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Invalid input!"));
    assert!(out.contains("Player added successfully with ID 1."));
    assert!(out.ends_with("Exiting the application.\n"));
}

#[test]
fn test_non_utf8_field_input_abandons_operation() {
    let (_dir, db) = create_test_db();
    let mut out = Vec::new();
    Console::new(&db, &b"1\n\xffRao\nMI\n0\n"[..], &mut out)
        .run()
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Invalid input!"));
    assert!(!out.contains("Player added successfully"));
    assert!(PlayerStore::new(&db)
        .find_player(PlayerId::new(1))
        .unwrap()
        .is_none());
}

#[test]
fn test_delete_player_via_menu_removes_scores() {
    let (_dir, db) = create_test_db();
    let player_id = PlayerStore::new(&db).add_player("Rao", "MI").unwrap();
    let scores = ScoreStore::new(&db);
    scores.add_score(player_id, 1).unwrap();
    scores.add_score(player_id, 2).unwrap();

    let out = run_session(&db, &format!("5\n{player_id}\n0\n"));

    assert!(out.contains("Player deleted successfully."));
    assert!(scores.scores_for_player(player_id).unwrap().is_empty());
}
