mod common;

use common::{RecordingHost, manager_with_players, memory_manager};
use rusty_scorecard::ScorecardError;
use rusty_scorecard::model::{NUM_HOLES, RoundPhase};
use rusty_scorecard::mvu::round::{INVALID_SCORE_MESSAGE, RESET_PROMPT};
use rusty_scorecard::storage::{CURRENT_HOLE_KEY, KeyValueStore, PLAYERS_KEY, SCORES_KEY};

#[test]
fn test_add_player_keeps_rows_aligned() -> Result<(), ScorecardError> {
    let mut manager = memory_manager();
    let mut host = RecordingHost::default();

    for (i, name) in ["Alice", "Bob", "Alice", " Cara "].iter().enumerate() {
        manager.add_player(name, &mut host)?;
        let state = manager.state();
        assert_eq!(state.players().len(), i + 1);
        assert_eq!(state.players().len(), state.scores().len());
        assert_eq!(state.scores()[i], [0; NUM_HOLES]);
    }

    // duplicates are distinct players, names are trimmed
    assert_eq!(manager.state().players(), ["Alice", "Bob", "Alice", "Cara"]);
    assert!(!manager.state().started);
    Ok(())
}

#[test]
fn test_blank_player_is_ignored_without_writing() -> Result<(), ScorecardError> {
    let mut manager = memory_manager();
    let mut host = RecordingHost::default();

    manager.add_player("", &mut host)?;
    manager.add_player("   ", &mut host)?;

    assert!(manager.state().players().is_empty());
    assert!(manager.state().scores().is_empty());
    assert_eq!(manager.store().writes(), 0);
    Ok(())
}

#[test]
fn test_add_player_persists_every_key() -> Result<(), ScorecardError> {
    let manager = manager_with_players(&["Alice"]);
    let store = manager.store();

    assert_eq!(store.get(PLAYERS_KEY)?.as_deref(), Some(r#"["Alice"]"#));
    assert_eq!(
        store.get(SCORES_KEY)?.as_deref(),
        Some("[[0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0]]")
    );
    assert_eq!(store.get(CURRENT_HOLE_KEY)?.as_deref(), Some("1"));
    Ok(())
}

#[test]
fn test_start_round_needs_a_player() -> Result<(), ScorecardError> {
    let mut manager = memory_manager();
    let mut host = RecordingHost::default();

    manager.start_round(&mut host)?;
    assert!(!manager.state().started);
    assert_eq!(manager.state().phase(), RoundPhase::NotStarted);

    manager.add_player("Alice", &mut host)?;
    let writes_before = manager.store().writes();
    manager.start_round(&mut host)?;
    assert!(manager.state().started);
    assert_eq!(manager.state().phase(), RoundPhase::Active);
    // starting does not persist anything new
    assert_eq!(manager.store().writes(), writes_before);
    Ok(())
}

#[test]
fn test_add_player_is_ignored_once_started() -> Result<(), ScorecardError> {
    let mut manager = manager_with_players(&["Alice"]);
    let mut host = RecordingHost::default();
    manager.start_round(&mut host)?;
    let writes_before = manager.store().writes();

    manager.add_player("Late Larry", &mut host)?;

    assert_eq!(manager.state().players(), ["Alice"]);
    assert_eq!(manager.store().writes(), writes_before);
    Ok(())
}

#[test]
fn test_example_scenario() -> Result<(), ScorecardError> {
    let mut manager = manager_with_players(&["Alice", "Bob"]);
    let mut host = RecordingHost::default();
    assert_eq!(manager.state().scores(), [[0; NUM_HOLES], [0; NUM_HOLES]]);
    assert!(!manager.state().started);

    manager.start_round(&mut host)?;
    assert!(manager.state().started);

    manager.record_score(0, 0, "4", &mut host)?;
    assert_eq!(manager.state().score(0, 0), Some(4));
    assert_eq!(manager.state().total_for(0), Some(4));

    let bob_before = manager.state().scores()[1];
    manager.record_score(1, 17, "abc", &mut host)?;
    assert_eq!(manager.state().scores()[1], bob_before);
    assert_eq!(host.alerts, vec![INVALID_SCORE_MESSAGE.to_string()]);
    Ok(())
}

#[test]
fn test_invalid_score_notifies_once_and_reverts() -> Result<(), ScorecardError> {
    let mut manager = manager_with_players(&["Alice"]);
    let mut host = RecordingHost::default();
    manager.record_score(0, 3, "5", &mut host)?;
    let scores_before = manager.state().scores().to_vec();
    let writes_before = manager.store().writes();

    manager.record_score(0, 3, "five", &mut host)?;

    assert_eq!(manager.state().scores(), scores_before.as_slice());
    assert_eq!(host.alerts.len(), 1);
    assert_eq!(host.reverts, vec![(0, 3, 5)]);
    assert_eq!(manager.store().writes(), writes_before);
    Ok(())
}

#[test]
fn test_blank_score_is_rejected() -> Result<(), ScorecardError> {
    let mut manager = manager_with_players(&["Alice"]);
    let mut host = RecordingHost::default();
    manager.record_score(0, 0, "6", &mut host)?;

    manager.record_score(0, 0, "", &mut host)?;

    assert_eq!(manager.state().score(0, 0), Some(6));
    assert_eq!(host.alerts.len(), 1);
    Ok(())
}

#[test]
fn test_score_overwrites_and_truncates() -> Result<(), ScorecardError> {
    let mut manager = manager_with_players(&["Alice"]);
    let mut host = RecordingHost::default();

    manager.record_score(0, 8, "3", &mut host)?;
    manager.record_score(0, 8, "0", &mut host)?;
    assert_eq!(manager.state().score(0, 8), Some(0));

    manager.record_score(0, 9, "5.8", &mut host)?;
    assert_eq!(manager.state().score(0, 9), Some(5));
    assert!(host.alerts.is_empty());
    Ok(())
}

#[test]
fn test_score_outside_grid_is_an_error() {
    let mut manager = manager_with_players(&["Alice"]);
    let mut host = RecordingHost::default();

    let res = manager.record_score(1, 0, "4", &mut host);
    assert!(matches!(
        res,
        Err(ScorecardError::CellOutOfRange { player: 1, hole: 0 })
    ));
    let res = manager.record_score(0, NUM_HOLES, "4", &mut host);
    assert!(matches!(res, Err(ScorecardError::CellOutOfRange { .. })));
    assert!(host.alerts.is_empty());
}

#[test]
fn test_reset_after_confirmation_clears_everything() -> Result<(), ScorecardError> {
    let mut manager = manager_with_players(&["Alice", "Bob"]);
    let mut host = RecordingHost::answering(true);
    manager.start_round(&mut host)?;
    manager.record_score(1, 2, "7", &mut host)?;

    manager.reset_round(&mut host)?;

    assert_eq!(host.confirms, vec![RESET_PROMPT.to_string()]);
    let state = manager.state();
    assert!(state.players().is_empty());
    assert!(state.scores().is_empty());
    assert_eq!(state.current_hole, 1);
    assert!(!state.started);
    let store = manager.store();
    assert!(store.is_empty());
    for key in [PLAYERS_KEY, SCORES_KEY, CURRENT_HOLE_KEY] {
        assert_eq!(store.get(key)?, None);
    }
    Ok(())
}

#[test]
fn test_declined_reset_changes_nothing() -> Result<(), ScorecardError> {
    let mut manager = manager_with_players(&["Alice"]);
    let mut host = RecordingHost::answering(false);
    manager.start_round(&mut host)?;
    let before = manager.state().clone();
    let writes_before = manager.store().writes();

    manager.reset_round(&mut host)?;

    assert_eq!(host.confirms.len(), 1);
    assert_eq!(manager.state(), &before);
    assert_eq!(manager.store().writes(), writes_before);
    Ok(())
}

#[test]
fn test_new_round_after_reset() -> Result<(), ScorecardError> {
    let mut manager = manager_with_players(&["Alice"]);
    let mut host = RecordingHost::answering(true);
    manager.start_round(&mut host)?;
    manager.reset_round(&mut host)?;

    manager.add_player("Dana", &mut host)?;
    manager.start_round(&mut host)?;

    assert_eq!(manager.state().players(), ["Dana"]);
    assert!(manager.state().started);
    Ok(())
}
