use crate::domain::fixtures::{
    build, dream_team, dream_team_players, player, MATCH_ID, TEAM_A, TEAM_B,
};
use crate::domain::RoleCategory::{Batter, Bowler, BowlingAllrounder, WkBatter};
use crate::domain::{
    can_add, remove, role_counts, set_captain, set_vice_captain, toggle, AddDecision,
    AddRejection, SelectionState, ToggleOutcome,
};

#[test]
fn new_selection_is_empty() {
    let state = SelectionState::new(MATCH_ID);
    assert!(state.is_empty());
    assert_eq!(state.match_id(), MATCH_ID);
    assert_eq!(state.captain_id(), None);
    assert_eq!(state.vice_captain_id(), None);
    assert_eq!(state.team_name(), "");
}

#[test]
fn allowed_add_appends_without_touching_input() {
    let state = SelectionState::new(MATCH_ID);
    let p = player(1, Batter, TEAM_A);

    let next = match can_add(&state, &p) {
        AddDecision::Allowed(next) => next,
        other => panic!("expected Allowed, got {other:?}"),
    };
    assert_eq!(next.players(), &[p]);
    assert!(state.is_empty(), "input state must not change");
}

#[test]
fn duplicate_add_is_rejected() {
    let state = build(&[player(1, Batter, TEAM_A)]);
    let decision = can_add(&state, &player(1, Batter, TEAM_A));
    assert_eq!(
        decision.rejection(),
        Some(AddRejection::DuplicateSelection)
    );
}

#[test]
fn twelfth_player_is_rejected_as_roster_full() {
    let state = build(&dream_team_players());
    assert_eq!(state.len(), 11);

    let decision = can_add(&state, &player(12, Bowler, TEAM_A));
    assert_eq!(decision.rejection(), Some(AddRejection::RosterFull));
}

#[test]
fn eighth_player_from_one_side_is_rejected() {
    let side_a: Vec<_> = (1..=7).map(|id| player(id, Batter, TEAM_A)).collect();
    let state = build(&side_a);
    assert_eq!(state.team_count(TEAM_A), 7);

    let decision = can_add(&state, &player(8, Bowler, TEAM_A));
    assert_eq!(
        decision.rejection(),
        Some(AddRejection::TeamCapExceeded { team_id: TEAM_A })
    );

    // The other side is still open.
    assert!(can_add(&state, &player(9, Bowler, TEAM_B)).is_allowed());
}

#[test]
fn full_roster_reports_roster_full_before_team_cap() {
    let mut players: Vec<_> = (1..=7).map(|id| player(id, Batter, TEAM_A)).collect();
    players.extend((8..=11).map(|id| player(id, Bowler, TEAM_B)));
    let state = build(&players);

    let decision = can_add(&state, &player(12, Bowler, TEAM_A));
    assert_eq!(decision.rejection(), Some(AddRejection::RosterFull));
}

#[test]
fn removing_captain_clears_only_captain() {
    let state = dream_team();
    assert_eq!(state.captain_id(), Some(1));
    assert_eq!(state.vice_captain_id(), Some(2));

    let next = remove(&state, 1);
    assert_eq!(next.len(), 10);
    assert_eq!(next.captain_id(), None);
    assert_eq!(next.vice_captain_id(), Some(2));
}

#[test]
fn removing_vice_captain_clears_only_vice_captain() {
    let next = remove(&dream_team(), 2);
    assert_eq!(next.captain_id(), Some(1));
    assert_eq!(next.vice_captain_id(), None);
}

#[test]
fn removing_unknown_player_is_noop() {
    let state = dream_team();
    assert_eq!(remove(&state, 404), state);
}

#[test]
fn removal_keeps_selection_order() {
    let state = build(&dream_team_players());
    let next = remove(&state, 5);
    let ids: Vec<_> = next.players().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 6, 7, 8, 9, 10, 11]);
}

#[test]
fn toggle_adds_then_removes() {
    let state = SelectionState::new(MATCH_ID);
    let p = player(3, WkBatter, TEAM_B);

    let added = match toggle(&state, &p) {
        ToggleOutcome::Added(s) => s,
        other => panic!("expected Added, got {other:?}"),
    };
    assert!(added.contains(3));

    let removed = match toggle(&added, &p) {
        ToggleOutcome::Removed(s) => s,
        other => panic!("expected Removed, got {other:?}"),
    };
    assert!(!removed.contains(3));
}

#[test]
fn rejected_toggle_keeps_current_state() {
    let state = build(&dream_team_players());
    let outcome = toggle(&state, &player(12, Bowler, TEAM_A));
    assert_eq!(outcome, ToggleOutcome::Rejected(AddRejection::RosterFull));
    assert_eq!(outcome.into_state(&state), state);
}

#[test]
fn captain_requires_selected_player() {
    let state = build(&[player(1, Batter, TEAM_A)]);
    assert_eq!(set_captain(&state, 2), state);
    assert_eq!(set_vice_captain(&state, 2), state);
}

#[test]
fn promoting_vice_captain_clears_vice_captaincy() {
    let state = dream_team();
    let next = set_captain(&state, 2);
    assert_eq!(next.captain_id(), Some(2));
    assert_eq!(next.vice_captain_id(), None);
}

#[test]
fn demoting_captain_to_vice_clears_captaincy() {
    let state = dream_team();
    let next = set_vice_captain(&state, 1);
    assert_eq!(next.vice_captain_id(), Some(1));
    assert_eq!(next.captain_id(), None);
}

#[test]
fn setting_captain_twice_toggles_off() {
    let state = build(&dream_team_players());
    let once = set_captain(&state, 7);
    assert_eq!(once.captain_id(), Some(7));
    let twice = set_captain(&once, 7);
    assert_eq!(twice.captain_id(), None);

    let vc_once = set_vice_captain(&state, 8);
    assert_eq!(set_vice_captain(&vc_once, 8).vice_captain_id(), None);
}

#[test]
fn role_counts_follow_categories() {
    let counts = role_counts(&build(&dream_team_players()));
    assert_eq!(counts.get(WkBatter), 1);
    assert_eq!(counts.get(Batter), 4);
    assert_eq!(counts.get(BowlingAllrounder), 3);
    assert_eq!(counts.get(Bowler), 3);
    assert_eq!(counts.total(), 11);
}
