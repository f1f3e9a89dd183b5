use crate::domain::fixtures::{build, dream_team, dream_team_players, player, MATCH_ID, TEAM_A};
use crate::domain::RoleCategory::Batter;
use crate::domain::{build_submission, set_captain, RolePolicy, SelectionState, SubmissionPayload};
use crate::errors::domain::{DomainError, ValidationKind};

#[test]
fn payload_carries_captaincy_flags() {
    let payload = build_submission(&dream_team(), RolePolicy::MinimumOnly).unwrap();

    assert_eq!(payload.match_id, MATCH_ID);
    assert_eq!(payload.team_name, "Dream Team");
    assert_eq!(payload.players.len(), 11);

    let captains: Vec<_> = payload.players.iter().filter(|p| p.is_captain).collect();
    let vices: Vec<_> = payload.players.iter().filter(|p| p.is_vice_captain).collect();
    assert_eq!(captains.len(), 1);
    assert_eq!(captains[0].id, 1);
    assert_eq!(vices.len(), 1);
    assert_eq!(vices[0].id, 2);
}

#[test]
fn payload_json_shape() {
    let payload = build_submission(&dream_team(), RolePolicy::MinimumOnly).unwrap();
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["matchId"], 9001);
    assert_eq!(json["teamName"], "Dream Team");
    let first = &json["players"][0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["role"], "WK-Batter");
    assert_eq!(first["teamId"], 1);
    assert_eq!(first["isCaptain"], true);
    assert_eq!(first["isViceCaptain"], false);

    let back: SubmissionPayload = serde_json::from_value(json).unwrap();
    assert_eq!(back, payload);
}

#[test]
fn team_name_is_trimmed_and_normalized() {
    // Fullwidth letters fold to ASCII under NFKC.
    let state = dream_team().with_team_name("  ＸＩ Kings  ");
    let payload = build_submission(&state, RolePolicy::MinimumOnly).unwrap();
    assert_eq!(payload.team_name, "XI Kings");
}

#[test]
fn invalid_selection_returns_verdict() {
    let state = build(&dream_team_players()).with_team_name("No Captain");
    let verdict = build_submission(&state, RolePolicy::MinimumOnly).unwrap_err();
    assert!(!verdict.ok);
    assert!(!verdict.captain_set);
    assert!(!verdict.vice_captain_set);
}

#[test]
fn saved_team_rehydrates_to_same_payload() {
    let payload = build_submission(&dream_team(), RolePolicy::MinimumOnly).unwrap();
    let state = SelectionState::from_submission(&payload).unwrap();

    assert_eq!(state.captain_id(), Some(1));
    assert_eq!(state.vice_captain_id(), Some(2));
    assert_eq!(state.len(), 11);
    assert_eq!(
        build_submission(&state, RolePolicy::MinimumOnly).unwrap(),
        payload
    );
}

#[test]
fn rehydrated_team_can_be_edited() {
    let payload = build_submission(&dream_team(), RolePolicy::MinimumOnly).unwrap();
    let state = SelectionState::from_submission(&payload).unwrap();
    let edited = set_captain(&state, 5);
    assert_eq!(edited.captain_id(), Some(5));
    assert_eq!(edited.vice_captain_id(), Some(2));
}

#[test]
fn saved_team_breaking_team_cap_is_rejected() {
    let mut payload = build_submission(&dream_team(), RolePolicy::MinimumOnly).unwrap();
    for p in payload.players.iter_mut() {
        p.team_id = TEAM_A;
    }
    let err = SelectionState::from_submission(&payload).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidSavedTeam, _)
    ));
}

#[test]
fn saved_team_with_two_captains_is_rejected() {
    let mut payload = build_submission(&dream_team(), RolePolicy::MinimumOnly).unwrap();
    payload.players[5].is_captain = true;
    let err = SelectionState::from_submission(&payload).unwrap_err();
    assert!(err.to_string().contains("more than one captain"), "{err}");
}

#[test]
fn saved_team_with_same_captain_and_vice_is_rejected() {
    let mut payload = build_submission(&dream_team(), RolePolicy::MinimumOnly).unwrap();
    payload.players[1].is_vice_captain = false;
    payload.players[0].is_vice_captain = true;
    let err = SelectionState::from_submission(&payload).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidSavedTeam, _)
    ));
}

#[test]
fn partial_saved_team_rehydrates() {
    let payload = SubmissionPayload {
        match_id: MATCH_ID,
        team_name: "Draft".into(),
        players: vec![],
    };
    let state = SelectionState::from_submission(&payload).unwrap();
    assert!(state.is_empty());

    let p = player(1, Batter, TEAM_A);
    assert!(crate::domain::can_add(&state, &p).is_allowed());
}
