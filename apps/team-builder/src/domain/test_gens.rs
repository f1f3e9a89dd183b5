//! Proptest generators for domain types.
//!
//! Pools have unique player ids; operation sequences index into the pool so
//! every generated op targets a real (or deliberately absent) player.

use proptest::prelude::*;

use crate::domain::fixtures::{player, MATCH_ID, TEAM_A, TEAM_B};
use crate::domain::{
    can_add, remove, set_captain, set_vice_captain, toggle, AddDecision, Player, PlayerId,
    RoleCategory, SelectionState, TeamId,
};

/// Generate a random RoleCategory
pub fn role() -> impl Strategy<Value = RoleCategory> {
    prop_oneof![
        Just(RoleCategory::WkBatter),
        Just(RoleCategory::Batter),
        Just(RoleCategory::BowlingAllrounder),
        Just(RoleCategory::Bowler),
    ]
}

/// Generate one of the two match sides
pub fn team_id() -> impl Strategy<Value = TeamId> {
    prop_oneof![Just(TEAM_A), Just(TEAM_B)]
}

/// Generate a squad pool of 1..=30 players with ids 1..=n
pub fn pool() -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec((role(), team_id()), 1..=30).prop_map(|drawn| {
        drawn
            .into_iter()
            .enumerate()
            .map(|(i, (role, team))| player(i as PlayerId + 1, role, team))
            .collect()
    })
}

/// One user action against a pool; indices wrap around the pool length.
#[derive(Debug, Clone, Copy)]
pub enum Op {
    Add(usize),
    Remove(usize),
    Toggle(usize),
    Captain(usize),
    ViceCaptain(usize),
}

pub fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..64).prop_map(Op::Add),
        1 => (0usize..64).prop_map(Op::Remove),
        2 => (0usize..64).prop_map(Op::Toggle),
        1 => (0usize..64).prop_map(Op::Captain),
        1 => (0usize..64).prop_map(Op::ViceCaptain),
    ]
}

pub fn ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op(), 0..80)
}

/// Apply `op` to `state`, ignoring rejections the way the UI does.
pub fn apply(state: &SelectionState, pool: &[Player], op: Op) -> SelectionState {
    let pick = |i: usize| &pool[i % pool.len()];
    match op {
        Op::Add(i) => match can_add(state, pick(i)) {
            AddDecision::Allowed(next) => next,
            AddDecision::Rejected(_) => state.clone(),
        },
        Op::Remove(i) => remove(state, pick(i).id),
        Op::Toggle(i) => toggle(state, pick(i)).into_state(state),
        Op::Captain(i) => set_captain(state, pick(i).id),
        Op::ViceCaptain(i) => set_vice_captain(state, pick(i).id),
    }
}

/// A pool plus the state reached by running a random op sequence on it.
pub fn reachable_state() -> impl Strategy<Value = (Vec<Player>, SelectionState)> {
    (pool(), ops()).prop_map(|(pool, ops)| {
        let state = ops
            .into_iter()
            .fold(SelectionState::new(MATCH_ID), |s, op| apply(&s, &pool, op));
        (pool, state)
    })
}
