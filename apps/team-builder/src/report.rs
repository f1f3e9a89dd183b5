//! Verdict on a replayed selection, as printed by `team-check`.

use std::fmt::Write as _;

use serde::Serialize;

use crate::domain::{
    build_submission, is_submittable, role_counts, stage, PlayerId, RoleCounts, RolePolicy,
    SelectionStage, SubmissionPayload, ValidationResult,
};
use crate::errors::Violation;
use crate::ingest::selection_file::Replay;
use crate::ingest::squad_feed::Squad;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedViolation {
    pub code: &'static str,
    pub message: String,
}

impl From<&Violation> for ReportedViolation {
    fn from(v: &Violation) -> Self {
        Self {
            code: v.code().as_str(),
            message: v.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedPick {
    pub player_id: PlayerId,
    #[serde(flatten)]
    pub reason: ReportedViolation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamReport {
    pub match_id: u64,
    pub team_name: String,
    pub policy: RolePolicy,
    pub stage: SelectionStage,
    pub role_counts: RoleCounts,
    pub verdict: ValidationResult,
    pub violations: Vec<ReportedViolation>,
    pub skipped: Vec<SkippedPick>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<SubmissionPayload>,
}

impl TeamReport {
    pub fn build(replay: &Replay, policy: RolePolicy) -> Self {
        let state = &replay.state;
        let verdict = is_submittable(state, policy);
        let payload = build_submission(state, policy).ok();

        Self {
            match_id: state.match_id(),
            team_name: state.team_name().to_string(),
            policy,
            stage: stage(state, policy),
            role_counts: role_counts(state),
            violations: verdict.violations().iter().map(Into::into).collect(),
            skipped: replay
                .rejected
                .iter()
                .map(|(player_id, reason)| SkippedPick {
                    player_id: *player_id,
                    reason: (&reason.violation()).into(),
                })
                .collect(),
            verdict,
            payload,
        }
    }

    pub fn ok(&self) -> bool {
        self.verdict.ok
    }

    /// Human-readable rendering; player names are looked up in `squad`.
    pub fn render_text(&self, squad: &Squad) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} (match {}, {} policy)",
            display_name(&self.team_name),
            self.match_id,
            self.policy
        );
        let _ = writeln!(
            out,
            "stage: {:?}, {} selected",
            self.stage, self.verdict.selected
        );

        let counts: Vec<String> = self
            .role_counts
            .iter()
            .map(|(category, n)| format!("{} {n}", category.short_label()))
            .collect();
        let _ = writeln!(out, "roles: {}", counts.join(", "));

        for pick in &self.skipped {
            let name = squad.find(pick.player_id).map_or("?", |p| p.name.as_str());
            let _ = writeln!(
                out,
                "skipped {} ({name}): [{}] {}",
                pick.player_id, pick.reason.code, pick.reason.message
            );
        }

        if self.violations.is_empty() {
            let _ = writeln!(out, "OK: team can be submitted");
        } else {
            for v in &self.violations {
                let _ = writeln!(out, "FAIL [{}] {}", v.code, v.message);
            }
        }
        out
    }
}

fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        "<unnamed team>"
    } else {
        name
    }
}
