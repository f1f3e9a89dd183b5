//! team-check: validate a saved fantasy cricket selection against a squad feed.
//!
//! Exits 0 when the team can be submitted, 1 otherwise.

mod telemetry;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use team_builder::domain::RolePolicy;
use team_builder::{
    parse_selection_file, parse_squad_feed, replay_selection, RulesConfig, TeamReport,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "team-check")]
#[command(about = "Check a fantasy cricket team against the selection rules")]
struct Args {
    /// Match squad feed (provider match-info JSON)
    #[arg(long)]
    squad: PathBuf,

    /// Selection file: teamName, playerIds, captainId, viceCaptainId
    #[arg(long)]
    selection: PathBuf,

    /// Role-composition policy; overrides FANTASY_ROLE_POLICY
    #[arg(long)]
    policy: Option<PolicyArg>,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Minimum,
    Range,
}

impl From<PolicyArg> for RolePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Minimum => RolePolicy::MinimumOnly,
            PolicyArg::Range => RolePolicy::Range,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = Args::parse();
    telemetry::init_tracing(args.verbose, args.format == OutputFormat::Json);

    let mut config = RulesConfig::from_env()?;
    if let Some(policy) = args.policy {
        config = config.with_policy(policy.into());
    }
    info!(policy = %config.policy, "checking team");

    let squad = parse_squad_feed(&read(&args.squad)?)?;
    let selection = parse_selection_file(&read(&args.selection)?)?;
    let replay = replay_selection(&squad, &selection)?;
    let report = TeamReport::build(&replay, config.policy);

    match args.format {
        OutputFormat::Text => {
            print!("{}", report.render_text(&squad));
            if let Some(payload) = &report.payload {
                println!("{}", serde_json::to_string_pretty(payload)?);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(if report.ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn read(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()).into())
}
