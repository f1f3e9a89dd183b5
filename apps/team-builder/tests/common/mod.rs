#![allow(dead_code)]

// tests/common/mod.rs
use std::path::PathBuf;

use team_builder::{parse_squad_feed, Squad};

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    test_support::logging::init();
}

pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

pub fn read_data(name: &str) -> String {
    let path = data_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

/// India v England squad from `tests/data/ind_v_eng.json`.
pub fn ind_v_eng() -> Squad {
    parse_squad_feed(&read_data("ind_v_eng.json")).expect("fixture feed parses")
}
