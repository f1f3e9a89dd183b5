//! Decoding of external inputs into domain values.

pub mod selection_file;
pub mod squad_feed;

pub use selection_file::{parse_selection_file, replay_selection, Replay, SelectionFile};
pub use squad_feed::{parse_squad_feed, Side, Squad};
