//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`blockfall_types::Command`]. There is
//! deliberately no repeat-rate handling here: held keys repeat at whatever
//! rate the host terminal delivers them.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_key, should_quit};
