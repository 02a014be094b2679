//! Persistence for transit graphs.
//!
//! The JSON document format round-trips every station and connection:
//! identifiers, weights, closed flags and labels all survive a save/load
//! cycle unchanged.

mod json;

pub use json::{from_json, load_from_file, save_to_file, to_json};
