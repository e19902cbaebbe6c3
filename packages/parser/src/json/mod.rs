//! JSON output generation.

mod writer;

pub use writer::{generate_json, save_json};
