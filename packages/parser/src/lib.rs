//! Bildungsplan Parser - Convert the KV-EFZ Bildungsplan plain text to JSON.
//!
//! This crate parses the flattened plain-text transcription of the
//! Bildungsplan Kauffrau/Kaufmann EFZ (2023) into a structured tree:
//! areas (Handlungskompetenzbereiche) containing sections
//! (Handlungskompetenzen) containing individual competencies, each tagged
//! by where it is taught (Berufsschule or Betrieb). The hierarchy is
//! recovered purely from recurring textual markers through three nested
//! splitting passes.
//!
//! # Example
//!
//! ```
//! use bildungsplan_parser::parse_plan;
//!
//! let text = "Handlungskompetenzbereich a: Title A\n\
//!             Handlungskompetenz a1: Sec Title\n\
//!             Desc text.\n\
//!             a1.bs1\n\
//!             First school competency.\n";
//! let plan = parse_plan(text)?;
//! assert_eq!(plan.area_count(), 1);
//! assert_eq!(plan.competency_count(), 1);
//! # Ok::<(), bildungsplan_parser::ParserError>(())
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Shell constants (environment variable names, document hygiene)
//! - [`types`]: Core data types (Plan, Area, Section, Competency)
//! - [`error`]: Error types and Result alias
//! - [`text`]: Text normalization
//! - [`splitting`]: The segmentation core and `parse_plan` entry point
//! - [`json`]: JSON output generation
//! - [`render`]: Human-readable plan rendering
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod json;
pub mod render;
pub mod splitting;
pub mod text;
pub mod types;

// Re-export the core entry point
pub use splitting::parse_plan;

// Re-export commonly used items
pub use error::{ParserError, Result};
pub use types::{Area, Competency, Location, Plan, Section};
