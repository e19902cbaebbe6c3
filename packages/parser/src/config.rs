//! Configuration constants for the parser shell.
//!
//! Environment variables are resolved in the CLI layer only; the core
//! parser never reads the environment.

use std::path::{Path, PathBuf};

/// Environment variable naming the input text file.
pub const FILE_PATH_ENV: &str = "FILE_PATH";

/// Environment variable naming the JSON output file.
pub const OUTPUT_PATH_ENV: &str = "OUTPUT_PATH";

/// Environment variable toggling the human-readable rendering of the plan.
pub const DEBUG_PRINT_ENV: &str = "DEBUG_PRINT";

/// Origin tag marking a competency taught at the vocational school (Berufsschule).
pub const SCHOOL_TAG: &str = "bs";

/// Origin tag marking a competency taught at the company (Betrieb).
pub const COMPANY_TAG: &str = "bt";

/// Column-header residue that leaks into section descriptions when the
/// two-column objectives table of the source document is flattened to text.
pub const OBJECTIVES_HEADER_RESIDUE: &str =
    "Leistungsziele Betrieb Leistungsziele Berufsfachschule";

/// Derive the default output path from the input path.
///
/// The extension is swapped for `.json`, so `kv-efz-2023-06-01.txt`
/// becomes `kv-efz-2023-06-01.json` next to the input file.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}
