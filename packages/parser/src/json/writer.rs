//! JSON writer for parsed plans.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::Plan;

/// Generate the JSON document for a plan.
///
/// Pretty-printed with 2-space indentation and a trailing newline.
pub fn generate_json(plan: &Plan) -> Result<String> {
    let mut json = serde_json::to_string_pretty(plan)?;
    json.push('\n');
    Ok(json)
}

/// Save a plan as a JSON file.
///
/// Uses the atomic write pattern: writes to a temp file, syncs to disk,
/// then renames, so a crash never leaves a truncated output file.
///
/// # Returns
/// Path to the saved file.
pub fn save_json(plan: &Plan, output_path: &Path) -> Result<PathBuf> {
    let content = generate_json(plan)?;

    let temp_path = match (output_path.parent(), output_path.file_name()) {
        (Some(dir), Some(name)) => dir.join(format!(".{}.tmp", name.to_string_lossy())),
        _ => PathBuf::from(format!("{}.tmp", output_path.display())),
    };

    // Write to temp file first, then sync and rename for atomicity
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_path.exists() {
        fs::remove_file(output_path)?;
    }

    fs::rename(&temp_path, output_path)?;

    Ok(output_path.to_path_buf())
}
