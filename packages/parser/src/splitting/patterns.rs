//! Marker patterns delimiting the document's structural levels.
//!
//! Each pattern captures exactly one identifier token per match, as
//! required by [`super::split_markers`]. Matching is case sensitive.

use regex::Regex;
use std::sync::LazyLock;

/// Area marker: labelled heading with a single-letter code, terminated by a
/// colon (the colon is not part of the code).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub static AREA_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Handlungskompetenzbereich ([a-z]):").expect("valid regex"));

/// Section marker: labelled heading with a letter+digit code, terminated by
/// a colon.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub static SECTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Handlungskompetenz ([a-z][0-9]):").expect("valid regex"));

/// Competency marker: an identifier like "a1.bs1" on its own line end,
/// terminated by the line break (consumed, not stored). The origin tag is
/// bs (Berufsschule) or bt (Betrieb); a trailing letter is optional.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub static COMPETENCY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z]\d+\.(?:bs|bt)\d+[a-z]?)\n").expect("valid regex"));
