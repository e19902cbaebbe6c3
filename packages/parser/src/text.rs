//! Text normalization for titles and descriptions.

/// Clean raw text extracted from the flattened document.
///
/// Joins words split by hyphenation breaks (a hyphen directly followed by a
/// line break), replaces remaining line breaks and tabs with single spaces,
/// and trims surrounding whitespace. Idempotent and infallible. Applied to
/// every stored title and description, never to codes.
#[must_use]
pub fn clean_text(text: &str) -> String {
    text.trim()
        .replace("-\n", "")
        .replace('\n', " ")
        .replace('\t', " ")
}
