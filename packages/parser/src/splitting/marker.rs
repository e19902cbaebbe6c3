//! Generic marker-based splitting primitive shared by all three passes.

use regex::Regex;

/// One marker occurrence paired with the text that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSegment {
    /// Identifier captured by the marker pattern.
    pub code: String,

    /// Text between this marker and the next one (or the end of the span).
    pub body: String,
}

/// Result of splitting a text span on a marker pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSplit {
    /// Text preceding the first marker; the whole span when nothing matched.
    pub leading: String,

    /// Segments in document order.
    pub segments: Vec<MarkerSegment>,
}

/// Split `text` at each match of `pattern`, pairing every captured
/// identifier with its trailing text.
///
/// `pattern` must contain exactly one capture group holding the identifier.
/// Matching is non-overlapping, left to right, case sensitive. Zero matches
/// is a valid terminal state: the whole span becomes `leading` and the
/// segment list is empty.
#[must_use]
pub fn split_markers(pattern: &Regex, text: &str) -> MarkerSplit {
    let mut segments: Vec<MarkerSegment> = Vec::new();
    let mut leading_end = text.len();
    let mut pending: Option<(String, usize)> = None;

    for caps in pattern.captures_iter(text) {
        let (Some(whole), Some(code)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        if let Some((prev_code, prev_end)) = pending.take() {
            segments.push(MarkerSegment {
                code: prev_code,
                body: text[prev_end..whole.start()].to_string(),
            });
        } else {
            leading_end = whole.start();
        }
        pending = Some((code.as_str().to_string(), whole.end()));
    }

    // Last marker runs to the end of the span
    if let Some((code, end)) = pending {
        segments.push(MarkerSegment {
            code,
            body: text[end..].to_string(),
        });
    }

    MarkerSplit {
        leading: text[..leading_end].to_string(),
        segments,
    }
}
