//! The three nested segmentation passes that assemble the plan tree.

use tracing::{debug, warn};

use super::marker::split_markers;
use super::patterns::{AREA_MARKER, COMPETENCY_MARKER, SECTION_MARKER};
use crate::config::OBJECTIVES_HEADER_RESIDUE;
use crate::error::{ParserError, Result};
use crate::text::clean_text;
use crate::types::{Area, Competency, Plan, Section};

/// Parse a flattened Bildungsplan document into the plan tree.
///
/// The document string is the only input and the returned tree the only
/// output; no file or environment access happens here. Areas, sections and
/// competencies appear in the result in document order.
///
/// # Errors
/// Returns [`ParserError::MalformedSection`] when a section's leading text
/// has no line break to separate its title from its description.
pub fn parse_plan(text: &str) -> Result<Plan> {
    let split = split_markers(&AREA_MARKER, text);

    // Text before the first area marker is front matter (title pages, table
    // of contents) and carries no competencies.
    if !split.leading.trim().is_empty() {
        debug!(
            chars = split.leading.len(),
            "Discarding front matter before the first area marker"
        );
    }

    let mut areas = Vec::with_capacity(split.segments.len());
    for segment in split.segments {
        areas.push(parse_area(&segment.code, &segment.body)?);
    }

    Ok(Plan { areas })
}

/// Split one area body into the area title and its sections.
fn parse_area(code: &str, body: &str) -> Result<Area> {
    let split = split_markers(&SECTION_MARKER, body);

    let mut sections = Vec::with_capacity(split.segments.len());
    for segment in split.segments {
        sections.push(parse_section(&segment.code, &segment.body)?);
    }

    Ok(Area {
        code: code.to_string(),
        title: clean_text(&split.leading),
        sections,
    })
}

/// Split one section body into title, description and competencies.
///
/// The text up to the first competency marker holds the title (first line)
/// and the description (rest); everything from the first marker onward is
/// handed to the competency pass.
fn parse_section(code: &str, body: &str) -> Result<Section> {
    let (head, tail) = match COMPETENCY_MARKER.find(body) {
        Some(m) => body.split_at(m.start()),
        None => (body, ""),
    };

    let (title, desc) = head
        .split_once('\n')
        .ok_or_else(|| ParserError::MalformedSection {
            code: code.to_string(),
        })?;

    // Column-header residue from the flattened objectives table is removed
    // before normalization; this is document-specific hygiene, not part of
    // the general normalizer.
    let desc = desc.replace(OBJECTIVES_HEADER_RESIDUE, "");

    Ok(Section {
        code: code.to_string(),
        title: clean_text(title),
        desc: clean_text(&desc),
        competencies: parse_competencies(code, tail),
    })
}

/// Split a section's trailing text into competencies.
fn parse_competencies(section_code: &str, text: &str) -> Vec<Competency> {
    let split = split_markers(&COMPETENCY_MARKER, text);

    // The section pass already consumed the title and description, so any
    // residue here means the two passes disagree about the boundary. Not a
    // hard failure: report and keep going.
    if !split.leading.trim().is_empty() {
        warn!(
            section = section_code,
            residue = %clean_text(&split.leading),
            "Discarding unexpected text before the first competency marker"
        );
    }

    split
        .segments
        .into_iter()
        .map(|segment| Competency::new(segment.code, clean_text(&segment.body)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_plan_basic_document() {
        let text = "Handlungskompetenzbereich a: Title A\n\
                    Handlungskompetenz a1: Sec Title\n\
                    Desc text.\n\
                    a1.bs1\n\
                    First school competency.\n\
                    a1.bt1\n\
                    Second company competency.\n";

        let plan = parse_plan(text).unwrap();

        assert_eq!(plan.area_count(), 1);
        let area = &plan.areas[0];
        assert_eq!(area.code, "a");
        assert_eq!(area.title, "Title A");

        assert_eq!(area.sections.len(), 1);
        let section = &area.sections[0];
        assert_eq!(section.code, "a1");
        assert_eq!(section.title, "Sec Title");
        assert_eq!(section.desc, "Desc text.");

        assert_eq!(section.competencies.len(), 2);
        assert_eq!(section.competencies[0].code, "a1.bs1");
        assert_eq!(section.competencies[0].description, "First school competency.");
        assert_eq!(section.competencies[0].location, Location::School);
        assert_eq!(section.competencies[1].code, "a1.bt1");
        assert_eq!(section.competencies[1].description, "Second company competency.");
        assert_eq!(section.competencies[1].location, Location::Company);
    }

    #[test]
    fn test_parse_plan_discards_front_matter() {
        let text = "Bildungsplan 2023\nInhaltsverzeichnis\n\
                    Handlungskompetenzbereich a: Title A\n\
                    Handlungskompetenz a1: Sec\nDesc.\n";

        let plan = parse_plan(text).unwrap();
        assert_eq!(plan.area_count(), 1);
        assert_eq!(plan.areas[0].title, "Title A");
    }

    #[test]
    fn test_parse_plan_empty_input() {
        let plan = parse_plan("").unwrap();
        assert_eq!(plan.area_count(), 0);
    }

    #[test]
    fn test_parse_plan_area_without_sections() {
        let text = "Handlungskompetenzbereich a: Only a title\n";
        let plan = parse_plan(text).unwrap();
        assert_eq!(plan.areas[0].title, "Only a title");
        assert!(plan.areas[0].sections.is_empty());
    }

    #[test]
    fn test_parse_plan_section_without_competencies() {
        // Section marker immediately followed by another area marker
        let text = "Handlungskompetenzbereich a: Area A\n\
                    Handlungskompetenz a1: Empty section\n\
                    Some description.\n\
                    Handlungskompetenzbereich b: Area B\n";

        let plan = parse_plan(text).unwrap();
        assert_eq!(plan.area_count(), 2);

        let section = &plan.areas[0].sections[0];
        assert_eq!(section.title, "Empty section");
        assert_eq!(section.desc, "Some description.");
        assert!(section.competencies.is_empty());

        assert!(plan.areas[1].sections.is_empty());
    }

    #[test]
    fn test_parse_plan_malformed_section_fails() {
        // No line break between the section marker and the next area marker,
        // so title and description cannot be separated.
        let text = "Handlungskompetenzbereich a: Area\n\
                    Handlungskompetenz a1: only a title without line break";

        let err = parse_plan(text).unwrap_err();
        assert!(matches!(
            err,
            ParserError::MalformedSection { ref code } if code == "a1"
        ));
    }

    #[test]
    fn test_parse_plan_multiline_competency_description() {
        let text = "Handlungskompetenzbereich a: Area\n\
                    Handlungskompetenz a1: Sec\n\
                    Desc.\n\
                    a1.bt1\n\
                    First line of the description\n\
                    continues on a second line.\n";

        let plan = parse_plan(text).unwrap();
        assert_eq!(
            plan.areas[0].sections[0].competencies[0].description,
            "First line of the description continues on a second line."
        );
    }

    #[test]
    fn test_parse_plan_joins_hyphenation_in_description() {
        let text = "Handlungskompetenzbereich a: Area\n\
                    Handlungskompetenz a1: Sec\n\
                    Desc.\n\
                    a1.bs1\n\
                    Ein exam-\nple Text.\n";

        let plan = parse_plan(text).unwrap();
        assert_eq!(
            plan.areas[0].sections[0].competencies[0].description,
            "Ein example Text."
        );
    }

    #[test]
    fn test_parse_plan_removes_objectives_header_residue() {
        let text = format!(
            "Handlungskompetenzbereich a: Area\n\
             Handlungskompetenz a1: Sec\n\
             Description start. {OBJECTIVES_HEADER_RESIDUE}\n\
             a1.bt1\n\
             Text.\n"
        );

        let plan = parse_plan(&text).unwrap();
        assert_eq!(plan.areas[0].sections[0].desc, "Description start.");
    }

    #[test]
    fn test_parse_plan_preserves_duplicate_codes() {
        // Duplicates are not validated; they pass through in order.
        let text = "Handlungskompetenzbereich a: Area\n\
                    Handlungskompetenz a1: First\nDesc.\n\
                    Handlungskompetenz a1: Second\nDesc.\n";

        let plan = parse_plan(text).unwrap();
        let codes: Vec<&str> = plan.areas[0]
            .sections
            .iter()
            .map(|s| s.code.as_str())
            .collect();
        assert_eq!(codes, vec!["a1", "a1"]);
        assert_eq!(plan.areas[0].sections[0].title, "First");
        assert_eq!(plan.areas[0].sections[1].title, "Second");
    }

    #[test]
    fn test_parse_competencies_warns_but_keeps_going_on_residue() {
        // Residue before the first marker is discarded, competencies kept.
        let competencies = parse_competencies("a1", "stray residue\na1.bt1\nText.\n");
        assert_eq!(competencies.len(), 1);
        assert_eq!(competencies[0].code, "a1.bt1");
        assert_eq!(competencies[0].description, "Text.");
    }
}
