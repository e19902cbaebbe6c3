//! Core data types for the parsed plan.
//!
//! The tree mirrors the document hierarchy: a [`Plan`] owns [`Area`]s,
//! which own [`Section`]s, which own [`Competency`]s. No component mutates
//! the tree after assembly and there are no shared or back references.
//!
//! Serde field order is the stable output key order: code, title, [desc],
//! children, and `where` last on competencies.

use serde::{Deserialize, Serialize};

use crate::config::SCHOOL_TAG;

/// Where a competency is taught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    /// Vocational school (Berufsschule).
    #[serde(rename = "Berufsschule")]
    School,

    /// Workplace (Betrieb).
    #[serde(rename = "Betrieb")]
    Company,
}

impl Location {
    /// Get the string value for JSON output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::School => "Berufsschule",
            Self::Company => "Betrieb",
        }
    }

    /// Classify a competency code by the presence of the school tag.
    ///
    /// # Examples
    /// ```
    /// use bildungsplan_parser::types::Location;
    ///
    /// assert_eq!(Location::from_code("a1.bs1"), Location::School);
    /// assert_eq!(Location::from_code("a1.bt1"), Location::Company);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        if code.contains(SCHOOL_TAG) {
            Self::School
        } else {
            Self::Company
        }
    }
}

/// A single learning objective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competency {
    /// Competency identifier (e.g. "a1.bs1").
    pub code: String,

    /// Normalized description text.
    pub description: String,

    /// Where the competency is taught, derived from the code.
    #[serde(rename = "where")]
    pub location: Location,
}

impl Competency {
    /// Create a competency, deriving its location from the code.
    #[must_use]
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        let code = code.into();
        let location = Location::from_code(&code);
        Self {
            code,
            description: description.into(),
            location,
        }
    }
}

/// A competency group (Handlungskompetenz) within an area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section identifier (e.g. "a1").
    pub code: String,

    /// First line of the section's leading text, normalized.
    pub title: String,

    /// Remaining leading text before the first competency, normalized.
    pub desc: String,

    /// Competencies in document order. Empty is valid.
    pub competencies: Vec<Competency>,
}

/// A top-level competency domain (Handlungskompetenzbereich).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    /// Single-letter area identifier (e.g. "a").
    pub code: String,

    /// Text between the area marker and its first section, normalized.
    pub title: String,

    /// Sections in document order. Empty is valid.
    pub sections: Vec<Section>,
}

/// The complete parsed plan: areas in document order.
///
/// Serializes transparently as a JSON array of areas, matching the
/// published output format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plan {
    /// Areas in document order.
    pub areas: Vec<Area>,
}

impl Plan {
    /// Number of areas.
    #[must_use]
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// Total number of sections across all areas.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.areas.iter().map(|area| area.sections.len()).sum()
    }

    /// Total number of competencies across all sections.
    #[must_use]
    pub fn competency_count(&self) -> usize {
        self.areas
            .iter()
            .flat_map(|area| &area.sections)
            .map(|section| section.competencies.len())
            .sum()
    }
}
