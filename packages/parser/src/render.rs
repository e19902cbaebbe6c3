//! Human-readable rendering of a parsed plan.

use crate::types::Plan;

/// Render the plan as a plain-text outline.
///
/// Areas print as upper-cased headings under a `=` rule, sections with
/// their code and a `-` rule, competencies as indented `code // description`
/// bullets, all in document order.
#[must_use]
pub fn render_plan(plan: &Plan) -> String {
    let mut out = String::new();

    for area in &plan.areas {
        out.push_str(&format!(
            "\n\n\n{}\n{}\n",
            area.title.to_uppercase(),
            "=".repeat(60)
        ));
        for section in &area.sections {
            out.push_str(&format!(
                "\n{} - {}\n{}\n",
                section.code,
                section.title,
                "-".repeat(60)
            ));
            for competency in &section.competencies {
                out.push_str(&format!(
                    "  - {} // {}\n",
                    competency.code, competency.description
                ));
            }
        }
    }

    out
}

/// Print the plan outline to stdout.
pub fn debug_plan(plan: &Plan) {
    print!("{}", render_plan(plan));
}
