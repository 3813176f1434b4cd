//! Per-prerequisite rendering.

use crate::ui::UserInterface;

use super::facts::{StructuralFacts, UsageFacts};

/// Format one prerequisite line, e.g. `"Shared database: Ok"`.
pub fn format_fact(label: &str, passed: bool) -> String {
    format!("{}: {}", label, if passed { "Ok" } else { "Not Ok" })
}

/// Show every static prerequisite in declaration order.
pub fn render_structural(ui: &mut dyn UserInterface, facts: &StructuralFacts) {
    for fact in facts.facts() {
        ui.show_check(fact.check.label(), fact.passed);
    }
}

/// Show both usage prerequisites in declaration order.
pub fn render_usage(ui: &mut dyn UserInterface, facts: &UsageFacts) {
    for fact in facts.facts() {
        ui.show_check(fact.check.label(), fact.passed);
    }
}

/// Show the evaluator's narrative verbatim under a heading.
pub fn render_summary(ui: &mut dyn UserInterface, heading: &str, summary: &str) {
    ui.show_summary(heading, summary);
}
