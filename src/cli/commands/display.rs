//! Shared display helpers for commands that talk to the management API.

use crate::error::Result;
use crate::gate::Evaluation;
use crate::ui::UserInterface;

/// Run a blocking remote call behind a spinner.
///
/// The spinner is cleared on success and shows the error on failure.
pub fn with_spinner<T>(
    ui: &mut dyn UserInterface,
    message: &str,
    op: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let mut spinner = ui.start_spinner(message);
    let result = op();
    match &result {
        Ok(_) => spinner.finish_clear(),
        Err(e) => spinner.finish_error(&e.to_string()),
    }
    result
}

/// Warn when the evaluator's verdict disagrees with its own flags.
pub fn warn_if_inconsistent(ui: &mut dyn UserInterface, evaluation: &Evaluation) {
    if !evaluation.readiness.locally_consistent {
        ui.warning(&format!(
            "The evaluator reported ready={} but its individual checks disagree; \
             treating the prerequisites as not met.",
            evaluation.readiness.overall_ready
        ));
    }
}
