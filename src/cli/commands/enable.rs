//! Enable swarming command implementation.
//!
//! The `swarmgate enable-swarming` command walks the operator through the
//! prerequisite gate: static requirements, then the AlarmID usage analysis on
//! request, and only when everything passes the cluster restart.

use crate::api::PrerequisiteEvaluator;
use crate::error::Result;
use crate::gate::{render_structural, render_summary, render_usage, PrerequisiteGate, UsageScope};
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display::{warn_if_inconsistent, with_spinner};

/// Prompt key for starting the usage analysis.
pub const ANALYZE_USAGE_KEY: &str = "analyze_usage";

/// Prompt key for the destructive enable action.
pub const ENABLE_SWARMING_KEY: &str = "enable_swarming";

const USAGE_INTRO: &[&str] = &[
    "For the next part we will analyze the AlarmID usage",
    "in scripts (automation/GQI) and protocol QActions.",
    "Note that dependencies (e.g. nugets) are not checked.",
    "This can take a while, up to several minutes.",
];

/// The enable-swarming command implementation.
pub struct EnableSwarmingCommand<'a> {
    evaluator: &'a dyn PrerequisiteEvaluator,
    scope: UsageScope,
}

impl<'a> EnableSwarmingCommand<'a> {
    /// Create a new enable-swarming command.
    pub fn new(evaluator: &'a dyn PrerequisiteEvaluator, scope: UsageScope) -> Self {
        Self { evaluator, scope }
    }
}

impl Command for EnableSwarmingCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut gate = PrerequisiteGate::new(self.evaluator, self.scope);

        ui.show_header("Swarming Prerequisites");
        ui.show_hint("More info at aka.dataminer.services/enable-swarming");
        ui.message("1) Static requirements:");

        let structural = with_spinner(ui, "Checking static requirements...", || {
            gate.evaluate_structural().cloned()
        })?;

        render_structural(ui, &structural.sheet.structural);
        warn_if_inconsistent(ui, &structural);

        if gate.state().is_failed() {
            render_summary(ui, "Result summary:", &structural.sheet.summary);
            ui.error("Static requirements are not met. Swarming cannot be enabled.");
            return Ok(CommandResult::not_ready());
        }

        ui.message("");
        ui.message("2) AlarmID usage");
        for line in USAGE_INTRO {
            ui.message(line);
        }

        let analyze = ui.confirm(&Prompt::confirm(
            ANALYZE_USAGE_KEY,
            "Analyze AlarmID usage now?",
        ))?;
        if !analyze {
            ui.message("AlarmID usage was not analyzed. Swarming was not enabled.");
            return Ok(CommandResult::success());
        }

        let usage = with_spinner(ui, "Analyzing AlarmID usage...", || {
            gate.request_usage_analysis().cloned()
        })?;

        match &usage.sheet.usage {
            Some(facts) => {
                render_usage(ui, facts);
                if !facts.all_passed() {
                    render_summary(ui, "Alarm ID usage summary:", &usage.sheet.summary);
                }
            }
            None => ui.warning("The evaluator returned no AlarmID usage results."),
        }
        warn_if_inconsistent(ui, &usage);

        let Some(confirmation) = gate.confirmation() else {
            ui.error("Not all prerequisites are met. Swarming cannot be enabled.");
            return Ok(CommandResult::not_ready());
        };

        ui.success("All prerequisites are met.");
        ui.show_hint(
            "Enabling involves another prerequisite check, so it takes as long as the check above.",
        );
        ui.warning(
            "Keep in mind that enabling swarming involves a full cluster wide DataMiner restart.",
        );

        let enable = ui.confirm(&Prompt::confirm(
            ENABLE_SWARMING_KEY,
            "Restart DMS and enable Swarming?",
        ))?;
        if !enable {
            ui.message("Swarming was not enabled.");
            return Ok(CommandResult::success());
        }

        confirmation.execute()?;
        ui.success("Enable swarming request sent. The cluster will now restart.");

        Ok(CommandResult::success())
    }
}
