//! Check command implementation.
//!
//! The `swarmgate check` command runs the prerequisite gate without ever
//! offering the enable action, for scripts and CI.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::PrerequisiteEvaluator;
use crate::cli::args::CheckArgs;
use crate::error::{Result, SwarmGateError};
use crate::gate::{
    render_structural, render_summary, render_usage, Evaluation, PrerequisiteGate, UsageScope,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{warn_if_inconsistent, with_spinner};

/// The check command implementation.
pub struct CheckCommand<'a> {
    evaluator: &'a dyn PrerequisiteEvaluator,
    scope: UsageScope,
    args: CheckArgs,
}

/// One prerequisite line of the JSON report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckLine {
    pub name: &'static str,
    pub passed: bool,
}

/// Machine-readable result of a check run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub checked_at: DateTime<Utc>,
    pub state: String,
    pub structural: Vec<CheckLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Vec<CheckLine>>,
    pub overall_ready: bool,
    pub locally_consistent: bool,
    pub summary: String,
}

impl CheckReport {
    fn new(state: String, structural: &Evaluation, usage: Option<&Evaluation>) -> Self {
        let last = usage.unwrap_or(structural);
        Self {
            checked_at: Utc::now(),
            state,
            structural: structural
                .sheet
                .structural
                .facts()
                .map(|f| CheckLine {
                    name: f.check.label(),
                    passed: f.passed,
                })
                .collect(),
            usage: last.sheet.usage.map(|facts| {
                facts
                    .facts()
                    .map(|f| CheckLine {
                        name: f.check.label(),
                        passed: f.passed,
                    })
                    .collect()
            }),
            overall_ready: last.readiness.overall_ready,
            locally_consistent: structural.readiness.locally_consistent
                && usage.is_none_or(|u| u.readiness.locally_consistent),
            summary: last.sheet.summary.clone(),
        }
    }
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(
        evaluator: &'a dyn PrerequisiteEvaluator,
        scope: UsageScope,
        args: CheckArgs,
    ) -> Self {
        Self {
            evaluator,
            scope,
            args,
        }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut gate = PrerequisiteGate::new(self.evaluator, self.scope);

        let structural = with_spinner(ui, "Checking static requirements...", || {
            gate.evaluate_structural().cloned()
        })?;

        let usage = if self.args.analyze_usage && gate.state().usage_analysis_available() {
            Some(with_spinner(ui, "Analyzing AlarmID usage...", || {
                gate.request_usage_analysis().cloned()
            })?)
        } else {
            None
        };

        // An unrequested usage level does not count against the run.
        let ready = match &usage {
            Some(_) => gate.state().is_confirmation_offered(),
            None => !gate.state().is_failed(),
        };

        if self.args.json {
            let report = CheckReport::new(gate.state().to_string(), &structural, usage.as_ref());
            let output = serde_json::to_string_pretty(&report)
                .map_err(|e| SwarmGateError::Other(e.into()))?;
            println!("{}", output);
        } else {
            ui.show_header("Swarming Prerequisites");
            ui.message("Static requirements:");
            render_structural(ui, &structural.sheet.structural);
            warn_if_inconsistent(ui, &structural);

            if let Some(usage) = &usage {
                ui.message("");
                ui.message("AlarmID usage:");
                if let Some(facts) = &usage.sheet.usage {
                    render_usage(ui, facts);
                }
                warn_if_inconsistent(ui, usage);
            }

            let last = usage.as_ref().unwrap_or(&structural);
            if ready {
                ui.success(&format!("Prerequisites met ({})", gate.state()));
                if !self.args.analyze_usage {
                    ui.show_hint("Run with --analyze-usage to include the AlarmID usage analysis.");
                }
            } else {
                render_summary(ui, "Result summary:", &last.sheet.summary);
                ui.error(&format!("Prerequisites not met ({})", gate.state()));
            }
        }

        Ok(if ready {
            CommandResult::success()
        } else {
            CommandResult::not_ready()
        })
    }
}
