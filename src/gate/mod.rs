//! Swarming prerequisite gate.
//!
//! The gate walks through two evaluation levels against the remote
//! evaluator and decides whether the destructive "restart the cluster and
//! enable swarming" action may be offered:
//!
//! 1. A cheap structural evaluation ([`PrerequisiteGate::evaluate_structural`]).
//! 2. An expensive usage analysis, only on explicit request and only after
//!    a structural pass ([`PrerequisiteGate::request_usage_analysis`]).
//! 3. The destructive action, only through a [`Confirmation`] handle that
//!    exists solely after a passing usage-level evaluation.
//!
//! # Example
//!
//! ```
//! use swarmgate::api::{MockApi, PrerequisitesCheckResponse};
//! use swarmgate::gate::{GateState, PrerequisiteGate, UsageScope};
//!
//! let api = MockApi::new();
//! api.queue_check_responses(vec![PrerequisitesCheckResponse {
//!     supported_dms: true,
//!     supported_database: true,
//!     central_database_not_configured: true,
//!     legacy_reports_and_dashboards_disabled: true,
//!     no_incompatible_enhanced_services_on_dms: false,
//!     satisfies_prerequisites: false,
//!     ..Default::default()
//! }]);
//!
//! let mut gate = PrerequisiteGate::new(&api, UsageScope::Cluster);
//! gate.evaluate_structural().unwrap();
//! assert_eq!(gate.state(), GateState::StructuralFailed);
//! assert!(gate.confirmation().is_none());
//! ```

pub mod facts;
pub mod render;
pub mod state;

pub use facts::{
    Fact, FactSheet, ReadinessResult, StructuralCheck, StructuralFacts, UsageCheck, UsageFacts,
};
pub use render::{format_fact, render_structural, render_summary, render_usage};
pub use state::{GateEvent, GateState, Trigger, UsageVerdict};

use crate::api::{PrerequisiteEvaluator, PrerequisitesCheckRequest};
use crate::error::{Result, SwarmGateError};

/// Where the usage analysis runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageScope {
    /// Only on the node the operator is connected to. Enough for a representative summary.
    LocalAgent,
    /// On every node of the cluster.
    Cluster,
}

/// Fact sheet and derived readiness of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub sheet: FactSheet,
    pub readiness: ReadinessResult,
}

/// Proof that a usage analysis was started. Consumed when it finishes.
#[derive(Debug)]
#[must_use = "a started usage analysis must be finished"]
pub struct AnalysisTicket {
    scope: Option<i32>,
}

/// Staged prerequisite gate over a remote evaluator.
pub struct PrerequisiteGate<'a> {
    evaluator: &'a dyn PrerequisiteEvaluator,
    scope: UsageScope,
    state: GateState,
    last: Option<Evaluation>,
    enable_sent: bool,
}

impl<'a> PrerequisiteGate<'a> {
    /// Create a gate in the `Unchecked` state.
    pub fn new(evaluator: &'a dyn PrerequisiteEvaluator, scope: UsageScope) -> Self {
        Self {
            evaluator,
            scope,
            state: GateState::Unchecked,
            last: None,
            enable_sent: false,
        }
    }

    /// Current state.
    pub fn state(&self) -> GateState {
        self.state
    }

    /// Most recent successful evaluation.
    pub fn last_evaluation(&self) -> Option<&Evaluation> {
        self.last.as_ref()
    }

    /// Run the structural evaluation. Only valid from `Unchecked`.
    pub fn evaluate_structural(&mut self) -> Result<&Evaluation> {
        self.state.guard(Trigger::EvaluateStructural)?;

        let evaluation = self.evaluate(PrerequisitesCheckRequest::structural())?;
        self.state = self
            .state
            .transition(GateEvent::StructuralEvaluated(evaluation.readiness))?;
        tracing::info!("Structural evaluation finished: {}", self.state);

        Ok(self.last.insert(evaluation))
    }

    /// Start a usage analysis and disable the trigger until it finishes.
    ///
    /// A second call while a ticket is outstanding fails with
    /// [`SwarmGateError::AnalysisInFlight`].
    pub fn begin_usage_analysis(&mut self) -> Result<AnalysisTicket> {
        self.state.guard(Trigger::RequestUsageAnalysis)?;

        let scope = match self.scope {
            UsageScope::LocalAgent => Some(self.evaluator.local_agent_id()?),
            UsageScope::Cluster => None,
        };

        self.state = self.state.transition(GateEvent::UsageAnalysisStarted)?;
        tracing::debug!("Usage analysis started (scope: {:?})", scope);

        Ok(AnalysisTicket { scope })
    }

    /// Run the usage-level evaluation for a started analysis.
    ///
    /// On failure the gate returns to awaiting the usage check.
    pub fn finish_usage_analysis(&mut self, ticket: AnalysisTicket) -> Result<&Evaluation> {
        self.state.guard(Trigger::CompleteUsageAnalysis)?;

        match self.evaluate(PrerequisitesCheckRequest::usage(ticket.scope)) {
            Ok(evaluation) => {
                self.state = self
                    .state
                    .transition(GateEvent::UsageEvaluated(evaluation.readiness))?;
                tracing::info!("Usage analysis finished: {}", self.state);
                Ok(self.last.insert(evaluation))
            }
            Err(e) => {
                self.state = self.state.transition(GateEvent::UsageAnalysisAborted)?;
                Err(e)
            }
        }
    }

    /// Start and finish a usage analysis in one blocking call.
    pub fn request_usage_analysis(&mut self) -> Result<&Evaluation> {
        let ticket = self.begin_usage_analysis()?;
        self.finish_usage_analysis(ticket)
    }

    /// The destructive action, if it is currently exposed.
    ///
    /// Returns `None` unless the last usage-level evaluation passed and the
    /// enable command has not been sent yet.
    pub fn confirmation(&mut self) -> Option<Confirmation<'_, 'a>> {
        if !self.state.is_confirmation_offered() || self.enable_sent {
            return None;
        }
        Some(Confirmation { gate: self })
    }

    /// Whether the enable command has been sent.
    pub fn enable_sent(&self) -> bool {
        self.enable_sent
    }

    /// One round trip to the evaluator. Exactly one response is accepted.
    fn evaluate(&self, request: PrerequisitesCheckRequest) -> Result<Evaluation> {
        tracing::debug!(
            "Requesting prerequisites check (analyze usage: {}, scope: {})",
            request.analyze_alarm_id_usage,
            request.data_miner_id
        );

        let mut responses = self.evaluator.check_prerequisites(&request)?;
        if responses.len() != 1 {
            return Err(SwarmGateError::EvaluationUnavailable {
                message: format!(
                    "expected exactly 1 prerequisites response, got {}",
                    responses.len()
                ),
            });
        }

        let sheet = FactSheet::from(responses.remove(0));
        let readiness = sheet.readiness();
        if !readiness.locally_consistent {
            tracing::warn!(
                "Evaluator reports ready={} but individual checks disagree",
                readiness.overall_ready
            );
        }

        Ok(Evaluation { sheet, readiness })
    }
}

/// Handle to the destructive action. Only obtainable from
/// [`PrerequisiteGate::confirmation`].
pub struct Confirmation<'g, 'a> {
    gate: &'g mut PrerequisiteGate<'a>,
}

impl Confirmation<'_, '_> {
    /// The passing evaluation that unlocked this confirmation.
    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.gate.last.as_ref()
    }

    /// Send the enable command once. The outcome is not awaited.
    pub fn execute(self) -> Result<()> {
        self.gate.enable_sent = true;
        tracing::info!("Sending enable swarming request");
        self.gate.evaluator.enable_swarming()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockApi, PrerequisitesCheckResponse};
    use crate::ui::MockUI;

    fn structural(last_flag: bool) -> PrerequisitesCheckResponse {
        PrerequisitesCheckResponse {
            supported_dms: true,
            supported_database: true,
            central_database_not_configured: true,
            legacy_reports_and_dashboards_disabled: true,
            no_incompatible_enhanced_services_on_dms: last_flag,
            satisfies_prerequisites: last_flag,
            summary: "structural summary".into(),
            ..Default::default()
        }
    }

    fn usage(qactions: bool, scripts: bool) -> PrerequisitesCheckResponse {
        PrerequisitesCheckResponse {
            no_obsolete_alarm_id_usage_in_protocol_q_actions: Some(qactions),
            no_obsolete_alarm_id_usage_in_scripts: Some(scripts),
            satisfies_prerequisites: qactions && scripts,
            summary: "usage summary".into(),
            ..structural(true)
        }
    }

    #[test]
    fn structural_pass_without_usage_does_not_offer_confirmation() {
        let api = MockApi::new();
        api.queue_check_responses(vec![structural(true)]);
        let mut gate = PrerequisiteGate::new(&api, UsageScope::Cluster);

        gate.evaluate_structural().unwrap();

        assert_eq!(
            gate.state(),
            GateState::StructuralPassedAwaitingUsageCheck {
                analysis_in_flight: false
            }
        );
        assert!(gate.confirmation().is_none());
        assert_eq!(api.usage_checks(), 0);
    }

    #[test]
    fn structural_failure_blocks_analysis_and_confirmation() {
        let api = MockApi::new();
        api.queue_check_responses(vec![structural(false)]);
        let mut gate = PrerequisiteGate::new(&api, UsageScope::Cluster);

        let evaluation = gate.evaluate_structural().unwrap();
        assert_eq!(evaluation.sheet.summary, "structural summary");

        assert_eq!(gate.state(), GateState::StructuralFailed);
        assert!(gate.request_usage_analysis().is_err());
        assert!(gate.confirmation().is_none());
        assert_eq!(api.usage_checks(), 0);
    }

    #[test]
    fn usage_pass_offers_confirmation() {
        let api = MockApi::new();
        api.queue_check_responses(vec![structural(true)]);
        api.queue_check_responses(vec![usage(true, true)]);
        let mut gate = PrerequisiteGate::new(&api, UsageScope::Cluster);

        gate.evaluate_structural().unwrap();
        gate.request_usage_analysis().unwrap();

        assert!(gate.state().is_confirmation_offered());
        assert!(gate.confirmation().is_some());
    }

    #[test]
    fn usage_failure_does_not_offer_confirmation() {
        let api = MockApi::new();
        api.queue_check_responses(vec![structural(true)]);
        api.queue_check_responses(vec![usage(true, false)]);
        let mut gate = PrerequisiteGate::new(&api, UsageScope::Cluster);

        gate.evaluate_structural().unwrap();
        let evaluation = gate.request_usage_analysis().unwrap();
        assert_eq!(evaluation.sheet.summary, "usage summary");

        assert_eq!(
            gate.state(),
            GateState::UsageEvaluated {
                verdict: UsageVerdict::Failed
            }
        );
        assert!(gate.confirmation().is_none());
    }

    #[test]
    fn evaluator_ready_flag_is_required_for_confirmation() {
        let api = MockApi::new();
        api.queue_check_responses(vec![structural(true)]);
        api.queue_check_responses(vec![PrerequisitesCheckResponse {
            satisfies_prerequisites: false,
            ..usage(true, true)
        }]);
        let mut gate = PrerequisiteGate::new(&api, UsageScope::Cluster);

        gate.evaluate_structural().unwrap();
        gate.request_usage_analysis().unwrap();

        assert!(gate.confirmation().is_none());
    }

    #[test]
    fn duplicate_analysis_request_is_rejected_without_remote_call() {
        let api = MockApi::new();
        api.queue_check_responses(vec![structural(true)]);
        api.queue_check_responses(vec![usage(true, true)]);
        let mut gate = PrerequisiteGate::new(&api, UsageScope::Cluster);
        gate.evaluate_structural().unwrap();

        let ticket = gate.begin_usage_analysis().unwrap();
        let err = gate.request_usage_analysis().unwrap_err();
        assert!(matches!(err, SwarmGateError::AnalysisInFlight));
        assert_eq!(api.usage_checks(), 0);

        gate.finish_usage_analysis(ticket).unwrap();
        assert_eq!(api.usage_checks(), 1);
    }

    #[test]
    fn zero_responses_leave_state_unchanged() {
        let api = MockApi::new();
        let mut gate = PrerequisiteGate::new(&api, UsageScope::Cluster);

        let err = gate.evaluate_structural().unwrap_err();

        assert!(matches!(err, SwarmGateError::EvaluationUnavailable { .. }));
        assert_eq!(gate.state(), GateState::Unchecked);
        assert!(gate.last_evaluation().is_none());
    }

    #[test]
    fn multiple_responses_leave_state_unchanged() {
        let api = MockApi::new();
        api.queue_check_responses(vec![structural(true)]);
        api.queue_check_responses(vec![usage(true, true), usage(true, true)]);
        let mut gate = PrerequisiteGate::new(&api, UsageScope::Cluster);
        gate.evaluate_structural().unwrap();

        let err = gate.request_usage_analysis().unwrap_err();

        assert!(matches!(err, SwarmGateError::EvaluationUnavailable { .. }));
        assert!(gate.state().usage_analysis_available());
        assert!(gate.confirmation().is_none());
    }

    #[test]
    fn transport_failure_during_analysis_reenables_trigger() {
        let api = MockApi::new();
        api.queue_check_responses(vec![structural(true)]);
        api.queue_check_responses(vec![usage(true, true)]);
        let mut gate = PrerequisiteGate::new(&api, UsageScope::Cluster);
        gate.evaluate_structural().unwrap();
        api.fail_next_check("connection reset");

        assert!(gate.request_usage_analysis().is_err());
        assert!(gate.state().usage_analysis_available());

        gate.request_usage_analysis().unwrap();
        assert!(gate.state().is_confirmation_offered());
    }

    #[test]
    fn local_scope_resolves_agent_once_per_analysis() {
        let api = MockApi::new();
        api.set_agent_id(42);
        api.queue_check_responses(vec![structural(true)]);
        api.queue_check_responses(vec![usage(true, true)]);
        let mut gate = PrerequisiteGate::new(&api, UsageScope::LocalAgent);

        gate.evaluate_structural().unwrap();
        gate.request_usage_analysis().unwrap();

        let requests = api.check_requests();
        assert_eq!(requests[0], PrerequisitesCheckRequest::structural());
        assert_eq!(requests[1], PrerequisitesCheckRequest::usage(Some(42)));
        assert_eq!(api.agent_lookups(), 1);
    }

    #[test]
    fn structural_evaluation_runs_only_once() {
        let api = MockApi::new();
        api.queue_check_responses(vec![structural(true)]);
        let mut gate = PrerequisiteGate::new(&api, UsageScope::Cluster);
        gate.evaluate_structural().unwrap();

        let err = gate.evaluate_structural().unwrap_err();

        assert!(matches!(err, SwarmGateError::InvalidTransition { .. }));
        assert_eq!(api.check_requests().len(), 1);
    }

    #[test]
    fn confirmation_sends_exactly_one_enable_command() {
        let api = MockApi::new();
        api.queue_check_responses(vec![structural(true)]);
        api.queue_check_responses(vec![usage(true, true)]);
        let mut gate = PrerequisiteGate::new(&api, UsageScope::Cluster);
        gate.evaluate_structural().unwrap();
        gate.request_usage_analysis().unwrap();

        let confirmation = gate.confirmation().unwrap();
        assert!(confirmation.evaluation().unwrap().readiness.usage_ready);
        confirmation.execute().unwrap();

        assert!(gate.enable_sent());
        assert!(gate.confirmation().is_none());
        assert_eq!(api.enable_requests(), 1);
    }

    #[test]
    fn each_structural_flag_alone_fails_its_own_line() {
        let base = || PrerequisitesCheckResponse {
            satisfies_prerequisites: false,
            ..structural(true)
        };
        let with_usage = |response: PrerequisitesCheckResponse| PrerequisitesCheckResponse {
            no_obsolete_alarm_id_usage_in_protocol_q_actions: Some(true),
            no_obsolete_alarm_id_usage_in_scripts: Some(true),
            ..response
        };
        let rounds = [
            PrerequisitesCheckResponse {
                supported_dms: false,
                ..base()
            },
            with_usage(PrerequisitesCheckResponse {
                supported_database: false,
                ..base()
            }),
            PrerequisitesCheckResponse {
                central_database_not_configured: false,
                ..base()
            },
            with_usage(PrerequisitesCheckResponse {
                legacy_reports_and_dashboards_disabled: false,
                ..base()
            }),
            PrerequisitesCheckResponse {
                no_incompatible_enhanced_services_on_dms: false,
                ..base()
            },
        ];

        for (index, response) in rounds.into_iter().enumerate() {
            let api = MockApi::new();
            api.queue_check_responses(vec![response]);
            let mut gate = PrerequisiteGate::new(&api, UsageScope::Cluster);

            let evaluation = gate.evaluate_structural().cloned().unwrap();

            assert_eq!(gate.state(), GateState::StructuralFailed, "round {index}");
            assert!(gate.confirmation().is_none(), "round {index}");

            let mut ui = MockUI::new();
            render_structural(&mut ui, &evaluation.sheet.structural);
            let lines = ui.check_lines();
            let failed: Vec<usize> = lines
                .iter()
                .enumerate()
                .filter(|(_, line)| line.ends_with("Not Ok"))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(failed, vec![index], "round {index}: {lines:?}");
            assert_eq!(
                lines[index],
                format_fact(StructuralCheck::ALL[index].label(), false)
            );
        }
    }
}
