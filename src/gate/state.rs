//! Gate state machine.
//!
//! ```text
//! Unchecked ──structural──▶ StructuralFailed
//!     │
//!     └──structural──▶ AwaitingUsageCheck ──start──▶ AwaitingUsageCheck (in flight)
//!                             ▲                              │
//!                             └────────── aborted ───────────┤
//!                                                            ▼
//!                                   UsageEvaluated(Failed | ConfirmationOffered)
//! ```
//!
//! There is no way back to `Unchecked`; every run starts a fresh gate.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, SwarmGateError};

use super::facts::ReadinessResult;

/// Outcome of a usage-level evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UsageVerdict {
    Failed,
    /// The only state from which the destructive action is exposed.
    ConfirmationOffered,
}

/// Current position of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum GateState {
    #[default]
    Unchecked,
    StructuralFailed,
    #[serde(rename_all = "camelCase")]
    StructuralPassedAwaitingUsageCheck { analysis_in_flight: bool },
    UsageEvaluated { verdict: UsageVerdict },
}

/// Operator or system action that may move the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    EvaluateStructural,
    RequestUsageAnalysis,
    CompleteUsageAnalysis,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trigger::EvaluateStructural => "evaluate structural prerequisites",
            Trigger::RequestUsageAnalysis => "request usage analysis",
            Trigger::CompleteUsageAnalysis => "complete usage analysis",
        };
        f.write_str(s)
    }
}

/// Something that happened and is fed to [`GateState::transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    StructuralEvaluated(ReadinessResult),
    UsageAnalysisStarted,
    UsageEvaluated(ReadinessResult),
    /// The usage round trip failed; the trigger becomes available again.
    UsageAnalysisAborted,
}

impl GateEvent {
    /// The trigger this event answers to.
    pub fn trigger(&self) -> Trigger {
        match self {
            GateEvent::StructuralEvaluated(_) => Trigger::EvaluateStructural,
            GateEvent::UsageAnalysisStarted => Trigger::RequestUsageAnalysis,
            GateEvent::UsageEvaluated(_) | GateEvent::UsageAnalysisAborted => {
                Trigger::CompleteUsageAnalysis
            }
        }
    }
}

impl GateState {
    /// Check that `trigger` is accepted in this state.
    pub fn guard(&self, trigger: Trigger) -> Result<()> {
        let accepted = match (self, trigger) {
            (GateState::Unchecked, Trigger::EvaluateStructural) => true,
            (
                GateState::StructuralPassedAwaitingUsageCheck {
                    analysis_in_flight: true,
                },
                Trigger::RequestUsageAnalysis,
            ) => return Err(SwarmGateError::AnalysisInFlight),
            (
                GateState::StructuralPassedAwaitingUsageCheck { analysis_in_flight },
                Trigger::RequestUsageAnalysis,
            ) => !analysis_in_flight,
            (
                GateState::StructuralPassedAwaitingUsageCheck { analysis_in_flight },
                Trigger::CompleteUsageAnalysis,
            ) => *analysis_in_flight,
            _ => false,
        };

        if accepted {
            Ok(())
        } else {
            Err(SwarmGateError::InvalidTransition {
                trigger: trigger.to_string(),
                state: self.to_string(),
            })
        }
    }

    /// Apply an event, returning the next state.
    ///
    /// Rejected events leave the caller's state untouched.
    pub fn transition(self, event: GateEvent) -> Result<GateState> {
        self.guard(event.trigger())?;

        let next = match event {
            GateEvent::StructuralEvaluated(r) => {
                // Local disagreement can only keep the gate shut.
                if r.overall_ready && r.structural_ready {
                    GateState::StructuralPassedAwaitingUsageCheck {
                        analysis_in_flight: false,
                    }
                } else {
                    GateState::StructuralFailed
                }
            }
            GateEvent::UsageAnalysisStarted => GateState::StructuralPassedAwaitingUsageCheck {
                analysis_in_flight: true,
            },
            GateEvent::UsageEvaluated(r) => {
                let verdict = if r.overall_ready && r.structural_ready && r.usage_ready {
                    UsageVerdict::ConfirmationOffered
                } else {
                    UsageVerdict::Failed
                };
                GateState::UsageEvaluated { verdict }
            }
            GateEvent::UsageAnalysisAborted => GateState::StructuralPassedAwaitingUsageCheck {
                analysis_in_flight: false,
            },
        };

        Ok(next)
    }

    /// Whether the "run deeper analysis" action may be offered.
    pub fn usage_analysis_available(&self) -> bool {
        matches!(
            self,
            GateState::StructuralPassedAwaitingUsageCheck {
                analysis_in_flight: false
            }
        )
    }

    /// Whether the destructive action is exposed.
    pub fn is_confirmation_offered(&self) -> bool {
        matches!(
            self,
            GateState::UsageEvaluated {
                verdict: UsageVerdict::ConfirmationOffered
            }
        )
    }

    /// Whether this round ended with a failed prerequisite.
    pub fn is_failed(&self) -> bool {
        matches!(
            self,
            GateState::StructuralFailed
                | GateState::UsageEvaluated {
                    verdict: UsageVerdict::Failed
                }
        )
    }
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GateState::Unchecked => "unchecked",
            GateState::StructuralFailed => "structural failed",
            GateState::StructuralPassedAwaitingUsageCheck {
                analysis_in_flight: false,
            } => "awaiting usage check",
            GateState::StructuralPassedAwaitingUsageCheck {
                analysis_in_flight: true,
            } => "analyzing usage",
            GateState::UsageEvaluated {
                verdict: UsageVerdict::Failed,
            } => "usage failed",
            GateState::UsageEvaluated {
                verdict: UsageVerdict::ConfirmationOffered,
            } => "confirmation offered",
        };
        f.write_str(s)
    }
}
