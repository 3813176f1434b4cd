//! Fact sheets and derived readiness.
//!
//! A [`FactSheet`] holds the answer of one evaluation round. A
//! [`ReadinessResult`] is derived from it and never outlives the round.

use serde::Serialize;

use crate::api::PrerequisitesCheckResponse;

/// Static prerequisites, in the order they are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StructuralCheck {
    NoFailover,
    SharedDatabase,
    NoCentralDatabase,
    NoLegacyReports,
    NoIncompatibleServices,
}

impl StructuralCheck {
    /// All checks in declaration order.
    pub const ALL: [StructuralCheck; 5] = [
        StructuralCheck::NoFailover,
        StructuralCheck::SharedDatabase,
        StructuralCheck::NoCentralDatabase,
        StructuralCheck::NoLegacyReports,
        StructuralCheck::NoIncompatibleServices,
    ];

    /// Operator-facing label.
    pub fn label(self) -> &'static str {
        match self {
            StructuralCheck::NoFailover => "No failover",
            StructuralCheck::SharedDatabase => "Shared database",
            StructuralCheck::NoCentralDatabase => "No central database",
            StructuralCheck::NoLegacyReports => "No legacy reports and dashboards",
            StructuralCheck::NoIncompatibleServices => "No incompatible enhanced services",
        }
    }
}

/// Alarm id usage prerequisites, in the order they are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UsageCheck {
    NoObsoleteInQActions,
    NoObsoleteInScripts,
}

impl UsageCheck {
    /// All checks in declaration order.
    pub const ALL: [UsageCheck; 2] = [
        UsageCheck::NoObsoleteInQActions,
        UsageCheck::NoObsoleteInScripts,
    ];

    /// Operator-facing label.
    pub fn label(self) -> &'static str {
        match self {
            UsageCheck::NoObsoleteInQActions => "No obsolete alarm id usage in protocol QActions",
            UsageCheck::NoObsoleteInScripts => "No obsolete alarm id usage in scripts",
        }
    }
}

/// One evaluated prerequisite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fact<C> {
    pub check: C,
    pub passed: bool,
}

/// Results of the static prerequisites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralFacts {
    pub no_failover: bool,
    pub shared_database: bool,
    pub no_central_database: bool,
    pub no_legacy_reports: bool,
    pub no_incompatible_services: bool,
}

impl StructuralFacts {
    /// Result of a single check.
    pub fn get(&self, check: StructuralCheck) -> bool {
        match check {
            StructuralCheck::NoFailover => self.no_failover,
            StructuralCheck::SharedDatabase => self.shared_database,
            StructuralCheck::NoCentralDatabase => self.no_central_database,
            StructuralCheck::NoLegacyReports => self.no_legacy_reports,
            StructuralCheck::NoIncompatibleServices => self.no_incompatible_services,
        }
    }

    /// Every fact in declaration order.
    pub fn facts(&self) -> impl Iterator<Item = Fact<StructuralCheck>> + '_ {
        StructuralCheck::ALL.into_iter().map(|check| Fact {
            check,
            passed: self.get(check),
        })
    }

    /// Whether every static prerequisite holds.
    pub fn all_passed(&self) -> bool {
        self.facts().all(|f| f.passed)
    }
}

/// Results of the alarm id usage analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageFacts {
    pub no_obsolete_in_qactions: bool,
    pub no_obsolete_in_scripts: bool,
}

impl UsageFacts {
    /// Result of a single check.
    pub fn get(&self, check: UsageCheck) -> bool {
        match check {
            UsageCheck::NoObsoleteInQActions => self.no_obsolete_in_qactions,
            UsageCheck::NoObsoleteInScripts => self.no_obsolete_in_scripts,
        }
    }

    /// Every fact in declaration order.
    pub fn facts(&self) -> impl Iterator<Item = Fact<UsageCheck>> + '_ {
        UsageCheck::ALL.into_iter().map(|check| Fact {
            check,
            passed: self.get(check),
        })
    }

    /// Whether no obsolete usage was found anywhere.
    pub fn all_passed(&self) -> bool {
        self.facts().all(|f| f.passed)
    }
}

/// The input facts of one evaluation round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSheet {
    pub structural: StructuralFacts,
    /// Present only when usage analysis was part of the round.
    pub usage: Option<UsageFacts>,
    /// The evaluator's own aggregate. Authoritative.
    pub overall_ready: bool,
    pub summary: String,
}

impl FactSheet {
    /// Derive the readiness aggregates of this round.
    pub fn readiness(&self) -> ReadinessResult {
        ReadinessResult::derive(self)
    }
}

impl From<PrerequisitesCheckResponse> for FactSheet {
    fn from(resp: PrerequisitesCheckResponse) -> Self {
        // A usage round missing one of its two flags counts that flag as failed.
        let usage = match (
            resp.no_obsolete_alarm_id_usage_in_protocol_q_actions,
            resp.no_obsolete_alarm_id_usage_in_scripts,
        ) {
            (None, None) => None,
            (qactions, scripts) => Some(UsageFacts {
                no_obsolete_in_qactions: qactions.unwrap_or(false),
                no_obsolete_in_scripts: scripts.unwrap_or(false),
            }),
        };

        Self {
            structural: StructuralFacts {
                no_failover: resp.supported_dms,
                shared_database: resp.supported_database,
                no_central_database: resp.central_database_not_configured,
                no_legacy_reports: resp.legacy_reports_and_dashboards_disabled,
                no_incompatible_services: resp.no_incompatible_enhanced_services_on_dms,
            },
            usage,
            overall_ready: resp.satisfies_prerequisites,
            summary: resp.summary,
        }
    }
}

/// Aggregates derived from one [`FactSheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResult {
    pub structural_ready: bool,
    /// False while usage facts are absent: not failed, just not ready to confirm.
    pub usage_ready: bool,
    /// Copied from the evaluator.
    pub overall_ready: bool,
    /// Whether the local recomputation agrees with `overall_ready`.
    pub locally_consistent: bool,
}

impl ReadinessResult {
    /// Derive readiness from a fact sheet.
    pub fn derive(sheet: &FactSheet) -> Self {
        let structural_ready = sheet.structural.all_passed();
        let usage_ready = sheet.usage.is_some_and(|u| u.all_passed());
        let recomputed = structural_ready && (sheet.usage.is_none() || usage_ready);

        Self {
            structural_ready,
            usage_ready,
            overall_ready: sheet.overall_ready,
            locally_consistent: recomputed == sheet.overall_ready,
        }
    }
}
