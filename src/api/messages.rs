//! Typed messages exchanged with the management API.
//!
//! Field names follow the gateway's JSON contract (camelCase).

use serde::{Deserialize, Serialize};

/// Cluster node id meaning "no scoping, evaluate cluster-wide".
pub const UNSCOPED: i32 = -1;

/// Request for a swarming prerequisites evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrerequisitesCheckRequest {
    /// Also scan scripts and protocol QActions for obsolete alarm id usage.
    pub analyze_alarm_id_usage: bool,
    /// Node to restrict the usage scan to, or [`UNSCOPED`].
    pub data_miner_id: i32,
}

impl PrerequisitesCheckRequest {
    /// A cheap structural-only evaluation.
    pub fn structural() -> Self {
        Self {
            analyze_alarm_id_usage: false,
            data_miner_id: UNSCOPED,
        }
    }

    /// A usage-level evaluation, optionally scoped to one node.
    pub fn usage(scope: Option<i32>) -> Self {
        Self {
            analyze_alarm_id_usage: true,
            data_miner_id: scope.unwrap_or(UNSCOPED),
        }
    }
}

/// Evaluator response. Usage fields are only present on usage-level rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrerequisitesCheckResponse {
    pub supported_dms: bool,
    pub supported_database: bool,
    pub central_database_not_configured: bool,
    pub legacy_reports_and_dashboards_disabled: bool,
    pub no_incompatible_enhanced_services_on_dms: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_obsolete_alarm_id_usage_in_protocol_q_actions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_obsolete_alarm_id_usage_in_scripts: Option<bool>,
    /// Authoritative aggregate computed by the evaluator.
    pub satisfies_prerequisites: bool,
    #[serde(default)]
    pub summary: String,
}

/// Identity of the node the operator is connected to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalAgent {
    pub agent_id: i32,
}

/// Lookup of the active alarms of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetActiveAlarms {
    pub data_miner_id: i32,
    pub element_id: i32,
}

/// Active alarms of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveAlarmsResponse {
    #[serde(default)]
    pub active_alarms: Vec<AlarmInfo>,
}

/// One active alarm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmInfo {
    pub data_miner_id: i32,
    pub alarm_id: i32,
    pub severity: String,
}

/// Operator status an alarm can be moved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlarmUserStatus {
    Mask,
}

/// State change command for one alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAlarmState {
    pub data_miner_id: i32,
    pub alarm_id: i32,
    pub desired_status: AlarmUserStatus,
}

impl SetAlarmState {
    /// Mask the given alarm.
    pub fn mask(alarm: &AlarmInfo) -> Self {
        Self {
            data_miner_id: alarm.data_miner_id,
            alarm_id: alarm.alarm_id,
            desired_status: AlarmUserStatus::Mask,
        }
    }
}
