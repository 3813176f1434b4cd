//! Management API collaborators.
//!
//! The prerequisite gate and the alarm masker only talk to the cluster
//! through the two traits defined here:
//! - [`PrerequisiteEvaluator`] for swarming readiness checks and the enable command
//! - [`AlarmService`] for active alarm lookup and alarm state changes
//!
//! [`HttpApiClient`] implements both against the JSON gateway, and
//! [`MockApi`] records calls for tests.

pub mod http;
pub mod messages;
pub mod mock;

pub use http::HttpApiClient;
pub use messages::{
    ActiveAlarmsResponse, AlarmInfo, AlarmUserStatus, GetActiveAlarms, LocalAgent,
    PrerequisitesCheckRequest, PrerequisitesCheckResponse, SetAlarmState, UNSCOPED,
};
pub use mock::MockApi;

use crate::error::Result;

/// Remote evaluator of swarming prerequisites.
pub trait PrerequisiteEvaluator {
    /// Send one prerequisites check request.
    ///
    /// Returns every response the evaluator produced. Callers decide how
    /// many they accept.
    fn check_prerequisites(
        &self,
        request: &PrerequisitesCheckRequest,
    ) -> Result<Vec<PrerequisitesCheckResponse>>;

    /// Id of the node the operator is connected to.
    fn local_agent_id(&self) -> Result<i32>;

    /// Fire-and-forget request to restart the cluster and enable swarming.
    fn enable_swarming(&self) -> Result<()>;
}

/// Remote alarm lookup and state changes.
pub trait AlarmService {
    /// Fetch the active alarms of one element. `None` when nothing answered.
    fn active_alarms(&self, lookup: &GetActiveAlarms) -> Result<Option<ActiveAlarmsResponse>>;

    /// Send a batch of alarm state changes in one request.
    fn set_alarm_states(&self, batch: &[SetAlarmState]) -> Result<()>;
}
