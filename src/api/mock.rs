//! In-memory management API for testing.
//!
//! `MockApi` implements both [`PrerequisiteEvaluator`] and [`AlarmService`],
//! answers from pre-configured responses, and records every call for later
//! assertion.
//!
//! # Example
//!
//! ```
//! use swarmgate::api::{MockApi, PrerequisiteEvaluator, PrerequisitesCheckRequest};
//!
//! let api = MockApi::new();
//! api.queue_check_responses(vec![Default::default()]);
//!
//! let responses = api
//!     .check_prerequisites(&PrerequisitesCheckRequest::structural())
//!     .unwrap();
//! assert_eq!(responses.len(), 1);
//! assert_eq!(api.check_requests().len(), 1);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::error::{Result, SwarmGateError};

use super::messages::{
    ActiveAlarmsResponse, GetActiveAlarms, PrerequisitesCheckRequest,
    PrerequisitesCheckResponse, SetAlarmState,
};
use super::{AlarmService, PrerequisiteEvaluator};

/// Mock management API.
///
/// Prerequisite check answers are queued per call. Once the queue is
/// exhausted every further check returns zero responses.
#[derive(Debug, Default)]
pub struct MockApi {
    check_answers: RefCell<VecDeque<Vec<PrerequisitesCheckResponse>>>,
    check_requests: RefCell<Vec<PrerequisitesCheckRequest>>,
    check_failure: RefCell<Option<String>>,
    agent_id: Cell<i32>,
    agent_lookups: Cell<usize>,
    enable_requests: Cell<usize>,
    active_alarms: RefCell<Option<ActiveAlarmsResponse>>,
    alarm_lookups: RefCell<Vec<GetActiveAlarms>>,
    alarm_batches: RefCell<Vec<Vec<SetAlarmState>>>,
}

impl MockApi {
    /// Create a mock with no configured answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer for the next prerequisite check.
    pub fn queue_check_responses(&self, responses: Vec<PrerequisitesCheckResponse>) {
        self.check_answers.borrow_mut().push_back(responses);
    }

    /// Make the next prerequisite check fail with a transport error.
    pub fn fail_next_check(&self, message: &str) {
        *self.check_failure.borrow_mut() = Some(message.to_string());
    }

    /// Set the id reported for the local node.
    pub fn set_agent_id(&self, agent_id: i32) {
        self.agent_id.set(agent_id);
    }

    /// Set the answer of the active alarm lookup. `None` means nothing answers.
    pub fn set_active_alarms(&self, response: Option<ActiveAlarmsResponse>) {
        *self.active_alarms.borrow_mut() = response;
    }

    /// Get every prerequisite check request received.
    pub fn check_requests(&self) -> Vec<PrerequisitesCheckRequest> {
        self.check_requests.borrow().clone()
    }

    /// Count the usage-level prerequisite checks received.
    pub fn usage_checks(&self) -> usize {
        self.check_requests
            .borrow()
            .iter()
            .filter(|r| r.analyze_alarm_id_usage)
            .count()
    }

    /// Count the local node lookups received.
    pub fn agent_lookups(&self) -> usize {
        self.agent_lookups.get()
    }

    /// Count the enable commands received.
    pub fn enable_requests(&self) -> usize {
        self.enable_requests.get()
    }

    /// Get every active alarm lookup received.
    pub fn alarm_lookups(&self) -> Vec<GetActiveAlarms> {
        self.alarm_lookups.borrow().clone()
    }

    /// Get every alarm state batch received.
    pub fn alarm_batches(&self) -> Vec<Vec<SetAlarmState>> {
        self.alarm_batches.borrow().clone()
    }
}

impl PrerequisiteEvaluator for MockApi {
    fn check_prerequisites(
        &self,
        request: &PrerequisitesCheckRequest,
    ) -> Result<Vec<PrerequisitesCheckResponse>> {
        self.check_requests.borrow_mut().push(*request);

        if let Some(message) = self.check_failure.borrow_mut().take() {
            return Err(SwarmGateError::Transport { message });
        }

        Ok(self.check_answers.borrow_mut().pop_front().unwrap_or_default())
    }

    fn local_agent_id(&self) -> Result<i32> {
        self.agent_lookups.set(self.agent_lookups.get() + 1);
        Ok(self.agent_id.get())
    }

    fn enable_swarming(&self) -> Result<()> {
        self.enable_requests.set(self.enable_requests.get() + 1);
        Ok(())
    }
}

impl AlarmService for MockApi {
    fn active_alarms(&self, lookup: &GetActiveAlarms) -> Result<Option<ActiveAlarmsResponse>> {
        self.alarm_lookups.borrow_mut().push(*lookup);
        Ok(self.active_alarms.borrow().clone())
    }

    fn set_alarm_states(&self, batch: &[SetAlarmState]) -> Result<()> {
        self.alarm_batches.borrow_mut().push(batch.to_vec());
        Ok(())
    }
}
