//! Bulk masking of critical alarms.

use serde::Serialize;

use crate::api::{AlarmInfo, AlarmService, GetActiveAlarms, SetAlarmState};
use crate::error::{Result, SwarmGateError};

use super::element::ElementId;

/// Severity that gets masked.
pub const CRITICAL: &str = "Critical";

/// Reference to one alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmRef {
    pub data_miner_id: i32,
    pub alarm_id: i32,
}

/// What a masking run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskReport {
    pub element: String,
    /// Active alarms found on the element.
    pub inspected: usize,
    /// Alarms included in the mask batch, in lookup order.
    pub masked: Vec<AlarmRef>,
    /// Whether the batch was actually sent.
    pub sent: bool,
}

/// Masks the active critical alarms of one element.
pub struct AlarmMasker<'a> {
    service: &'a dyn AlarmService,
}

impl<'a> AlarmMasker<'a> {
    pub fn new(service: &'a dyn AlarmService) -> Self {
        Self { service }
    }

    /// Look up the element's active alarms and mask every critical one in one batch.
    ///
    /// With `dry_run` the batch is built but not sent. An empty batch is never sent.
    pub fn mask_critical(&self, element: ElementId, dry_run: bool) -> Result<MaskReport> {
        let lookup = GetActiveAlarms {
            data_miner_id: element.data_miner_id,
            element_id: element.element_id,
        };

        let response =
            self.service
                .active_alarms(&lookup)?
                .ok_or_else(|| SwarmGateError::InvalidInput {
                    message: format!("Failed to get active alarms for element {}", element),
                })?;

        let batch: Vec<SetAlarmState> = critical_alarms(&response.active_alarms)
            .map(SetAlarmState::mask)
            .collect();

        tracing::debug!(
            "Element {}: {} active alarms, {} critical",
            element,
            response.active_alarms.len(),
            batch.len()
        );

        let sent = !dry_run && !batch.is_empty();
        if sent {
            self.service.set_alarm_states(&batch)?;
            tracing::info!("Sent mask request for {} alarms on {}", batch.len(), element);
        }

        Ok(MaskReport {
            element: element.to_string(),
            inspected: response.active_alarms.len(),
            masked: batch
                .iter()
                .map(|cmd| AlarmRef {
                    data_miner_id: cmd.data_miner_id,
                    alarm_id: cmd.alarm_id,
                })
                .collect(),
            sent,
        })
    }
}

/// Alarms with exactly the critical severity, in their original order.
pub fn critical_alarms(alarms: &[AlarmInfo]) -> impl Iterator<Item = &AlarmInfo> {
    alarms.iter().filter(|alarm| alarm.severity == CRITICAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ActiveAlarmsResponse, AlarmUserStatus, MockApi};

    fn alarm(id: i32, severity: &str) -> AlarmInfo {
        AlarmInfo {
            data_miner_id: 346,
            alarm_id: id,
            severity: severity.to_string(),
        }
    }

    fn api_with(alarms: Vec<AlarmInfo>) -> MockApi {
        let api = MockApi::new();
        api.set_active_alarms(Some(ActiveAlarmsResponse {
            active_alarms: alarms,
        }));
        api
    }

    #[test]
    fn masks_only_critical_alarms_in_order() {
        let api = api_with(vec![
            alarm(10, "Critical"),
            alarm(11, "Major"),
            alarm(12, "Critical"),
        ]);

        let report = AlarmMasker::new(&api)
            .mask_critical(ElementId::new(346, 7), false)
            .unwrap();

        let batches = api.alarm_batches();
        assert_eq!(batches.len(), 1);
        assert_eq!(
            batches[0],
            vec![
                SetAlarmState {
                    data_miner_id: 346,
                    alarm_id: 10,
                    desired_status: AlarmUserStatus::Mask,
                },
                SetAlarmState {
                    data_miner_id: 346,
                    alarm_id: 12,
                    desired_status: AlarmUserStatus::Mask,
                },
            ]
        );
        assert_eq!(report.inspected, 3);
        assert_eq!(report.masked.len(), 2);
        assert!(report.sent);
    }

    #[test]
    fn looks_up_the_given_element() {
        let api = api_with(vec![]);

        AlarmMasker::new(&api)
            .mask_critical(ElementId::new(5, 99), false)
            .unwrap();

        assert_eq!(
            api.alarm_lookups(),
            vec![GetActiveAlarms {
                data_miner_id: 5,
                element_id: 99,
            }]
        );
    }

    #[test]
    fn severity_match_is_exact() {
        let alarms = vec![alarm(1, "critical"), alarm(2, "Critical "), alarm(3, "Critical")];
        let ids: Vec<_> = critical_alarms(&alarms).map(|a| a.alarm_id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn missing_response_is_invalid_input() {
        let api = MockApi::new();

        let err = AlarmMasker::new(&api)
            .mask_critical(ElementId::new(1, 1), false)
            .unwrap_err();

        assert!(matches!(err, SwarmGateError::InvalidInput { .. }));
        assert!(api.alarm_batches().is_empty());
    }

    #[test]
    fn no_critical_alarms_sends_nothing() {
        let api = api_with(vec![alarm(1, "Minor")]);

        let report = AlarmMasker::new(&api)
            .mask_critical(ElementId::new(1, 1), false)
            .unwrap();

        assert!(!report.sent);
        assert!(api.alarm_batches().is_empty());
    }

    #[test]
    fn dry_run_reports_without_sending() {
        let api = api_with(vec![alarm(1, "Critical")]);

        let report = AlarmMasker::new(&api)
            .mask_critical(ElementId::new(1, 1), true)
            .unwrap();

        assert_eq!(
            report.masked,
            vec![AlarmRef {
                data_miner_id: 346,
                alarm_id: 1
            }]
        );
        assert!(!report.sent);
        assert!(api.alarm_batches().is_empty());
    }
}
