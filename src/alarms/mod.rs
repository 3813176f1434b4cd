//! Critical alarm masking for a single element.
//!
//! # Example
//!
//! ```
//! use swarmgate::alarms::{AlarmMasker, ElementId};
//! use swarmgate::api::{ActiveAlarmsResponse, AlarmInfo, MockApi};
//!
//! let api = MockApi::new();
//! api.set_active_alarms(Some(ActiveAlarmsResponse {
//!     active_alarms: vec![AlarmInfo {
//!         data_miner_id: 346,
//!         alarm_id: 9,
//!         severity: "Critical".to_string(),
//!     }],
//! }));
//!
//! let element: ElementId = "346/12".parse().unwrap();
//! let report = AlarmMasker::new(&api).mask_critical(element, false).unwrap();
//! assert_eq!(report.masked.len(), 1);
//! ```

pub mod element;
pub mod masker;

pub use element::ElementId;
pub use masker::{critical_alarms, AlarmMasker, AlarmRef, MaskReport, CRITICAL};
