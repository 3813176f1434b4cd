//! SwarmGate - Guarded swarming enablement for a DataMiner cluster.
//!
//! SwarmGate checks whether a cluster meets the prerequisites for swarming,
//! walks the operator through the expensive AlarmID usage analysis on
//! request, and only then offers the cluster-wide restart that enables it.
//! It also bulk-masks the active critical alarms of an element.
//!
//! # Modules
//!
//! - [`alarms`] - Element addressing and critical alarm masking
//! - [`api`] - Management API messages, service traits, HTTP client, and test doubles
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and resolution
//! - [`error`] - Error types and result aliases
//! - [`gate`] - The staged prerequisite gate
//! - [`ui`] - Interactive prompts, spinners, and terminal output
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
//!         data_miner_id: 1,
//!         alarm_id: 42,
//!         severity: "Critical".to_string(),
//!     }],
//! }));
//!
//! let element: ElementId = "1/200".parse().unwrap();
//! let report = AlarmMasker::new(&api).mask_critical(element, false).unwrap();
//! assert_eq!(report.masked.len(), 1);
//! ```

pub mod alarms;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod gate;
pub mod sys;
pub mod ui;

pub use error::{Result, SwarmGateError};
