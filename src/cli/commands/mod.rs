//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which resolves
//! configuration, builds the management API client, and routes CLI
//! subcommands to their implementations. Commands only see the
//! [`PrerequisiteEvaluator`](crate::api::PrerequisiteEvaluator) or
//! [`AlarmService`](crate::api::AlarmService) they need, so tests run them
//! against [`MockApi`](crate::api::MockApi).

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod enable;
pub mod mask;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, EXIT_NOT_READY};
