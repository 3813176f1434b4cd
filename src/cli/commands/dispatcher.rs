//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::api::HttpApiClient;
use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, ConfigOverrides, ConfigPaths, SwarmGateConfig};
use crate::error::Result;
use crate::gate::UsageScope;
use crate::ui::{OutputMode, UserInterface};

use super::check::CheckCommand;
use super::completions::CompletionsCommand;
use super::enable::EnableSwarmingCommand;
use super::mask::MaskAlarmsCommand;

/// Exit code for a run that completed but found unmet prerequisites.
pub const EXIT_NOT_READY: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Result of a run that ended on unmet prerequisites.
    pub fn not_ready() -> Self {
        Self::failure(EXIT_NOT_READY)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher that discovers project config under `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Get the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Resolve configuration for this invocation.
    pub fn load_config(&self, cli: &Cli) -> Result<SwarmGateConfig> {
        let paths = ConfigPaths::discover(&self.working_dir, cli.config.as_deref());
        let overrides = ConfigOverrides {
            endpoint: cli.endpoint.clone(),
            token: cli.token.clone(),
        };
        load_config(&paths, overrides)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. Completions never touch configuration.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::EnableSwarming(args) => {
                let (config, client) = self.connect(cli, ui)?;
                let scope = usage_scope(&config, args.no_scope);
                EnableSwarmingCommand::new(&client, scope).execute(ui)
            }
            Commands::Check(args) => {
                let (config, client) = self.connect(cli, ui)?;
                let scope = usage_scope(&config, args.no_scope);
                CheckCommand::new(&client, scope, args.clone()).execute(ui)
            }
            Commands::MaskAlarms(args) => {
                let (_, client) = self.connect(cli, ui)?;
                MaskAlarmsCommand::new(&client, args.clone()).execute(ui)
            }
            Commands::Completions(args) => CompletionsCommand::new(args.clone()).execute(ui),
        }
    }

    /// Load config, apply its output mode, and build the API client.
    fn connect(
        &self,
        cli: &Cli,
        ui: &mut dyn UserInterface,
    ) -> Result<(SwarmGateConfig, HttpApiClient)> {
        let config = self.load_config(cli)?;
        if !cli.verbose && !cli.quiet {
            if let Some(mode) = config.output {
                ui.set_output_mode(OutputMode::from(mode));
            }
        }

        let client = HttpApiClient::from_config(&config)?;
        tracing::debug!("Using management API at {}", client.base_url());
        Ok((config, client))
    }
}

/// Usage analysis scope from config and the `--no-scope` flag.
pub fn usage_scope(config: &SwarmGateConfig, no_scope: bool) -> UsageScope {
    if config.scope_usage_to_local_agent && !no_scope {
        UsageScope::LocalAgent
    } else {
        UsageScope::Cluster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{CheckArgs, EnableSwarmingArgs};
    use crate::error::SwarmGateError;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn command_result_not_ready() {
        let result = CommandResult::not_ready();
        assert!(!result.success);
        assert_eq!(result.exit_code, EXIT_NOT_READY);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.working_dir(), Path::new("/test"));
    }

    #[test]
    fn usage_scope_follows_config_and_flag() {
        let mut config = SwarmGateConfig::default();
        assert_eq!(usage_scope(&config, false), UsageScope::LocalAgent);
        assert_eq!(usage_scope(&config, true), UsageScope::Cluster);

        config.scope_usage_to_local_agent = false;
        assert_eq!(usage_scope(&config, false), UsageScope::Cluster);
    }

    #[test]
    fn cli_endpoint_overrides_project_config() {
        let temp = TempDir::new().unwrap();
        let config_dir = temp.path().join(".swarmgate");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join("config.yml"),
            "endpoint: http://from-file\ntimeout_secs: 5\n",
        )
        .unwrap();

        let cli = Cli {
            config: None,
            endpoint: Some("http://from-cli".to_string()),
            token: None,
            verbose: false,
            quiet: false,
            no_color: false,
            debug: false,
            command: Commands::Check(CheckArgs::default()),
        };

        let config = CommandDispatcher::new(temp.path().to_path_buf())
            .load_config(&cli)
            .unwrap();

        assert_eq!(config.endpoint.as_deref(), Some("http://from-cli"));
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn dispatch_without_endpoint_fails() {
        let temp = TempDir::new().unwrap();
        let cli = Cli {
            config: None,
            endpoint: None,
            token: None,
            verbose: false,
            quiet: false,
            no_color: false,
            debug: false,
            command: Commands::EnableSwarming(EnableSwarmingArgs::default()),
        };
        let mut ui = MockUI::new();

        let err = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut ui)
            .unwrap_err();

        assert!(matches!(err, SwarmGateError::ConfigValidationError { .. }));
        assert!(ui.headers().is_empty());
    }

    #[test]
    fn dispatch_with_missing_explicit_config_fails() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::try_parse_from([
            "swarmgate",
            "--config",
            "does-not-exist.yml",
            "--endpoint",
            "http://dms.local",
            "check",
        ])
        .unwrap();
        let mut ui = MockUI::new();

        let err = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut ui)
            .unwrap_err();

        assert!(matches!(err, SwarmGateError::ConfigNotFound { .. }));
    }

    #[test]
    fn config_output_mode_applies_without_flags() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("swarmgate.yml");
        fs::write(&config_path, "output: quiet\n").unwrap();

        let cli = Cli {
            config: Some(config_path),
            endpoint: None,
            token: None,
            verbose: false,
            quiet: false,
            no_color: false,
            debug: false,
            command: Commands::Check(CheckArgs::default()),
        };
        let mut ui = MockUI::new();

        // Fails on the missing endpoint, after the output mode was applied.
        let result = CommandDispatcher::new(temp.path().to_path_buf()).dispatch(&cli, &mut ui);

        assert!(result.is_err());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
