//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// SwarmGate - Guarded swarming enablement and alarm maintenance for a DataMiner cluster.
#[derive(Debug, Parser)]
#[command(name = "swarmgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (merged over ~/.swarmgate and .swarmgate/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Management API endpoint
    #[arg(long, global = true, env = "SWARMGATE_ENDPOINT", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Bearer token for the management API
    #[arg(long, global = true, env = "SWARMGATE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check swarming prerequisites and, once all are met, enable swarming
    EnableSwarming(EnableSwarmingArgs),

    /// Report swarming prerequisites without offering to enable anything
    Check(CheckArgs),

    /// Mask all active critical alarms of an element
    MaskAlarms(MaskAlarmsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `enable-swarming` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnableSwarmingArgs {
    /// Analyze AlarmID usage on every agent instead of only the local one
    #[arg(long)]
    pub no_scope: bool,

    /// Use prompt defaults (or SWARMGATE_PROMPT_<KEY>), no prompts
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Also run the AlarmID usage analysis when static requirements pass
    #[arg(long)]
    pub analyze_usage: bool,

    /// Analyze AlarmID usage on every agent instead of only the local one
    #[arg(long, requires = "analyze_usage")]
    pub no_scope: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `mask-alarms` command.
#[derive(Debug, Clone, clap::Args)]
pub struct MaskAlarmsArgs {
    /// Element to clean up, as <DataMinerID>/<ElementID>
    #[arg(value_name = "ELEMENT_ID")]
    pub element_id: String,

    /// Show the alarms that would be masked without masking them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
