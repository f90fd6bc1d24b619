//! Clap derive structures for the `heroes` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// heroes -- manage a hero collection from the command line
#[derive(Debug, Parser)]
#[command(
    name = "heroes",
    version,
    about = "Manage a hero collection from the command line",
    long_about = "List, search, add, update, and delete heroes held by a REST\n\
        collection. Every operation reports its outcome to the message log,\n\
        which is printed to stderr after the command runs.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "HEROES_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Server URL (overrides profile)
    #[arg(long, short = 'S', env = "HEROES_SERVER", global = true)]
    pub server: Option<String>,

    /// Collection path under the server (overrides profile)
    #[arg(long, env = "HEROES_COLLECTION", global = true)]
    pub collection: Option<String>,

    /// Output format [default: table, or `defaults.output` from the config]
    #[arg(long, short = 'o', env = "HEROES_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: auto, or `defaults.color` from the config]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "HEROES_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "HEROES_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Fail on request errors instead of falling back to empty results
    #[arg(long, global = true)]
    pub strict: bool,
}

impl GlobalOpts {
    /// The selected output format, `table` if none was resolved.
    pub fn output_format(&self) -> &OutputFormat {
        self.output.as_ref().unwrap_or(&OutputFormat::Table)
    }

    /// The selected color mode, `auto` if none was resolved.
    pub fn color_mode(&self) -> &ColorMode {
        self.color.as_ref().unwrap_or(&ColorMode::Auto)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all heroes
    #[command(alias = "ls")]
    List,

    /// Show one hero
    Get {
        /// Hero id
        id: u32,
    },

    /// Search heroes by name
    Search {
        /// Name fragment to match
        term: String,
    },

    /// Add a new hero
    Add {
        /// Hero name
        name: String,
    },

    /// Replace a hero's name
    Update {
        /// Hero id
        id: u32,
        /// New name
        name: String,
    },

    /// Delete a hero
    #[command(alias = "rm")]
    Delete {
        /// Hero id
        id: u32,
    },

    /// Open a hero's detail view, rename it, save, and go back
    Edit {
        /// Hero id
        id: u32,
        /// New name to save
        #[arg(long, short = 'n')]
        name: String,
    },

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a profile to the config file
    Init {
        /// Server URL for the profile
        #[arg(long)]
        server: String,

        /// Collection path under the server
        #[arg(long, default_value = "api/heroes")]
        collection: String,

        /// Profile name (defaults to --profile or "default")
        #[arg(long)]
        name: Option<String>,

        /// Make this the default profile
        #[arg(long)]
        make_default: bool,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
