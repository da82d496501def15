use armory::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "armory",
    version,
    about = "Validate custom analyzer issue definitions"
)]
pub struct Cli {
    /// Defaults to `run` with no flags
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate issue definitions and publish the result (default)
    Run(RunArgs),

    /// Validate issue definitions and print the result locally
    Check {
        /// Workspace root containing .deepsource/analyzer/issues
        #[arg(env = "CODE_PATH")]
        workspace: Option<PathBuf>,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List every rule with its message
    ListRules,

    /// Show the messages and remediation for an issue code
    Explain {
        /// Issue code (e.g., "ARMORY-002")
        code: String,
    },
}

#[derive(Args, Clone, Default)]
pub struct RunArgs {
    /// Workspace root containing .deepsource/analyzer/issues
    #[arg(long, short, env = "CODE_PATH")]
    pub workspace: Option<PathBuf>,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reporter binary to publish with
    #[arg(long)]
    pub marvin: Option<PathBuf>,

    /// Write the result envelope to this file instead of invoking the reporter
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl RunArgs {
    /// Arguments for a bare `armory` invocation.
    pub fn from_env() -> Self {
        RunArgs {
            workspace: std::env::var_os("CODE_PATH").map(PathBuf::from),
            ..RunArgs::default()
        }
    }
}
