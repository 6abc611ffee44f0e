use clap::{Args, Parser, Subcommand};
use phpcs_sniffs::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "phpcs-sniffs",
    version,
    about = "List the sniffs of every installed PHP_CodeSniffer standard"
)]
pub struct Cli {
    /// Log each step to stderr (overridden by PHPCS_SNIFFS_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all sniffs, grouped by standard
    List {
        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Only show these standards (repeatable)
        #[arg(long = "standard", short = 's', value_name = "NAME")]
        standards: Vec<String>,

        #[command(flatten)]
        tool: ToolArgs,
    },

    /// List the installed standards
    Standards {
        #[command(flatten)]
        tool: ToolArgs,
    },

    /// Check whether phpcs can be found
    CheckTool {
        #[command(flatten)]
        tool: ToolArgs,
    },
}

/// Options shared by every command that needs phpcs.
#[derive(Args)]
pub struct ToolArgs {
    /// Path to the phpcs executable (default: search PATH)
    #[arg(long)]
    pub phpcs: Option<PathBuf>,

    /// Seconds to wait for each phpcs invocation
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}
