mod cli;

use clap::Parser;
use cli::{Cli, Commands, ToolArgs};
use colored::Colorize;
use phpcs_sniffs::config::Config;
use phpcs_sniffs::tool::phpcs::Phpcs;
use phpcs_sniffs::tool::runner::SystemRunner;
use phpcs_sniffs::tool::{ConfiguredLocator, Locator, PathLocator};
use phpcs_sniffs::{inventory, output, Error};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "PHPCS_SNIFFS_LOG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List {
            format,
            output: output_path,
            standards,
            tool,
        } => {
            let (executable, runner) = prepare(&tool).unwrap_or_else(|e| fail(&e));
            let phpcs = Phpcs::new(executable, &runner);
            let mut inventory = inventory::run(&phpcs).unwrap_or_else(|e| fail(&e));

            if !standards.is_empty() {
                let unknown: Vec<&str> = standards
                    .iter()
                    .filter(|name| inventory.catalog.get(name).is_none())
                    .map(String::as_str)
                    .collect();
                if !unknown.is_empty() {
                    eprintln!("Error: standard not installed: {}", unknown.join(", "));
                    eprintln!("Use 'phpcs-sniffs standards' to see the installed standards.");
                    std::process::exit(2);
                }
                inventory.catalog.retain_standards(&standards);
            }

            let formatted = output::format_inventory(&inventory, &format);

            if let Some(out_path) = output_path {
                std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
                    eprintln!("Error writing output: {e}");
                    std::process::exit(2);
                });
                eprintln!("Output written to {}", out_path.display());
            } else {
                print!("{formatted}");
            }
        }

        Commands::Standards { tool } => {
            let (executable, runner) = prepare(&tool).unwrap_or_else(|e| fail(&e));
            let phpcs = Phpcs::new(executable, &runner);
            let standards = inventory::discover_standards(&phpcs).unwrap_or_else(|e| fail(&e));
            for standard in &standards {
                println!("{standard}");
            }
        }

        Commands::CheckTool { tool } => {
            let located = Config::load(tool.config.as_deref())
                .and_then(|config| locator(&tool, &config).locate());

            match located {
                Ok(path) => {
                    println!(
                        "  [{}] phpcs {}",
                        "READY".green().bold(),
                        path.display()
                    );
                }
                Err(e) => {
                    println!("  [{}] phpcs", "NOT AVAILABLE".red());
                    fail(&e);
                }
            }
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `PHPCS_SNIFFS_LOG` wins when set; otherwise only warnings are shown, or
/// debug events with `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "phpcs_sniffs=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads the config, applies CLI overrides and resolves the phpcs executable.
fn prepare(tool: &ToolArgs) -> phpcs_sniffs::Result<(PathBuf, SystemRunner)> {
    let mut config = Config::load(tool.config.as_deref())?;
    if let Some(secs) = tool.timeout {
        config.phpcs.timeout_secs = secs;
    }

    let executable = locator(tool, &config).locate()?;
    Ok((executable, SystemRunner::new(config.phpcs.timeout())))
}

/// `--phpcs` beats the config file, which beats searching `PATH`.
fn locator(tool: &ToolArgs, config: &Config) -> Box<dyn Locator> {
    match tool.phpcs.as_ref().or(config.phpcs.path.as_ref()) {
        Some(path) => Box::new(ConfiguredLocator::new(path)),
        None => Box::new(PathLocator::new()),
    }
}

fn fail(err: &Error) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(err.exit_code());
}
