mod cli;

use armory::config::Config;
use armory::error::ArmoryError;
use armory::publish::{FilePublisher, MarvinPublisher, Publisher};
use armory::{output, rules, validator};
use clap::Parser;
use cli::{Cli, Commands, RunArgs};
use colored::Colorize;
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();

    match cli
        .command
        .unwrap_or_else(|| Commands::Run(RunArgs::from_env()))
    {
        Commands::Run(RunArgs {
            workspace,
            config: config_path,
            marvin,
            output: output_path,
        }) => {
            let mut config = load_config(config_path.as_deref(), workspace);
            if let Some(binary) = marvin {
                config = config.with_publish_binary(binary);
            }
            warn_if_missing(&config);

            let report = validator::run_validation(&config).unwrap_or_else(|e| fail(e));

            let publisher: Box<dyn Publisher> = match &output_path {
                Some(path) => Box::new(FilePublisher::new(path)),
                None => Box::new(MarvinPublisher::from_config(&config.publish)),
            };
            publisher
                .publish(&report.result)
                .unwrap_or_else(|e| fail(e));

            eprintln!(
                "{} {} issues in {} files ({} archived)",
                "armory:".bold(),
                report.result.issues.len(),
                report.files_scanned,
                report.files_archived,
            );
            if let Some(path) = output_path {
                eprintln!("Result written to {}", path.display());
            }
        }

        Commands::Check {
            workspace,
            format,
            output: output_path,
            config: config_path,
        } => {
            let config = load_config(config_path.as_deref(), workspace);
            warn_if_missing(&config);

            let report = validator::run_validation(&config).unwrap_or_else(|e| fail(e));
            let formatted = output::format_report(&report, &format);

            if let Some(out_path) = output_path {
                std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
                    eprintln!("Error writing output: {e}");
                    std::process::exit(2);
                });
                eprintln!("Output written to {}", out_path.display());
            } else {
                print!("{formatted}");
            }

            std::process::exit(if report.is_clean() { 0 } else { 1 });
        }

        Commands::ListRules => {
            println!("{}", "Built-in Rules".bold().underline());
            println!();

            let all = rules::all_rules();
            for rule in &all {
                println!(
                    "  [{code}] {message}",
                    code = rule.code.as_str().yellow().bold(),
                    message = rule.message,
                );
            }

            println!();
            println!("  Categories: {}", category_list());
        }

        Commands::Explain { code } => {
            let all = rules::all_rules();
            let matching: Vec<_> = all
                .iter()
                .filter(|r| r.code.as_str().eq_ignore_ascii_case(&code))
                .collect();

            if matching.is_empty() {
                eprintln!("Unknown issue code: {code}");
                eprintln!("Use 'armory list-rules' to see all available rules.");
                std::process::exit(2);
            }

            println!("{}", matching[0].code.as_str().bold());
            for rule in matching {
                println!();
                println!("  Message:      {}", rule.message);
                println!("  Remediation:  {}", rule.remediation);
            }
        }
    }
}

/// Loads the config file and applies the workspace override from the
/// command line or `CODE_PATH`.
fn load_config(path: Option<&Path>, workspace: Option<PathBuf>) -> Config {
    let config = Config::load(path).unwrap_or_else(|e| fail(e));
    match workspace {
        Some(root) => config.with_workspace_root(root),
        None => config,
    }
}

fn warn_if_missing(config: &Config) {
    let issues = config.issues_path();
    if !issues.is_dir() {
        eprintln!(
            "{} issues directory not found: {}",
            "Warning:".yellow().bold(),
            issues.display()
        );
    }
}

fn category_list() -> String {
    rules::Category::ALL
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn fail(err: ArmoryError) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(2);
}
