//! Diagnostic CLI for `spark_core`.
//!
//! # Responsibility
//! - Load a bundle directory outside the mobile host and print what the UI
//!   would render.
//! - Export bundled quick links as JSON.

use clap::{Parser, Subcommand};
use flexi_logger::{Logger, LoggerHandle};
use log::error;
use spark_core::{
    default_log_level, filter_by_name, load_people, load_quick_links, quick_links_to_json,
    resolve_link_action, search_directory, try_load_quick_links, BundleConfig, LinkAction,
    LogLevel,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "spark", version, about = "Inspect Spark directory bundles")]
struct Cli {
    /// Directory holding `LinksData.csv` and `people.json`.
    #[arg(long, global = true, env = "SPARK_BUNDLE_DIR", default_value = "bundle")]
    bundle: PathBuf,

    /// Log level written to stderr.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print quick links with their resolved tap action.
    Links {
        /// Only show links whose name contains this text.
        #[arg(long)]
        filter: Option<String>,
    },
    /// Print directory people.
    People,
    /// Search links and people by name.
    Search { query: String },
    /// Print quick links as pretty JSON.
    ExportJson,
    /// Print core version.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    // stderr logging is best-effort; the CLI still works without it
    let _logger = match start_stderr_logger(&level) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("warning: logging disabled: {err}");
            None
        }
    };

    let bundle = match BundleConfig::existing(&cli.bundle) {
        Ok(bundle) => bundle,
        Err(err) if matches!(cli.command, Command::Version) => {
            log::debug!("event=cli_bundle module=cli status=skipped error={err}");
            println!("spark_core version={}", spark_core::core_version());
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            error!("event=cli_bundle module=cli status=error error={err}");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, &bundle) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn start_stderr_logger(level: &str) -> Result<LoggerHandle, String> {
    let level = LogLevel::parse(level)?;
    Logger::try_with_str(level.as_str())
        .and_then(|logger| logger.start())
        .map_err(|err| format!("failed to start logger: {err}"))
}

fn run(command: Command, bundle: &BundleConfig) -> Result<(), String> {
    match command {
        Command::Links { filter } => {
            let links = load_quick_links(bundle);
            let links = filter_by_name(&links, filter.as_deref().unwrap_or_default());
            for link in &links {
                println!(
                    "{:<20} {:<22} {:<16} {}",
                    link.category().icon(),
                    link.name,
                    link.kind,
                    describe_action(&resolve_link_action(link))
                );
            }
            println!("{} link(s)", links.len());
        }
        Command::People => {
            let people = load_people(bundle);
            for person in &people {
                println!(
                    "{:<24} {:<20} {:<28} {}",
                    person.name, person.position, person.email, person.location
                );
            }
            println!("{} person record(s)", people.len());
        }
        Command::Search { query } => {
            let links = load_quick_links(bundle);
            let people = load_people(bundle);
            let result = search_directory(&links, &people, &query);
            for link in &result.links {
                println!("link   {}", link.name);
            }
            for person in &result.people {
                println!("person {}", person.name);
            }
            println!("{} result(s)", result.total());
        }
        Command::ExportJson => {
            let links = try_load_quick_links(bundle).map_err(|err| err.to_string())?;
            let json = quick_links_to_json(&links).map_err(|err| err.to_string())?;
            println!("{json}");
        }
        Command::Version => {
            println!("spark_core version={}", spark_core::core_version());
        }
    }
    Ok(())
}

fn describe_action(action: &LinkAction) -> String {
    match action {
        LinkAction::ShowPrompt { kind, .. } => format!("prompt:{kind:?}"),
        LinkAction::OpenUrl(url) => format!("open:{url}"),
        LinkAction::Ignore => "ignore".to_string(),
        LinkAction::UnknownCategory { tag, .. } => format!("unknown:{tag}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{describe_action, start_stderr_logger, Cli, Command};
    use clap::Parser;
    use spark_core::{LinkAction, PromptKind};

    #[test]
    fn parses_search_with_bundle() {
        let cli = Cli::try_parse_from(["spark", "--bundle", "/tmp/b", "search", "acme"]).unwrap();
        assert_eq!(cli.bundle.to_str(), Some("/tmp/b"));
        assert!(matches!(cli.command, Command::Search { ref query } if query == "acme"));
    }

    #[test]
    fn unsupported_log_level_is_reported() {
        let err = start_stderr_logger("verbose")
            .err()
            .expect("unknown level must fail");
        assert!(err.contains("unsupported log level `verbose`"));
    }

    #[test]
    fn describes_actions() {
        let prompt = LinkAction::ShowPrompt {
            kind: PromptKind::AccessRequired,
            name: "Vault".to_string(),
        };
        assert_eq!(describe_action(&prompt), "prompt:AccessRequired");
        assert_eq!(describe_action(&LinkAction::Ignore), "ignore");
    }
}
