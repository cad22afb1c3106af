//! bibkeywords - keyword management across bibliographic entries
//!
//! CLI entry point. Entries are read as JSON from stdin.

use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use bibkeywords::cli::edit::{EditCommand, EditOptions};
use bibkeywords::cli::list::{ListCommand, ListOptions};
use bibkeywords::cli::parse_entries;
use bibkeywords::config::{Config, KeywordsConfig};
use bibkeywords::core::{BibEntry, DisplayType};
use bibkeywords::error::{exit_codes, KeywordsError};

// =============================================================================
// CLI Definition
// =============================================================================

/// bibkeywords - manage keywords across bibliographic entries
#[derive(Parser)]
#[command(name = "bibkeywords")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Keyword separator (overrides config)
    #[arg(long, short, global = true)]
    separator: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the keywords of the entries on stdin
    List {
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Remove/add keywords and print the updated entries as JSON
    Edit {
        /// Keyword to remove (repeatable)
        #[arg(long, short)]
        remove: Vec<String>,
        /// Keyword to add (repeatable)
        #[arg(long, short)]
        add: Vec<String>,
        /// Display type to record: `all` or `any`
        #[arg(long)]
        display_type: Option<DisplayType>,
        /// Print only the change report
        #[arg(long)]
        report_only: bool,
    },
}

// =============================================================================
// Main Entry Point
// =============================================================================

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("bibkeywords error: {}", e);
            ExitCode::from(exit_codes::ERROR as u8)
        }
    }
}

/// Run the CLI and return the exit code.
fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.separator)?;
    let entries = read_entries()?;

    match cli.command {
        Commands::List { json, quiet } => run_list(entries, config, json, quiet),
        Commands::Edit {
            remove,
            add,
            display_type,
            report_only,
        } => run_edit(
            entries,
            config,
            EditOptions {
                remove,
                add,
                display_type,
                report_only,
            },
        ),
    }
}

/// Load config and apply the command-line separator, if any.
fn load_config(separator: Option<String>) -> Result<Config, KeywordsError> {
    let mut config = Config::load();
    if let Some(separator) = separator {
        if !KeywordsConfig::is_valid_separator(&separator) {
            return Err(KeywordsError::input(format!(
                "separator must be exactly one character, got '{}'",
                separator
            )));
        }
        config.keywords.separator = separator;
    }
    Ok(config)
}

/// Read entries from stdin.
fn read_entries() -> Result<Vec<BibEntry>, KeywordsError> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| KeywordsError::storage("<stdin>", e))?;
    parse_entries(&input)
}

// =============================================================================
// Command Implementations
// =============================================================================

fn run_list(
    entries: Vec<BibEntry>,
    config: Config,
    json: bool,
    quiet: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut cmd = ListCommand::new(entries, config);
    let options = ListOptions { json, quiet };

    let output = cmd.run();
    let formatted = cmd.format_output(&output, &options);

    if !formatted.is_empty() {
        println!("{}", formatted);
    }

    Ok(ExitCode::from(exit_codes::SUCCESS as u8))
}

fn run_edit(
    entries: Vec<BibEntry>,
    config: Config,
    options: EditOptions,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let output = EditCommand::new(entries, config).run(&options);
    println!("{}", EditCommand::format_output(&output));

    Ok(ExitCode::from(exit_codes::SUCCESS as u8))
}
