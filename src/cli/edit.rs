//! Edit command for bibkeywords.
//!
//! Removes and adds keywords across the given entries and returns the
//! entries with their keyword fields updated.

use serde::Serialize;

use crate::config::Config;
use crate::core::{BibEntry, DisplayType, ManageKeywords, SaveReport};

/// Options for the edit command.
#[derive(Debug, Clone, Default)]
pub struct EditOptions {
    /// Keywords to remove, first occurrence each, in order.
    pub remove: Vec<String>,
    /// Keywords to add, in order.
    pub add: Vec<String>,
    /// Display type to record in the output.
    pub display_type: Option<DisplayType>,
    /// Print only the report, not the entries.
    pub report_only: bool,
}

/// Output format for the edit command.
#[derive(Debug, Clone, Serialize)]
pub struct EditOutput {
    /// Display type in effect.
    pub display_type: DisplayType,
    /// Keywords after editing.
    pub keywords: Vec<String>,
    /// What the save did.
    pub report: SaveReport,
    /// Requested removals that matched nothing.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub not_found: Vec<String>,
    /// The updated entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<BibEntry>>,
}

/// The edit command implementation.
pub struct EditCommand {
    entries: Vec<BibEntry>,
    config: Config,
}

impl EditCommand {
    /// Create a new edit command.
    pub fn new(entries: Vec<BibEntry>, config: Config) -> Self {
        Self { entries, config }
    }

    /// Run the edit command.
    pub fn run(mut self, options: &EditOptions) -> EditOutput {
        let mut not_found = Vec::new();

        let (display_type, keywords, report) = {
            let mut manager = ManageKeywords::new(&self.config, &mut self.entries);

            if let Some(display_type) = options.display_type {
                if manager.display_type_property().set(display_type) {
                    tracing::debug!(display_type = %display_type, "display type changed");
                }
            }

            for keyword in &options.remove {
                if !manager.remove_keyword(keyword) {
                    tracing::warn!(keyword = %keyword, "keyword to remove not found");
                    not_found.push(keyword.clone());
                }
            }
            for keyword in &options.add {
                manager.add_keyword(keyword);
            }

            let report = manager.save_changes();
            (manager.display_type(), manager.keywords().to_vec(), report)
        };

        EditOutput {
            display_type,
            keywords,
            report,
            not_found,
            entries: if options.report_only {
                None
            } else {
                Some(self.entries)
            },
        }
    }

    /// Format output as JSON.
    pub fn format_output(output: &EditOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }
}
