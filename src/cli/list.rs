//! List command for bibkeywords.
//!
//! Shows the keywords collected from the given entries.

use serde::Serialize;

use crate::config::{Config, KeywordPreferences};
use crate::core::{BibEntry, ManageKeywords};

/// Options for the list command.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// Output format for the list command.
#[derive(Debug, Clone, Serialize)]
pub struct ListOutput {
    /// Number of entries read.
    pub entries: usize,
    /// Number of keywords collected.
    pub count: usize,
    /// Separator used to split keyword fields.
    pub separator: char,
    /// The keywords, entry by entry.
    pub keywords: Vec<String>,
}

/// The list command implementation.
pub struct ListCommand {
    entries: Vec<BibEntry>,
    config: Config,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(entries: Vec<BibEntry>, config: Config) -> Self {
        Self { entries, config }
    }

    /// Run the list command.
    pub fn run(&mut self) -> ListOutput {
        let entry_count = self.entries.len();
        let manager = ManageKeywords::new(&self.config, &mut self.entries);
        let keywords = manager.keywords().to_vec();

        ListOutput {
            entries: entry_count,
            count: keywords.len(),
            separator: self.config.keyword_separator(),
            keywords,
        }
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &ListOutput, options: &ListOptions) -> String {
        if options.quiet {
            return String::new();
        }

        if options.json {
            serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
        } else {
            Self::format_human_readable(output)
        }
    }

    /// Format output as human-readable text.
    fn format_human_readable(output: &ListOutput) -> String {
        if output.keywords.is_empty() {
            return format!("No keywords in {} entry(ies).\n", output.entries);
        }

        let mut lines = vec![format!(
            "Found {} keyword(s) in {} entry(ies):\n",
            output.count, output.entries
        )];
        for (i, keyword) in output.keywords.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, keyword));
        }

        lines.join("\n")
    }
}
