//! bibkeywords - keyword management across bibliographic entries
//!
//! Collects the keyword fields of a selection of entries into one editable
//! list, tracks how that list should be displayed, and writes the edits
//! back to every entry.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub use config::{Config, KeywordPreferences, DEFAULT_KEYWORD_SEPARATOR};
pub use core::{
    join_keywords, split_keywords, BibEntry, DisplayType, KeywordList, KeywordRecord,
    ManageKeywords, Property, SaveReport, SubscriptionId,
};
pub use error::{KeywordsError, Result};

// CLI commands
pub use cli::{EditCommand, ListCommand};
