//! Display type for the keyword manager.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KeywordsError;

/// Which keywords a rendering layer should present for the selected entries.
///
/// The manager only stores this value; it never filters its list by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayType {
    /// Keywords shared by every selected entry.
    #[default]
    ContainedInAllEntries,
    /// Keywords present in at least one selected entry.
    ContainedInAnyEntry,
}

impl fmt::Display for DisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayType::ContainedInAllEntries => write!(f, "all"),
            DisplayType::ContainedInAnyEntry => write!(f, "any"),
        }
    }
}

impl FromStr for DisplayType {
    type Err = KeywordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "contained_in_all_entries" => Ok(DisplayType::ContainedInAllEntries),
            "any" | "contained_in_any_entry" => Ok(DisplayType::ContainedInAnyEntry),
            other => Err(KeywordsError::input(format!(
                "unknown display type '{}' (expected 'all' or 'any')",
                other
            ))),
        }
    }
}
