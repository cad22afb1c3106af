//! CLI commands for bibkeywords.
//!
//! Both commands work on a JSON array of entries read from stdin:
//! - **list**: show the collected keywords
//! - **edit**: remove/add keywords, save, and emit the updated entries

pub mod edit;
pub mod list;

pub use edit::EditCommand;
pub use list::ListCommand;

use crate::core::BibEntry;
use crate::error::{KeywordsError, Result};

/// Parse the entries passed on stdin.
///
/// Accepts a JSON array of entries, or a single entry object.
pub fn parse_entries(input: &str) -> Result<Vec<BibEntry>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    let parsed = if trimmed.starts_with('{') {
        serde_json::from_str::<BibEntry>(trimmed).map(|entry| vec![entry])
    } else {
        serde_json::from_str::<Vec<BibEntry>>(trimmed)
    };
    parsed.map_err(|e| KeywordsError::input(format!("entries: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KeywordRecord, ManageKeywords};

    #[test]
    fn test_parse_entries_array() {
        let entries = parse_entries(
            r#"[{"type": "article", "fields": {"keywords": "a, b"}}, {"fields": {}}]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].keywords(), Some("a, b"));
        assert_eq!(entries[1].keywords(), None);
    }

    #[test]
    fn test_parse_single_entry() {
        let entries = parse_entries(r#"{"fields": {"keywords": "Bot"}}"#).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_entries("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_input() {
        let err = parse_entries("[1, 2]").unwrap_err();
        assert!(matches!(err, KeywordsError::Input { .. }));
    }

    #[test]
    fn test_parse_invalid_single_entry() {
        let err = parse_entries(r#"{"fields": 3}"#).unwrap_err();
        assert!(matches!(err, KeywordsError::Input { .. }));
        assert!(err.to_string().starts_with("invalid input: entries:"));
    }

    #[test]
    fn test_parse_capitalised_keywords_field() {
        let mut entries = parse_entries(r#"[{"fields": {"Keywords": "Bot, Internet"}}]"#).unwrap();
        {
            let mut manager = ManageKeywords::new(&',', &mut entries);
            assert_eq!(manager.keywords(), ["Bot", "Internet"]);
            manager.add_keyword("NewKeyword");
            manager.save_changes();
        }

        assert_eq!(entries[0].keywords(), Some("Bot, Internet, NewKeyword"));
        let json = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(json["fields"].as_object().unwrap().len(), 1);
    }
}
