//! Keyword manager for a selection of entries.
//!
//! Collects the keyword fields of several entries into one editable list,
//! and writes the edits back to every entry on save.

use serde::Serialize;

use crate::config::KeywordPreferences;
use crate::core::display::DisplayType;
use crate::core::entry::KeywordRecord;
use crate::core::keywords::{split_keywords, KeywordList};
use crate::core::property::Property;

/// Summary of what [`ManageKeywords::save_changes`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SaveReport {
    /// Keywords added to every entry.
    pub added: Vec<String>,
    /// Keywords removed from every entry.
    pub removed: Vec<String>,
    /// Number of entries whose keyword field changed.
    pub entries_changed: usize,
}

impl SaveReport {
    /// Check if the save had nothing to do.
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Keyword manager.
///
/// Borrows the entries for its lifetime. The keyword list is the manager's
/// own state; callers edit it in place through [`keywords_mut`] or the
/// add/remove helpers, then call [`save_changes`].
///
/// [`keywords_mut`]: ManageKeywords::keywords_mut
/// [`save_changes`]: ManageKeywords::save_changes
pub struct ManageKeywords<'a, R: KeywordRecord> {
    /// The selected entries.
    records: &'a mut [R],
    /// Separator read at construction.
    separator: char,
    /// Editable keyword list.
    keywords: Vec<String>,
    /// Keywords as of the last fill or save.
    baseline: Vec<String>,
    /// Display type for the rendering layer.
    display_type: Property<DisplayType>,
}

impl<'a, R: KeywordRecord> ManageKeywords<'a, R> {
    /// Create a manager over `records`.
    pub fn new(preferences: &impl KeywordPreferences, records: &'a mut [R]) -> Self {
        let mut manager = Self {
            records,
            separator: preferences.keyword_separator(),
            keywords: Vec::new(),
            baseline: Vec::new(),
            display_type: Property::new(DisplayType::default()),
        };
        manager.fill_keywords();
        manager
    }

    /// Rebuild the list from the entries: every entry's tokens, entry by entry.
    fn fill_keywords(&mut self) {
        let separator = self.separator;
        self.keywords = self
            .records
            .iter()
            .flat_map(|record| split_keywords(record.keywords().unwrap_or_default(), separator))
            .collect();
        self.baseline = self.keywords.clone();
        tracing::debug!(
            entries = self.records.len(),
            keywords = self.keywords.len(),
            "filled keyword list"
        );
    }

    /// The keyword list.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// The keyword list, for editing in place.
    pub fn keywords_mut(&mut self) -> &mut Vec<String> {
        &mut self.keywords
    }

    /// Remove the first occurrence of `keyword`.
    ///
    /// Returns whether anything was removed.
    pub fn remove_keyword(&mut self, keyword: &str) -> bool {
        match self.keywords.iter().position(|k| k == keyword) {
            Some(index) => {
                self.keywords.remove(index);
                true
            }
            None => false,
        }
    }

    /// Append a keyword. Blank input is ignored.
    ///
    /// Input containing the separator is split, and each piece is appended
    /// on its own, so `"Data, Mining"` adds two keywords.
    /// Returns whether anything was added.
    pub fn add_keyword(&mut self, keyword: &str) -> bool {
        let tokens = split_keywords(keyword, self.separator);
        if tokens.is_empty() {
            return false;
        }
        self.keywords.extend(tokens);
        true
    }

    /// Current display type.
    pub fn display_type(&self) -> DisplayType {
        self.display_type.get()
    }

    /// Observable display type, for binding a toggle control.
    pub fn display_type_property(&mut self) -> &mut Property<DisplayType> {
        &mut self.display_type
    }

    /// Separator in use.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// The entries being managed.
    pub fn records(&self) -> &[R] {
        &*self.records
    }

    /// Throw away unsaved edits and re-read the entries.
    pub fn reload(&mut self) {
        self.fill_keywords();
    }

    /// Write the edited list back to every entry.
    ///
    /// The edit is the difference between the list now and at the last
    /// fill or save. Keywords that disappeared from the list are removed
    /// from every entry; new ones are appended to every entry that lacks
    /// them. Nothing is written when there is no difference.
    pub fn save_changes(&mut self) -> SaveReport {
        let current: KeywordList = self.keywords.iter().cloned().collect();
        let before: KeywordList = self.baseline.iter().cloned().collect();

        let added: Vec<String> = current
            .iter()
            .filter(|k| !before.contains(k))
            .cloned()
            .collect();
        let removed: Vec<String> = before
            .iter()
            .filter(|k| !current.contains(k))
            .cloned()
            .collect();

        let mut report = SaveReport {
            added,
            removed,
            entries_changed: 0,
        };

        if report.is_noop() {
            tracing::debug!("no keyword changes to save");
            return report;
        }

        for record in self.records.iter_mut() {
            let field = record.keywords().unwrap_or_default();
            let original = KeywordList::parse(field, self.separator);
            let mut list = original.clone();
            list.remove_all(&report.removed);
            list.add_all(report.added.iter().cloned());

            // Entries whose keywords are untouched keep their own formatting
            if list == original {
                continue;
            }
            if list.is_empty() {
                record.clear_keywords();
            } else {
                record.set_keywords(&list.serialize(self.separator));
            }
            report.entries_changed += 1;
        }

        self.baseline = self.keywords.clone();

        tracing::debug!(
            added = report.added.len(),
            removed = report.removed.len(),
            entries_changed = report.entries_changed,
            "saved keyword changes"
        );

        report
    }
}
