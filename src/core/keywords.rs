//! Delimited keyword fields.
//!
//! A keyword field is a single string such as `"Chatbot, Machine Learning"`.
//! [`KeywordList`] is the parsed form of one field: trimmed, non-empty,
//! unique tokens in their original order.

use serde::{Deserialize, Serialize};

/// Split a keyword field into trimmed, non-empty tokens.
///
/// Duplicates are kept. Use [`KeywordList::parse`] for the per-field set.
pub fn split_keywords(field: &str, separator: char) -> Vec<String> {
    field
        .split(separator)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tokens into a keyword field: `"a, b, c"` for separator `,`.
pub fn join_keywords<S: AsRef<str>>(tokens: &[S], separator: char) -> String {
    let delimiter = format!("{} ", separator);
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(&delimiter)
}

/// The keywords of a single entry.
///
/// Insertion ordered, no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordList {
    keywords: Vec<String>,
}

impl KeywordList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a keyword field.
    pub fn parse(field: &str, separator: char) -> Self {
        let mut list = Self::new();
        for token in split_keywords(field, separator) {
            list.add(token);
        }
        list
    }

    /// Append a keyword unless it is already present or blank.
    ///
    /// Returns whether the list changed.
    pub fn add(&mut self, keyword: impl Into<String>) -> bool {
        let keyword = keyword.into();
        let keyword = keyword.trim();
        if keyword.is_empty() || self.contains(keyword) {
            return false;
        }
        self.keywords.push(keyword.to_string());
        true
    }

    /// Append every keyword in order, skipping ones already present.
    pub fn add_all<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for keyword in keywords {
            self.add(keyword);
        }
    }

    /// Remove a keyword. Returns whether it was present.
    pub fn remove(&mut self, keyword: &str) -> bool {
        let before = self.keywords.len();
        self.keywords.retain(|k| k != keyword);
        self.keywords.len() != before
    }

    /// Remove every keyword in `keywords`.
    pub fn remove_all<'a, I>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        for keyword in keywords {
            self.remove(keyword);
        }
    }

    /// Check whether a keyword is present.
    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Iterate over the keywords in order.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.keywords.iter()
    }

    /// Serialize back into a keyword field.
    pub fn serialize(&self, separator: char) -> String {
        join_keywords(&self.keywords, separator)
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        list.add_all(iter);
        list
    }
}
