//! Core types for bibkeywords.
//!
//! Entries and their keyword fields, the display type and its observable
//! property, and the keyword manager that ties them together.

pub mod display;
pub mod entry;
pub mod keywords;
pub mod manager;
pub mod property;

pub use display::DisplayType;
pub use entry::{BibEntry, KeywordRecord, KEYWORDS_FIELD};
pub use keywords::{join_keywords, split_keywords, KeywordList};
pub use manager::{ManageKeywords, SaveReport};
pub use property::{Property, SubscriptionId};
