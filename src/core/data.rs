//! Core data structures for the quote database
//!
//! This module contains the fundamental data structures used throughout
//! the Quotegen application.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single quote, split into its text and an optional attribution.
///
/// The storage format is a plain string, `"<quote text> - <author>"`.
/// Only the first `" - "` separates text from author; everything after
/// it belongs to the attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: Option<String>,
}

impl Quote {
    /// Parse a raw quote string into text and optional attribution.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(" - ") {
            Some((text, author)) if !author.trim().is_empty() => Self {
                text: text.trim().to_string(),
                author: Some(author.trim().to_string()),
            },
            _ => Self {
                text: raw.trim().to_string(),
                author: None,
            },
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(author) = &self.author {
            write!(f, "{} - {}", self.text, author)
        } else {
            write!(f, "{}", self.text)
        }
    }
}

/// Mapping from topic key (lowercase) to an ordered list of quote strings.
///
/// Backed by a vector of entries rather than a hash map so that key
/// iteration order is the document order of the loaded JSON. Partial
/// topic matching picks the first matching key in iteration order, so
/// that order has to stay deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteDatabase {
    entries: Vec<(String, Vec<String>)>,
}

impl QuoteDatabase {
    /// Create a new empty database
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a topic, replacing its quotes if the key already exists.
    /// Keys are normalized to lowercase on insert.
    pub fn insert(&mut self, key: impl Into<String>, quotes: Vec<String>) {
        let key = key.into().to_lowercase();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = quotes;
        } else {
            self.entries.push((key, quotes));
        }
    }

    /// Get the quotes stored under an exact topic key
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, quotes)| quotes.as_slice())
    }

    /// Iterate over topic keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over `(key, quotes)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, quotes)| (k.as_str(), quotes.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The built-in fallback database, used when the quotes resource
    /// cannot be loaded. Four topics, three quotes each.
    pub fn builtin() -> Self {
        let mut db = Self::new();
        db.insert(
            "success",
            vec![
                "Success is not final, failure is not fatal: it is the courage to continue that counts. - Winston Churchill".to_string(),
                "The way to get started is to quit talking and begin doing. - Walt Disney".to_string(),
                "Don't be afraid to give up the good to go for the great. - John D. Rockefeller".to_string(),
            ],
        );
        db.insert(
            "motivation",
            vec![
                "The only way to do great work is to love what you do. - Steve Jobs".to_string(),
                "Innovation distinguishes between a leader and a follower. - Steve Jobs".to_string(),
                "Your limitation—it's only your imagination. - Unknown".to_string(),
            ],
        );
        db.insert(
            "happiness",
            vec![
                "Happiness is not something ready made. It comes from your own actions. - Dalai Lama".to_string(),
                "The purpose of our lives is to be happy. - Dalai Lama".to_string(),
                "Life is what happens to you while you're busy making other plans. - John Lennon".to_string(),
            ],
        );
        db.insert(
            "leadership",
            vec![
                "A leader is one who knows the way, goes the way, and shows the way. - John C. Maxwell".to_string(),
                "Leadership is not about being in charge. It's about taking care of those in your charge. - Simon Sinek".to_string(),
                "The greatest leader is not necessarily the one who does the greatest things. - Ronald Reagan".to_string(),
            ],
        );
        db
    }
}

impl Serialize for QuoteDatabase {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, quotes) in &self.entries {
            map.serialize_entry(key, quotes)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for QuoteDatabase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DatabaseVisitor;

        impl<'de> Visitor<'de> for DatabaseVisitor {
            type Value = QuoteDatabase;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of topic keys to arrays of quote strings")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut db = QuoteDatabase::new();
                while let Some((key, quotes)) = access.next_entry::<String, Vec<String>>()? {
                    db.insert(key, quotes);
                }
                Ok(db)
            }
        }

        deserializer.deserialize_map(DatabaseVisitor)
    }
}
