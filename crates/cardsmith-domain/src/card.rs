//! Card module - a single question/answer study card

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a card
///
/// Ids generated by Cardsmith are UUIDv7 strings, but ids imported from a
/// file are preserved verbatim, so the id is an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Wrap an existing identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use cardsmith_domain::CardId;
    ///
    /// let id = CardId::new("card-1");
    /// assert_eq!(id.as_str(), "card-1");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CardId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A study card
///
/// Cards are never mutated in place. Importers trim question and answer
/// before constructing a card; extracted cards keep the model's text
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    id: CardId,
    question: String,
    answer: String,
}

impl Card {
    /// Create a new card
    pub fn new(id: CardId, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Card identifier
    pub fn id(&self) -> &CardId {
        &self.id
    }

    /// Question side
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Answer side
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Check the card invariants: non-blank id, question and answer
    pub fn validate(&self) -> Result<(), String> {
        if self.id.is_blank() {
            return Err("id is empty".to_string());
        }
        if self.question.trim().is_empty() {
            return Err("question is empty".to_string());
        }
        if self.answer.trim().is_empty() {
            return Err("answer is empty".to_string());
        }
        Ok(())
    }
}
