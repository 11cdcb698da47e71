//! Card sets - the unit produced by one extraction or one import

use crate::card::Card;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Violations of the card set invariants
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardSetError {
    /// A card failed its own invariants
    #[error("Card at position {position} is invalid: {reason}")]
    InvalidCard {
        /// 1-based position in the set
        position: usize,
        /// Which invariant failed
        reason: String,
    },

    /// Two cards share an id
    #[error("Duplicate card id '{0}'")]
    DuplicateId(String),
}

/// A titled, sourced, ordered collection of cards
///
/// Built exactly once per successful extraction or import and never
/// modified afterwards. `cards` may be empty; when it is not, every card
/// satisfies [`Card::validate`] and ids are unique.
///
/// Serializes with camelCase keys (`createdAt` as RFC 3339), which is also
/// the JSON import format.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSet {
    title: String,
    source: String,
    cards: Vec<Card>,
    created_at: DateTime<Utc>,
}

impl CardSet {
    /// Build a card set, checking card invariants and id uniqueness
    ///
    /// # Examples
    ///
    /// ```
    /// use cardsmith_domain::{Card, CardId, CardSet};
    /// use chrono::Utc;
    ///
    /// let cards = vec![Card::new(CardId::new("1"), "Q", "A")];
    /// let set = CardSet::new("Title", "Custom text", cards, Utc::now()).unwrap();
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn new(
        title: impl Into<String>,
        source: impl Into<String>,
        cards: Vec<Card>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, CardSetError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for (idx, card) in cards.iter().enumerate() {
            card.validate().map_err(|reason| CardSetError::InvalidCard {
                position: idx + 1,
                reason,
            })?;
            if !seen.insert(card.id().as_str()) {
                return Err(CardSetError::DuplicateId(card.id().to_string()));
            }
        }

        Ok(Self {
            title: title.into(),
            source: source.into(),
            cards,
            created_at,
        })
    }

    /// Set title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Origin descriptor (URL, "Custom text", "Imported ... file")
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Cards in presentation order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the set holds no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardId;
    use chrono::TimeZone;

    fn card(id: &str) -> Card {
        Card::new(CardId::new(id), "Question", "Answer")
    }

    #[test]
    fn test_empty_set_is_valid() {
        let set = CardSet::new("Empty", "Custom text", Vec::new(), Utc::now()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_preserves_card_order() {
        let cards = vec![card("b"), card("a"), card("c")];
        let set = CardSet::new("T", "S", cards, Utc::now()).unwrap();
        let ids: Vec<_> = set.cards().iter().map(|c| c.id().as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = CardSet::new("T", "S", vec![card("1"), card("1")], Utc::now());
        assert_eq!(result, Err(CardSetError::DuplicateId("1".to_string())));
    }

    #[test]
    fn test_reports_invalid_card_position() {
        let bad = Card::new(CardId::new("2"), "", "Answer");
        let err = CardSet::new("T", "S", vec![card("1"), bad], Utc::now()).unwrap_err();
        assert!(matches!(err, CardSetError::InvalidCard { position: 2, .. }));
    }

    #[test]
    fn test_serializes_camel_case() {
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let set = CardSet::new("Title", "Source", vec![card("1")], created).unwrap();
        let json: serde_json::Value = serde_json::to_value(&set).unwrap();
        assert_eq!(json["title"], "Title");
        assert_eq!(json["source"], "Source");
        assert_eq!(json["createdAt"], "2024-01-15T10:30:00Z");
        assert_eq!(json["cards"][0]["question"], "Question");
    }
}
