//! Collected responses and score aggregation.
//!
//! A [`ResponseSet`] maps item ids to the rating chosen for that item. The
//! total severity score is the plain sum of all ratings, with no weighting
//! by part; per-part subtotals are available for reporting.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::{MAX_ITEM_SCORE, QuestionnaireItem, Section, parse_key};
use crate::error::ResponseError;

/// Ratings keyed by item id, in the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseSet {
    entries: Vec<(String, u8)>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the rating for one item.
    ///
    /// Ratings above 4 and a second rating for the same id are rejected.
    pub fn record(&mut self, id: &str, value: u8) -> Result<(), ResponseError> {
        if value > MAX_ITEM_SCORE {
            return Err(ResponseError::OutOfRange {
                id: id.to_string(),
                value,
            });
        }
        if self.get(id).is_some() {
            return Err(ResponseError::Duplicate(id.to_string()));
        }
        self.entries.push((id.to_string(), value));
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(id, rating)` pairs in recording order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// True when the recorded ids are exactly the ids of `items`.
    pub fn is_complete(&self, items: &[QuestionnaireItem]) -> bool {
        let expected: HashSet<&str> = items.iter().map(|item| item.id).collect();
        let recorded: HashSet<&str> = self.entries.iter().map(|(k, _)| k.as_str()).collect();
        expected == recorded
    }
}

impl FromIterator<(String, u8)> for ResponseSet {
    /// Build from pairs, keeping the first rating seen for each id.
    ///
    /// Intended for fixtures and replayed sessions; ratings above 4 are kept
    /// as-is, so callers that need validation should use [`ResponseSet::record`].
    fn from_iter<I: IntoIterator<Item = (String, u8)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (id, value) in iter {
            if set.get(&id).is_none() {
                set.entries.push((id, value));
            }
        }
        set
    }
}

/// Parse one line of operator input against an item's choice keys.
///
/// Surrounding whitespace is ignored; anything else must match a key exactly.
pub fn parse_choice(item: &QuestionnaireItem, input: &str) -> Result<u8, ResponseError> {
    let trimmed = input.trim();
    item.choice_keys()
        .find(|key| *key == trimmed)
        .and_then(parse_key)
        .ok_or_else(|| ResponseError::InvalidInput {
            id: item.id.to_string(),
            input: trimmed.to_string(),
        })
}

/// Total severity score: the sum of all item ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UpdrsScore(u32);

impl UpdrsScore {
    pub const MIN: UpdrsScore = UpdrsScore(0);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for UpdrsScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sum every rating in the set, regardless of item or part.
pub fn aggregate(responses: &ResponseSet) -> Result<UpdrsScore, ResponseError> {
    if responses.is_empty() {
        return Err(ResponseError::Empty);
    }
    let total = responses.iter().map(|(_, v)| u32::from(v)).sum();
    Ok(UpdrsScore(total))
}

/// Subtotal for one part of the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionTotal {
    pub section: Section,
    pub score: u32,
    pub answered: usize,
    pub max: u32,
}

/// Per-part subtotals, in part order. Parts with no items are omitted.
pub fn section_totals(responses: &ResponseSet, items: &[QuestionnaireItem]) -> Vec<SectionTotal> {
    Section::ALL
        .iter()
        .filter_map(|&section| {
            let in_section: Vec<&QuestionnaireItem> =
                items.iter().filter(|item| item.section == section).collect();
            if in_section.is_empty() {
                return None;
            }
            let ratings: Vec<u8> = in_section
                .iter()
                .filter_map(|item| responses.get(item.id))
                .collect();
            Some(SectionTotal {
                section,
                score: ratings.iter().map(|&v| u32::from(v)).sum(),
                answered: ratings.len(),
                max: in_section
                    .iter()
                    .map(|item| u32::from(item.max_score()))
                    .sum(),
            })
        })
        .collect()
}
