//! MDS-UPDRS questionnaire catalog.
//!
//! The catalog is compiled-in constant data: 59 items across the four parts
//! of the scale, presented in declaration order. Every item is rated on the
//! same five-point ordinal scale, keyed "0" (normal) through "4" (severe).

use std::collections::HashSet;

use serde::Serialize;

use crate::error::CatalogError;
use crate::items::ITEMS;

/// Number of items in the catalog.
pub const ITEM_COUNT: usize = 59;

/// Highest rating any single item can take.
pub const MAX_ITEM_SCORE: u8 = 4;

/// Highest possible total score (every item rated 4).
pub const MAX_TOTAL: u32 = ITEM_COUNT as u32 * MAX_ITEM_SCORE as u32;

/// The four parts of the MDS-UPDRS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Section {
    PartI,
    PartII,
    PartIII,
    PartIV,
}

impl Section {
    pub const ALL: [Section; 4] = [Self::PartI, Self::PartII, Self::PartIII, Self::PartIV];

    /// Short label, e.g. "Part III".
    pub fn label(&self) -> &'static str {
        match self {
            Self::PartI => "Part I",
            Self::PartII => "Part II",
            Self::PartIII => "Part III",
            Self::PartIV => "Part IV",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::PartI => "Non-motor experiences of daily living",
            Self::PartII => "Motor experiences of daily living",
            Self::PartIII => "Motor examination",
            Self::PartIV => "Motor complications",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single rated item.
///
/// `choices` holds `(key, description)` pairs in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionnaireItem {
    pub section: Section,
    pub id: &'static str,
    pub title: &'static str,
    pub prompt: &'static str,
    pub choices: &'static [(&'static str, &'static str)],
}

impl QuestionnaireItem {
    pub fn choice_keys(&self) -> impl Iterator<Item = &'static str> {
        self.choices.iter().map(|(k, _)| *k)
    }

    /// Highest numeric key offered by this item.
    pub fn max_score(&self) -> u8 {
        self.choice_keys()
            .filter_map(parse_key)
            .max()
            .unwrap_or(0)
    }
}

/// All items in presentation order.
pub fn items() -> &'static [QuestionnaireItem] {
    &ITEMS
}

/// Check the structural invariants of a catalog.
///
/// Every item needs a non-empty unique id and a non-empty set of unique
/// choice keys, each a single digit in `0..=4`.
pub fn validate(items: &[QuestionnaireItem]) -> Result<(), CatalogError> {
    let mut seen_ids = HashSet::with_capacity(items.len());

    for (pos, item) in items.iter().enumerate() {
        if item.id.is_empty() {
            return Err(CatalogError::EmptyId(pos));
        }
        if !seen_ids.insert(item.id) {
            return Err(CatalogError::DuplicateId(item.id.to_string()));
        }
        if item.choices.is_empty() {
            return Err(CatalogError::NoChoices(item.id.to_string()));
        }

        let mut seen_keys = HashSet::with_capacity(item.choices.len());
        for key in item.choice_keys() {
            if parse_key(key).is_none() {
                return Err(CatalogError::InvalidChoiceKey {
                    id: item.id.to_string(),
                    key: key.to_string(),
                });
            }
            if !seen_keys.insert(key) {
                return Err(CatalogError::DuplicateChoiceKey {
                    id: item.id.to_string(),
                    key: key.to_string(),
                });
            }
        }
    }

    tracing::debug!(items = items.len(), "catalog validated");
    Ok(())
}

/// Parse a choice key: exactly one ASCII digit in `0..=4`.
pub(crate) fn parse_key(key: &str) -> Option<u8> {
    match key.as_bytes() {
        [b @ b'0'..=b'4'] => Some(b - b'0'),
        _ => None,
    }
}
