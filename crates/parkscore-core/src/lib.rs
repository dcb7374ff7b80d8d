//! UPDRS questionnaire data and scoring. Pure data and arithmetic, no inference.

pub mod catalog;
pub mod error;
mod items;
pub mod responses;

pub use catalog::{ITEM_COUNT, MAX_TOTAL, QuestionnaireItem, Section};
pub use error::{CatalogError, ResponseError};
pub use responses::{
    ResponseSet, SectionTotal, UpdrsScore, aggregate, parse_choice, section_totals,
};
