use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("item at position {0} has an empty id")]
    EmptyId(usize),

    #[error("duplicate item id: {0}")]
    DuplicateId(String),

    #[error("item {0} has no choices")]
    NoChoices(String),

    #[error("item {id} has choice key {key:?}, expected a single digit 0-4")]
    InvalidChoiceKey { id: String, key: String },

    #[error("item {id} repeats choice key {key:?}")]
    DuplicateChoiceKey { id: String, key: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResponseError {
    #[error("{input:?} is not a valid choice for item {id}")]
    InvalidInput { id: String, input: String },

    #[error("score {value} for item {id} is outside 0-4")]
    OutOfRange { id: String, value: u8 },

    #[error("item {0} already has a response")]
    Duplicate(String),

    #[error("cannot aggregate an empty response set")]
    Empty,
}
