use crate::model::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiftError {
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Category is not active: {0}")]
    CategoryNotActive(Category),

    #[error("Duplicate record id: {0}")]
    DuplicateRecordId(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, SiftError>;
