#![warn(clippy::all, rust_2018_idioms)]

pub mod embedding;
pub mod matrix;
mod raw_data;
pub mod registry;
pub mod symbols;

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FeatError {
    #[error("a collection named \"{0}\" already exists")]
    DuplicateCollectionName(String),
    #[error("collection \"{collection}\" contains more than one item named \"{item}\"")]
    DuplicateItemName { collection: String, item: String },
    #[error("no item named \"{name}\" in collection \"{collection}\"")]
    UnknownName { collection: String, name: String },
    #[error("no collection named \"{0}\"")]
    UnknownCollection(String),
    #[error("index {index} out of range for collection \"{collection}\" of size {len}")]
    IndexOutOfRange {
        collection: String,
        index: usize,
        len: usize,
    },
    #[error("cannot derive a feature group from \"{0}\"")]
    InvalidGroup(String),
    #[error("unrecognized symbol at \"{0}\"")]
    UnknownSymbol(String),
    #[error("modifier \"{0}\" has no base symbol to attach to")]
    OrphanModifier(String),
    #[error("symbol \"{symbol}\" has unknown feature \"{value}\" for category \"{category}\"")]
    UnknownSymbolFeature {
        symbol: String,
        category: String,
        value: String,
    },
    #[error("duplicate feature group letter '{0}'")]
    DuplicateFeatureGroup(char),
    #[error("weight table has shape {actual:?}, expected {expected:?}")]
    WeightShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

pub type FeatResult<T> = Result<T, FeatError>;
