use thiserror::Error;

/// Failure of a store operation
///
/// Persistence failures never show up here; they are logged and swallowed
/// by the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("list {index} does not exist ({len} list(s))")]
    ListOutOfRange { index: usize, len: usize },

    #[error("item {index} does not exist in list {list} ({len} item(s))")]
    ItemOutOfRange { list: usize, index: usize, len: usize },

    #[error("text must not be empty")]
    EmptyText,

    #[error("no item ids left to allocate")]
    IdsExhausted,
}
