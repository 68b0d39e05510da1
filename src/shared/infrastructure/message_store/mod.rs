use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessageStoreError {
    #[error("invalid index: {index}")]
    OutOfRange { index: i64 },
}

/// Write side of the message list.
///
/// Positions are contiguous from 0 to len - 1. `delete_at` shifts every later
/// message down by one, so the bounds check and the removal must be a single
/// step from the point of view of other writers.
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn append(&self, text: String);
    async fn delete_at(&self, index: i64) -> Result<String, MessageStoreError>;
}

pub mod in_memory;
