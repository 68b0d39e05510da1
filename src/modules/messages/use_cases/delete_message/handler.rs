use crate::modules::messages::use_cases::delete_message::command::DeleteMessage;
use crate::shared::infrastructure::message_store::{MessageStore, MessageStoreError};
use std::sync::Arc;
use thiserror::Error;

pub const MESSAGE_DELETED_PREFIX: &str = "Deleted message: ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] MessageStoreError),
}

pub struct DeleteMessageHandler<TStore>
where
    TStore: MessageStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteMessageHandler<TStore>
where
    TStore: MessageStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: DeleteMessage) -> Result<String, ApplicationError> {
        match self.store.delete_at(command.index).await {
            Ok(deleted) => {
                tracing::debug!(index = command.index, "message deleted");
                Ok(format!("{MESSAGE_DELETED_PREFIX}{deleted}"))
            }
            Err(e) => {
                tracing::warn!(index = command.index, "delete rejected: {e}");
                Err(e.into())
            }
        }
    }
}
