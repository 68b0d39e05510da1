use crate::modules::messages::use_cases::append_message::command::AppendMessage;
use crate::shared::infrastructure::message_store::MessageStore;
use std::sync::Arc;

pub const MESSAGE_ADDED_PREFIX: &str = "Message added: ";

pub struct AppendMessageHandler<TStore>
where
    TStore: MessageStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> AppendMessageHandler<TStore>
where
    TStore: MessageStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Appends the text and returns the confirmation echoing it verbatim.
    pub async fn handle(&self, command: AppendMessage) -> String {
        let confirmation = format!("{MESSAGE_ADDED_PREFIX}{}", command.text);
        self.store.append(command.text).await;
        tracing::debug!("message appended");
        confirmation
    }
}
