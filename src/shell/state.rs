use crate::modules::messages::use_cases::append_message::handler::AppendMessageHandler;
use crate::modules::messages::use_cases::delete_message::handler::DeleteMessageHandler;
use crate::modules::messages::use_cases::list_messages::queries_port::MessageQueries;
use crate::modules::messages::use_cases::stream_messages::producer::MessageStreamProducer;
use crate::shared::infrastructure::message_store::in_memory::InMemoryMessageStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn MessageQueries + Send + Sync>,
    pub append_handler: Arc<AppendMessageHandler<InMemoryMessageStore>>,
    pub delete_handler: Arc<DeleteMessageHandler<InMemoryMessageStore>>,
    pub stream_producer: MessageStreamProducer,
}

impl AppState {
    /// Wires every use case to the same store.
    pub fn new(store: Arc<InMemoryMessageStore>, stream_producer: MessageStreamProducer) -> Self {
        Self {
            queries: store.clone(),
            append_handler: Arc::new(AppendMessageHandler::new(store.clone())),
            delete_handler: Arc::new(DeleteMessageHandler::new(store)),
            stream_producer,
        }
    }
}
