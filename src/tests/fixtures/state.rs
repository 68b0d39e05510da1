// Shared AppState builders for inbound adapter and e2e tests.

use crate::modules::messages::use_cases::stream_messages::producer::{
    MessageStreamProducer, StreamSettings,
};
use crate::shared::infrastructure::message_store::in_memory::InMemoryMessageStore;
use crate::shell::state::AppState;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub fn make_test_state() -> AppState {
    make_seeded_state(Vec::<String>::new())
}

pub fn make_seeded_state<I, S>(messages: I) -> AppState
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let store = Arc::new(InMemoryMessageStore::with_messages(messages));
    let producer = MessageStreamProducer::new(StreamSettings::default(), CancellationToken::new());
    AppState::new(store, producer)
}
