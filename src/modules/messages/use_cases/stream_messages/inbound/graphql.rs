use async_graphql::{Context, Subscription};

use crate::modules::messages::use_cases::stream_messages::producer::MessageStream;
use crate::shell::state::AppState;

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    async fn message_stream(&self, context: &Context<'_>) -> MessageStream {
        let state = context.data_unchecked::<AppState>();
        state.stream_producer.start()
    }
}
