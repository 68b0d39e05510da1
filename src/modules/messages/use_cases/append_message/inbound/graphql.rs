use async_graphql::{Context, Object};

use crate::modules::messages::use_cases::append_message::command::AppendMessage;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AppendMessageMutation;

#[Object]
impl AppendMessageMutation {
    async fn update_message(&self, context: &Context<'_>, input: String) -> String {
        let state = context.data_unchecked::<AppState>();
        state
            .append_handler
            .handle(AppendMessage { text: input })
            .await
    }
}
