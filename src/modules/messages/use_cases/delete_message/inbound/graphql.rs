use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::messages::use_cases::delete_message::command::DeleteMessage;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteMessageMutation;

#[Object]
impl DeleteMessageMutation {
    async fn delete_message(&self, context: &Context<'_>, index: i32) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        state
            .delete_handler
            .handle(DeleteMessage {
                index: i64::from(index),
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }
}
