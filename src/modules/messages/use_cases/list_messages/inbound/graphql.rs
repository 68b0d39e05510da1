use async_graphql::{Context, Object};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListMessagesQuery;

#[Object]
impl ListMessagesQuery {
    async fn get_messages(&self, context: &Context<'_>) -> Vec<String> {
        let state = context.data_unchecked::<AppState>();
        state.queries.list().await
    }
}
