use async_graphql::http::GraphiQLSource;
use async_graphql::{MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use axum::response::Html;

use crate::modules::messages::use_cases::append_message::inbound::graphql::AppendMessageMutation;
use crate::modules::messages::use_cases::delete_message::inbound::graphql::DeleteMessageMutation;
use crate::modules::messages::use_cases::greet::inbound::graphql::GreetQuery;
use crate::modules::messages::use_cases::list_messages::inbound::graphql::ListMessagesQuery;
pub use crate::modules::messages::use_cases::stream_messages::inbound::graphql::SubscriptionRoot;
pub use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";
pub const GRAPHQL_WS_PATH: &str = "/gql/ws";

#[derive(MergedObject, Default)]
pub struct QueryRoot(GreetQuery, ListMessagesQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(AppendMessageMutation, DeleteMessageMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), SubscriptionRoot)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(
        GraphiQLSource::build()
            .endpoint(GRAPHQL_PATH)
            .subscription_endpoint(GRAPHQL_WS_PATH)
            .finish(),
    )
}
