use async_graphql_axum::GraphQLSubscription;
use axum::{
    Extension, Router,
    routing::{delete, get},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::messages::use_cases::append_message::inbound::http as append_http;
use crate::modules::messages::use_cases::delete_message::inbound::http as delete_http;
use crate::modules::messages::use_cases::greet::inbound::http as greet_http;
use crate::modules::messages::use_cases::list_messages::inbound::http as list_http;
use crate::shell::graphql::{GRAPHQL_PATH, GRAPHQL_WS_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/hello", get(greet_http::handle))
        .route("/messages", get(list_http::handle).post(append_http::handle))
        .route("/messages/{index}", delete(delete_http::handle))
        .with_state(state)
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .route_service(GRAPHQL_WS_PATH, GraphQLSubscription::new(schema.clone()))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
