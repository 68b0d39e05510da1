// Composition root for the messages service.
//
// Responsibilities
// - Read config from environment.
// - Construct the in-memory message store and wire it into the use case handlers.
// - Build the GraphQL schema and the HTTP router around it.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
