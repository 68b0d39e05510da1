use async_graphql::Object;

use crate::modules::messages::use_cases::greet::greeting::GREETING;

#[derive(Default)]
pub struct GreetQuery;

#[Object]
impl GreetQuery {
    async fn hello(&self) -> &'static str {
        GREETING
    }
}
