use crate::shell::graphql::build_schema;
use crate::tests::fixtures::state::make_test_state;
use async_graphql::value;
use std::time::Duration;
use tokio::time::Instant;
use tokio_stream::StreamExt;

#[tokio::test]
async fn posts_deletes_and_lists_messages() {
    let schema = build_schema(make_test_state());

    for text in ["a", "b", "c"] {
        let response = schema
            .execute(format!(r#"mutation {{ updateMessage(input: "{text}") }}"#))
            .await;
        assert!(response.errors.is_empty());
    }

    let deleted = schema.execute("mutation { deleteMessage(index: 1) }").await;
    assert_eq!(deleted.data, value!({ "deleteMessage": "Deleted message: b" }));

    let rejected = schema.execute("mutation { deleteMessage(index: 2) }").await;
    assert_eq!(rejected.errors[0].message, "invalid index: 2");

    let first = schema.execute("{ getMessages }").await;
    let second = schema.execute("{ getMessages }").await;
    assert_eq!(first.data, value!({ "getMessages": ["a", "c"] }));
    assert_eq!(first.data, second.data);

    let hello = schema.execute("{ hello }").await;
    assert_eq!(hello.data, value!({ "hello": "Hello, gqlgen!" }));
}

#[tokio::test(start_paused = true)]
async fn streams_five_values_one_second_apart() {
    let schema = build_schema(make_test_state());
    let mut stream = Box::pin(schema.execute_stream("subscription { messageStream }"));

    let mut arrivals = Vec::new();
    while let Some(response) = stream.next().await {
        assert!(response.errors.is_empty());
        arrivals.push(Instant::now());
    }

    assert_eq!(arrivals.len(), 5);
    for pair in arrivals.windows(2) {
        let gap = pair[1] - pair[0];
        assert!(gap >= Duration::from_millis(800) && gap <= Duration::from_millis(1200));
    }
}
