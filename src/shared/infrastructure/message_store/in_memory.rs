// In memory implementation of the MessageStore and MessageQueries ports.
//
// Purpose
// - Hold the message list for the lifetime of the process.
//
// Responsibilities
// - Serialize writers behind a single RwLock while letting readers share it.
// - Keep positions contiguous when a message is removed.

use crate::modules::messages::use_cases::list_messages::queries_port::MessageQueries;
use crate::shared::infrastructure::message_store::{MessageStore, MessageStoreError};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryMessageStore {
    messages: RwLock<Vec<String>>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            messages: RwLock::new(messages.into_iter().map(Into::into).collect()),
        }
    }
}

#[async_trait::async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn append(&self, text: String) {
        self.messages.write().await.push(text);
    }

    async fn delete_at(&self, index: i64) -> Result<String, MessageStoreError> {
        let mut guard = self.messages.write().await;
        let position = usize::try_from(index)
            .ok()
            .filter(|position| *position < guard.len())
            .ok_or(MessageStoreError::OutOfRange { index })?;
        Ok(guard.remove(position))
    }
}

#[async_trait::async_trait]
impl MessageQueries for InMemoryMessageStore {
    async fn list(&self) -> Vec<String> {
        self.messages.read().await.clone()
    }
}

#[cfg(test)]
mod in_memory_message_store_tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::sync::Arc;

    #[fixture]
    fn seeded() -> InMemoryMessageStore {
        InMemoryMessageStore::with_messages(["first", "second", "third", "fourth"])
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_appended_messages_in_call_order() {
        let store = InMemoryMessageStore::new();
        store.append("a".into()).await;
        store.append("b".into()).await;
        store.append("a".into()).await;
        assert_eq!(store.list().await, vec!["a", "b", "a"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_nothing_when_empty() {
        let store = InMemoryMessageStore::new();
        assert!(store.list().await.is_empty());
    }

    #[rstest]
    #[case(0, "first", vec!["second", "third", "fourth"])]
    #[case(2, "third", vec!["first", "second", "fourth"])]
    #[case(3, "fourth", vec!["first", "second", "third"])]
    #[tokio::test]
    async fn it_should_remove_one_message_and_shift_the_rest_down(
        seeded: InMemoryMessageStore,
        #[case] index: i64,
        #[case] removed: &str,
        #[case] remaining: Vec<&str>,
    ) {
        let deleted = seeded.delete_at(index).await.expect("delete failed");
        assert_eq!(deleted, removed);
        assert_eq!(seeded.list().await, remaining);
    }

    #[rstest]
    #[case(-1)]
    #[case(4)]
    #[case(i64::MAX)]
    #[case(i64::MIN)]
    #[tokio::test]
    async fn it_should_reject_an_index_out_of_range_and_keep_the_list(
        seeded: InMemoryMessageStore,
        #[case] index: i64,
    ) {
        let before = seeded.list().await;
        let result = seeded.delete_at(index).await;
        assert_eq!(result, Err(MessageStoreError::OutOfRange { index }));
        assert!(result.unwrap_err().to_string().contains(&index.to_string()));
        assert_eq!(seeded.list().await, before);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_deleting_from_an_empty_store() {
        let store = InMemoryMessageStore::new();
        let result = store.delete_at(0).await;
        assert_eq!(result, Err(MessageStoreError::OutOfRange { index: 0 }));
        assert!(store.list().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_identical_lists_without_a_mutation_in_between(
        seeded: InMemoryMessageStore,
    ) {
        assert_eq!(seeded.list().await, seeded.list().await);
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn it_should_never_delete_past_the_end_under_concurrent_writers() {
        let store = Arc::new(InMemoryMessageStore::with_messages(
            (0..50).map(|i| i.to_string()),
        ));

        let deleters: Vec<_> = (0..100)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.delete_at(0).await })
            })
            .collect();

        let mut deleted = 0;
        let mut rejected = 0;
        for task in deleters {
            match task.await.expect("task panicked") {
                Ok(_) => deleted += 1,
                Err(MessageStoreError::OutOfRange { index: 0 }) => rejected += 1,
                Err(e) => panic!("unexpected error: {e:?}"),
            }
        }

        assert_eq!(deleted, 50);
        assert_eq!(rejected, 50);
        assert!(store.list().await.is_empty());
    }
}
