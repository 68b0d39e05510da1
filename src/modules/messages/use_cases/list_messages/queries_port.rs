use async_trait::async_trait;

#[async_trait]
pub trait MessageQueries {
    /// Snapshot of every message in insertion order.
    async fn list(&self) -> Vec<String>;
}
