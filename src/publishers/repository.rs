pub mod ddb_publisher_repository;
pub mod memory_publisher_repository;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::publishers::domain::model::PublisherEntity;

#[async_trait]
pub trait PublisherRepository: Sync + Send {
    // returns the generated document id
    async fn insert_publisher(&self, entity: &PublisherEntity) -> LibraryResult<String>;

    async fn find_all(&self) -> LibraryResult<Vec<PublisherEntity>>;
}
