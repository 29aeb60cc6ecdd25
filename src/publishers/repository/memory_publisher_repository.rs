use async_trait::async_trait;
use tracing::debug;
use crate::core::library::LibraryResult;
use crate::publishers::domain::model::PublisherEntity;
use crate::publishers::repository::PublisherRepository;
use crate::utils::memory::MemoryCollection;

#[derive(Debug, Default)]
pub struct MemoryPublisherRepository {
    publishers: MemoryCollection<PublisherEntity>,
}

impl MemoryPublisherRepository {
    pub fn new() -> Self {
        Self {
            publishers: MemoryCollection::new(),
        }
    }
}

#[async_trait]
impl PublisherRepository for MemoryPublisherRepository {
    async fn insert_publisher(&self, entity: &PublisherEntity) -> LibraryResult<String> {
        let id = self.publishers.insert(entity.clone())?;
        debug!(name = entity.name.as_str(), publisher_id = id.as_str(), "inserted publisher");
        Ok(id)
    }

    async fn find_all(&self) -> LibraryResult<Vec<PublisherEntity>> {
        self.publishers.find(|_| true)
    }
}

#[cfg(test)]
mod tests {
    use crate::publishers::domain::model::PublisherEntity;
    use crate::publishers::repository::PublisherRepository;
    use crate::publishers::repository::memory_publisher_repository::MemoryPublisherRepository;

    #[tokio::test]
    async fn test_should_insert_publishers() {
        let publishers_repo = MemoryPublisherRepository::new();
        let ace = PublisherEntity::new("Ace", "555-0100", "New York");
        let id = publishers_repo.insert_publisher(&ace).await.expect("should insert publisher");
        assert_eq!(ace.publisher_id, id);

        // names are not keys, the same publisher can be added twice
        let again = PublisherEntity::new("Ace", "555-0100", "New York");
        let other_id = publishers_repo.insert_publisher(&again).await.expect("should insert publisher");
        assert_ne!(id, other_id);

        let all = publishers_repo.find_all().await.expect("should list publishers");
        assert_eq!(vec![ace, again], all);
    }
}
