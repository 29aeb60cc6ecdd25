use std::sync::Arc;
use crate::books::factory::create_book_repository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::StorageGateway;
use crate::publishers::factory::create_publisher_repository;

// Without a gateway both collections live in memory.
pub fn create_catalog_service(gateway: Option<&StorageGateway>) -> Arc<dyn CatalogService> {
    let book_repo = create_book_repository(gateway);
    let publisher_repo = create_publisher_repository(gateway);
    Arc::new(CatalogServiceImpl::new(book_repo, publisher_repo))
}

// Opens the gateway the configured store needs, the caller owns and closes it.
pub async fn open_gateway(config: &Configuration) -> LibraryResult<Option<StorageGateway>> {
    if config.store.is_remote() {
        Ok(Some(StorageGateway::open(config).await?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::factory::open_gateway;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_skip_gateway_for_memory_store() {
        let gateway = open_gateway(&Configuration::new(RepositoryStore::InMemory)).await.expect("should open store");
        assert!(gateway.is_none());
    }
}
