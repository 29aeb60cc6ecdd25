//! Storage gateway: the one DynamoDB connection of a session and the
//! collection handles scoped to the configured database name.
//!
//! The gateway is opened explicitly and handed to the repositories, which keep
//! [`Collection`] handles for as long as they live. Dropping the last handle
//! ends the session, `close` does the same with a log line.

use aws_sdk_dynamodb::Client;
use tracing::info;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::utils::ddb::{build_db_client, ensure_table};

pub const BOOK_KEY: &str = "book_id";
pub const PUBLISHER_KEY: &str = "publisher_id";

// Collection is a client paired with the table that stores one kind of document
#[derive(Debug, Clone)]
pub struct Collection {
    client: Client,
    table_name: String,
}

impl Collection {
    pub fn new(client: Client, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn table_name(&self) -> &str {
        self.table_name.as_str()
    }
}

#[derive(Debug)]
pub struct StorageGateway {
    client: Client,
    database: String,
    book_table: String,
    publisher_table: String,
}

impl StorageGateway {
    pub async fn open(config: &Configuration) -> LibraryResult<Self> {
        let client = build_db_client(config).await;
        let gateway = Self {
            client,
            database: config.database.to_string(),
            book_table: config.book_table(),
            publisher_table: config.publisher_table(),
        };
        if config.store == RepositoryStore::LocalDynamoDB {
            let _ = ensure_table(&gateway.client, gateway.book_table.as_str(), BOOK_KEY).await?;
            let _ = ensure_table(&gateway.client, gateway.publisher_table.as_str(), PUBLISHER_KEY).await?;
        }
        info!(store = %config.store, database = gateway.database.as_str(), "opened storage gateway");
        Ok(gateway)
    }

    pub fn books(&self) -> Collection {
        Collection::new(self.client.clone(), self.book_table.as_str())
    }

    pub fn publishers(&self) -> Collection {
        Collection::new(self.client.clone(), self.publisher_table.as_str())
    }

    pub fn close(self) {
        info!(database = self.database.as_str(), "closed storage gateway");
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::gateway::StorageGateway;

    lazy_static! {
        static ref GATEWAY: AsyncOnce<StorageGateway> = AsyncOnce::new(async {
                let mut config = Configuration::new(RepositoryStore::LocalDynamoDB);
                config.database = "gateway_test".to_string();
                StorageGateway::open(&config).await.expect("should open gateway")
            });
    }

    #[tokio::test]
    async fn test_should_fail_open_when_store_is_unreachable() {
        let mut config = Configuration::new(RepositoryStore::LocalDynamoDB);
        config.endpoint = "http://127.0.0.1:1".to_string();
        assert!(StorageGateway::open(&config).await.is_err());
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local on 127.0.0.1:8000"]
    async fn test_should_scope_collections() {
        let gateway = GATEWAY.get().await;
        assert_eq!("gateway_test_Book", gateway.books().table_name());
        assert_eq!("gateway_test_Publisher", gateway.publishers().table_name());
    }
}
