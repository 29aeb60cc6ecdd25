use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub isbn: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub isbn: String,
    pub removed: bool,
}

impl RemoveBookCommandResponse {
    pub fn new(isbn: &str, removed: bool) -> Self {
        Self {
            isbn: isbn.to_string(),
            removed,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.isbn.as_str()).await.map_err(CommandError::from)
            .map(|removed| RemoveBookCommandResponse::new(req.isbn.as_str(), removed))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let svc = factory::create_catalog_service(None);
        let add_cmd = AddBookCommand::new(svc.clone());
        let remove_cmd = RemoveBookCommand::new(svc.clone());

        let _ = add_cmd.execute(AddBookCommandRequest::new("isbn123", "test book", "1999", "Ace", "", Decimal::new(500, 2)))
            .await.expect("should add book");
        let res = remove_cmd.execute(RemoveBookCommandRequest::new("isbn123")).await.expect("should remove book");
        assert!(res.removed);

        let res = remove_cmd.execute(RemoveBookCommandRequest::new("isbn123")).await.expect("should run remove");
        assert!(!res.removed);
        assert!(svc.find_all_books().await.expect("should list books").is_empty());
    }
}
