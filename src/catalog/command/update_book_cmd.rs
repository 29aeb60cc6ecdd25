use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookUpdate;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    pub isbn: String,
    pub update: BookUpdate,
}

impl UpdateBookCommandRequest {
    pub fn new(isbn: &str, update: BookUpdate) -> Self {
        Self {
            isbn: isbn.to_string(),
            update,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub isbn: String,
    pub updated: bool,
}

impl UpdateBookCommandResponse {
    pub fn new(isbn: &str, updated: bool) -> Self {
        Self {
            isbn: isbn.to_string(),
            updated,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.isbn.as_str(), &req.update).await.map_err(CommandError::from)
            .map(|updated| UpdateBookCommandResponse::new(req.isbn.as_str(), updated))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use crate::books::domain::model::BookUpdate;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;

    #[tokio::test]
    async fn test_should_run_update_book() {
        let svc = factory::create_catalog_service(None);
        let add_cmd = AddBookCommand::new(svc.clone());
        let update_cmd = UpdateBookCommand::new(svc.clone());

        let _ = add_cmd.execute(AddBookCommandRequest::new("1", "A", "2001", "Ace", "", Decimal::new(1000, 2)))
            .await.expect("should add book");
        let update = BookUpdate { title: Some("B".to_string()), ..Default::default() };
        let res = update_cmd.execute(UpdateBookCommandRequest::new("1", update)).await.expect("should update book");
        assert!(res.updated);

        let loaded = svc.find_book_by_isbn("1").await.expect("should find book").expect("should exist");
        assert_eq!("B", loaded.title.as_str());
        assert_eq!(Decimal::new(1000, 2), loaded.price);
    }

    #[tokio::test]
    async fn test_should_report_missing_book() {
        let update_cmd = UpdateBookCommand::new(factory::create_catalog_service(None));
        let update = BookUpdate { title: Some("B".to_string()), ..Default::default() };
        let res = update_cmd.execute(UpdateBookCommandRequest::new("1", update)).await.expect("should run update");
        assert!(!res.updated);
    }
}
