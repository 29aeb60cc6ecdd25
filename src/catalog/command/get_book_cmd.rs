use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub isbn: String,
}

impl GetBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

// A missing book is a normal answer, not an error
#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: Option<BookDto>,
}

impl GetBookCommandResponse {
    pub fn new(book: Option<BookDto>) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_isbn(req.isbn.as_str()).await.map_err(CommandError::from)
            .map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;

    #[tokio::test]
    async fn test_should_run_get_book() {
        let svc = factory::create_catalog_service(None);
        let add_cmd = AddBookCommand::new(svc.clone());
        let get_cmd = GetBookCommand::new(svc.clone());

        let added = add_cmd.execute(AddBookCommandRequest::new("isbn", "test book", "1999", "Ace", "", Decimal::new(1995, 2)))
            .await.expect("should add book");
        let res = get_cmd.execute(GetBookCommandRequest::new("isbn")).await.expect("should get book");
        assert_eq!(Some(added.book), res.book);

        let res = get_cmd.execute(GetBookCommandRequest::new("missing")).await.expect("should run lookup");
        assert!(res.book.is_none());
    }
}
