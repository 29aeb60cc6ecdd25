use std::sync::Arc;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub isbn: String,
    pub title: String,
    pub year: String,
    pub published_by: String,
    pub previous_edition: String,
    pub price: Decimal,
}

impl AddBookCommandRequest {
    pub fn new(isbn: &str, title: &str, year: &str, published_by: &str,
               previous_edition: &str, price: Decimal) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            year: year.to_string(),
            published_by: published_by.to_string(),
            previous_edition: previous_edition.to_string(),
            price,
        }
    }
    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.isbn.as_str(), self.title.as_str(), self.year.as_str(),
                     self.published_by.as_str(), self.previous_edition.as_str(), self.price)
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book_id: String,
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book_id: String, book: BookDto) -> Self {
        Self {
            book_id,
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from)
            .map(|id| AddBookCommandResponse::new(id, book))
    }
}
