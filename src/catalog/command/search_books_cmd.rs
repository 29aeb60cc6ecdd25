use std::sync::Arc;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Every string criterion is an exact, case sensitive match
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum SearchCriteria {
    All,
    Title(String),
    Publisher(String),
    PriceRange { min: Decimal, max: Decimal },
    TitleAndPublisher { title: String, publisher: String },
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub criteria: SearchCriteria,
}

impl SearchBooksCommandRequest {
    pub fn new(criteria: SearchCriteria) -> Self {
        Self {
            criteria,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let res = match &req.criteria {
            SearchCriteria::All => {
                self.catalog_service.find_all_books().await
            }
            SearchCriteria::Title(title) => {
                self.catalog_service.find_books_by_title(title).await
            }
            SearchCriteria::Publisher(publisher) => {
                self.catalog_service.find_books_by_publisher(publisher).await
            }
            SearchCriteria::PriceRange { min, max } => {
                self.catalog_service.find_books_by_price_range(*min, *max).await
            }
            SearchCriteria::TitleAndPublisher { title, publisher } => {
                self.catalog_service.find_books_by_title_and_publisher(title, publisher).await
            }
        };
        res.map_err(CommandError::from).map(SearchBooksCommandResponse::new)
    }
}
