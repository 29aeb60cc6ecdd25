pub mod service;

use async_trait::async_trait;
use rust_decimal::Decimal;
use crate::books::domain::model::BookUpdate;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::publishers::dto::PublisherDto;

// CatalogService is the book repository seen by the console: every query and
// mutation over books and publishers goes through it.
#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_publisher(&self, publisher: &PublisherDto) -> LibraryResult<String>;
    async fn find_all_publishers(&self) -> LibraryResult<Vec<PublisherDto>>;
    async fn add_book(&self, book: &BookDto) -> LibraryResult<String>;
    async fn update_book(&self, isbn: &str, update: &BookUpdate) -> LibraryResult<bool>;
    async fn remove_book(&self, isbn: &str) -> LibraryResult<bool>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>>;
    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn find_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>>;
    async fn find_books_by_publisher(&self, publisher: &str) -> LibraryResult<Vec<BookDto>>;
    async fn find_books_by_price_range(&self, min: Decimal, max: Decimal) -> LibraryResult<Vec<BookDto>>;
    async fn find_books_by_title_and_publisher(&self, title: &str, publisher: &str) -> LibraryResult<Vec<BookDto>>;
}
