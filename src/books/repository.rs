pub mod ddb_book_repository;
pub mod memory_book_repository;

use async_trait::async_trait;
use rust_decimal::Decimal;
use crate::books::domain::model::{BookEntity, BookUpdate};
use crate::core::library::LibraryResult;

// BookRepository is the data access contract over the books collection. Lookups
// by ISBN act on the first matching document in store order.
#[async_trait]
pub trait BookRepository: Sync + Send {
    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>>;

    async fn find_by_title(&self, title: &str) -> LibraryResult<Vec<BookEntity>>;

    async fn find_by_publisher(&self, publisher: &str) -> LibraryResult<Vec<BookEntity>>;

    // inclusive at both bounds
    async fn find_by_price_range(&self, min: Decimal, max: Decimal) -> LibraryResult<Vec<BookEntity>>;

    async fn find_by_title_and_publisher(&self, title: &str, publisher: &str) -> LibraryResult<Vec<BookEntity>>;

    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>>;

    // returns the generated document id, ISBN duplicates are accepted
    async fn insert_book(&self, entity: &BookEntity) -> LibraryResult<String>;

    // true iff a book matched and at least one of its fields changed
    async fn update_book(&self, isbn: &str, update: &BookUpdate) -> LibraryResult<bool>;

    async fn delete_book(&self, isbn: &str) -> LibraryResult<bool>;
}
