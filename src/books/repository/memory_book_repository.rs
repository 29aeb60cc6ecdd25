use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::debug;

use crate::books::domain::model::{BookEntity, BookUpdate};
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::utils::memory::MemoryCollection;

#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: MemoryCollection<BookEntity>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: MemoryCollection::new(),
        }
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        self.books.find(|_| true)
    }

    async fn find_by_title(&self, title: &str) -> LibraryResult<Vec<BookEntity>> {
        self.books.find(|b| b.title == title)
    }

    async fn find_by_publisher(&self, publisher: &str) -> LibraryResult<Vec<BookEntity>> {
        self.books.find(|b| b.published_by == publisher)
    }

    async fn find_by_price_range(&self, min: Decimal, max: Decimal) -> LibraryResult<Vec<BookEntity>> {
        self.books.find(|b| b.price >= min && b.price <= max)
    }

    async fn find_by_title_and_publisher(&self, title: &str, publisher: &str) -> LibraryResult<Vec<BookEntity>> {
        self.books.find(|b| b.title == title && b.published_by == publisher)
    }

    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>> {
        self.books.find_first(|b| b.isbn == isbn)
    }

    async fn insert_book(&self, entity: &BookEntity) -> LibraryResult<String> {
        let id = self.books.insert(entity.clone())?;
        debug!(isbn = entity.isbn.as_str(), book_id = id.as_str(), "inserted book");
        Ok(id)
    }

    async fn update_book(&self, isbn: &str, update: &BookUpdate) -> LibraryResult<bool> {
        let updated = self.books.update_first(|b| b.isbn == isbn, |book| {
            if !update.modifies(book) {
                return false;
            }
            update.apply(book);
            true
        })?;
        debug!(isbn, updated, "updated book");
        Ok(updated)
    }

    async fn delete_book(&self, isbn: &str) -> LibraryResult<bool> {
        let deleted = self.books.remove_first(|b| b.isbn == isbn)?;
        debug!(isbn, deleted, "deleted book");
        Ok(deleted)
    }
}
