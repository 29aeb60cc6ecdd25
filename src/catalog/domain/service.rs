use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::debug;
use crate::books::domain::model::{BookEntity, BookUpdate};
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::library::LibraryResult;
use crate::publishers::domain::model::PublisherEntity;
use crate::publishers::dto::PublisherDto;
use crate::publishers::repository::PublisherRepository;

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    publisher_repository: Box<dyn PublisherRepository>,
}

impl CatalogServiceImpl {
    pub fn new(book_repository: Box<dyn BookRepository>,
               publisher_repository: Box<dyn PublisherRepository>) -> Self {
        Self {
            book_repository,
            publisher_repository,
        }
    }
}

fn to_dtos(books: Vec<BookEntity>) -> Vec<BookDto> {
    books.iter().map(BookDto::from).collect()
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_publisher(&self, publisher: &PublisherDto) -> LibraryResult<String> {
        self.publisher_repository.insert_publisher(&PublisherEntity::from(publisher)).await
    }

    async fn find_all_publishers(&self) -> LibraryResult<Vec<PublisherDto>> {
        let res = self.publisher_repository.find_all().await?;
        Ok(res.iter().map(PublisherDto::from).collect())
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<String> {
        self.book_repository.insert_book(&BookEntity::from(book)).await
    }

    async fn update_book(&self, isbn: &str, update: &BookUpdate) -> LibraryResult<bool> {
        self.book_repository.update_book(isbn, update).await
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<bool> {
        self.book_repository.delete_book(isbn).await
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>> {
        let res = self.book_repository.find_by_isbn(isbn).await?;
        Ok(res.as_ref().map(BookDto::from))
    }

    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        self.book_repository.find_all().await.map(to_dtos)
    }

    async fn find_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        self.book_repository.find_by_title(title).await.map(to_dtos)
    }

    async fn find_books_by_publisher(&self, publisher: &str) -> LibraryResult<Vec<BookDto>> {
        self.book_repository.find_by_publisher(publisher).await.map(to_dtos)
    }

    async fn find_books_by_price_range(&self, min: Decimal, max: Decimal) -> LibraryResult<Vec<BookDto>> {
        debug!(%min, %max, "searching price range");
        self.book_repository.find_by_price_range(min, max).await.map(to_dtos)
    }

    async fn find_books_by_title_and_publisher(&self, title: &str, publisher: &str) -> LibraryResult<Vec<BookDto>> {
        self.book_repository.find_by_title_and_publisher(title, publisher).await.map(to_dtos)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::Arc;
    use rust_decimal::Decimal;
    use crate::books::domain::model::BookUpdate;
    use crate::books::dto::BookDto;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::publishers::dto::PublisherDto;

    fn catalog() -> Arc<dyn CatalogService> {
        factory::create_catalog_service(None)
    }

    fn book(isbn: &str, title: &str, publisher: &str, price: &str) -> BookDto {
        BookDto::new(isbn, title, "2000", publisher, "", Decimal::from_str(price).expect("valid price"))
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = catalog();

        let book = BookDto::new("isbn", "test book", "1999", "Ace", "isbn-0", Decimal::new(1995, 2));
        let id = catalog_svc.add_book(&book).await.expect("should add book");
        assert_eq!(book.book_id, id);

        let loaded = catalog_svc.find_book_by_isbn("isbn").await.expect("should return book");
        assert_eq!(Some(book), loaded);
    }

    #[tokio::test]
    async fn test_should_keep_exact_price() {
        let catalog_svc = catalog();
        let _ = catalog_svc.add_book(&book("1", "A", "Ace", "19.95")).await.expect("should add book");
        let loaded = catalog_svc.find_book_by_isbn("1").await.expect("should return book").expect("should exist");
        assert_eq!(Decimal::from_str("19.95").expect("valid price"), loaded.price);
        assert_eq!("19.95", loaded.price.to_string());
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let catalog_svc = catalog();
        let _ = catalog_svc.add_book(&book("1", "A", "Ace", "10.00")).await.expect("should add book");

        let update = BookUpdate { price: Some(Decimal::from_str("12.50").expect("valid price")), ..Default::default() };
        assert!(catalog_svc.update_book("1", &update).await.expect("should update book"));

        let loaded = catalog_svc.find_book_by_isbn("1").await.expect("should return book").expect("should exist");
        assert_eq!("A", loaded.title.as_str());
        assert_eq!(Decimal::new(1250, 2), loaded.price);
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let catalog_svc = catalog();
        let _ = catalog_svc.add_book(&book("1", "A", "Ace", "10.00")).await.expect("should add book");

        assert!(!catalog_svc.remove_book("2").await.expect("should run remove"));
        assert_eq!(1, catalog_svc.find_all_books().await.expect("should list books").len());

        assert!(catalog_svc.remove_book("1").await.expect("should remove book"));
        let loaded = catalog_svc.find_book_by_isbn("1").await.expect("should run lookup");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_should_search_books() {
        let catalog_svc = catalog();
        for (isbn, title, publisher, price) in [
            ("1", "Dune", "Ace", "9.99"),
            ("2", "Dune", "Chilton", "10.00"),
            ("3", "Emma", "Ace", "15.00"),
            ("4", "Ulysses", "Shakespeare and Company", "20.00"),
            ("5", "Emma", "Penguin", "20.01"),
        ] {
            let _ = catalog_svc.add_book(&book(isbn, title, publisher, price)).await.expect("should add book");
        }

        let isbns = |books: Vec<BookDto>| books.into_iter().map(|b| b.isbn).collect::<Vec<String>>();
        assert_eq!(vec!["1", "2", "3", "4", "5"], isbns(catalog_svc.find_all_books().await.expect("should list")));
        assert_eq!(vec!["3", "5"], isbns(catalog_svc.find_books_by_title("Emma").await.expect("should search")));
        assert_eq!(vec!["1", "3"], isbns(catalog_svc.find_books_by_publisher("Ace").await.expect("should search")));
        assert_eq!(vec!["2", "3", "4"], isbns(catalog_svc.find_books_by_price_range(
            Decimal::new(1000, 2), Decimal::new(2000, 2)).await.expect("should search")));
        assert_eq!(vec!["2"], isbns(catalog_svc.find_books_by_title_and_publisher("Dune", "Chilton").await.expect("should search")));
        assert!(catalog_svc.find_books_by_title_and_publisher("Emma", "Chilton").await.expect("should search").is_empty());
    }

    #[tokio::test]
    async fn test_should_add_publisher() {
        let catalog_svc = catalog();
        let publisher = PublisherDto::new("Ace", "555-0100", "New York");
        let id = catalog_svc.add_publisher(&publisher).await.expect("should add publisher");
        assert_eq!(publisher.publisher_id, id);
        assert_eq!(vec![publisher], catalog_svc.find_all_publishers().await.expect("should list publishers"));
    }
}
