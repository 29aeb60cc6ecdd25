use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use rust_decimal::Decimal;
use tracing::debug;

use crate::books::domain::model::{BookEntity, BookUpdate, ISBN, PREVIOUS_EDITION, PRICE, PUBLISHED_BY, TITLE, YEAR};
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::{Collection, BOOK_KEY};
use crate::utils::ddb::{decimal_attribute, parse_decimal_attribute, parse_string_attribute, scan_items, FilterExpr};

#[derive(Debug)]
pub struct DDBBookRepository {
    collection: Collection,
}

impl DDBBookRepository {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
        }
    }

    async fn scan(&self, filter: FilterExpr) -> LibraryResult<Vec<BookEntity>> {
        let items = scan_items(self.collection.client(), self.collection.table_name(), &filter).await?;
        items.iter().map(map_to_book).collect()
    }
}

#[async_trait]
impl BookRepository for DDBBookRepository {
    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        self.scan(FilterExpr::new()).await
    }

    async fn find_by_title(&self, title: &str) -> LibraryResult<Vec<BookEntity>> {
        self.scan(FilterExpr::new().eq(TITLE, string_attribute(title))).await
    }

    async fn find_by_publisher(&self, publisher: &str) -> LibraryResult<Vec<BookEntity>> {
        self.scan(FilterExpr::new().eq(PUBLISHED_BY, string_attribute(publisher))).await
    }

    async fn find_by_price_range(&self, min: Decimal, max: Decimal) -> LibraryResult<Vec<BookEntity>> {
        // BETWEEN rejects an inverted range instead of matching nothing
        if min > max {
            return Ok(vec![]);
        }
        self.scan(FilterExpr::new().between(PRICE, decimal_attribute(min), decimal_attribute(max))).await
    }

    async fn find_by_title_and_publisher(&self, title: &str, publisher: &str) -> LibraryResult<Vec<BookEntity>> {
        self.scan(FilterExpr::new()
            .eq(TITLE, string_attribute(title))
            .eq(PUBLISHED_BY, string_attribute(publisher))).await
    }

    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>> {
        let books = self.scan(FilterExpr::new().eq(ISBN, string_attribute(isbn))).await?;
        Ok(books.into_iter().next())
    }

    async fn insert_book(&self, entity: &BookEntity) -> LibraryResult<String> {
        self.collection.client()
            .put_item()
            .table_name(self.collection.table_name())
            .condition_expression("attribute_not_exists(book_id)")
            .set_item(Some(book_item(entity)))
            .send()
            .await.map_err(LibraryError::from)?;
        debug!(isbn = entity.isbn.as_str(), book_id = entity.book_id.as_str(), "inserted book");
        Ok(entity.book_id.to_string())
    }

    async fn update_book(&self, isbn: &str, update: &BookUpdate) -> LibraryResult<bool> {
        let existing = match self.find_by_isbn(isbn).await? {
            Some(book) => book,
            None => return Ok(false),
        };
        if !update.modifies(&existing) {
            return Ok(false);
        }

        let mut request = self.collection.client()
            .update_item()
            .table_name(self.collection.table_name())
            .key(BOOK_KEY, AttributeValue::S(existing.book_id.clone()))
            .condition_expression("attribute_exists(book_id)");
        let mut assignments = vec![];
        for (ndx, (name, value)) in update_attributes(update).into_iter().enumerate() {
            assignments.push(format!("#f{} = :v{}", ndx, ndx));
            request = request
                .expression_attribute_names(format!("#f{}", ndx), name)
                .expression_attribute_values(format!(":v{}", ndx), value);
        }
        request
            .update_expression(format!("SET {}", assignments.join(", ")))
            .send()
            .await.map_err(LibraryError::from)?;
        debug!(isbn, book_id = existing.book_id.as_str(), "updated book");
        Ok(true)
    }

    async fn delete_book(&self, isbn: &str) -> LibraryResult<bool> {
        let existing = match self.find_by_isbn(isbn).await? {
            Some(book) => book,
            None => return Ok(false),
        };
        let out = self.collection.client()
            .delete_item()
            .table_name(self.collection.table_name())
            .key(BOOK_KEY, AttributeValue::S(existing.book_id.clone()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await.map_err(LibraryError::from)?;
        let deleted = out.attributes().map(|attrs| !attrs.is_empty()).unwrap_or(false);
        debug!(isbn, book_id = existing.book_id.as_str(), deleted, "deleted book");
        Ok(deleted)
    }
}

fn string_attribute(value: &str) -> AttributeValue {
    AttributeValue::S(value.to_string())
}

fn update_attributes(update: &BookUpdate) -> Vec<(&'static str, AttributeValue)> {
    let mut attributes = vec![];
    if let Some(title) = &update.title {
        attributes.push((TITLE, string_attribute(title)));
    }
    if let Some(year) = &update.year {
        attributes.push((YEAR, string_attribute(year)));
    }
    if let Some(published_by) = &update.published_by {
        attributes.push((PUBLISHED_BY, string_attribute(published_by)));
    }
    if let Some(previous_edition) = &update.previous_edition {
        attributes.push((PREVIOUS_EDITION, string_attribute(previous_edition)));
    }
    if let Some(price) = update.price {
        attributes.push((PRICE, decimal_attribute(price)));
    }
    attributes
}

fn book_item(entity: &BookEntity) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (BOOK_KEY.to_string(), string_attribute(entity.book_id.as_str())),
        (ISBN.to_string(), string_attribute(entity.isbn.as_str())),
        (TITLE.to_string(), string_attribute(entity.title.as_str())),
        (YEAR.to_string(), string_attribute(entity.year.as_str())),
        (PUBLISHED_BY.to_string(), string_attribute(entity.published_by.as_str())),
        (PREVIOUS_EDITION.to_string(), string_attribute(entity.previous_edition.as_str())),
        (PRICE.to_string(), decimal_attribute(entity.price)),
    ])
}

fn map_to_book(map: &HashMap<String, AttributeValue>) -> LibraryResult<BookEntity> {
    Ok(BookEntity {
        book_id: parse_string_attribute(BOOK_KEY, map).unwrap_or(String::from("")),
        isbn: parse_string_attribute(ISBN, map).unwrap_or(String::from("")),
        title: parse_string_attribute(TITLE, map).unwrap_or(String::from("")),
        year: parse_string_attribute(YEAR, map).unwrap_or(String::from("")),
        published_by: parse_string_attribute(PUBLISHED_BY, map).unwrap_or(String::from("")),
        previous_edition: parse_string_attribute(PREVIOUS_EDITION, map).unwrap_or(String::from("")),
        price: parse_decimal_attribute(PRICE, map)?.unwrap_or(Decimal::ZERO),
    })
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use aws_sdk_dynamodb::types::AttributeValue;
    use lazy_static::lazy_static;
    use rust_decimal::Decimal;

    use crate::books::domain::model::{BookEntity, BookUpdate};
    use crate::books::repository::BookRepository;
    use crate::books::repository::ddb_book_repository::{book_item, map_to_book, update_attributes, DDBBookRepository};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::gateway::{Collection, BOOK_KEY};
    use crate::utils::ddb::{build_db_client, create_table, delete_table};

    const TABLE: &str = "ddb_test_Book";

    lazy_static! {
        static ref COLLECTION: AsyncOnce<Collection> = AsyncOnce::new(async {
                let client = build_db_client(&Configuration::new(RepositoryStore::LocalDynamoDB)).await;
                let _ = delete_table(&client, TABLE).await;
                let _ = create_table(&client, TABLE, BOOK_KEY).await;
                Collection::new(client, TABLE)
            });
    }

    #[tokio::test]
    async fn test_should_map_item_to_book() {
        let book = BookEntity::new("isbn", "test book", "1999", "Ace", "prev", Decimal::new(1995, 2));
        let item = book_item(&book);
        assert_eq!(Some(&AttributeValue::N("19.95".to_string())), item.get("price"));
        assert_eq!(Some(&AttributeValue::S("isbn".to_string())), item.get("ISBN"));
        let loaded = map_to_book(&item).expect("should map book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_list_only_supplied_update_attributes() {
        let update = BookUpdate { year: Some("2001".to_string()), price: Some(Decimal::new(1250, 2)), ..Default::default() };
        let names: Vec<&str> = update_attributes(&update).into_iter().map(|(name, _)| name).collect();
        assert_eq!(vec!["year", "price"], names);
        assert!(update_attributes(&BookUpdate::default()).is_empty());
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local on 127.0.0.1:8000"]
    async fn test_should_insert_find_books() {
        let books_repo = DDBBookRepository::new(COLLECTION.get().await.clone());
        let book = BookEntity::new("ddb-isbn-1", "test book", "1999", "Ace", "", Decimal::new(1995, 2));
        let id = books_repo.insert_book(&book).await.expect("should insert book");
        assert_eq!(book.book_id, id);

        let loaded = books_repo.find_by_isbn("ddb-isbn-1").await.expect("should find book");
        assert_eq!(Some(book), loaded);
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local on 127.0.0.1:8000"]
    async fn test_should_update_delete_books() {
        let books_repo = DDBBookRepository::new(COLLECTION.get().await.clone());
        let book = BookEntity::new("ddb-isbn-2", "A", "1999", "Ace", "", Decimal::new(1000, 2));
        let _ = books_repo.insert_book(&book).await.expect("should insert book");

        let update = BookUpdate { price: Some(Decimal::new(1250, 2)), ..Default::default() };
        assert!(books_repo.update_book("ddb-isbn-2", &update).await.expect("should update book"));
        let loaded = books_repo.find_by_isbn("ddb-isbn-2").await.expect("should find book").expect("should exist");
        assert_eq!("A", loaded.title.as_str());
        assert_eq!(Decimal::new(1250, 2), loaded.price);

        assert!(books_repo.delete_book("ddb-isbn-2").await.expect("should delete book"));
        assert!(!books_repo.delete_book("ddb-isbn-2").await.expect("should not delete book"));
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local on 127.0.0.1:8000"]
    async fn test_should_find_books_by_price_range() {
        let books_repo = DDBBookRepository::new(COLLECTION.get().await.clone());
        for (ndx, cents) in [999, 1000, 1500, 2000, 2001].iter().enumerate() {
            let book = BookEntity::new(format!("ddb-range-{}", ndx).as_str(), "range", "2000",
                                       "Range Press", "", Decimal::new(*cents, 2));
            let _ = books_repo.insert_book(&book).await.expect("should insert book");
        }
        let res = books_repo.find_by_price_range(Decimal::new(1000, 2), Decimal::new(2000, 2))
            .await.expect("should find books");
        let mut prices: Vec<Decimal> = res.iter().filter(|b| b.title == "range").map(|b| b.price).collect();
        prices.sort();
        assert_eq!(vec![Decimal::new(1000, 2), Decimal::new(1500, 2), Decimal::new(2000, 2)], prices);
    }
}
