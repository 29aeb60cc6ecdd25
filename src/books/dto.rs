use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: String,
    #[serde(rename = "ISBN")]
    pub isbn: String,
    pub title: String,
    pub year: String,
    pub published_by: String,
    pub previous_edition: String,
    pub price: Decimal,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, year: &str, published_by: &str,
               previous_edition: &str, price: Decimal) -> BookDto {
        BookDto::from(&BookEntity::new(isbn, title, year, published_by, previous_edition, price))
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            year: other.year.to_string(),
            published_by: other.published_by.to_string(),
            previous_edition: other.previous_edition.to_string(),
            price: other.price,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            year: other.year.to_string(),
            published_by: other.published_by.to_string(),
            previous_edition: other.previous_edition.to_string(),
            price: other.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::core::domain::Identifiable;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("isbn", "title", "1965", "Chilton", "", Decimal::new(1995, 2));
        assert_eq!("isbn", book.isbn.as_str());
        assert_eq!("title", book.title.as_str());
        assert_eq!("Chilton", book.published_by.as_str());
        assert_eq!(book.book_id, book.id());
    }

    #[tokio::test]
    async fn test_should_convert_entities() {
        let book = BookDto::new("isbn", "title", "1965", "Chilton", "prev", Decimal::new(1995, 2));
        let entity = BookEntity::from(&book);
        assert_eq!(book, BookDto::from(&entity));
    }

    #[tokio::test]
    async fn test_should_serialize_original_field_names() {
        let book = BookDto::new("0441013597", "Dune", "1965", "Chilton", "", Decimal::new(1995, 2));
        let json = serde_json::to_value(&book).expect("should serialize book");
        assert_eq!("0441013597", json["ISBN"]);
        assert_eq!("19.95", json["price"]);
    }
}
