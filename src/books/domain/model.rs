use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;

pub const ISBN: &str = "ISBN";
pub const TITLE: &str = "title";
pub const YEAR: &str = "year";
pub const PUBLISHED_BY: &str = "published_by";
pub const PREVIOUS_EDITION: &str = "previous_edition";
pub const PRICE: &str = "price";

// BookEntity is the persisted book document. The ISBN is the logical key for
// lookups but nothing enforces its uniqueness, so every document carries its own
// generated book_id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: String,
    #[serde(rename = "ISBN")]
    pub isbn: String,
    pub title: String,
    pub year: String,
    // publisher name as typed, not a reference to a publisher document
    pub published_by: String,
    pub previous_edition: String,
    pub price: Decimal,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, year: &str, published_by: &str,
               previous_edition: &str, price: Decimal) -> Self {
        Self {
            book_id: Uuid::new_v4().to_string(),
            isbn: isbn.to_string(),
            title: title.to_string(),
            year: year.to_string(),
            published_by: published_by.to_string(),
            previous_edition: previous_edition.to_string(),
            price,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

// BookUpdate is a partial update, a None field keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub year: Option<String>,
    pub published_by: Option<String>,
    pub previous_edition: Option<String>,
    pub price: Option<Decimal>,
}

impl BookUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.year.is_none() && self.published_by.is_none()
            && self.previous_edition.is_none() && self.price.is_none()
    }

    // true when applying the update would change at least one stored value
    pub fn modifies(&self, book: &BookEntity) -> bool {
        differs(&self.title, &book.title)
            || differs(&self.year, &book.year)
            || differs(&self.published_by, &book.published_by)
            || differs(&self.previous_edition, &book.previous_edition)
            || differs(&self.price, &book.price)
    }

    pub fn apply(&self, book: &mut BookEntity) {
        if let Some(title) = &self.title {
            book.title = title.to_string();
        }
        if let Some(year) = &self.year {
            book.year = year.to_string();
        }
        if let Some(published_by) = &self.published_by {
            book.published_by = published_by.to_string();
        }
        if let Some(previous_edition) = &self.previous_edition {
            book.previous_edition = previous_edition.to_string();
        }
        if let Some(price) = self.price {
            book.price = price;
        }
    }
}

fn differs<T: PartialEq>(update: &Option<T>, current: &T) -> bool {
    matches!(update, Some(value) if value != current)
}
