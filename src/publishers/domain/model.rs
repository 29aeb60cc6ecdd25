use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;

pub const NAME: &str = "name";
pub const PHONE: &str = "phone";
pub const CITY: &str = "city";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublisherEntity {
    pub publisher_id: String,
    pub name: String,
    pub phone: String,
    pub city: String,
}

impl PublisherEntity {
    pub fn new(name: &str, phone: &str, city: &str) -> Self {
        Self {
            publisher_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            city: city.to_string(),
        }
    }
}

impl Identifiable for PublisherEntity {
    fn id(&self) -> String {
        self.publisher_id.to_string()
    }
}
