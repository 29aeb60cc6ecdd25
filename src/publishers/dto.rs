use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::publishers::domain::model::PublisherEntity;

// PublisherDto is a data transfer object for the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublisherDto {
    pub publisher_id: String,
    pub name: String,
    pub phone: String,
    pub city: String,
}

impl PublisherDto {
    pub fn new(name: &str, phone: &str, city: &str) -> PublisherDto {
        PublisherDto::from(&PublisherEntity::new(name, phone, city))
    }
}

impl Identifiable for PublisherDto {
    fn id(&self) -> String {
        self.publisher_id.to_string()
    }
}

impl From<&PublisherEntity> for PublisherDto {
    fn from(other: &PublisherEntity) -> Self {
        Self {
            publisher_id: other.publisher_id.to_string(),
            name: other.name.to_string(),
            phone: other.phone.to_string(),
            city: other.city.to_string(),
        }
    }
}

impl From<&PublisherDto> for PublisherEntity {
    fn from(other: &PublisherDto) -> Self {
        Self {
            publisher_id: other.publisher_id.to_string(),
            name: other.name.to_string(),
            phone: other.phone.to_string(),
            city: other.city.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::publishers::domain::model::PublisherEntity;
    use crate::publishers::dto::PublisherDto;

    #[tokio::test]
    async fn test_should_build_publishers() {
        let publisher = PublisherDto::new("Ace", "555-0100", "New York");
        assert_eq!("Ace", publisher.name.as_str());
        assert_eq!("555-0100", publisher.phone.as_str());
        assert_eq!("New York", publisher.city.as_str());
        assert_eq!(publisher, PublisherDto::from(&PublisherEntity::from(&publisher)));
    }
}
