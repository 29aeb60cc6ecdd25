use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::debug;

use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::{Collection, PUBLISHER_KEY};
use crate::publishers::domain::model::{PublisherEntity, CITY, NAME, PHONE};
use crate::publishers::repository::PublisherRepository;
use crate::utils::ddb::{parse_string_attribute, scan_items, FilterExpr};

#[derive(Debug)]
pub struct DDBPublisherRepository {
    collection: Collection,
}

impl DDBPublisherRepository {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
        }
    }
}

#[async_trait]
impl PublisherRepository for DDBPublisherRepository {
    async fn insert_publisher(&self, entity: &PublisherEntity) -> LibraryResult<String> {
        self.collection.client()
            .put_item()
            .table_name(self.collection.table_name())
            .condition_expression("attribute_not_exists(publisher_id)")
            .set_item(Some(publisher_item(entity)))
            .send()
            .await.map_err(LibraryError::from)?;
        debug!(name = entity.name.as_str(), publisher_id = entity.publisher_id.as_str(), "inserted publisher");
        Ok(entity.publisher_id.to_string())
    }

    async fn find_all(&self) -> LibraryResult<Vec<PublisherEntity>> {
        let items = scan_items(self.collection.client(), self.collection.table_name(), &FilterExpr::new()).await?;
        Ok(items.iter().map(map_to_publisher).collect())
    }
}

fn publisher_item(entity: &PublisherEntity) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (PUBLISHER_KEY.to_string(), AttributeValue::S(entity.publisher_id.to_string())),
        (NAME.to_string(), AttributeValue::S(entity.name.to_string())),
        (PHONE.to_string(), AttributeValue::S(entity.phone.to_string())),
        (CITY.to_string(), AttributeValue::S(entity.city.to_string())),
    ])
}

fn map_to_publisher(map: &HashMap<String, AttributeValue>) -> PublisherEntity {
    PublisherEntity {
        publisher_id: parse_string_attribute(PUBLISHER_KEY, map).unwrap_or(String::from("")),
        name: parse_string_attribute(NAME, map).unwrap_or(String::from("")),
        phone: parse_string_attribute(PHONE, map).unwrap_or(String::from("")),
        city: parse_string_attribute(CITY, map).unwrap_or(String::from("")),
    }
}
