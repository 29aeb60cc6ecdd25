use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::publishers::dto::PublisherDto;

pub struct AddPublisherCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddPublisherCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddPublisherCommandRequest {
    pub name: String,
    pub phone: String,
    pub city: String,
}

impl AddPublisherCommandRequest {
    pub fn new(name: &str, phone: &str, city: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            city: city.to_string(),
        }
    }
    pub fn build_publisher(&self) -> PublisherDto {
        PublisherDto::new(self.name.as_str(), self.phone.as_str(), self.city.as_str())
    }
}

#[derive(Debug, Serialize)]
pub struct AddPublisherCommandResponse {
    pub publisher_id: String,
    pub publisher: PublisherDto,
}

impl AddPublisherCommandResponse {
    pub fn new(publisher_id: String, publisher: PublisherDto) -> Self {
        Self {
            publisher_id,
            publisher,
        }
    }
}

#[async_trait]
impl Command<AddPublisherCommandRequest, AddPublisherCommandResponse> for AddPublisherCommand {
    async fn execute(&self, req: AddPublisherCommandRequest) -> Result<AddPublisherCommandResponse, CommandError> {
        let publisher = req.build_publisher();
        self.catalog_service.add_publisher(&publisher).await.map_err(CommandError::from)
            .map(|id| AddPublisherCommandResponse::new(id, publisher))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_publisher_cmd::{AddPublisherCommand, AddPublisherCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;

    #[tokio::test]
    async fn test_should_run_add_publisher() {
        let svc = factory::create_catalog_service(None);
        let cmd = AddPublisherCommand::new(svc.clone());

        let res = cmd.execute(AddPublisherCommandRequest::new("Ace", "555-0100", "New York"))
            .await.expect("should add publisher");
        assert_eq!(res.publisher.publisher_id, res.publisher_id);
        assert_eq!("Ace", res.publisher.name.as_str());
        assert_eq!(1, svc.find_all_publishers().await.expect("should list publishers").len());
    }
}
