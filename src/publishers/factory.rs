use crate::gateway::StorageGateway;
use crate::publishers::repository::PublisherRepository;
use crate::publishers::repository::ddb_publisher_repository::DDBPublisherRepository;
use crate::publishers::repository::memory_publisher_repository::MemoryPublisherRepository;

pub fn create_publisher_repository(gateway: Option<&StorageGateway>) -> Box<dyn PublisherRepository> {
    match gateway {
        Some(gateway) => Box::new(DDBPublisherRepository::new(gateway.publishers())),
        None => Box::new(MemoryPublisherRepository::new()),
    }
}
