use crate::books::repository::BookRepository;
use crate::books::repository::ddb_book_repository::DDBBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::gateway::StorageGateway;

pub fn create_book_repository(gateway: Option<&StorageGateway>) -> Box<dyn BookRepository> {
    match gateway {
        Some(gateway) => Box::new(DDBBookRepository::new(gateway.books())),
        None => Box::new(MemoryBookRepository::new()),
    }
}
