use clap::Parser;
use crate::core::repository::RepositoryStore;

pub const BOOK_COLLECTION: &str = "Book";
pub const PUBLISHER_COLLECTION: &str = "Publisher";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the book manager. Every option can
// be supplied as a flag or through its environment variable so credentials never
// live in the source.
#[derive(Debug, PartialEq, Clone, Parser)]
#[command(name = "bookmanager", version, about = "Book Manager Software")]
pub struct Configuration {
    /// Backing store for books and publishers
    #[arg(long, env = "BOOKMANAGER_STORE", value_enum, default_value_t = RepositoryStore::LocalDynamoDB)]
    pub store: RepositoryStore,

    /// Endpoint of DynamoDB Local, ignored by the other stores
    #[arg(long, env = "BOOKMANAGER_ENDPOINT", default_value = "http://127.0.0.1:8000")]
    pub endpoint: String,

    /// Region override, defaults to the AWS provider chain (or "local")
    #[arg(long, env = "BOOKMANAGER_REGION")]
    pub region: Option<String>,

    /// Database name that scopes the collection names
    #[arg(long, env = "BOOKMANAGER_DATABASE", default_value = "bookmanager")]
    pub database: String,

    #[arg(long, env = "BOOKMANAGER_ACCESS_KEY_ID", hide_env_values = true)]
    pub access_key_id: Option<String>,

    #[arg(long, env = "BOOKMANAGER_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: Option<String>,

    /// Log level for diagnostics written to stderr
    #[arg(long, env = "BOOKMANAGER_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Emit logs as json lines
    #[arg(long, env = "BOOKMANAGER_LOG_JSON")]
    pub log_json: bool,
}

impl Configuration {
    pub fn new(store: RepositoryStore) -> Self {
        Configuration {
            store,
            endpoint: "http://127.0.0.1:8000".to_string(),
            region: None,
            database: "bookmanager".to_string(),
            access_key_id: None,
            secret_access_key: None,
            log_level: "warn".to_string(),
            log_json: false,
        }
    }

    pub fn book_table(&self) -> String {
        self.table_name(BOOK_COLLECTION)
    }

    pub fn publisher_table(&self) -> String {
        self.table_name(PUBLISHER_COLLECTION)
    }

    fn table_name(&self, collection: &str) -> String {
        format!("{}_{}", self.database, collection)
    }
}
