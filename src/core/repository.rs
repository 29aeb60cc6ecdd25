use std::fmt;
use std::fmt::{Display, Formatter};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

// Backing store for the catalog collections
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy, ValueEnum)]
pub enum RepositoryStore {
    // AWS DynamoDB, credentials come from the standard AWS provider chain
    #[value(name = "dynamodb")]
    DynamoDB,
    // DynamoDB Local listening on the configured endpoint
    #[value(name = "local")]
    LocalDynamoDB,
    // process-local collections, nothing survives the session
    #[value(name = "memory")]
    InMemory,
}

impl RepositoryStore {
    pub fn is_remote(&self) -> bool {
        !matches!(self, RepositoryStore::InMemory)
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::DynamoDB => write!(f, "dynamodb"),
            RepositoryStore::LocalDynamoDB => write!(f, "local"),
            RepositoryStore::InMemory => write!(f, "memory"),
        }
    }
}
