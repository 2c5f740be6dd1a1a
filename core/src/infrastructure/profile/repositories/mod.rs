use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{entities::ProfileDocument, ports::ProfileRepository},
};

pub mod in_memory_profile_repository;
pub mod profile_repository;

use in_memory_profile_repository::InMemoryProfileRepository;
use profile_repository::PostgresProfileRepository;

/// Profile store selected at start-up.
pub enum ProfileStore {
    Postgres(PostgresProfileRepository),
    Memory(InMemoryProfileRepository),
}

impl ProfileRepository for ProfileStore {
    async fn get_document(&self, user_id: Uuid) -> Result<Option<ProfileDocument>, CoreError> {
        match self {
            ProfileStore::Postgres(repository) => repository.get_document(user_id).await,
            ProfileStore::Memory(repository) => repository.get_document(user_id).await,
        }
    }

    async fn upsert_document(&self, document: ProfileDocument) -> Result<ProfileDocument, CoreError> {
        match self {
            ProfileStore::Postgres(repository) => repository.upsert_document(document).await,
            ProfileStore::Memory(repository) => repository.upsert_document(document).await,
        }
    }

    async fn ping(&self) -> Result<(), CoreError> {
        match self {
            ProfileStore::Postgres(repository) => repository.ping().await,
            ProfileStore::Memory(repository) => repository.ping().await,
        }
    }
}
