use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    intake::{entities::IntakeEntry, ports::IntakeRepository},
};

pub mod in_memory_intake_repository;
pub mod intake_repository;

use in_memory_intake_repository::InMemoryIntakeRepository;
use intake_repository::PostgresIntakeRepository;

pub enum IntakeStore {
    Postgres(PostgresIntakeRepository),
    Memory(InMemoryIntakeRepository),
}

impl IntakeRepository for IntakeStore {
    async fn create_entry(&self, entry: IntakeEntry) -> Result<IntakeEntry, CoreError> {
        match self {
            IntakeStore::Postgres(repository) => repository.create_entry(entry).await,
            IntakeStore::Memory(repository) => repository.create_entry(entry).await,
        }
    }

    async fn list_entries_for_day(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<IntakeEntry>, CoreError> {
        match self {
            IntakeStore::Postgres(repository) => repository.list_entries_for_day(user_id, date).await,
            IntakeStore::Memory(repository) => repository.list_entries_for_day(user_id, date).await,
        }
    }

    async fn delete_entry(&self, user_id: Uuid, entry_id: Uuid) -> Result<(), CoreError> {
        match self {
            IntakeStore::Postgres(repository) => repository.delete_entry(user_id, entry_id).await,
            IntakeStore::Memory(repository) => repository.delete_entry(user_id, entry_id).await,
        }
    }
}
