use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    intake::{entities::IntakeEntry, ports::IntakeRepository},
};

#[derive(Debug, Default)]
pub struct InMemoryIntakeRepository {
    entries: RwLock<Vec<IntakeEntry>>,
}

impl InMemoryIntakeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IntakeRepository for InMemoryIntakeRepository {
    async fn create_entry(&self, entry: IntakeEntry) -> Result<IntakeEntry, CoreError> {
        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn list_entries_for_day(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<IntakeEntry>, CoreError> {
        let entries = self
            .entries
            .read()
            .await
            .iter()
            .filter(|entry| entry.user_id == user_id && entry.consumed_on == date)
            .cloned()
            .collect();

        Ok(entries)
    }

    async fn delete_entry(&self, user_id: Uuid, entry_id: Uuid) -> Result<(), CoreError> {
        let mut entries = self.entries.write().await;
        let position = entries
            .iter()
            .position(|entry| entry.id == entry_id && entry.user_id == user_id)
            .ok_or(CoreError::NotFound)?;

        entries.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::value_objects::LogIntakeInput;

    fn entry(user_id: Uuid, day: u32) -> IntakeEntry {
        IntakeEntry::new(
            user_id,
            LogIntakeInput {
                consumed_on: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
                name: "Soup".to_string(),
                servings: 1.0,
                macros: Default::default(),
            },
        )
    }

    #[tokio::test]
    async fn test_entries_are_scoped_by_user_and_day() {
        let repository = InMemoryIntakeRepository::new();
        let user_id = Uuid::new_v4();

        repository.create_entry(entry(user_id, 1)).await.unwrap();
        repository.create_entry(entry(user_id, 2)).await.unwrap();
        repository.create_entry(entry(Uuid::new_v4(), 1)).await.unwrap();

        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let entries = repository.list_entries_for_day(user_id, day).await.unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_is_scoped_to_owner() {
        let repository = InMemoryIntakeRepository::new();
        let owner = Uuid::new_v4();
        let created = repository.create_entry(entry(owner, 3)).await.unwrap();

        let result = repository.delete_entry(Uuid::new_v4(), created.id).await;
        assert_eq!(result, Err(CoreError::NotFound));

        assert_eq!(repository.delete_entry(owner, created.id).await, Ok(()));
        assert_eq!(
            repository.delete_entry(owner, created.id).await,
            Err(CoreError::NotFound)
        );
    }
}
