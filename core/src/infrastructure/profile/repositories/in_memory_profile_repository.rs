use std::{
    collections::HashMap,
    sync::atomic::{AtomicBool, Ordering},
};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{entities::ProfileDocument, ports::ProfileRepository},
};

/// Profile store kept in process memory. It can be switched offline to
/// exercise the pending sync path.
#[derive(Debug)]
pub struct InMemoryProfileRepository {
    documents: RwLock<HashMap<Uuid, ProfileDocument>>,
    online: AtomicBool,
}

impl Default for InMemoryProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            online: AtomicBool::new(true),
        }
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), CoreError> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(CoreError::StoreUnavailable(
                "in-memory profile store is offline".to_string(),
            ))
        }
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    async fn get_document(&self, user_id: Uuid) -> Result<Option<ProfileDocument>, CoreError> {
        self.ensure_online()?;

        Ok(self.documents.read().await.get(&user_id).cloned())
    }

    async fn upsert_document(&self, document: ProfileDocument) -> Result<ProfileDocument, CoreError> {
        self.ensure_online()?;

        self.documents
            .write()
            .await
            .insert(document.user_id, document.clone());

        Ok(document)
    }

    async fn ping(&self) -> Result<(), CoreError> {
        self.ensure_online()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::value_objects::ProfileSources;

    #[tokio::test]
    async fn test_upsert_replaces_document() {
        let repository = InMemoryProfileRepository::new();
        let user_id = Uuid::new_v4();

        let first = ProfileSources {
            allergens: vec!["egg".to_string()],
            ..Default::default()
        };
        repository
            .upsert_document(ProfileDocument::new(user_id, first))
            .await
            .unwrap();
        repository
            .upsert_document(ProfileDocument::new(user_id, ProfileSources::default()))
            .await
            .unwrap();

        let stored = repository.get_document(user_id).await.unwrap().unwrap();
        assert!(stored.allergens.is_empty());
    }

    #[tokio::test]
    async fn test_offline_store_reports_unavailable() {
        let repository = InMemoryProfileRepository::new();
        repository.set_online(false);

        let result = repository.get_document(Uuid::new_v4()).await;
        assert!(matches!(result, Err(CoreError::StoreUnavailable(_))));

        repository.set_online(true);
        assert_eq!(repository.get_document(Uuid::new_v4()).await, Ok(None));
    }
}
