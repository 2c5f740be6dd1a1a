use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    intake::ports::IntakeRepository,
    nutrition::ports::NutritionClient,
    profile::{
        builder::build_profile_from_sources,
        entities::{ProfileDocument, RestrictionProfile},
        ports::{ProfileRepository, ProfileService},
        value_objects::{FlushReport, ProfileSources, SaveProfileOutcome},
    },
    sync::{entities::PendingWrite, ports::PendingSyncQueue},
};

impl<P, I, Q, N> Service<P, I, Q, N>
where
    P: ProfileRepository,
    I: IntakeRepository,
    Q: PendingSyncQueue,
    N: NutritionClient,
{
    /// Newest known document for the user, looking at both the store and the
    /// pending sync queue. Store outages are tolerated only when a queued
    /// write can stand in for the stored document.
    async fn current_profile_document(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ProfileDocument>, CoreError> {
        let queued = self
            .pending_sync_queue
            .latest_for_user(user_id)
            .await?
            .map(|write| write.document);

        let stored = match self.profile_repository.get_document(user_id).await {
            Ok(stored) => stored,
            Err(CoreError::StoreUnavailable(reason)) if queued.is_some() => {
                warn!(%user_id, %reason, "profile store unavailable, using queued document");
                None
            }
            Err(e) => return Err(e),
        };

        let document = match (stored, queued) {
            (Some(stored), Some(queued)) if queued.updated_at >= stored.updated_at => Some(queued),
            (Some(stored), _) => Some(stored),
            (None, queued) => queued,
        };

        Ok(document)
    }

    async fn replay_write(&self, write: &PendingWrite) -> Result<bool, CoreError> {
        let stored = self.profile_repository.get_document(write.user_id()).await?;

        if let Some(stored) = stored
            && stored.updated_at > write.document.updated_at
        {
            return Ok(false);
        }

        self.profile_repository
            .upsert_document(write.document.clone())
            .await?;

        Ok(true)
    }
}

impl<P, I, Q, N> ProfileService for Service<P, I, Q, N>
where
    P: ProfileRepository,
    I: IntakeRepository,
    Q: PendingSyncQueue,
    N: NutritionClient,
{
    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn get_profile_document(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ProfileDocument>, CoreError> {
        self.current_profile_document(user_id).await
    }

    #[instrument(skip(self, sources), fields(user_id = %user_id))]
    async fn save_profile_document(
        &self,
        user_id: Uuid,
        sources: ProfileSources,
    ) -> Result<SaveProfileOutcome, CoreError> {
        build_profile_from_sources(&sources)?;

        let document = ProfileDocument::new(user_id, sources);

        match self.profile_repository.upsert_document(document.clone()).await {
            Ok(document) => Ok(SaveProfileOutcome::Saved { document }),
            Err(CoreError::StoreUnavailable(reason)) => {
                let write = PendingWrite::new(document.clone());
                let write_id = write.id;
                self.pending_sync_queue.enqueue(write).await?;

                warn!(%reason, %write_id, "profile store unavailable, write queued for sync");

                Ok(SaveProfileOutcome::Queued { write_id, document })
            }
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn get_restriction_profile(
        &self,
        user_id: Uuid,
    ) -> Result<RestrictionProfile, CoreError> {
        match self.current_profile_document(user_id).await? {
            Some(document) => build_profile_from_sources(&document.sources()),
            None => Ok(RestrictionProfile::default()),
        }
    }

    #[instrument(skip(self))]
    async fn flush_pending_writes(&self) -> Result<FlushReport, CoreError> {
        let mut report = FlushReport::default();

        // A write leaves the queue only once the store holds it.
        while let Some(write) = self.pending_sync_queue.front().await? {
            match self.replay_write(&write).await {
                Ok(true) => report.flushed += 1,
                Ok(false) => {
                    info!(write_id = %write.id, "discarding queued write older than stored document");
                    report.discarded += 1;
                }
                Err(e) => {
                    self.pending_sync_queue.record_attempt(write.id).await?;
                    report.remaining = self.pending_sync_queue.pending_count().await?;

                    return match e {
                        CoreError::StoreUnavailable(reason) => {
                            warn!(%reason, remaining = report.remaining, "profile store still unavailable");
                            Ok(report)
                        }
                        e => Err(e),
                    };
                }
            }

            self.pending_sync_queue.remove(write.id).await?;
        }

        info!(
            flushed = report.flushed,
            discarded = report.discarded,
            "pending profile writes flushed"
        );

        Ok(report)
    }
}
