use chrono::Utc;
use tracing::warn;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::ReadinessStatus, ports::HealthCheckService},
    intake::ports::IntakeRepository,
    nutrition::ports::NutritionClient,
    profile::ports::ProfileRepository,
    sync::ports::PendingSyncQueue,
};

impl<P, I, Q, N> HealthCheckService for Service<P, I, Q, N>
where
    P: ProfileRepository,
    I: IntakeRepository,
    Q: PendingSyncQueue,
    N: NutritionClient,
{
    async fn readiness(&self) -> Result<ReadinessStatus, CoreError> {
        let profile_store_online = match self.profile_repository.ping().await {
            Ok(()) => true,
            Err(CoreError::StoreUnavailable(reason)) => {
                warn!(%reason, "profile store not ready");
                false
            }
            Err(e) => return Err(e),
        };

        let pending_writes = self.pending_sync_queue.pending_count().await?;

        Ok(ReadinessStatus {
            ready: profile_store_online,
            profile_store_online,
            pending_writes,
            checked_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        intake::ports::MockIntakeRepository, nutrition::ports::MockNutritionClient,
        profile::ports::MockProfileRepository, sync::ports::MockPendingSyncQueue,
    };

    #[tokio::test]
    async fn test_readiness_reports_store_outage_and_backlog() {
        let mut profiles = MockProfileRepository::new();
        profiles.expect_ping().returning(|| {
            Box::pin(async { Err(CoreError::StoreUnavailable("offline".to_string())) })
        });
        let mut queue = MockPendingSyncQueue::new();
        queue
            .expect_pending_count()
            .returning(|| Box::pin(async { Ok(2) }));

        let service = Service::new(
            profiles,
            MockIntakeRepository::new(),
            queue,
            MockNutritionClient::new(),
        );

        let status = service.readiness().await.unwrap();

        assert!(!status.ready);
        assert!(!status.profile_store_online);
        assert_eq!(status.pending_writes, 2);
    }
}
