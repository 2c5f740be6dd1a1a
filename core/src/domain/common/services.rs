use std::sync::Arc;

use crate::domain::{
    intake::ports::IntakeRepository, nutrition::ports::NutritionClient,
    profile::ports::ProfileRepository, sync::ports::PendingSyncQueue,
};

/// Application service: every `*Service` trait of the domain is implemented on
/// this struct, each one only using the collaborators it needs.
pub struct Service<P, I, Q, N>
where
    P: ProfileRepository,
    I: IntakeRepository,
    Q: PendingSyncQueue,
    N: NutritionClient,
{
    pub(crate) profile_repository: Arc<P>,
    pub(crate) intake_repository: Arc<I>,
    pub(crate) pending_sync_queue: Arc<Q>,
    pub(crate) nutrition_client: Arc<N>,
}

impl<P, I, Q, N> Service<P, I, Q, N>
where
    P: ProfileRepository,
    I: IntakeRepository,
    Q: PendingSyncQueue,
    N: NutritionClient,
{
    pub fn new(
        profile_repository: P,
        intake_repository: I,
        pending_sync_queue: Q,
        nutrition_client: N,
    ) -> Self {
        Self {
            profile_repository: Arc::new(profile_repository),
            intake_repository: Arc::new(intake_repository),
            pending_sync_queue: Arc::new(pending_sync_queue),
            nutrition_client: Arc::new(nutrition_client),
        }
    }

    pub fn profile_repository(&self) -> &P {
        &self.profile_repository
    }
}

impl<P, I, Q, N> Clone for Service<P, I, Q, N>
where
    P: ProfileRepository,
    I: IntakeRepository,
    Q: PendingSyncQueue,
    N: NutritionClient,
{
    fn clone(&self) -> Self {
        Self {
            profile_repository: Arc::clone(&self.profile_repository),
            intake_repository: Arc::clone(&self.intake_repository),
            pending_sync_queue: Arc::clone(&self.pending_sync_queue),
            nutrition_client: Arc::clone(&self.nutrition_client),
        }
    }
}
