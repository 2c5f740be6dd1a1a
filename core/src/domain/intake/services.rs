use chrono::NaiveDate;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    intake::{
        entities::{DailySummary, IntakeEntry},
        ports::{IntakeRepository, IntakeService},
        value_objects::LogIntakeInput,
    },
    nutrition::ports::NutritionClient,
    profile::ports::ProfileRepository,
    sync::ports::PendingSyncQueue,
};

impl<P, I, Q, N> IntakeService for Service<P, I, Q, N>
where
    P: ProfileRepository,
    I: IntakeRepository,
    Q: PendingSyncQueue,
    N: NutritionClient,
{
    #[instrument(skip(self, input), fields(user_id = %user_id))]
    async fn log_intake(
        &self,
        user_id: Uuid,
        input: LogIntakeInput,
    ) -> Result<IntakeEntry, CoreError> {
        input.validate()?;

        let entry = self
            .intake_repository
            .create_entry(IntakeEntry::new(user_id, input))
            .await?;

        info!(entry_id = %entry.id, consumed_on = %entry.consumed_on, "intake logged");

        Ok(entry)
    }

    #[instrument(skip(self), fields(user_id = %user_id, date = %date))]
    async fn daily_summary(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<DailySummary, CoreError> {
        let entries = self
            .intake_repository
            .list_entries_for_day(user_id, date)
            .await?;

        Ok(DailySummary::from_entries(user_id, date, entries))
    }

    #[instrument(skip(self), fields(user_id = %user_id, entry_id = %entry_id))]
    async fn delete_intake(&self, user_id: Uuid, entry_id: Uuid) -> Result<(), CoreError> {
        self.intake_repository.delete_entry(user_id, entry_id).await
    }
}
