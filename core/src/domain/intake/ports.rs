use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    intake::{
        entities::{DailySummary, IntakeEntry},
        value_objects::LogIntakeInput,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait IntakeRepository: Send + Sync {
    fn create_entry(
        &self,
        entry: IntakeEntry,
    ) -> impl Future<Output = Result<IntakeEntry, CoreError>> + Send;

    /// Entries of one day, oldest first.
    fn list_entries_for_day(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<IntakeEntry>, CoreError>> + Send;

    /// Fails with [`CoreError::NotFound`] when the user has no such entry.
    fn delete_entry(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait IntakeService: Send + Sync {
    fn log_intake(
        &self,
        user_id: Uuid,
        input: LogIntakeInput,
    ) -> impl Future<Output = Result<IntakeEntry, CoreError>> + Send;

    fn daily_summary(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> impl Future<Output = Result<DailySummary, CoreError>> + Send;

    fn delete_intake(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
