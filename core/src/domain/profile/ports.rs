use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{
        entities::{ProfileDocument, RestrictionProfile},
        value_objects::{FlushReport, ProfileSources, SaveProfileOutcome},
    },
};

/// Document-keyed profile store, one document per user.
///
/// Implementations report an unreachable backend with
/// [`CoreError::StoreUnavailable`] so callers can fall back to the pending
/// sync queue.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn get_document(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<ProfileDocument>, CoreError>> + Send;

    fn upsert_document(
        &self,
        document: ProfileDocument,
    ) -> impl Future<Output = Result<ProfileDocument, CoreError>> + Send;

    /// Cheap round trip used by readiness checks.
    fn ping(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProfileService: Send + Sync {
    fn get_profile_document(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<ProfileDocument>, CoreError>> + Send;

    fn save_profile_document(
        &self,
        user_id: Uuid,
        sources: ProfileSources,
    ) -> impl Future<Output = Result<SaveProfileOutcome, CoreError>> + Send;

    fn get_restriction_profile(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<RestrictionProfile, CoreError>> + Send;

    fn flush_pending_writes(&self) -> impl Future<Output = Result<FlushReport, CoreError>> + Send;
}
