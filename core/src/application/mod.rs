use tracing::info;

use crate::{
    domain::common::{SafeplateConfig, StoreConfig, services::Service},
    infrastructure::{
        db::postgres::Postgres,
        intake::repositories::{
            IntakeStore, in_memory_intake_repository::InMemoryIntakeRepository,
            intake_repository::PostgresIntakeRepository,
        },
        nutrition::UsdaNutritionClient,
        profile::repositories::{
            ProfileStore, in_memory_profile_repository::InMemoryProfileRepository,
            profile_repository::PostgresProfileRepository,
        },
        sync::InMemoryPendingSyncQueue,
    },
};

pub type SafeplateService =
    Service<ProfileStore, IntakeStore, InMemoryPendingSyncQueue, UsdaNutritionClient>;

pub async fn create_service(config: SafeplateConfig) -> Result<SafeplateService, anyhow::Error> {
    let (profile_store, intake_store) = match &config.store {
        StoreConfig::Postgres(database) => {
            let postgres = Postgres::new(database).await?;
            (
                ProfileStore::Postgres(PostgresProfileRepository::new(postgres.get_db())),
                IntakeStore::Postgres(PostgresIntakeRepository::new(postgres.get_db())),
            )
        }
        StoreConfig::Memory => {
            info!("using in-memory stores, data is lost on restart");
            (
                ProfileStore::Memory(InMemoryProfileRepository::new()),
                IntakeStore::Memory(InMemoryIntakeRepository::new()),
            )
        }
    };

    let nutrition_client = UsdaNutritionClient::new(&config.nutrition)?;

    Ok(Service::new(
        profile_store,
        intake_store,
        InMemoryPendingSyncQueue::new(),
        nutrition_client,
    ))
}
