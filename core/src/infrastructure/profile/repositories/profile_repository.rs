use sea_orm::{
    ActiveValue::Set, DatabaseConnection, EntityTrait, sea_query::OnConflict,
};
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        profile::{entities::ProfileDocument, ports::ProfileRepository},
    },
    entity::restriction_profiles::{ActiveModel, Column, Entity},
    infrastructure::{db::map_db_error, profile::mappers::strings_json},
};

#[derive(Debug, Clone)]
pub struct PostgresProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ProfileRepository for PostgresProfileRepository {
    async fn get_document(&self, user_id: Uuid) -> Result<Option<ProfileDocument>, CoreError> {
        let model = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_error("get restriction profile", e))?;

        Ok(model.map(ProfileDocument::from))
    }

    async fn upsert_document(&self, document: ProfileDocument) -> Result<ProfileDocument, CoreError> {
        let active_model = ActiveModel {
            user_id: Set(document.user_id),
            allergens: Set(strings_json(&document.allergens)),
            conditions: Set(strings_json(&document.conditions)),
            lifestyles: Set(strings_json(&document.lifestyles)),
            updated_at: Set(document.updated_at.fixed_offset()),
        };

        let saved = Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns([
                        Column::Allergens,
                        Column::Conditions,
                        Column::Lifestyles,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| map_db_error("save restriction profile", e))?;

        Ok(saved.into())
    }

    async fn ping(&self) -> Result<(), CoreError> {
        self.db
            .ping()
            .await
            .map_err(|e| map_db_error("ping database", e))
    }
}
