use chrono::NaiveDate;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        intake::{entities::IntakeEntry, ports::IntakeRepository},
    },
    entity::intake_entries::{ActiveModel, Column, Entity},
    infrastructure::{db::map_db_error, intake::mappers::macros_to_json},
};

#[derive(Debug, Clone)]
pub struct PostgresIntakeRepository {
    pub db: DatabaseConnection,
}

impl PostgresIntakeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl IntakeRepository for PostgresIntakeRepository {
    async fn create_entry(&self, entry: IntakeEntry) -> Result<IntakeEntry, CoreError> {
        let active_model = ActiveModel {
            id: Set(entry.id),
            user_id: Set(entry.user_id),
            consumed_on: Set(entry.consumed_on),
            name: Set(entry.name.clone()),
            servings: Set(entry.servings),
            macros: Set(macros_to_json(&entry.macros)),
            created_at: Set(entry.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| map_db_error("create intake entry", e))?;

        Ok(created.into())
    }

    async fn list_entries_for_day(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<IntakeEntry>, CoreError> {
        let entries = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ConsumedOn.eq(date))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| map_db_error("list intake entries", e))?;

        Ok(entries.into_iter().map(IntakeEntry::from).collect())
    }

    async fn delete_entry(&self, user_id: Uuid, entry_id: Uuid) -> Result<(), CoreError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(entry_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| map_db_error("delete intake entry", e))?;

        if result.rows_affected == 0 {
            error!("Intake entry {} not found for user {}", entry_id, user_id);
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}
