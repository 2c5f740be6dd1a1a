use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct SafeplateConfig {
    pub store: StoreConfig,
    pub nutrition: NutritionConfig,
}

/// Where profile documents and intake entries are kept.
#[derive(Clone, Debug)]
pub enum StoreConfig {
    Memory,
    Postgres(DatabaseConfig),
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct NutritionConfig {
    pub usda_api_key: Option<String>,
    pub usda_base_url: String,
    pub timeout_secs: u64,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            usda_api_key: None,
            usda_base_url: "https://api.nal.usda.gov/fdc/v1".to_string(),
            timeout_secs: 10,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}
