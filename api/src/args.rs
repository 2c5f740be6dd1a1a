use clap::{Parser, ValueEnum};
use safeplate_core::domain::common::{
    DatabaseConfig, NutritionConfig, SafeplateConfig, StoreConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "safeplate-api", version, about = "SafePlate allergen safety API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub nutrition: NutritionArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        num_args = 0..,
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "store", env = "STORE_BACKEND", value_enum, default_value_t = StoreBackend::Postgres)]
    pub backend: StoreBackend,

    #[arg(id = "database-host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database-port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "safeplate")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct NutritionArgs {
    #[arg(long = "usda-api-key", env = "USDA_API_KEY")]
    pub usda_api_key: Option<String>,

    #[arg(
        long = "usda-base-url",
        env = "USDA_BASE_URL",
        default_value = "https://api.nal.usda.gov/fdc/v1"
    )]
    pub usda_base_url: String,

    #[arg(long = "usda-timeout-secs", env = "USDA_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl From<Args> for SafeplateConfig {
    fn from(args: Args) -> Self {
        let store = match args.db.backend {
            StoreBackend::Memory => StoreConfig::Memory,
            StoreBackend::Postgres => StoreConfig::Postgres(DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            }),
        };

        SafeplateConfig {
            store,
            nutrition: NutritionConfig {
                usda_api_key: args.nutrition.usda_api_key,
                usda_base_url: args.nutrition.usda_base_url,
                timeout_secs: args.nutrition.timeout_secs,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_config() {
        let args = Args::parse_from(["safeplate-api", "--store", "memory", "--usda-api-key", "k"]);

        let config = SafeplateConfig::from(args);

        assert!(matches!(config.store, StoreConfig::Memory));
        assert_eq!(config.nutrition.usda_api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_postgres_backend_config() {
        let args = Args::parse_from([
            "safeplate-api",
            "--store",
            "postgres",
            "--database-host",
            "db.internal",
            "--database-port",
            "6543",
        ]);

        let StoreConfig::Postgres(database) = SafeplateConfig::from(args).store else {
            panic!("expected postgres store");
        };
        assert_eq!(database.host, "db.internal");
        assert_eq!(database.port, 6543);
    }
}
