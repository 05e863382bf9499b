use clap::{Parser, ValueEnum};
use dongopet_core::domain::{
    barcode::value_objects::BarcodeStrategy,
    common::{
        AuthConfig, BarcodeConfig, DatabaseConfig, DongoPetConfig, Environment, LLMConfig,
        VectorStoreConfig,
    },
};

#[derive(Debug, Clone, Parser)]
#[command(name = "dongopet-api", version, about = "DongoPet API")]
pub struct Args {
    #[arg(long, env = "ENVIRONMENT", value_enum, default_value_t = AppEnv::Local)]
    pub environment: AppEnv,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub vector_store: VectorStoreArgs,

    #[command(flatten)]
    pub barcode: BarcodeArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AppEnv {
    Local,
    Staging,
    Production,
}

impl From<AppEnv> for Environment {
    fn from(value: AppEnv) -> Self {
        match value {
            AppEnv::Local => Environment::Local,
            AppEnv::Staging => Environment::Staging,
            AppEnv::Production => Environment::Production,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 8000)]
    pub port: u16,

    #[arg(long, env = "ROOT_PATH", default_value = "/api/v1")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    /// PEM certificate; TLS is enabled when both this and the key are set.
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "changethis"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "dongopet")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AuthArgs {
    #[arg(long, env = "SECRET_KEY", default_value = "changethis")]
    pub secret_key: String,

    /// Defaults to eight days.
    #[arg(long, env = "ACCESS_TOKEN_EXPIRE_MINUTES", default_value_t = 60 * 24 * 8)]
    pub access_token_expire_minutes: i64,

    #[arg(long, env = "FIRST_SUPERUSER", default_value = "admin@example.com")]
    pub first_superuser: String,

    #[arg(long, env = "FIRST_SUPERUSER_PASSWORD", default_value = "changethis")]
    pub first_superuser_password: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", default_value = "")]
    pub api_key: String,

    #[arg(long = "openai-model", env = "OPENAI_MODEL_NAME", default_value = "gpt-4o")]
    pub model_name: String,

    #[arg(
        long = "openai-embedding-model",
        env = "OPENAI_EMBEDDING_MODEL",
        default_value = "text-embedding-ada-002"
    )]
    pub embedding_model: String,

    #[arg(
        long = "openai-base-url",
        env = "OPENAI_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct VectorStoreArgs {
    #[arg(long = "pinecone-api-key", env = "PINECONE_KEY", default_value = "")]
    pub api_key: String,

    #[arg(long = "pinecone-index-host", env = "PINECONE_INDEX_HOST", default_value = "")]
    pub index_host: String,

    #[arg(long = "pinecone-namespace", env = "PINECONE_NAMESPACE", default_value = "")]
    pub namespace: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BarcodeMode {
    ProductDatabase,
    ModelGenerated,
}

impl From<BarcodeMode> for BarcodeStrategy {
    fn from(value: BarcodeMode) -> Self {
        match value {
            BarcodeMode::ProductDatabase => BarcodeStrategy::ProductDatabase,
            BarcodeMode::ModelGenerated => BarcodeStrategy::ModelGenerated,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct BarcodeArgs {
    #[arg(
        long = "barcode-strategy",
        env = "BARCODE_STRATEGY",
        value_enum,
        default_value_t = BarcodeMode::ProductDatabase
    )]
    pub strategy: BarcodeMode,

    #[arg(
        long,
        env = "PRODUCT_API_BASE_URL",
        default_value = "https://world.openpetfoodfacts.org"
    )]
    pub product_api_base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for DongoPetConfig {
    fn from(args: Args) -> Self {
        Self {
            environment: args.environment.into(),
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.user,
                password: args.database.password,
                name: args.database.name,
            },
            auth: AuthConfig {
                secret_key: args.auth.secret_key,
                access_token_expire_minutes: args.auth.access_token_expire_minutes,
                first_superuser: args.auth.first_superuser,
                first_superuser_password: args.auth.first_superuser_password,
            },
            llm: LLMConfig {
                api_key: args.llm.api_key,
                model_name: args.llm.model_name,
                embedding_model: args.llm.embedding_model,
                base_url: args.llm.base_url,
            },
            vector_store: VectorStoreConfig {
                api_key: args.vector_store.api_key,
                index_host: args.vector_store.index_host,
                namespace: args.vector_store.namespace,
            },
            barcode: BarcodeConfig {
                strategy: args.barcode.strategy.into(),
                product_api_base_url: args.barcode.product_api_base_url,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_into_core_config() {
        let args = Args::parse_from([
            "dongopet-api",
            "--environment",
            "staging",
            "--database-name",
            "pets",
            "--barcode-strategy",
            "model-generated",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);

        assert_eq!(args.server.allowed_origins.len(), 2);
        assert_eq!(args.server.root_path, "/api/v1");

        let config = DongoPetConfig::from(args);

        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.database.name, "pets");
        assert_eq!(config.barcode.strategy, BarcodeStrategy::ModelGenerated);
        assert_eq!(config.auth.access_token_expire_minutes, 11520);
    }
}
