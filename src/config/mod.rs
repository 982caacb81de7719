use serde::Deserialize;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

// Настройки базы данных
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub acquire_timeout_secs: u64,
}

// Плоский вид переменных окружения, как их видит `config`
#[derive(Debug, Deserialize)]
struct EnvSettings {
    host: String,
    port: u16,
    environment: String,
    rust_log: String,
    database_url: String,
    db_pool_size: u32,
    db_acquire_timeout_secs: u64,
}

impl Config {
    /// Читает настройки из переменных окружения процесса.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(config::Environment::default())
    }

    pub fn load(env: config::Environment) -> Result<Self, config::ConfigError> {
        let settings: EnvSettings = config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8000)?
            .set_default("environment", "development")?
            .set_default("rust_log", "games_connect=debug,tower_http=debug")?
            .set_default("db_pool_size", 20)?
            .set_default("db_acquire_timeout_secs", 5)?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(Config {
            app: AppConfig {
                host: settings.host,
                port: settings.port,
                environment: settings.environment,
                rust_log: settings.rust_log,
            },
            database: DatabaseConfig {
                url: settings.database_url,
                pool_size: settings.db_pool_size,
                acquire_timeout_secs: settings.db_acquire_timeout_secs,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::default().source(Some(map))
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = Config::load(env(&[("DATABASE_URL", "postgres://localhost/games")])).unwrap();

        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.port, 8000);
        assert_eq!(config.app.environment, "development");
        assert!(!config.app.is_production());
        assert_eq!(config.database.url, "postgres://localhost/games");
        assert_eq!(config.database.pool_size, 20);
        assert_eq!(config.database.acquire_timeout_secs, 5);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::load(env(&[
            ("DATABASE_URL", "postgres://db/games"),
            ("PORT", "9090"),
            ("ENVIRONMENT", "production"),
            ("DB_POOL_SIZE", "4"),
        ]))
        .unwrap();

        assert_eq!(config.app.port, 9090);
        assert!(config.app.is_production());
        assert_eq!(config.database.pool_size, 4);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        assert!(Config::load(env(&[("PORT", "9090")])).is_err());
    }

    #[test]
    fn invalid_port_is_an_error() {
        let result = Config::load(env(&[
            ("DATABASE_URL", "postgres://db/games"),
            ("PORT", "not-a-port"),
        ]));
        assert!(result.is_err());
    }
}
