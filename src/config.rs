//! Application configuration management.
//!
//! Configuration is read from environment variables with the `envy` crate,
//! after an optional `.env` file has been loaded by `dotenvy`.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `DB_MAX_CONNECTIONS` (optional): pool size, defaults to 5
/// - `MAX_PAGE_SIZE` (optional): upper bound for `limit` on list endpoints, defaults to 100
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_max_connections")]
    pub db_max_connections: u32,

    #[serde(default = "default_max_page_size")]
    pub max_page_size: i64,
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    5
}

fn default_max_page_size() -> i64 {
    100
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a value cannot be
    /// parsed into its expected type.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        // database_url -> DATABASE_URL
        envy::from_env::<Config>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config =
            envy::from_iter::<_, Config>(vars(&[("DATABASE_URL", "postgres://localhost/test")]))
                .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/test");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.max_page_size, 100);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = envy::from_iter::<_, Config>(vars(&[
            ("DATABASE_URL", "postgres://localhost/test"),
            ("SERVER_PORT", "8080"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("MAX_PAGE_SIZE", "25"),
        ]))
        .unwrap();

        assert_eq!(config.server_port, 8080);
        assert_eq!(config.db_max_connections, 12);
        assert_eq!(config.max_page_size, 25);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let result = envy::from_iter::<_, Config>(vars(&[("SERVER_PORT", "8080")]));
        assert!(result.is_err());
    }
}
