//! Configuration management for Cinegraph services.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (CINEGRAPH__ prefix, `__` separated)
//! 2. Config file (cinegraph.toml)
//! 3. Defaults

use serde::Deserialize;

use crate::error::CinegraphError;

/// Top-level settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub neo4j: Neo4jSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

/// Connection target and credentials for the graph store.
#[derive(Debug, Clone, Deserialize)]
pub struct Neo4jSettings {
    #[serde(default = "default_uri")]
    pub uri: String,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_password")]
    pub password: String,

    /// Database name; the server default database when unset.
    #[serde(default)]
    pub database: Option<String>,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_fetch_size")]
    pub fetch_size: usize,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve the GraphiQL IDE on `GET /graphql`.
    #[serde(default = "default_true")]
    pub graphiql: bool,
}

impl Settings {
    /// Load settings from `<file_prefix>.toml` (optional) and `CINEGRAPH__*`
    /// environment variables.
    pub fn load(file_prefix: &str) -> Result<Self, CinegraphError> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(environment())
            .build()?;

        let settings: Settings = cfg.try_deserialize()?;
        settings.validate()?;
        tracing::debug!(
            uri = %settings.neo4j.uri,
            host = %settings.server.host,
            port = settings.server.port,
            "Loaded settings"
        );
        Ok(settings)
    }

    /// Reject settings the driver would only fail on at first use.
    pub fn validate(&self) -> Result<(), CinegraphError> {
        const SCHEMES: [&str; 6] = [
            "bolt://", "bolt+s://", "bolt+ssc://", "neo4j://", "neo4j+s://", "neo4j+ssc://",
        ];
        if !SCHEMES.iter().any(|s| self.neo4j.uri.starts_with(s)) {
            return Err(CinegraphError::InvalidSetting {
                key: "neo4j.uri".to_string(),
                reason: format!("unsupported scheme in {}", self.neo4j.uri),
            });
        }
        if self.neo4j.max_connections == 0 {
            return Err(CinegraphError::InvalidSetting {
                key: "neo4j.max_connections".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// `CINEGRAPH__NEO4J__URI` and friends. Values stay strings until
/// deserialization so credentials load exactly as written.
fn environment() -> config::Environment {
    config::Environment::with_prefix("CINEGRAPH")
        .prefix_separator("__")
        .separator("__")
}

fn default_uri() -> String {
    "bolt://graphql-test-neo4j:7687".to_string()
}

fn default_user() -> String {
    "neo4j".to_string()
}

fn default_password() -> String {
    "terriblyinsecure".to_string()
}

fn default_max_connections() -> u32 {
    16
}

fn default_fetch_size() -> usize {
    256
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_true() -> bool {
    true
}

impl Default for Neo4jSettings {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: default_password(),
            database: None,
            max_connections: default_max_connections(),
            fetch_size: default_fetch_size(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_true(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.neo4j.uri, "bolt://graphql-test-neo4j:7687");
        assert_eq!(settings.neo4j.user, "neo4j");
        assert_eq!(settings.neo4j.max_connections, 16);
        assert!(settings.neo4j.database.is_none());
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8000);
        assert!(settings.server.graphiql);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::load("does-not-exist/cinegraph").unwrap();
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.neo4j.fetch_size, 256);
    }

    #[test]
    fn test_validate_rejects_bad_uri_and_empty_pool() {
        let mut settings = Settings::default();
        assert!(settings.validate().is_ok());

        settings.neo4j.uri = "http://localhost:7474".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("neo4j.uri"));

        settings.neo4j.uri = "neo4j+s://demo.databases.neo4j.io".to_string();
        settings.neo4j.max_connections = 0;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("max_connections"));
    }

    #[test]
    fn test_partial_section_keeps_field_defaults() {
        let cfg = config::Config::builder()
            .set_override("neo4j.uri", "bolt://localhost:7687")
            .unwrap()
            .set_override("server.port", 4000)
            .unwrap()
            .build()
            .unwrap();
        let settings: Settings = cfg.try_deserialize().unwrap();
        assert_eq!(settings.neo4j.uri, "bolt://localhost:7687");
        assert_eq!(settings.neo4j.password, "terriblyinsecure");
        assert_eq!(settings.server.port, 4000);
        assert_eq!(settings.server.host, "0.0.0.0");
    }

    #[test]
    fn test_env_values_load_as_written() {
        let vars = [
            ("CINEGRAPH__NEO4J__PASSWORD", "007"),
            ("CINEGRAPH__NEO4J__USER", "1e3"),
            ("CINEGRAPH__NEO4J__MAX_CONNECTIONS", "4"),
            ("CINEGRAPH__SERVER__PORT", "4000"),
            ("CINEGRAPH__SERVER__GRAPHIQL", "false"),
        ];
        let cfg = config::Config::builder()
            .add_source(
                environment().source(Some(
                    vars.iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                )),
            )
            .build()
            .unwrap();
        let settings: Settings = cfg.try_deserialize().unwrap();
        assert_eq!(settings.neo4j.password, "007");
        assert_eq!(settings.neo4j.user, "1e3");
        assert_eq!(settings.neo4j.max_connections, 4);
        assert_eq!(settings.server.port, 4000);
        assert!(!settings.server.graphiql);
        assert_eq!(settings.neo4j.uri, "bolt://graphql-test-neo4j:7687");
    }
}
