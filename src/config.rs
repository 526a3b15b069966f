//! Configuration types.

/// Server configuration, read from the environment with sensible defaults.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP server to.
    pub bind_addr: String,
    /// Port for the REST API.
    pub port: u16,
    /// Whether to seed the store with demo data on startup.
    pub seed_demo_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: 3000,
            seed_demo_data: true,
        }
    }
}

impl ServerConfig {
    /// Build a config from `STUDY_ASSIST_*` environment variables.
    ///
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let bind_addr =
            std::env::var("STUDY_ASSIST_BIND_ADDR").unwrap_or_else(|_| defaults.bind_addr.clone());

        let port = std::env::var("STUDY_ASSIST_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        let seed_demo_data = std::env::var("STUDY_ASSIST_SEED")
            .ok()
            .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
            .unwrap_or(defaults.seed_demo_data);

        Self {
            bind_addr,
            port,
            seed_demo_data,
        }
    }
}
