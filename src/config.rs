/// Base URL of the parc API when nothing else is configured: the `/api`
/// scope mounted by the bundled server.
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Where the client sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `PARC_API_URL` at build time, so the WASM bundle can target
    /// an API hosted elsewhere.
    pub fn from_env() -> Self {
        Self::new(option_env!("PARC_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(feature = "ssr")]
pub use server::ServerConfig;

#[cfg(feature = "ssr")]
mod server {
    use leptos::logging::warn;

    pub const DEFAULT_DATABASE_PATH: &str = "parc.db";

    /// Settings of the bundled API server that Leptos' own configuration
    /// does not cover.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ServerConfig {
        pub database_path: String,
        pub seed_demo_data: bool,
    }

    impl ServerConfig {
        pub fn from_env() -> Self {
            let database_path = std::env::var("PARC_DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());
            let seed_demo_data = match std::env::var("PARC_SEED_DEMO") {
                Ok(value) => parse_switch(&value).unwrap_or_else(|| {
                    warn!("[CONFIG] Ignoring PARC_SEED_DEMO={:?}, expected true/false", value);
                    true
                }),
                Err(_) => true,
            };
            Self {
                database_path,
                seed_demo_data,
            }
        }
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                database_path: DEFAULT_DATABASE_PATH.to_string(),
                seed_demo_data: true,
            }
        }
    }

    pub(super) fn parse_switch(value: &str) -> Option<bool> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        }
    }
}
