use thiserror::Error;

/// Errors raised while reading startup configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVariable(&'static str),
}

/// Connection settings for the Supabase backend
///
/// Both values are mandatory. A process without them must not serve
/// requests, so `from_env` failure is treated as fatal at startup.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`
    pub url: String,
    /// API key sent as both `apikey` and bearer token
    pub api_key: String,
}

impl SupabaseConfig {
    /// Reads configuration from `SUPABASE_URL` and `SUPABASE_KEY`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("SUPABASE_URL").ok(),
            std::env::var("SUPABASE_KEY").ok(),
        )
    }

    /// Builds configuration from optional raw values, rejecting empty
    /// strings the same as absent variables
    fn from_values(url: Option<String>, api_key: Option<String>) -> Result<Self, ConfigError> {
        let url = url
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVariable("SUPABASE_URL"))?;
        let api_key = api_key
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVariable("SUPABASE_KEY"))?;

        Ok(Self { url, api_key })
    }
}
