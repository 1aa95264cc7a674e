//! Bearer token resolution from multiple sources

use log::debug;

use crate::config::credentials;
use crate::error::{Result, StorageError};

/// Token resolution with fallback logic
pub struct TokenResolver {
    env_vars: &'static [&'static str],
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenResolver {
    /// Create a resolver that checks the standard token variables
    pub fn new() -> Self {
        Self {
            env_vars: credentials::TOKEN_ENV_VARS,
        }
    }

    /// Create a resolver that checks a custom list of variables
    pub fn with_env_vars(env_vars: &'static [&'static str]) -> Self {
        Self { env_vars }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (FABRIC_TOKEN, FABRIC_ACCESS_TOKEN, AZURE_ACCESS_TOKEN - in order)
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token.filter(|t| !t.is_empty()) {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        for env_var in self.env_vars {
            match std::env::var(env_var) {
                Ok(token) if !token.is_empty() => {
                    debug!("Using token from {} environment variable", env_var);
                    return Ok(token);
                }
                _ => continue,
            }
        }

        Err(StorageError::TokenNotFound(self.token_not_found_message()))
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self) -> String {
        format!(
            "No Fabric API token found. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      workspace-storage --token <TOKEN>\n\
             2. Environment var:   export {}=<TOKEN>\n\
             \n\
             Checked: env vars [{}]",
            self.env_vars.first().copied().unwrap_or("FABRIC_TOKEN"),
            self.env_vars.join(", ")
        )
    }
}
