//! Store credentials resolved from the build environment.

use thiserror::Error;

/// Build-time environment variable carrying the service base URL.
pub const SERVICE_URL_VAR: &str = "SUPABASE_URL";

/// Build-time environment variable carrying the public access key.
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Reasons credential resolution can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable was absent at build time.
    #[error("missing build environment variable {variable}")]
    MissingVariable {
        /// Name of the absent variable.
        variable: &'static str,
    },
}

/// Resolved connection credentials for the hosted table store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    base_url: String,
    anon_key: String,
}

impl StoreConfig {
    /// Builds a config from explicit values, trimming any trailing slash off the URL.
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            anon_key: anon_key.into(),
        }
    }

    /// Resolves credentials captured from the build environment.
    ///
    /// Both variables are read with `option_env!`, so they must be present when the
    /// crate is compiled; there is no runtime lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] naming the first absent variable.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        let base_url = option_env!("SUPABASE_URL").ok_or(ConfigError::MissingVariable {
            variable: SERVICE_URL_VAR,
        })?;
        let anon_key = option_env!("SUPABASE_ANON_KEY").ok_or(ConfigError::MissingVariable {
            variable: ANON_KEY_VAR,
        })?;
        Ok(Self::new(base_url, anon_key))
    }

    /// Service base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Public access key sent with every query.
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_trims_trailing_slashes() {
        let config = StoreConfig::new("https://demo.example//", "key");
        assert_eq!(config.base_url(), "https://demo.example");
        assert_eq!(config.anon_key(), "key");
    }

    #[test]
    fn missing_variable_errors_name_the_variable() {
        let err = ConfigError::MissingVariable {
            variable: SERVICE_URL_VAR,
        };
        assert_eq!(
            err.to_string(),
            "missing build environment variable SUPABASE_URL"
        );
    }
}
