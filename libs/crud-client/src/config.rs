use core_config::{env_optional, env_required, ConfigError, FromEnv};

/// Connection settings for the external CRUD collaborator.
#[derive(Clone, Debug)]
pub struct CrudConfig {
    /// Base URL of the collaborator, without a trailing slash.
    pub base_url: String,
    /// Optional bearer token sent on every request.
    pub api_key: Option<String>,
}

impl CrudConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl FromEnv for CrudConfig {
    /// Reads from environment variables:
    /// - CRUD_BASE_URL: required, e.g. `https://crud.example.com/v1`
    /// - CRUD_API_KEY: optional bearer token
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_required("CRUD_BASE_URL")?;
        let mut config = Self::new(base_url);
        config.api_key = env_optional("CRUD_API_KEY");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crud_config_requires_base_url() {
        temp_env::with_var_unset("CRUD_BASE_URL", || {
            let err = CrudConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("CRUD_BASE_URL"));
        });
    }

    #[test]
    fn test_crud_config_from_env() {
        temp_env::with_vars(
            [
                ("CRUD_BASE_URL", Some("https://crud.example.com/v1/")),
                ("CRUD_API_KEY", Some("secret")),
            ],
            || {
                let config = CrudConfig::from_env().unwrap();
                assert_eq!(config.base_url, "https://crud.example.com/v1");
                assert_eq!(config.api_key.as_deref(), Some("secret"));
            },
        );
    }

    #[test]
    fn test_crud_config_api_key_optional() {
        temp_env::with_vars(
            [
                ("CRUD_BASE_URL", Some("http://localhost:9200")),
                ("CRUD_API_KEY", None),
            ],
            || {
                let config = CrudConfig::from_env().unwrap();
                assert_eq!(config.api_key, None);
            },
        );
    }
}
