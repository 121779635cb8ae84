use crate::config::ClosureConfig;
use crate::error::{ConfigError, Result};

impl ClosureConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.catalogs.is_empty() {
            return Err(ConfigError::MissingField {
                field: "catalogs".to_string(),
                hint: "Pass --catalog <FILE> or list catalogs in typegraph.toml".to_string(),
            }
            .into());
        }

        if self.roots.is_empty() && self.patterns.is_empty() {
            return Err(ConfigError::MissingField {
                field: "roots".to_string(),
                hint: "Name at least one root type or pass --pattern <GLOB>".to_string(),
            }
            .into());
        }

        if self.max_types == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "maxTypes".to_string(),
                value: "0".to_string(),
                hint: "Must be greater than zero, or left unset for no limit".to_string(),
            }
            .into());
        }

        if let Some(root) = self.roots.iter().find(|root| root.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "roots".to_string(),
                value: format!("{root:?}"),
                hint: "Root names cannot be blank".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
