#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_non_negative, Validate};
use serde::Deserialize;
use std::path::Path;

/// Scenario run by the demonstration driver. Every section is optional in
/// TOML; missing values fall back to the reference scenario.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub encapsulation: EncapsulationConfig,
    pub shapes: ShapesConfig,
    pub account: AccountConfig,
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EncapsulationConfig {
    pub radius: f64,
}

impl Default for EncapsulationConfig {
    fn default() -> Self {
        Self { radius: 10.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShapesConfig {
    pub rectangle_width: f64,
    pub rectangle_height: f64,
    pub circle_radius: f64,
}

impl Default for ShapesConfig {
    fn default() -> Self {
        Self {
            rectangle_width: 5.0,
            rectangle_height: 3.0,
            circle_radius: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    pub owner: String,
    pub initial_balance: f64,
    pub deposit: f64,
    pub withdraw: f64,
    pub apply_fee: bool,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            owner: "arnoldo".to_string(),
            initial_balance: 5000.0,
            deposit: 25000.0,
            withdraw: 3000.0,
            apply_fee: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub email_message: String,
    pub sms_message: String,
    pub whatsapp_message: String,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            email_message: "¡Bienvenido al sistema!".to_string(),
            sms_message: "Código de verificación: 123456".to_string(),
            whatsapp_message: "Tienes una nueva oferta".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content).map_err(|e| DemoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` when given, otherwise returns the reference scenario.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::info!("Loading demo configuration from {}", path.display());
                Self::from_file(path)
            }
            None => {
                tracing::debug!("No configuration file given, using reference scenario");
                Ok(Self::default())
            }
        }
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_non_negative("encapsulation.radius", self.encapsulation.radius)?;
        validate_non_negative("shapes.rectangle_width", self.shapes.rectangle_width)?;
        validate_non_negative("shapes.rectangle_height", self.shapes.rectangle_height)?;
        validate_non_negative("shapes.circle_radius", self.shapes.circle_radius)?;
        validate_non_empty_string("account.owner", &self.account.owner)?;
        validate_non_negative("account.initial_balance", self.account.initial_balance)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_scenario() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.account.owner, "arnoldo");
        assert_eq!(config.account.initial_balance, 5000.0);
        assert_eq!(config.shapes.rectangle_width, 5.0);
        assert_eq!(config.notifications.sms_message, "Código de verificación: 123456");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DemoConfig::from_toml_str(
            r#"
[account]
owner = "ana"
deposit = 10.5

[notifications]
email_message = "hola"
"#,
        )
        .unwrap();

        assert_eq!(config.account.owner, "ana");
        assert_eq!(config.account.deposit, 10.5);
        assert_eq!(config.account.withdraw, 3000.0);
        assert_eq!(config.notifications.email_message, "hola");
        assert_eq!(config.notifications.whatsapp_message, "Tienes una nueva oferta");
        assert_eq!(config.encapsulation.radius, 10.0);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(DemoConfig::from_toml_str("").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let err = DemoConfig::from_toml_str("[shapes]\ncircle_radius = -2.0\n").unwrap_err();
        match err {
            DemoError::ConfigValidationError { field, .. } => {
                assert_eq!(field, "shapes.circle_radius")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_owner_rejected() {
        assert!(DemoConfig::from_toml_str("[account]\nowner = \"  \"\n").is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = DemoConfig::from_toml_str("[account\nowner = 1").unwrap_err();
        assert!(matches!(err, DemoError::ConfigError { .. }));
    }

    #[test]
    fn test_load_without_path_uses_default() {
        assert_eq!(DemoConfig::load(None).unwrap(), DemoConfig::default());
    }
}
