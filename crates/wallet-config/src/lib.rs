//! Configuration loading for the wallet service.
//!
//! Loads a TOML file, substitutes `${VAR}` environment references before
//! parsing, applies `WALLET_`-prefixed environment overrides, and validates
//! the result.

use std::env;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;
use wallet_types::{Address, Pubkey};

mod types;

pub use types::{EvmSettings, ServiceSettings, SolanaSettings, WalletConfig};

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("File not found: {0}")]
	FileNotFound(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Environment variable not found: {0}")]
	EnvVarNotFound(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}

/// Configuration loader with environment variable substitution
#[derive(Default)]
pub struct ConfigLoader {
	file_path: Option<String>,
	env_prefix: String,
}

impl ConfigLoader {
	pub fn new() -> Self {
		Self {
			file_path: None,
			env_prefix: "WALLET_".to_string(),
		}
	}

	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_string_lossy().to_string());
		self
	}

	pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.env_prefix = prefix.into();
		self
	}

	pub async fn load(&self) -> Result<WalletConfig, ConfigError> {
		let mut config = if let Some(file_path) = &self.file_path {
			self.load_from_file(file_path).await?
		} else {
			return Err(ConfigError::FileNotFound(
				"No configuration file specified".to_string(),
			));
		};

		self.apply_env_overrides(&mut config)?;
		self.validate_config(&config)?;

		Ok(config)
	}

	async fn load_from_file(&self, file_path: &str) -> Result<WalletConfig, ConfigError> {
		debug!("Loading configuration from {}", file_path);
		let content = tokio::fs::read_to_string(file_path).await?;

		let substituted_content = self.substitute_env_vars(&content)?;

		let config: WalletConfig = toml::from_str(&substituted_content)
			.map_err(|e| ConfigError::ParseError(e.to_string()))?;

		Ok(config)
	}

	fn substitute_env_vars(&self, content: &str) -> Result<String, ConfigError> {
		let mut result = content.to_string();

		// Find and replace ${VAR_NAME} patterns
		let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

		for cap in re.captures_iter(content) {
			let full_match = &cap[0];
			let var_name = &cap[1];

			let env_value = env::var(var_name)
				.map_err(|_| ConfigError::EnvVarNotFound(var_name.to_string()))?;

			result = result.replace(full_match, &env_value);
		}

		Ok(result)
	}

	fn apply_env_overrides(&self, config: &mut WalletConfig) -> Result<(), ConfigError> {
		if let Ok(log_level) = env::var(format!("{}LOG_LEVEL", self.env_prefix)) {
			config.service.log_level = log_level;
		}

		if let Ok(http_port) = env::var(format!("{}HTTP_PORT", self.env_prefix)) {
			config.service.http_port = http_port
				.parse()
				.map_err(|e| ConfigError::ValidationError(format!("Invalid HTTP port: {}", e)))?;
		}

		Ok(())
	}

	fn validate_config(&self, config: &WalletConfig) -> Result<(), ConfigError> {
		if config.service.name.is_empty() {
			return Err(ConfigError::ValidationError(
				"Service name must not be empty".to_string(),
			));
		}

		if config.service.http_port == 0 {
			return Err(ConfigError::ValidationError(
				"HTTP port must not be zero".to_string(),
			));
		}

		if let Some(address) = &config.evm.address {
			Address::from_str(address).map_err(|e| {
				ConfigError::ValidationError(format!("Invalid EVM address {}: {}", address, e))
			})?;
		}

		if let Some(pubkey) = &config.solana.pubkey {
			Pubkey::from_str(pubkey).map_err(|e| {
				ConfigError::ValidationError(format!("Invalid solana pubkey {}: {}", pubkey, e))
			})?;
		}

		if let Some(key) = &config.evm.private_key {
			let key_without_prefix = key.strip_prefix("0x").unwrap_or(key);

			if key_without_prefix.len() != 64 {
				return Err(ConfigError::ValidationError(
					"Private key must be 64 hex characters (32 bytes)".to_string(),
				));
			}

			if hex::decode(key_without_prefix).is_err() {
				return Err(ConfigError::ValidationError(
					"Private key must be valid hexadecimal".to_string(),
				));
			}
		}

		if config.solana.auto_connect && config.solana.pubkey.is_none() {
			return Err(ConfigError::ValidationError(
				"auto_connect requires a solana pubkey".to_string(),
			));
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	fn write_config(content: &str) -> tempfile::NamedTempFile {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(content.as_bytes()).unwrap();
		file
	}

	const MINIMAL: &str = r#"
[service]
name = "launchpad-wallet"
http_port = 8080
"#;

	#[tokio::test]
	async fn test_load_minimal_config() {
		let file = write_config(MINIMAL);
		let config = ConfigLoader::new().with_file(file.path()).load().await.unwrap();

		assert_eq!(config.service.name, "launchpad-wallet");
		assert_eq!(config.service.host, "127.0.0.1");
		assert_eq!(config.service.log_level, "info");
		assert_eq!(config.evm.chain_id, 11155111);
		assert!(config.solana.pubkey.is_none());
	}

	#[tokio::test]
	async fn test_env_var_substitution() {
		env::set_var("TEST_WALLET_CONNECTOR_A7", "walletconnect");
		let file = write_config(
			r#"
[service]
name = "launchpad-wallet"
http_port = 8080

[evm]
connector = "${TEST_WALLET_CONNECTOR_A7}"
"#,
		);

		let config = ConfigLoader::new().with_file(file.path()).load().await.unwrap();
		assert_eq!(config.evm.connector.as_deref(), Some("walletconnect"));
	}

	#[tokio::test]
	async fn test_missing_env_var_is_an_error() {
		let file = write_config(
			r#"
[service]
name = "launchpad-wallet"
http_port = 8080

[evm]
private_key = "${TEST_WALLET_UNSET_VAR_Z9}"
"#,
		);

		let err = ConfigLoader::new().with_file(file.path()).load().await.unwrap_err();
		assert!(matches!(err, ConfigError::EnvVarNotFound(name) if name == "TEST_WALLET_UNSET_VAR_Z9"));
	}

	#[tokio::test]
	async fn test_env_override_http_port() {
		let file = write_config(MINIMAL);
		let config = ConfigLoader::new()
			.with_file(file.path())
			.with_env_prefix("TEST_WALLET_OVERRIDE_B3_")
			.load()
			.await;
		// No override set: file value wins
		assert_eq!(config.unwrap().service.http_port, 8080);

		env::set_var("TEST_WALLET_OVERRIDE_C4_HTTP_PORT", "9090");
		let config = ConfigLoader::new()
			.with_file(file.path())
			.with_env_prefix("TEST_WALLET_OVERRIDE_C4_")
			.load()
			.await
			.unwrap();
		assert_eq!(config.service.http_port, 9090);
	}

	#[tokio::test]
	async fn test_validation_rejects_bad_values() {
		let bad_port = write_config(
			r#"
[service]
name = "launchpad-wallet"
http_port = 0
"#,
		);
		assert!(matches!(
			ConfigLoader::new().with_file(bad_port.path()).load().await,
			Err(ConfigError::ValidationError(_)),
		));

		let bad_address = write_config(
			r#"
[service]
name = "launchpad-wallet"
http_port = 8080

[evm]
address = "0x1234"
"#,
		);
		assert!(matches!(
			ConfigLoader::new().with_file(bad_address.path()).load().await,
			Err(ConfigError::ValidationError(_)),
		));

		let bad_key = write_config(
			r#"
[service]
name = "launchpad-wallet"
http_port = 8080

[evm]
private_key = "0xzz"
"#,
		);
		assert!(matches!(
			ConfigLoader::new().with_file(bad_key.path()).load().await,
			Err(ConfigError::ValidationError(_)),
		));

		let auto_connect_without_pubkey = write_config(
			r#"
[service]
name = "launchpad-wallet"
http_port = 8080

[solana]
auto_connect = true
"#,
		);
		assert!(matches!(
			ConfigLoader::new()
				.with_file(auto_connect_without_pubkey.path())
				.load()
				.await,
			Err(ConfigError::ValidationError(_)),
		));
	}

	#[tokio::test]
	async fn test_missing_file() {
		let err = ConfigLoader::new()
			.with_file("/nonexistent/wallet.toml")
			.load()
			.await
			.unwrap_err();
		assert!(matches!(err, ConfigError::IoError(_)));
	}
}
