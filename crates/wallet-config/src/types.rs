//! Configuration types for the wallet service.

use serde::{Deserialize, Serialize};

/// Complete service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WalletConfig {
	/// Service identity and HTTP settings
	pub service: ServiceSettings,
	/// Initial EVM ecosystem state for the injected provider
	#[serde(default)]
	pub evm: EvmSettings,
	/// Solana wallet settings
	#[serde(default)]
	pub solana: SolanaSettings,
}

/// Service identity and HTTP settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceSettings {
	/// Service name for logging
	pub name: String,
	/// HTTP bind host
	#[serde(default = "default_host")]
	pub host: String,
	/// HTTP bind port
	pub http_port: u16,
	/// Log level filter
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

/// EVM ecosystem settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EvmSettings {
	/// Network id the wallet starts on
	#[serde(default = "default_chain_id")]
	pub chain_id: u64,
	/// Pre-connected account address (0x-hex)
	pub address: Option<String>,
	/// Connector identity reported alongside the account
	pub connector: Option<String>,
	/// Hex private key enabling the local signer
	pub private_key: Option<String>,
}

impl Default for EvmSettings {
	fn default() -> Self {
		Self {
			chain_id: default_chain_id(),
			address: None,
			connector: None,
			private_key: None,
		}
	}
}

/// Solana wallet settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SolanaSettings {
	/// Wallet public key (base58); absent means no wallet is available
	pub pubkey: Option<String>,
	/// Connect the wallet at startup
	#[serde(default)]
	pub auto_connect: bool,
}

fn default_host() -> String {
	"127.0.0.1".to_string()
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_chain_id() -> u64 {
	// Sepolia
	11155111
}
