//! Error types for the wallet system.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WalletError>;

#[derive(Error, Debug)]
pub enum WalletError {
	#[error("Unknown chain: {0}")]
	UnknownChain(String),

	#[error("Provider error: {0}")]
	Provider(String),

	#[error("Invalid address: {0}")]
	InvalidAddress(String),

	#[error("Invalid key: {0}")]
	InvalidKey(String),

	#[error("Signing failed: {0}")]
	SigningFailed(String),

	#[error("Connection failed: {0}")]
	ConnectionFailed(String),
}
