//! Account-related types for the wallet system.
//!
//! Defines the per-ecosystem wallet state snapshots the adapter derives its
//! unified view from, along with the address, connector, and signing types
//! those snapshots carry.

use crate::chains::ChainId;
use crate::errors::WalletError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub use alloy_primitives::Address;

/// Ed25519 public key identifying a Solana account.
///
/// Rendered in base58, the form wallets display and RPC endpoints accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pubkey(pub [u8; 32]);

impl Pubkey {
	pub fn new(bytes: [u8; 32]) -> Self {
		Self(bytes)
	}

	pub fn as_bytes(&self) -> &[u8; 32] {
		&self.0
	}
}

impl fmt::Display for Pubkey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&bs58::encode(self.0).into_string())
	}
}

impl FromStr for Pubkey {
	type Err = WalletError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		let bytes = bs58::decode(s)
			.into_vec()
			.map_err(|e| WalletError::InvalidAddress(format!("Invalid base58: {}", e)))?;
		let bytes: [u8; 32] = bytes
			.as_slice()
			.try_into()
			.map_err(|_| WalletError::InvalidAddress(format!("Expected 32 bytes, got {}", bytes.len())))?;
		Ok(Pubkey(bytes))
	}
}

impl Serialize for Pubkey {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Pubkey {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(serde::de::Error::custom)
	}
}

/// Opaque identity of the wallet application currently providing EVM signing
/// capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorId(pub String);

impl ConnectorId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}
}

impl fmt::Display for ConnectorId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Cryptographic signature as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(pub Vec<u8>);

/// Signing client handle carried through the wallet state.
///
/// Implementations wrap whatever actually holds key material; the adapter
/// passes the handle through without invoking it.
#[async_trait]
pub trait Signer: Send + Sync {
	fn address(&self) -> Address;

	async fn sign_message(&self, message: &[u8]) -> std::result::Result<Signature, WalletError>;
}

/// Live state reported by the EVM ecosystem.
///
/// Owned by the upstream provider; the adapter only reads it. A disconnected
/// provider reports no address, no connector, and no signer, but still
/// reports whichever network id the wallet is pointed at.
#[derive(Clone)]
pub struct EvmWalletState {
	pub address: Option<Address>,
	pub connected: bool,
	pub connector: Option<ConnectorId>,
	pub chain_id: ChainId,
	pub signer: Option<Arc<dyn Signer>>,
}

impl EvmWalletState {
	pub fn disconnected(chain_id: ChainId) -> Self {
		Self {
			address: None,
			connected: false,
			connector: None,
			chain_id,
			signer: None,
		}
	}
}

impl fmt::Debug for EvmWalletState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EvmWalletState")
			.field("address", &self.address)
			.field("connected", &self.connected)
			.field("connector", &self.connector)
			.field("chain_id", &self.chain_id)
			.field("signer", &self.signer.is_some())
			.finish()
	}
}

/// Live state reported by the Solana wallet adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolanaWalletState {
	pub pubkey: Option<Pubkey>,
	pub connected: bool,
}

/// Address in the owning ecosystem's native form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainAddress {
	Evm(Address),
	Solana(Pubkey),
}

impl fmt::Display for ChainAddress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ChainAddress::Evm(address) => write!(f, "{}", address),
			ChainAddress::Solana(pubkey) => write!(f, "{}", pubkey),
		}
	}
}

impl Serialize for ChainAddress {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_pubkey_base58_round_trip() {
		let pubkey = Pubkey::new([7u8; 32]);
		let encoded = pubkey.to_string();
		assert_eq!(encoded.parse::<Pubkey>().unwrap(), pubkey);
	}

	#[test]
	fn test_pubkey_parse_rejects_bad_input() {
		assert!("not-base58-0OIl".parse::<Pubkey>().is_err());
		// Valid base58 but wrong length
		assert!("abc".parse::<Pubkey>().is_err());
	}

	#[test]
	fn test_pubkey_serde_as_string() {
		let pubkey = Pubkey::new([1u8; 32]);
		let json = serde_json::to_string(&pubkey).unwrap();
		assert_eq!(json, format!("\"{}\"", pubkey));
		let back: Pubkey = serde_json::from_str(&json).unwrap();
		assert_eq!(back, pubkey);
	}

	#[test]
	fn test_chain_address_display() {
		let evm = ChainAddress::Evm(Address::repeat_byte(0x11));
		assert!(evm.to_string().starts_with("0x"));

		let solana = ChainAddress::Solana(Pubkey::new([7u8; 32]));
		assert_eq!(solana.to_string(), Pubkey::new([7u8; 32]).to_string());
	}

	#[test]
	fn test_disconnected_state_keeps_chain_id() {
		let state = EvmWalletState::disconnected(ChainId::BSC_TESTNET);
		assert!(state.address.is_none());
		assert!(!state.connected);
		assert!(state.signer.is_none());
		assert_eq!(state.chain_id, ChainId::BSC_TESTNET);
	}
}
