//! EVM-side provider implementations.
//!
//! `InjectedEvmWallet` mirrors the account/chain/connector state pushed by
//! whichever wallet application embeds the service; the adapter reads
//! lock-free snapshots of it. `LocalSigner` is a private-key signing client
//! suitable for development and testing environments where key management
//! simplicity is preferred.

use crate::EvmWalletProvider;
use alloy_signer::Signer as AlloySigner;
use alloy_signer_local::PrivateKeySigner;
use arc_swap::ArcSwap;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use wallet_types::{
	Address, ChainId, ConnectorId, EvmWalletState, Signature, Signer, WalletError,
};

/// EVM wallet state cell fed by the embedding application.
pub struct InjectedEvmWallet {
	state: ArcSwap<EvmWalletState>,
}

impl InjectedEvmWallet {
	/// Starts disconnected, pointed at the given network.
	pub fn new(chain_id: ChainId) -> Self {
		Self {
			state: ArcSwap::from_pointee(EvmWalletState::disconnected(chain_id)),
		}
	}

	/// Marks an account connected under the given connector.
	pub fn set_account(&self, address: Address, connector: Option<ConnectorId>) {
		self.update(|state| {
			state.address = Some(address);
			state.connected = true;
			state.connector = connector.clone();
		});
		info!("EVM account connected: {}", address);
	}

	/// Records a network switch reported by the wallet.
	pub fn set_chain(&self, chain_id: ChainId) {
		self.update(|state| state.chain_id = chain_id);
		info!("EVM network switched to {}", chain_id);
	}

	pub fn set_signer(&self, signer: Arc<dyn Signer>) {
		self.update(|state| state.signer = Some(signer.clone()));
	}

	/// Clears account, connector, and signer. The network id is retained:
	/// a disconnected wallet still points at a network.
	pub fn disconnect(&self) {
		self.update(|state| {
			state.address = None;
			state.connected = false;
			state.connector = None;
			state.signer = None;
		});
		info!("EVM account disconnected");
	}

	fn update<F: Fn(&mut EvmWalletState)>(&self, apply: F) {
		self.state.rcu(|current| {
			let mut next = (**current).clone();
			apply(&mut next);
			next
		});
	}
}

impl EvmWalletProvider for InjectedEvmWallet {
	fn snapshot(&self) -> EvmWalletState {
		(**self.state.load()).clone()
	}
}

/// Local private-key signing client.
pub struct LocalSigner {
	signer: PrivateKeySigner,
}

impl LocalSigner {
	/// Creates a signer from a hex-encoded private key, with or without the
	/// 0x prefix.
	pub fn new(private_key_hex: &str) -> Result<Self, WalletError> {
		let signer = private_key_hex
			.parse::<PrivateKeySigner>()
			.map_err(|e| WalletError::InvalidKey(format!("Invalid private key: {}", e)))?;

		Ok(Self { signer })
	}
}

#[async_trait]
impl Signer for LocalSigner {
	fn address(&self) -> Address {
		self.signer.address()
	}

	async fn sign_message(&self, message: &[u8]) -> Result<Signature, WalletError> {
		// EIP-191 prefixing is handled by the underlying signer
		let signature = AlloySigner::sign_message(&self.signer, message)
			.await
			.map_err(|e| WalletError::SigningFailed(format!("Failed to sign message: {}", e)))?;

		Ok(Signature(signature.as_bytes().to_vec()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	// Well-known anvil/hardhat development key
	const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
	const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

	#[test]
	fn test_injected_wallet_lifecycle() {
		let wallet = InjectedEvmWallet::new(ChainId::SEPOLIA);
		assert!(!wallet.snapshot().connected);

		let address = Address::repeat_byte(0x11);
		wallet.set_account(address, Some(ConnectorId::new("metamask")));

		let state = wallet.snapshot();
		assert_eq!(state.address, Some(address));
		assert!(state.connected);
		assert_eq!(state.connector, Some(ConnectorId::new("metamask")));
		assert_eq!(state.chain_id, ChainId::SEPOLIA);

		wallet.set_chain(ChainId::BSC_TESTNET);
		assert_eq!(wallet.snapshot().chain_id, ChainId::BSC_TESTNET);

		wallet.disconnect();
		let state = wallet.snapshot();
		assert!(!state.connected);
		assert!(state.address.is_none());
		assert!(state.connector.is_none());
		assert_eq!(state.chain_id, ChainId::BSC_TESTNET);
	}

	#[test]
	fn test_local_signer_rejects_bad_key() {
		assert!(LocalSigner::new("0x1234").is_err());
		assert!(LocalSigner::new("not hex at all").is_err());
	}

	#[test]
	fn test_local_signer_address_derivation() {
		let signer = LocalSigner::new(DEV_KEY).unwrap();
		assert_eq!(signer.address().to_string(), DEV_ADDRESS);
	}

	#[tokio::test]
	async fn test_local_signer_signs_messages() {
		let signer = LocalSigner::new(DEV_KEY).unwrap();
		let signature = signer.sign_message(b"launch token").await.unwrap();
		// r || s || v
		assert_eq!(signature.0.len(), 65);
	}

	#[test]
	fn test_signer_handle_flows_through_snapshot() {
		let wallet = InjectedEvmWallet::new(ChainId::SEPOLIA);
		wallet.set_signer(Arc::new(LocalSigner::new(DEV_KEY).unwrap()));
		assert!(wallet.snapshot().signer.is_some());
	}
}
