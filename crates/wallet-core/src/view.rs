//! Derived unified wallet view.

use crate::chain_supported;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use wallet_types::{
	Address, Chain, ChainId, ConnectorId, EvmWalletState, Pubkey, Signer, SolanaWalletState,
};

/// Snapshot of both ecosystems from a single derivation pass.
///
/// Never cached: each call to [`MultiChainWallet::view`](crate::MultiChainWallet::view)
/// rebuilds it from live provider state. Serializes without the signer
/// handle, which is process-local.
#[derive(Clone, Serialize)]
pub struct WalletView {
	pub evm_address: Option<Address>,
	pub solana_pubkey: Option<Pubkey>,
	pub evm_connected: bool,
	pub solana_connected: bool,
	pub is_connected: bool,
	pub connector: Option<ConnectorId>,
	pub chain_id: ChainId,
	pub supported_chains: Vec<Chain>,
	#[serde(skip)]
	pub signer: Option<Arc<dyn Signer>>,
}

impl WalletView {
	pub(crate) fn derive(evm: EvmWalletState, solana: SolanaWalletState) -> Self {
		let supported_chains = Chain::ALL
			.into_iter()
			.filter(|chain| chain_supported(&evm, &solana, *chain))
			.collect();

		Self {
			evm_address: evm.address,
			solana_pubkey: solana.pubkey,
			evm_connected: evm.connected,
			solana_connected: solana.connected,
			is_connected: evm.connected || solana.connected,
			connector: evm.connector,
			chain_id: evm.chain_id,
			supported_chains,
			signer: evm.signer,
		}
	}
}

impl fmt::Debug for WalletView {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WalletView")
			.field("evm_address", &self.evm_address)
			.field("solana_pubkey", &self.solana_pubkey)
			.field("evm_connected", &self.evm_connected)
			.field("solana_connected", &self.solana_connected)
			.field("is_connected", &self.is_connected)
			.field("connector", &self.connector)
			.field("chain_id", &self.chain_id)
			.field("supported_chains", &self.supported_chains)
			.field("signer", &self.signer.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_view_serializes_without_signer() {
		let view = WalletView::derive(
			EvmWalletState::disconnected(ChainId::SEPOLIA),
			SolanaWalletState::default(),
		);

		let json = serde_json::to_value(&view).unwrap();
		assert!(json.get("signer").is_none());
		assert_eq!(json["is_connected"], false);
		assert_eq!(json["chain_id"], 11155111);
		// Sepolia matches the wallet's network even with nothing connected
		assert_eq!(json["supported_chains"], serde_json::json!(["ethereum"]));
	}
}
