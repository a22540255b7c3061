//! Multi-chain wallet adapter.
//!
//! Reconciles two independent wallet ecosystems — EVM account/chain/connector
//! state and a public-key based Solana wallet — into one logical "connected
//! wallet". The adapter owns no state: every answer is derived fresh from the
//! two injected providers, so it always reflects whatever the ecosystems
//! currently report.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use wallet_types::{
	Chain, ChainAddress, ChainFamily, EvmWalletState, SolanaWalletState, WalletError,
};

pub mod implementations;
mod view;

pub use view::WalletView;

/// Read side of the EVM ecosystem.
pub trait EvmWalletProvider: Send + Sync {
	/// Current account/chain/connector state as the ecosystem reports it.
	fn snapshot(&self) -> EvmWalletState;
}

/// Solana wallet with its own connect/disconnect lifecycle.
#[async_trait]
pub trait SolanaWalletProvider: Send + Sync {
	fn snapshot(&self) -> SolanaWalletState;

	/// Requests a wallet connection. Rejections propagate unchanged.
	async fn connect(&self) -> Result<(), WalletError>;

	async fn disconnect(&self) -> Result<(), WalletError>;
}

/// Whether `chain` is currently usable given the two ecosystem states.
///
/// EVM chains require the wallet's active network id to match the chain's
/// expected test network, independent of connection state. Solana tracks the
/// wallet's connected flag; its cluster is fixed.
fn chain_supported(evm: &EvmWalletState, solana: &SolanaWalletState, chain: Chain) -> bool {
	match chain.family() {
		ChainFamily::Evm => chain
			.expected_chain_id()
			.is_some_and(|expected| evm.chain_id == expected),
		ChainFamily::Solana => solana.connected,
	}
}

/// Unified wallet over the two ecosystems.
pub struct MultiChainWallet {
	evm: Arc<dyn EvmWalletProvider>,
	solana: Arc<dyn SolanaWalletProvider>,
}

impl MultiChainWallet {
	pub fn new(evm: Arc<dyn EvmWalletProvider>, solana: Arc<dyn SolanaWalletProvider>) -> Self {
		Self { evm, solana }
	}

	/// Address for a named chain, in the owning ecosystem's native form.
	///
	/// Surfaces whatever the owning provider currently reports; a
	/// disconnected provider reports no address.
	pub fn address_for_chain(&self, chain: Chain) -> Option<ChainAddress> {
		match chain.family() {
			ChainFamily::Evm => self.evm.snapshot().address.map(ChainAddress::Evm),
			ChainFamily::Solana => self.solana.snapshot().pubkey.map(ChainAddress::Solana),
		}
	}

	/// Whether the named chain is currently usable.
	///
	/// A wallet connected to the wrong EVM network reports unsupported, so
	/// callers can prompt a network switch.
	pub fn is_chain_supported(&self, chain: Chain) -> bool {
		chain_supported(&self.evm.snapshot(), &self.solana.snapshot(), chain)
	}

	/// Case-insensitive entry point; unknown names yield no address.
	pub fn address_for_chain_str(&self, chain: &str) -> Option<ChainAddress> {
		chain
			.parse::<Chain>()
			.ok()
			.and_then(|chain| self.address_for_chain(chain))
	}

	/// Case-insensitive entry point; unknown names are unsupported.
	pub fn is_chain_supported_str(&self, chain: &str) -> bool {
		chain
			.parse::<Chain>()
			.map(|chain| self.is_chain_supported(chain))
			.unwrap_or(false)
	}

	pub fn is_evm_connected(&self) -> bool {
		self.evm.snapshot().connected
	}

	pub fn is_solana_connected(&self) -> bool {
		self.solana.snapshot().connected
	}

	/// True when at least one ecosystem reports a connection. The two flags
	/// are never conflated: an EVM connection says nothing about Solana.
	pub fn is_connected(&self) -> bool {
		self.is_evm_connected() || self.is_solana_connected()
	}

	/// Pass-through to the Solana wallet. EVM connection lifecycle belongs to
	/// the EVM ecosystem's own surface and is not duplicated here.
	pub async fn connect(&self) -> Result<(), WalletError> {
		debug!("Requesting solana wallet connection");
		self.solana.connect().await
	}

	pub async fn disconnect(&self) -> Result<(), WalletError> {
		debug!("Requesting solana wallet disconnect");
		self.solana.disconnect().await
	}

	/// Unified snapshot of both ecosystems, recomputed on every call.
	pub fn view(&self) -> WalletView {
		WalletView::derive(self.evm.snapshot(), self.solana.snapshot())
	}
}
