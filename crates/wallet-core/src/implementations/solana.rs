//! Solana-side provider implementation.

use crate::SolanaWalletProvider;
use arc_swap::ArcSwap;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use wallet_types::{Pubkey, SolanaWalletState, WalletError};

/// Wallet-adapter stand-in holding a fixed public key.
///
/// The cluster is fixed; connection state is the only thing that changes
/// across the lifecycle. Constructed without a pubkey it represents the
/// "no wallet installed" case, where connection requests fail.
pub struct LocalSolanaWallet {
	pubkey: Option<Pubkey>,
	state: ArcSwap<SolanaWalletState>,
}

impl LocalSolanaWallet {
	pub fn new(pubkey: Option<Pubkey>) -> Self {
		Self {
			pubkey,
			state: ArcSwap::from_pointee(SolanaWalletState::default()),
		}
	}
}

#[async_trait]
impl SolanaWalletProvider for LocalSolanaWallet {
	fn snapshot(&self) -> SolanaWalletState {
		(**self.state.load()).clone()
	}

	async fn connect(&self) -> Result<(), WalletError> {
		let pubkey = self.pubkey.ok_or_else(|| {
			WalletError::ConnectionFailed("No solana wallet configured".to_string())
		})?;

		self.state.store(Arc::new(SolanaWalletState {
			pubkey: Some(pubkey),
			connected: true,
		}));
		info!("Solana wallet connected: {}", pubkey);
		Ok(())
	}

	async fn disconnect(&self) -> Result<(), WalletError> {
		self.state.store(Arc::new(SolanaWalletState::default()));
		info!("Solana wallet disconnected");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_connect_disconnect_lifecycle() {
		let wallet = LocalSolanaWallet::new(Some(Pubkey::new([7u8; 32])));
		assert_eq!(wallet.snapshot(), SolanaWalletState::default());

		wallet.connect().await.unwrap();
		let state = wallet.snapshot();
		assert!(state.connected);
		assert_eq!(state.pubkey, Some(Pubkey::new([7u8; 32])));

		wallet.disconnect().await.unwrap();
		let state = wallet.snapshot();
		assert!(!state.connected);
		assert!(state.pubkey.is_none());
	}

	#[tokio::test]
	async fn test_connect_fails_without_wallet() {
		let wallet = LocalSolanaWallet::new(None);
		let err = wallet.connect().await.unwrap_err();
		assert!(matches!(err, WalletError::ConnectionFailed(_)));
		assert!(!wallet.snapshot().connected);
	}
}
