//! Concrete wallet provider implementations.

pub mod evm;
pub mod solana;

pub use evm::{InjectedEvmWallet, LocalSigner};
pub use solana::LocalSolanaWallet;
