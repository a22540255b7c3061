//! Chain identity types.
//!
//! A [`Chain`] is a logical chain name as callers refer to it; a [`ChainId`]
//! is the numeric identifier an EVM wallet reports for its active network.
//! The two are related through [`Chain::expected_chain_id`], which pins each
//! EVM-family chain to the test network the platform deploys to.

use crate::errors::WalletError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric EVM network identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(pub u64);

impl ChainId {
	pub const SEPOLIA: Self = Self(11155111);
	pub const BSC_TESTNET: Self = Self(97);
	pub const BASE_SEPOLIA: Self = Self(84532);
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for ChainId {
	type Err = std::num::ParseIntError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		Ok(ChainId(s.parse()?))
	}
}

/// Wallet ecosystem a chain belongs to.
///
/// Exhaustive: adding a third ecosystem forces every dispatch site to be
/// updated at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainFamily {
	Evm,
	Solana,
}

/// Logical chain names recognized by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
	Ethereum,
	Bsc,
	Base,
	Solana,
}

impl Chain {
	pub const ALL: [Chain; 4] = [Chain::Ethereum, Chain::Bsc, Chain::Base, Chain::Solana];

	pub fn name(&self) -> &'static str {
		match self {
			Chain::Ethereum => "ethereum",
			Chain::Bsc => "bsc",
			Chain::Base => "base",
			Chain::Solana => "solana",
		}
	}

	pub fn family(&self) -> ChainFamily {
		match self {
			Chain::Ethereum | Chain::Bsc | Chain::Base => ChainFamily::Evm,
			Chain::Solana => ChainFamily::Solana,
		}
	}

	/// Network id an EVM wallet must report for this chain to be usable.
	///
	/// `None` for Solana, whose cluster is fixed and not identified by a
	/// numeric id.
	pub fn expected_chain_id(&self) -> Option<ChainId> {
		match self {
			Chain::Ethereum => Some(ChainId::SEPOLIA),
			Chain::Bsc => Some(ChainId::BSC_TESTNET),
			Chain::Base => Some(ChainId::BASE_SEPOLIA),
			Chain::Solana => None,
		}
	}
}

impl fmt::Display for Chain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Chain {
	type Err = WalletError;

	/// Case-insensitive.
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"ethereum" => Ok(Chain::Ethereum),
			"bsc" => Ok(Chain::Bsc),
			"base" => Ok(Chain::Base),
			"solana" => Ok(Chain::Solana),
			other => Err(WalletError::UnknownChain(other.to_string())),
		}
	}
}
