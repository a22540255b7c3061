use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wallet_config::{ConfigLoader, WalletConfig};
use wallet_core::{
	implementations::{InjectedEvmWallet, LocalSigner, LocalSolanaWallet},
	MultiChainWallet,
};
use wallet_types::{Address, ChainId, ConnectorId, Pubkey};

mod api;

#[derive(Parser)]
#[command(name = "launchpad-wallet")]
#[command(about = "Multi-chain wallet service", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	#[arg(short, long, value_name = "FILE", default_value = "config/local.toml")]
	config: PathBuf,

	#[arg(long, env = "WALLET_LOG_LEVEL", default_value = "info")]
	log_level: String,
}

#[derive(Subcommand)]
enum Commands {
	/// Start the wallet service
	Start,
	/// Validate the configuration file
	Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	setup_tracing(&cli.log_level)?;

	match cli.command {
		Some(Commands::Start) | None => start_service(cli).await,
		Some(Commands::Validate) => validate_config(cli).await,
	}
}

async fn start_service(cli: Cli) -> Result<()> {
	info!("Starting multi-chain wallet service");
	info!("Loading configuration from: {:?}", cli.config);

	let config = ConfigLoader::new()
		.with_file(&cli.config)
		.load()
		.await
		.context("Failed to load configuration")?;

	info!("Configuration loaded successfully");
	info!("Service name: {}", config.service.name);

	let wallet = build_wallet(&config).await?;

	let bind_address = format!("{}:{}", config.service.host, config.service.http_port);
	let listener = tokio::net::TcpListener::bind(&bind_address)
		.await
		.with_context(|| format!("Failed to bind {}", bind_address))?;

	info!("Wallet API listening on {}", bind_address);

	let app = api::router(api::AppState { wallet });

	axum::serve(listener, app)
		.with_graceful_shutdown(shutdown_signal())
		.await
		.context("HTTP server error")?;

	info!("Wallet service stopped");
	Ok(())
}

/// Wires the two providers from configuration and injects them into the
/// adapter.
async fn build_wallet(config: &WalletConfig) -> Result<Arc<MultiChainWallet>> {
	let evm = Arc::new(InjectedEvmWallet::new(ChainId(config.evm.chain_id)));

	if let Some(address) = &config.evm.address {
		let address = Address::from_str(address).context("Invalid EVM address")?;
		let connector = config.evm.connector.clone().map(ConnectorId::new);
		evm.set_account(address, connector);
	}

	if let Some(key) = &config.evm.private_key {
		let signer = LocalSigner::new(key).context("Invalid EVM private key")?;
		evm.set_signer(Arc::new(signer));
	}

	let pubkey = config
		.solana
		.pubkey
		.as_deref()
		.map(Pubkey::from_str)
		.transpose()
		.context("Invalid solana pubkey")?;
	let solana = Arc::new(LocalSolanaWallet::new(pubkey));

	let wallet = Arc::new(MultiChainWallet::new(evm, solana));

	if config.solana.auto_connect {
		wallet
			.connect()
			.await
			.context("Failed to auto-connect solana wallet")?;
	}

	Ok(wallet)
}

async fn validate_config(cli: Cli) -> Result<()> {
	info!("Validating configuration file: {:?}", cli.config);

	let config = ConfigLoader::new()
		.with_file(&cli.config)
		.load()
		.await
		.context("Failed to load configuration")?;

	info!("Configuration is valid");
	info!("Service name: {}", config.service.name);
	info!("HTTP port: {}", config.service.http_port);
	info!("EVM chain id: {}", config.evm.chain_id);
	info!(
		"EVM account: {}",
		config.evm.address.as_deref().unwrap_or("(none)")
	);
	info!(
		"Solana wallet: {}",
		config.solana.pubkey.as_deref().unwrap_or("(none)")
	);

	Ok(())
}

fn setup_tracing(log_level: &str) -> Result<()> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	tracing_subscriber::registry()
		.with(env_filter)
		.with(tracing_subscriber::fmt::layer())
		.init();

	Ok(())
}

async fn shutdown_signal() {
	let ctrl_c = async {
		signal::ctrl_c()
			.await
			.expect("failed to install Ctrl+C handler");
	};

	#[cfg(unix)]
	let terminate = async {
		signal::unix::signal(signal::unix::SignalKind::terminate())
			.expect("failed to install signal handler")
			.recv()
			.await;
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {},
		_ = terminate => {},
	}

	info!("Shutdown signal received, stopping service...");
}
