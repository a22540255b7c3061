//! HTTP API exposing the unified wallet view.

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::{IntoResponse, Json, Response},
	routing::{get, post},
	Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;
use wallet_core::MultiChainWallet;
use wallet_types::Chain;

/// Shared application state for the API server.
#[derive(Clone)]
pub struct AppState {
	pub wallet: Arc<MultiChainWallet>,
}

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/wallet", get(get_wallet))
		.route("/wallet/address/{chain}", get(get_address))
		.route("/wallet/supported/{chain}", get(get_supported))
		.route("/wallet/connect", post(connect))
		.route("/wallet/disconnect", post(disconnect))
		.with_state(state)
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive())
}

async fn health() -> Json<Value> {
	Json(json!({ "status": "ok" }))
}

async fn get_wallet(State(state): State<AppState>) -> Json<wallet_core::WalletView> {
	Json(state.wallet.view())
}

/// GET /wallet/address/{chain}
///
/// 400 for unrecognized chain names; 404 with a null address when the owning
/// ecosystem reports none.
async fn get_address(State(state): State<AppState>, Path(chain): Path<String>) -> Response {
	let chain: Chain = match chain.parse() {
		Ok(chain) => chain,
		Err(e) => {
			return (
				StatusCode::BAD_REQUEST,
				Json(json!({ "error": e.to_string() })),
			)
				.into_response()
		}
	};

	match state.wallet.address_for_chain(chain) {
		Some(address) => Json(json!({ "chain": chain, "address": address })).into_response(),
		None => (
			StatusCode::NOT_FOUND,
			Json(json!({ "chain": chain, "address": Value::Null })),
		)
			.into_response(),
	}
}

/// GET /wallet/supported/{chain}
///
/// Unknown chain names report unsupported, mirroring the adapter.
async fn get_supported(State(state): State<AppState>, Path(chain): Path<String>) -> Json<Value> {
	let supported = state.wallet.is_chain_supported_str(&chain);
	Json(json!({
		"chain": chain.to_ascii_lowercase(),
		"supported": supported,
	}))
}

async fn connect(State(state): State<AppState>) -> Response {
	match state.wallet.connect().await {
		Ok(()) => Json(state.wallet.view()).into_response(),
		Err(e) => {
			warn!("Wallet connection failed: {}", e);
			(
				StatusCode::BAD_GATEWAY,
				Json(json!({ "error": e.to_string() })),
			)
				.into_response()
		}
	}
}

async fn disconnect(State(state): State<AppState>) -> Response {
	match state.wallet.disconnect().await {
		Ok(()) => Json(state.wallet.view()).into_response(),
		Err(e) => {
			warn!("Wallet disconnect failed: {}", e);
			(
				StatusCode::BAD_GATEWAY,
				Json(json!({ "error": e.to_string() })),
			)
				.into_response()
		}
	}
}
