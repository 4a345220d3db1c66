use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::{any, get},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::authority::{SigningAuthority, TxId};
use crate::error::AuthorityError;

/// Shared request-handler state. The authority is `None` when the process
/// started without a signing key; every sign request is then rejected as
/// misconfigured.
#[derive(Clone)]
pub struct AppState {
    pub authority: Option<Arc<SigningAuthority>>,
}

#[derive(Debug, Deserialize)]
struct SignRequest {
    #[serde(rename = "txId")]
    tx_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct SignResponse {
    signature: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/healthcheck",
            get(|| async move { (StatusCode::OK, "Ok").into_response() }),
        )
        // Registered with `any` so the method guard stays inside the
        // handler and non-POST requests get the taxonomy's 405.
        .route("/sign", any(sign_handler))
        .with_state(state)
}

pub async fn run(host: String, port: u16, state: AppState) -> Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "signing authority listening");

    axum::serve(
        listener,
        router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn sign_handler(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Json<SignResponse>, AuthorityError> {
    if method != Method::POST {
        return Err(AuthorityError::MethodNotAllowed(method.to_string()));
    }

    let Some(authority) = state.authority.as_ref() else {
        warn!("rejecting sign request: no signing key configured");
        return Err(AuthorityError::Misconfigured);
    };

    let txid = parse_sign_request(&body)?;

    let signed = match authority.sign(&txid) {
        Ok(signed) => signed,
        Err(err) => {
            // Key material never reaches the error chain, so the debug
            // rendering is safe to log.
            error!(%txid, ?err, "signing stage failed");
            return Err(err);
        }
    };

    info!(%txid, algorithm = signed.algorithm, "signed transaction id");

    Ok(Json(SignResponse {
        signature: signed.signature_hex(),
    }))
}

/// Body parsing is done by hand rather than with the `Json` extractor so a
/// missing or malformed body surfaces as the taxonomy's `InvalidRequest`
/// instead of a framework rejection.
fn parse_sign_request(body: &[u8]) -> Result<TxId, AuthorityError> {
    if body.is_empty() {
        return Err(AuthorityError::InvalidRequest("missing txId".into()));
    }
    let request: SignRequest = serde_json::from_slice(body)
        .map_err(|_| AuthorityError::InvalidRequest("body must be a JSON object".into()))?;
    let tx_id = request
        .tx_id
        .filter(|tx_id| !tx_id.is_empty())
        .ok_or_else(|| AuthorityError::InvalidRequest("missing txId".into()))?;
    tx_id.parse()
}
