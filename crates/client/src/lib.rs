use anyhow::{Context, Result, bail};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SignResponse {
    signature: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Post a txId to a running signing authority and return the signature.
pub async fn run(host: String, port: u16, tx_id: String) -> Result<String> {
    let client = reqwest::Client::new();
    let url = format!("http://{host}:{port}/sign");

    let response = client
        .post(&url)
        .json(&serde_json::json!({ "txId": tx_id }))
        .send()
        .await
        .context("sending sign request")?;

    let status = response.status();
    if status.is_success() {
        let body: SignResponse = response.json().await.context("decoding sign response")?;
        Ok(body.signature)
    } else {
        let body: ErrorResponse = response.json().await.unwrap_or(ErrorResponse {
            error: status.to_string(),
        });
        bail!("sign request rejected ({status}): {}", body.error);
    }
}
