use std::sync::Arc;

use clap::{Parser, ValueEnum};
use signing_authority::{
    AppState, RecoverableSecp256k1Signer, Secp256k1Signer, SigningAuthority, TxSigner, run,
};
use tracing::warn;

#[derive(Debug, Clone, ValueEnum)]
enum SigningAlgorithm {
    Secp256k1,
    RecoverableSecp256k1,
}

#[derive(Parser)]
struct Args {
    #[clap(long, default_value = "127.0.0.1")]
    host: Option<String>,
    #[clap(long, default_value = "3000")]
    port: Option<u16>,
    /// 0x-prefixed 32-byte hex private key.
    #[clap(long, env = "SERVER_KEY", hide_env_values = true)]
    server_key: Option<String>,
    /// Dev alternative to --server-key: the SHA-256 hash of this seed
    /// becomes the key. Ignored when --server-key is set.
    #[clap(long, env = "SIGNING_KEY_SEED", hide_env_values = true)]
    key_seed: Option<String>,
    #[clap(long, env = "SIGNING_ALGORITHM", default_value = "secp256k1")]
    signing_algorithm: SigningAlgorithm,
}

enum KeySource {
    Hex(String),
    Seed(String),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let source = args
        .server_key
        .map(KeySource::Hex)
        .or(args.key_seed.map(KeySource::Seed));

    let signer = source.map(|source| {
        let signer: Arc<dyn TxSigner> = match args.signing_algorithm {
            SigningAlgorithm::Secp256k1 => Arc::new(
                match source {
                    KeySource::Hex(key) => Secp256k1Signer::from_hex_key(&key),
                    KeySource::Seed(seed) => Secp256k1Signer::from_seed(&seed),
                }
                .expect("failed to create secp256k1 signer"),
            ),
            SigningAlgorithm::RecoverableSecp256k1 => Arc::new(
                match source {
                    KeySource::Hex(key) => RecoverableSecp256k1Signer::from_hex_key(&key),
                    KeySource::Seed(seed) => RecoverableSecp256k1Signer::from_seed(&seed),
                }
                .expect("failed to create recoverable secp256k1 signer"),
            ),
        };
        signer
    });

    if signer.is_none() {
        warn!("no SERVER_KEY or SIGNING_KEY_SEED set; every sign request will be rejected");
    }

    let state = AppState {
        authority: signer.map(|signer| Arc::new(SigningAuthority::new(signer))),
    };

    run(args.host.unwrap(), args.port.unwrap(), state)
        .await
        .unwrap();
}
