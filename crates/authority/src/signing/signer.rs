/// Trait for signing transaction domain hashes.
///
/// Implementations are sync — signing is CPU-bound.
/// For async backends (e.g. KMS), use `spawn_blocking`.
pub trait TxSigner: Send + Sync {
    /// Sign a prehashed message. Returns raw signature bytes.
    fn sign_digest(&self, digest: &[u8]) -> anyhow::Result<Vec<u8>>;

    /// Encoded public key bytes (e.g. 33 bytes compressed for secp256k1).
    fn public_key_bytes(&self) -> Vec<u8>;

    /// Algorithm identifier string (e.g. "secp256k1").
    fn algorithm(&self) -> &str;
}
