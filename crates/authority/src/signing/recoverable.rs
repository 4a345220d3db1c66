use anyhow::Result;
use k256::ecdsa::{RecoveryId, SigningKey, signature::hazmat::PrehashSigner};
use sha2::{Digest, Sha256};

use super::secp256k1::signing_key_from_hex;
use super::signer::TxSigner;

/// ECDSA signer using the secp256k1 curve with recoverable signatures
/// (65 bytes: r + s + v).
///
/// The recovery ID (`v`) lets on-chain verifiers recover the signer's
/// address from the signature without the public key.
pub struct RecoverableSecp256k1Signer {
    signing_key: SigningKey,
}

impl RecoverableSecp256k1Signer {
    pub fn from_hex_key(key_hex: &str) -> Result<Self> {
        let signing_key = signing_key_from_hex(key_hex)?;
        Ok(Self { signing_key })
    }

    pub fn from_seed(seed: &str) -> Result<Self> {
        let hash = Sha256::digest(seed.as_bytes());
        let signing_key = SigningKey::from_bytes((&hash).into())
            .map_err(|e| anyhow::anyhow!("invalid seed: {e}"))?;
        Ok(Self { signing_key })
    }
}

impl TxSigner for RecoverableSecp256k1Signer {
    fn sign_digest(&self, digest: &[u8]) -> Result<Vec<u8>> {
        let (signature, recovery_id): (k256::ecdsa::Signature, RecoveryId) = self
            .signing_key
            .sign_prehash(digest)
            .map_err(|e| anyhow::anyhow!("recoverable secp256k1 sign_prehash failed: {e}"))?;

        // 65-byte signature: 32 bytes r + 32 bytes s + 1 byte v
        let mut sig_bytes = signature.to_bytes().to_vec();
        sig_bytes.push(recovery_id.to_byte());
        Ok(sig_bytes)
    }

    fn public_key_bytes(&self) -> Vec<u8> {
        // Uncompressed (65 bytes) — standard for address derivation
        self.signing_key
            .verifying_key()
            .to_encoded_point(false)
            .as_bytes()
            .to_vec()
    }

    fn algorithm(&self) -> &str {
        "recoverable-secp256k1"
    }
}
