use anyhow::{Result, bail};
use k256::ecdsa::{SigningKey, signature::hazmat::PrehashSigner};
use sha2::{Digest, Sha256};

use super::signer::TxSigner;

/// ECDSA signer using the secp256k1 curve, producing compact 64-byte
/// signatures.
///
/// Production deployments load a raw 32-byte private key via
/// [`from_hex_key`](Self::from_hex_key); [`from_seed`](Self::from_seed)
/// derives the key as the SHA-256 hash of a seed string and is meant for
/// development and tests.
#[derive(Debug)]
pub struct Secp256k1Signer {
    signing_key: SigningKey,
}

impl Secp256k1Signer {
    /// Parse a `0x`-prefixed (or bare) 64-hex-digit private key.
    ///
    /// Error messages never echo the key material.
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

impl TxSigner for Secp256k1Signer {
    fn sign_digest(&self, digest: &[u8]) -> Result<Vec<u8>> {
        let (signature, _): (k256::ecdsa::Signature, _) = self
            .signing_key
            .sign_prehash(digest)
            .map_err(|e| anyhow::anyhow!("secp256k1 sign_prehash failed: {e}"))?;
        Ok(signature.to_bytes().to_vec())
    }

    fn public_key_bytes(&self) -> Vec<u8> {
        self.signing_key
            .verifying_key()
            .to_encoded_point(true)
            .as_bytes()
            .to_vec()
    }

    fn algorithm(&self) -> &str {
        "secp256k1"
    }
}

pub(super) fn signing_key_from_hex(key_hex: &str) -> Result<SigningKey> {
    let digits = key_hex.strip_prefix("0x").unwrap_or(key_hex);
    let bytes = match hex::decode(digits) {
        Ok(bytes) => bytes,
        Err(_) => bail!("key is not valid hex"),
    };
    if bytes.len() != 32 {
        bail!("expected a 32-byte key, got {} bytes", bytes.len());
    }
    SigningKey::from_slice(&bytes).map_err(|_| anyhow::anyhow!("key is not a valid secp256k1 scalar"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::ecdsa::{Signature, VerifyingKey, signature::hazmat::PrehashVerifier};

    #[test]
    fn deterministic_signing() {
        let signer = Secp256k1Signer::from_seed("test-seed").unwrap();
        let digest = Sha256::digest(b"hello");
        let sig1 = signer.sign_digest(&digest).unwrap();
        let sig2 = signer.sign_digest(&digest).unwrap();
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn different_seeds_produce_different_keys() {
        let signer_a = Secp256k1Signer::from_seed("seed-a").unwrap();
        let signer_b = Secp256k1Signer::from_seed("seed-b").unwrap();
        assert_ne!(signer_a.public_key_bytes(), signer_b.public_key_bytes());
    }

    #[test]
    fn signature_is_64_bytes() {
        let signer = Secp256k1Signer::from_seed("test-seed").unwrap();
        let digest = Sha256::digest(b"data");
        let sig = signer.sign_digest(&digest).unwrap();
        assert_eq!(sig.len(), 64);
    }

    #[test]
    fn public_key_is_33_bytes_compressed() {
        let signer = Secp256k1Signer::from_seed("test-seed").unwrap();
        assert_eq!(signer.public_key_bytes().len(), 33);
    }

    #[test]
    fn signature_verifies_against_public_key() {
        let signer = Secp256k1Signer::from_seed("verify-test").unwrap();
        let digest = Sha256::digest(b"verify me");
        let sig_bytes = signer.sign_digest(&digest).unwrap();

        let signature = Signature::from_slice(&sig_bytes).unwrap();
        let verifying_key = VerifyingKey::from_sec1_bytes(&signer.public_key_bytes()).unwrap();
        verifying_key.verify_prehash(&digest, &signature).unwrap();
    }

    #[test]
    fn signature_does_not_verify_against_other_digest() {
        let signer = Secp256k1Signer::from_seed("verify-test").unwrap();
        let digest = Sha256::digest(b"signed message");
        let other = Sha256::digest(b"different message");
        let sig_bytes = signer.sign_digest(&digest).unwrap();

        let signature = Signature::from_slice(&sig_bytes).unwrap();
        let verifying_key = VerifyingKey::from_sec1_bytes(&signer.public_key_bytes()).unwrap();
        assert!(verifying_key.verify_prehash(&other, &signature).is_err());
    }

    #[test]
    fn from_hex_key_accepts_prefixed_and_bare() {
        let key = "1111111111111111111111111111111111111111111111111111111111111111";
        let prefixed = Secp256k1Signer::from_hex_key(&format!("0x{key}")).unwrap();
        let bare = Secp256k1Signer::from_hex_key(key).unwrap();
        assert_eq!(prefixed.public_key_bytes(), bare.public_key_bytes());
    }

    #[test]
    fn from_hex_key_rejects_wrong_length() {
        let err = Secp256k1Signer::from_hex_key("0xabcd").unwrap_err();
        assert!(err.to_string().contains("32-byte"));
    }

    #[test]
    fn from_hex_key_rejects_non_hex() {
        assert!(Secp256k1Signer::from_hex_key(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn from_hex_key_rejects_zero_scalar() {
        assert!(Secp256k1Signer::from_hex_key(&"00".repeat(32)).is_err());
    }

    #[test]
    fn from_hex_key_errors_do_not_echo_key() {
        let key = "abcd";
        let err = Secp256k1Signer::from_hex_key(key).unwrap_err();
        assert!(!err.to_string().contains(key));
    }

    #[test]
    fn algorithm_is_secp256k1() {
        let signer = Secp256k1Signer::from_seed("test-seed").unwrap();
        assert_eq!(signer.algorithm(), "secp256k1");
    }
}
