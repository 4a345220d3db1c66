use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::error::AuthorityError;
use crate::signing::TxSigner;

/// Length of a transaction identifier in bytes.
pub const TX_ID_LEN: usize = 32;

/// A 32-byte transaction identifier.
///
/// Parsing from a string is the only constructor from untrusted input and
/// accepts exactly `0x` followed by 64 hex digits (either case). Anything
/// else is an `InvalidRequest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxId([u8; TX_ID_LEN]);

impl TxId {
    pub fn as_bytes(&self) -> &[u8; TX_ID_LEN] {
        &self.0
    }
}

impl FromStr for TxId {
    type Err = AuthorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .ok_or_else(|| AuthorityError::InvalidRequest("txId must be 0x-prefixed".into()))?;
        if digits.len() != TX_ID_LEN * 2 {
            return Err(AuthorityError::InvalidRequest(format!(
                "txId must be {} hex digits, got {}",
                TX_ID_LEN * 2,
                digits.len()
            )));
        }
        let mut bytes = [0u8; TX_ID_LEN];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| {
            AuthorityError::InvalidRequest("txId contains non-hex characters".into())
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// A produced signature plus the metadata a caller needs to verify it.
#[derive(Debug, Clone)]
pub struct SignedTx {
    pub signature: Vec<u8>,
    pub public_key: Vec<u8>,
    pub algorithm: String,
}

impl SignedTx {
    /// Canonical wire form: `0x`-prefixed lowercase hex.
    pub fn signature_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.signature))
    }
}

/// Owns the signing key (through its signer) and turns validated transaction
/// identifiers into signatures.
///
/// Signing is a pure function of (key, txId): the authority holds no other
/// state, so one instance can be shared across request handlers without
/// locks.
pub struct SigningAuthority {
    signer: Arc<dyn TxSigner>,
}

impl SigningAuthority {
    pub fn new(signer: Arc<dyn TxSigner>) -> Self {
        Self { signer }
    }

    /// The message actually signed: SHA-256 over the raw txId bytes.
    /// The raw identifier is never signed directly.
    pub fn domain_hash(txid: &TxId) -> [u8; 32] {
        Sha256::digest(txid.as_bytes()).into()
    }

    pub fn sign(&self, txid: &TxId) -> Result<SignedTx, AuthorityError> {
        let digest = Self::domain_hash(txid);
        let signature = self
            .signer
            .sign_digest(&digest)
            .map_err(AuthorityError::Signing)?;
        Ok(SignedTx {
            signature,
            public_key: self.signer.public_key_bytes(),
            algorithm: self.signer.algorithm().to_string(),
        })
    }

    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.signer.public_key_bytes()
    }
}
