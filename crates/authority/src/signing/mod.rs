mod recoverable;
mod secp256k1;
mod signer;

pub use recoverable::RecoverableSecp256k1Signer;
pub use secp256k1::Secp256k1Signer;
pub use signer::TxSigner;
