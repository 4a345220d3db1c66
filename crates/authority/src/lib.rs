pub mod authority;
pub mod error;
pub mod server;
pub mod signing;

pub use authority::{SignedTx, SigningAuthority, TxId};
pub use error::AuthorityError;
pub use server::{AppState, router, run};
pub use signing::{RecoverableSecp256k1Signer, Secp256k1Signer, TxSigner};
