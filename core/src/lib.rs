//! Curvecipher Core - elliptic-curve key agreement and symmetric encryption
//!
//! Parties generate key pairs on a configured curve, exchange public points,
//! and multiply the peer's point by their own scalar to reach a common shared
//! point. The x-coordinate of that point becomes an AES-256-GCM key.
//!
//! ```no_run
//! use curvecipher_core::{KeyAgreement, Nonce, X25519};
//!
//! # fn main() -> curvecipher_core::Result<()> {
//! let agreement = KeyAgreement::new(X25519);
//! let alice = agreement.generate_key_pair()?;
//! let bob = agreement.generate_key_pair()?;
//!
//! let alice_key = alice.derive_shared_key(bob.public())?;
//! let bob_key = bob.derive_shared_key(alice.public())?;
//!
//! let nonce = Nonce::generate()?;
//! let ciphertext = alice_key.encrypt(b"hello", &nonce)?;
//! assert_eq!(bob_key.decrypt(&ciphertext, &nonce)?, b"hello");
//! # Ok(())
//! # }
//! ```
//!
//! Exchanged points are not authenticated. Callers that move public points
//! over an untrusted channel must authenticate them by other means.

pub mod constants;
pub mod crypto;

mod error;

pub use error::{Error, Result};

// Re-export key types for convenience
pub use crypto::{
    derive_symmetric_key, Curve, CurveKind, EncryptedPayload, KeyAgreement, KeyPair, Nonce,
    SymmetricKey, P256, X25519,
};
