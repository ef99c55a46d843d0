//! Cryptographic building blocks
//!
//! - X25519 and NIST P-256 curve providers
//! - Diffie-Hellman key agreement over a configured curve
//! - AES-256-GCM keys derived from the shared point's x-coordinate

mod agreement;
mod curve;
mod derivation;
mod encryption;
pub mod serde_utils;

pub use agreement::{KeyAgreement, KeyPair};
pub use curve::{Curve, CurveKind, P256, X25519};
pub use derivation::{derive_symmetric_key, SymmetricKey};
pub use encryption::{EncryptedPayload, Nonce};
