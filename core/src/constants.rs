//! Centralized constants
//!
//! Sizes shared by the key agreement, key derivation and encryption code.

/// AES-256-GCM key size in bytes
pub const SYMMETRIC_KEY_LEN: usize = 32;

/// AES-GCM nonce size in bytes
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag size in bytes
pub const TAG_LEN: usize = 16;

/// Number of SHA-256 bytes kept in a public point fingerprint
pub const FINGERPRINT_LEN: usize = 8;

/// Upper bound on rejection-sampling attempts when drawing a scalar
pub const MAX_SCALAR_ATTEMPTS: usize = 64;
