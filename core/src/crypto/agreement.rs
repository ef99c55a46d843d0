//! Diffie-Hellman key agreement over a configured curve

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::constants::FINGERPRINT_LEN;
use crate::crypto::curve::{Curve, X25519};
use crate::crypto::derivation::{derive_symmetric_key, SymmetricKey};
use crate::Result;

/// Key agreement bound to one curve provider
#[derive(Debug, Clone, Default)]
pub struct KeyAgreement<C: Curve> {
    curve: C,
}

impl KeyAgreement<X25519> {
    /// Key agreement on Curve25519
    pub fn x25519() -> Self {
        Self::new(X25519)
    }
}

impl<C: Curve> KeyAgreement<C> {
    pub fn new(curve: C) -> Self {
        Self { curve }
    }

    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// Generate a new key pair from the operating system's random source
    pub fn generate_key_pair(&self) -> Result<KeyPair<C>> {
        self.generate_key_pair_with_rng(&mut OsRng)
    }

    /// Generate a new key pair from the given random source.
    ///
    /// A failing source is reported as `RandomSourceUnavailable`; no retry
    /// is attempted.
    pub fn generate_key_pair_with_rng<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<KeyPair<C>> {
        let secret = self.curve.random_scalar(rng)?;
        let public = self.public_key(&secret)?;
        tracing::debug!(
            curve = %self.curve.kind(),
            fingerprint = %self.fingerprint(&public),
            "generated key pair"
        );
        Ok(KeyPair {
            curve: self.curve.clone(),
            secret,
            public,
        })
    }

    /// Rebuild a key pair from an encoded private scalar
    pub fn key_pair_from_secret_bytes(&self, bytes: &[u8]) -> Result<KeyPair<C>> {
        let secret = self.curve.decode_scalar(bytes)?;
        let public = self.public_key(&secret)?;
        Ok(KeyPair {
            curve: self.curve.clone(),
            secret,
            public,
        })
    }

    /// Multiply `point` by `scalar`.
    ///
    /// With the base point this yields a public key, with a peer's public
    /// point a shared secret, and applied repeatedly a multi-party secret.
    pub fn scalar_multiply(&self, point: &C::Point, scalar: &C::Scalar) -> Result<C::Point> {
        self.curve.multiply(point, scalar)
    }

    /// Public point for a private scalar
    pub fn public_key(&self, scalar: &C::Scalar) -> Result<C::Point> {
        self.scalar_multiply(&self.curve.base_point(), scalar)
    }

    pub fn encode_point(&self, point: &C::Point) -> Vec<u8> {
        self.curve.encode_point(point)
    }

    pub fn decode_point(&self, bytes: &[u8]) -> Result<C::Point> {
        self.curve.decode_point(bytes)
    }

    /// Derive the AES-256-GCM key for a shared point on this curve
    pub fn derive_symmetric_key(&self, shared: &C::Point) -> Result<SymmetricKey> {
        derive_symmetric_key(&self.curve, shared)
    }

    /// Get a human-readable fingerprint (first 8 bytes of SHA256, base64)
    pub fn fingerprint(&self, point: &C::Point) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.curve.encode_point(point));
        let hash = hasher.finalize();
        BASE64.encode(&hash[..FINGERPRINT_LEN])
    }
}

/// A private scalar and its public point
#[derive(Clone)]
pub struct KeyPair<C: Curve> {
    curve: C,
    secret: C::Scalar,
    public: C::Point,
}

impl<C: Curve> std::fmt::Debug for KeyPair<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("curve", &self.curve.kind())
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

impl<C: Curve> KeyPair<C> {
    pub fn public(&self) -> &C::Point {
        &self.public
    }

    pub fn secret(&self) -> &C::Scalar {
        &self.secret
    }

    /// Export the private scalar in the curve's encoding
    pub fn secret_bytes(&self) -> Zeroizing<Vec<u8>> {
        self.curve.encode_scalar(&self.secret)
    }

    /// Shared point with a peer: `their_public * self.secret`
    pub fn diffie_hellman(&self, their_public: &C::Point) -> Result<C::Point> {
        self.curve.multiply(their_public, &self.secret)
    }

    /// Perform the agreement and derive the symmetric key in one step
    pub fn derive_shared_key(&self, their_public: &C::Point) -> Result<SymmetricKey> {
        let shared = self.diffie_hellman(their_public)?;
        derive_symmetric_key(&self.curve, &shared)
    }
}
