//! Curve providers for Diffie-Hellman key agreement
//!
//! The arithmetic itself lives in `x25519-dalek` and `p256`; this module only
//! adapts both crates to one [`Curve`] contract so the agreement code can be
//! configured with either.

use curve25519_dalek::montgomery::MontgomeryPoint;
use p256::elliptic_curve::group::Group;
use p256::elliptic_curve::point::AffineCoordinates;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use x25519_dalek::{PublicKey as X25519Public, StaticSecret, X25519_BASEPOINT_BYTES};
use zeroize::{ZeroizeOnDrop, Zeroizing};

use crate::constants::MAX_SCALAR_ATTEMPTS;
use crate::{Error, Result};

/// Elliptic-curve arithmetic provider.
///
/// Implementations must multiply in constant time with respect to the
/// scalar and must reject any multiplication that lands on the identity.
pub trait Curve: Clone + Send + Sync + 'static {
    /// Private scalar, wiped from memory when dropped
    type Scalar: Clone + Send + Sync + ZeroizeOnDrop;
    /// Public key or shared secret
    type Point: Clone + PartialEq + Eq + std::fmt::Debug + Send + Sync;

    /// Runtime name of this curve
    fn kind(&self) -> CurveKind;

    /// Draw a uniformly random, valid, non-zero scalar
    fn random_scalar<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<Self::Scalar>;

    /// The generator of the curve's prime-order group
    fn base_point(&self) -> Self::Point;

    /// Compute `scalar * point`
    fn multiply(&self, point: &Self::Point, scalar: &Self::Scalar) -> Result<Self::Point>;

    /// Fixed-width encoding of the point's x-coordinate
    fn x_coordinate(&self, point: &Self::Point) -> Zeroizing<Vec<u8>>;

    fn encode_point(&self, point: &Self::Point) -> Vec<u8>;

    fn decode_point(&self, bytes: &[u8]) -> Result<Self::Point>;

    fn encode_scalar(&self, scalar: &Self::Scalar) -> Zeroizing<Vec<u8>>;

    fn decode_scalar(&self, bytes: &[u8]) -> Result<Self::Scalar>;
}

/// Names a curve provider at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    #[default]
    X25519,
    P256,
}

impl std::fmt::Display for CurveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveKind::X25519 => write!(f, "x25519"),
            CurveKind::P256 => write!(f, "p256"),
        }
    }
}

impl std::str::FromStr for CurveKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "x25519" | "curve25519" => Ok(CurveKind::X25519),
            "p256" | "p-256" | "secp256r1" => Ok(CurveKind::P256),
            other => Err(Error::Encoding(format!("unknown curve: {}", other))),
        }
    }
}

/// Curve25519 in Montgomery form (RFC 7748).
///
/// Points are 32-byte little-endian u-coordinates and scalars are clamped
/// at multiplication time, so any 32 bytes form a valid scalar.
///
/// RFC 7748 would accept u-coordinates on the quadratic twist; these are
/// rejected here with `InvalidPoint`, both when decoding and before
/// multiplying. The curve has cofactor 8: a multiplication that yields the
/// all-zero u-coordinate means the input was a small-order point and is
/// also rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct X25519;

impl Curve for X25519 {
    type Scalar = StaticSecret;
    type Point = X25519Public;

    fn kind(&self) -> CurveKind {
        CurveKind::X25519
    }

    fn random_scalar<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<StaticSecret> {
        let mut bytes = Zeroizing::new([0u8; 32]);
        rng.try_fill_bytes(&mut bytes[..])?;
        Ok(StaticSecret::from(*bytes))
    }

    fn base_point(&self) -> X25519Public {
        X25519Public::from(X25519_BASEPOINT_BYTES)
    }

    fn multiply(&self, point: &X25519Public, scalar: &StaticSecret) -> Result<X25519Public> {
        ensure_on_curve25519(point.as_bytes())?;
        let shared = scalar.diffie_hellman(point);
        if !shared.was_contributory() {
            return Err(Error::InvalidPoint("small-order point".to_string()));
        }
        Ok(X25519Public::from(shared.to_bytes()))
    }

    fn x_coordinate(&self, point: &X25519Public) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(point.as_bytes().to_vec())
    }

    fn encode_point(&self, point: &X25519Public) -> Vec<u8> {
        point.as_bytes().to_vec()
    }

    fn decode_point(&self, bytes: &[u8]) -> Result<X25519Public> {
        let array: [u8; 32] = bytes.try_into().map_err(|_| {
            Error::InvalidPoint(format!("expected 32 bytes, got {}", bytes.len()))
        })?;
        ensure_on_curve25519(&array)?;
        Ok(X25519Public::from(array))
    }

    fn encode_scalar(&self, scalar: &StaticSecret) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(scalar.to_bytes().to_vec())
    }

    fn decode_scalar(&self, bytes: &[u8]) -> Result<StaticSecret> {
        let array: [u8; 32] = bytes.try_into().map_err(|_| {
            Error::InvalidScalar(format!("expected 32 bytes, got {}", bytes.len()))
        })?;
        let array = Zeroizing::new(array);
        Ok(StaticSecret::from(*array))
    }
}

/// A u-coordinate lies on Curve25519 rather than its twist exactly when it
/// maps to an Edwards point.
fn ensure_on_curve25519(u: &[u8; 32]) -> Result<()> {
    if MontgomeryPoint(*u).to_edwards(0).is_none() {
        return Err(Error::InvalidPoint("u-coordinate is on the twist".to_string()));
    }
    Ok(())
}

/// NIST P-256 in short Weierstrass form.
///
/// Points encode as compressed SEC1 and decode from either SEC1 form.
/// Scalars are 32-byte big-endian integers in `[1, n-1]`. The x-coordinate
/// is the 32-byte big-endian affine x.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct P256;

impl Curve for P256 {
    type Scalar = p256::SecretKey;
    type Point = p256::AffinePoint;

    fn kind(&self) -> CurveKind {
        CurveKind::P256
    }

    fn random_scalar<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<p256::SecretKey> {
        let mut repr = Zeroizing::new([0u8; 32]);
        for _ in 0..MAX_SCALAR_ATTEMPTS {
            rng.try_fill_bytes(&mut repr[..])?;
            if let Ok(secret) =
                p256::SecretKey::from_bytes(&p256::FieldBytes::clone_from_slice(&repr[..]))
            {
                return Ok(secret);
            }
        }
        Err(Error::RandomSourceUnavailable(
            "no in-range scalar produced by random source".to_string(),
        ))
    }

    fn base_point(&self) -> p256::AffinePoint {
        p256::AffinePoint::GENERATOR
    }

    fn multiply(
        &self,
        point: &p256::AffinePoint,
        scalar: &p256::SecretKey,
    ) -> Result<p256::AffinePoint> {
        let k: p256::Scalar = *scalar.to_nonzero_scalar();
        let product = p256::ProjectivePoint::from(*point) * k;
        if bool::from(product.is_identity()) {
            return Err(Error::InvalidPoint("point at infinity".to_string()));
        }
        Ok(product.to_affine())
    }

    fn x_coordinate(&self, point: &p256::AffinePoint) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(point.x().to_vec())
    }

    fn encode_point(&self, point: &p256::AffinePoint) -> Vec<u8> {
        point.to_encoded_point(true).as_bytes().to_vec()
    }

    fn decode_point(&self, bytes: &[u8]) -> Result<p256::AffinePoint> {
        let public = p256::PublicKey::from_sec1_bytes(bytes)
            .map_err(|_| Error::InvalidPoint("not a SEC1 encoded P-256 point".to_string()))?;
        Ok(*public.as_affine())
    }

    fn encode_scalar(&self, scalar: &p256::SecretKey) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(scalar.to_bytes().to_vec())
    }

    fn decode_scalar(&self, bytes: &[u8]) -> Result<p256::SecretKey> {
        if bytes.len() != 32 {
            return Err(Error::InvalidScalar(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }
        p256::SecretKey::from_bytes(&p256::FieldBytes::clone_from_slice(bytes)).map_err(|_| {
            Error::InvalidScalar("scalar is zero or not below the group order".to_string())
        })
    }
}
