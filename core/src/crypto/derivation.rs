//! Symmetric key derivation from a shared curve point
//!
//! The key is the shared point's x-coordinate in the curve's fixed-width
//! encoding, taken as-is: 32 little-endian bytes for X25519 and 32
//! big-endian bytes for P-256. Nothing is hashed or re-encoded.

use aes_gcm::{aead::KeyInit, Aes256Gcm};

use crate::constants::SYMMETRIC_KEY_LEN;
use crate::crypto::curve::Curve;
use crate::{Error, Result};

/// AES-256-GCM key derived from a Diffie-Hellman shared point.
///
/// Only the cipher state is kept; the key bytes cannot be read back.
#[derive(Clone)]
pub struct SymmetricKey {
    pub(crate) cipher: Aes256Gcm,
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricKey").finish_non_exhaustive()
    }
}

impl SymmetricKey {
    /// Import raw key material, which must be exactly 32 bytes
    pub fn from_key_material(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SYMMETRIC_KEY_LEN {
            return Err(Error::KeyImport {
                expected: SYMMETRIC_KEY_LEN,
                actual: bytes.len(),
            });
        }
        let cipher = Aes256Gcm::new_from_slice(bytes).map_err(|_| Error::KeyImport {
            expected: SYMMETRIC_KEY_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self { cipher })
    }
}

/// Derive the symmetric key for a shared point on `curve`
pub fn derive_symmetric_key<C: Curve>(curve: &C, shared: &C::Point) -> Result<SymmetricKey> {
    let material = curve.x_coordinate(shared);
    tracing::trace!(curve = %curve.kind(), "deriving symmetric key from shared point");
    SymmetricKey::from_key_material(&material)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{KeyAgreement, Nonce, P256, X25519};

    fn check_deterministic<C: Curve>(agreement: KeyAgreement<C>) {
        let alice = agreement.generate_key_pair().unwrap();
        let bob = agreement.generate_key_pair().unwrap();
        let shared = alice.diffie_hellman(bob.public()).unwrap();

        let first = derive_symmetric_key(agreement.curve(), &shared).unwrap();
        let second = derive_symmetric_key(agreement.curve(), &shared).unwrap();

        let nonce = Nonce::generate().unwrap();
        let ciphertext = first.encrypt(b"derived twice", &nonce).unwrap();
        assert_eq!(second.decrypt(&ciphertext, &nonce).unwrap(), b"derived twice");
    }

    #[test]
    fn test_create_key_from_shared_secret() {
        let agreement = KeyAgreement::new(X25519);
        let alice = agreement.generate_key_pair().unwrap();
        let bob = agreement.generate_key_pair().unwrap();

        let shared = agreement.scalar_multiply(bob.public(), alice.secret()).unwrap();
        assert!(agreement.derive_symmetric_key(&shared).is_ok());
    }

    #[test]
    fn test_derivation_is_deterministic() {
        check_deterministic(KeyAgreement::new(X25519));
        check_deterministic(KeyAgreement::new(P256));
    }

    #[test]
    fn test_key_material_is_raw_x_coordinate() {
        let agreement = KeyAgreement::new(P256);
        let alice = agreement.generate_key_pair().unwrap();
        let bob = agreement.generate_key_pair().unwrap();
        let shared = alice.diffie_hellman(bob.public()).unwrap();

        let derived = agreement.derive_symmetric_key(&shared).unwrap();
        let imported =
            SymmetricKey::from_key_material(&agreement.curve().x_coordinate(&shared)).unwrap();

        let nonce = Nonce::from_bytes([7u8; 12]);
        assert_eq!(
            derived.encrypt(b"same key", &nonce).unwrap(),
            imported.encrypt(b"same key", &nonce).unwrap()
        );
    }

    #[test]
    fn test_different_shared_points_give_different_keys() {
        let agreement = KeyAgreement::new(X25519);
        let alice = agreement.generate_key_pair().unwrap();
        let bob = agreement.generate_key_pair().unwrap();
        let carol = agreement.generate_key_pair().unwrap();

        let ab = alice.derive_shared_key(bob.public()).unwrap();
        let ac = alice.derive_shared_key(carol.public()).unwrap();

        let nonce = Nonce::generate().unwrap();
        let ciphertext = ab.encrypt(b"for bob only", &nonce).unwrap();
        assert!(matches!(ac.decrypt(&ciphertext, &nonce), Err(Error::Authentication)));
    }

    #[test]
    fn test_wrong_key_length_is_rejected() {
        for len in [0, 16, 31, 33, 48] {
            let material = vec![1u8; len];
            match SymmetricKey::from_key_material(&material) {
                Err(Error::KeyImport { expected, actual }) => {
                    assert_eq!(expected, 32);
                    assert_eq!(actual, len);
                }
                other => panic!("expected KeyImport error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_debug_does_not_print_key() {
        let key = SymmetricKey::from_key_material(&[0xabu8; 32]).unwrap();
        assert_eq!(format!("{:?}", key), "SymmetricKey { .. }");
    }
}
