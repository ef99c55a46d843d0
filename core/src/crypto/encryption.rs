//! Symmetric encryption using AES-256-GCM

use aes_gcm::aead::{Aead, Payload};
use aes_gcm::Nonce as GcmNonce;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::constants::{NONCE_LEN, TAG_LEN};
use crate::crypto::derivation::SymmetricKey;
use crate::{Error, Result};

/// 96-bit AES-GCM nonce. Must never repeat under the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nonce(#[serde(with = "crate::crypto::serde_utils::base64_array")] [u8; NONCE_LEN]);

impl Nonce {
    /// Draw a fresh nonce from the operating system's random source
    pub fn generate() -> Result<Self> {
        Self::generate_with_rng(&mut OsRng)
    }

    pub fn generate_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut bytes = [0u8; NONCE_LEN];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    pub fn from_bytes(bytes: [u8; NONCE_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; NONCE_LEN] {
        &self.0
    }
}

impl SymmetricKey {
    /// Encrypt with the given nonce; the [`TAG_LEN`]-byte tag is appended
    pub fn encrypt(&self, plaintext: &[u8], nonce: &Nonce) -> Result<Vec<u8>> {
        self.encrypt_with_aad(plaintext, &[], nonce)
    }

    /// Decrypt and verify a ciphertext produced by [`SymmetricKey::encrypt`]
    pub fn decrypt(&self, ciphertext: &[u8], nonce: &Nonce) -> Result<Vec<u8>> {
        self.decrypt_with_aad(ciphertext, &[], nonce)
    }

    /// Encrypt, authenticating `aad` alongside the plaintext
    pub fn encrypt_with_aad(&self, plaintext: &[u8], aad: &[u8], nonce: &Nonce) -> Result<Vec<u8>> {
        self.cipher
            .encrypt(
                GcmNonce::from_slice(nonce.as_bytes()),
                Payload { msg: plaintext, aad },
            )
            .map_err(|_| Error::Encryption)
    }

    /// Decrypt, requiring the same `aad` that was used to encrypt.
    ///
    /// Every failure is reported as `Authentication` with no further detail.
    pub fn decrypt_with_aad(
        &self,
        ciphertext: &[u8],
        aad: &[u8],
        nonce: &Nonce,
    ) -> Result<Vec<u8>> {
        if ciphertext.len() < TAG_LEN {
            tracing::debug!("ciphertext shorter than the authentication tag");
            return Err(Error::Authentication);
        }
        self.cipher
            .decrypt(
                GcmNonce::from_slice(nonce.as_bytes()),
                Payload { msg: ciphertext, aad },
            )
            .map_err(|_| {
                tracing::debug!("ciphertext failed authentication");
                Error::Authentication
            })
    }

    pub fn encrypt_text(&self, text: &str, nonce: &Nonce) -> Result<Vec<u8>> {
        self.encrypt(text.as_bytes(), nonce)
    }

    pub fn decrypt_text(&self, ciphertext: &[u8], nonce: &Nonce) -> Result<String> {
        let plaintext = self.decrypt(ciphertext, nonce)?;
        String::from_utf8(plaintext).map_err(|e| Error::Encoding(e.to_string()))
    }

    /// Encrypt data with a random nonce
    pub fn seal(&self, plaintext: &[u8]) -> Result<EncryptedPayload> {
        let nonce = Nonce::generate()?;
        let ciphertext = self.encrypt(plaintext, &nonce)?;
        Ok(EncryptedPayload { nonce, ciphertext })
    }

    /// Decrypt an encrypted payload
    pub fn open(&self, payload: &EncryptedPayload) -> Result<Vec<u8>> {
        self.decrypt(&payload.ciphertext, &payload.nonce)
    }
}

/// Encrypted data with its nonce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedPayload {
    pub nonce: Nonce,
    #[serde(with = "crate::crypto::serde_utils::base64_bytes")]
    pub ciphertext: Vec<u8>,
}
