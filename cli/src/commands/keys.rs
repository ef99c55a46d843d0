//! Key generation and message encryption commands.

use anyhow::Context;
use curvecipher_core::crypto::serde_utils::{decode_base64, encode_base64};
use curvecipher_core::{Curve, CurveKind, EncryptedPayload, KeyAgreement, KeyPair};
use serde::Serialize;

/// Key pair as printed by `keygen`
#[derive(Serialize)]
struct KeyPairOutput {
    curve: CurveKind,
    secret: String,
    public: String,
    fingerprint: String,
}

/// Generate a key pair and print it as JSON.
pub fn generate_keys<C: Curve>(agreement: &KeyAgreement<C>) -> anyhow::Result<()> {
    let pair = agreement.generate_key_pair()?;
    let output = KeyPairOutput {
        curve: agreement.curve().kind(),
        secret: encode_base64(&pair.secret_bytes()),
        public: encode_base64(&agreement.encode_point(pair.public())),
        fingerprint: agreement.fingerprint(pair.public()),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Encrypt `message` under the key shared with `peer` and print the payload.
pub fn encrypt_message<C: Curve>(
    agreement: &KeyAgreement<C>,
    secret: &str,
    peer: &str,
    message: &str,
) -> anyhow::Result<()> {
    let (pair, peer_public) = load_keys(agreement, secret, peer)?;
    let key = pair.derive_shared_key(&peer_public)?;
    let payload = key.seal(message.as_bytes())?;
    println!("{}", serde_json::to_string(&payload)?);
    Ok(())
}

/// Decrypt a payload from `peer` and print the text.
pub fn decrypt_message<C: Curve>(
    agreement: &KeyAgreement<C>,
    secret: &str,
    peer: &str,
    payload: &str,
) -> anyhow::Result<()> {
    let (pair, peer_public) = load_keys(agreement, secret, peer)?;
    let payload: EncryptedPayload =
        serde_json::from_str(payload).context("payload is not valid JSON")?;
    let key = pair.derive_shared_key(&peer_public)?;
    let plaintext = key.open(&payload)?;
    println!("{}", String::from_utf8(plaintext).context("plaintext is not UTF-8")?);
    Ok(())
}

fn load_keys<C: Curve>(
    agreement: &KeyAgreement<C>,
    secret: &str,
    peer: &str,
) -> anyhow::Result<(KeyPair<C>, C::Point)> {
    let secret = zeroize::Zeroizing::new(decode_base64(secret).context("reading --secret")?);
    let pair = agreement.key_pair_from_secret_bytes(&secret)?;
    let peer_public = agreement
        .decode_point(&decode_base64(peer).context("reading --peer")?)?;
    tracing::info!(peer = %agreement.fingerprint(&peer_public), "loaded peer public key");
    Ok((pair, peer_public))
}
