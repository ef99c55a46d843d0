//! Demo command implementation.

use anyhow::bail;
use curvecipher_core::{Curve, KeyAgreement, Nonce};

use crate::ui::{print_banner, print_step};

const DEMO_MESSAGE: &str = "this is my secret text!";

/// Run the two-party and three-party exchanges on the configured curve.
pub fn run_demo<C: Curve>(agreement: &KeyAgreement<C>) -> anyhow::Result<()> {
    print_banner(&agreement.curve().kind().to_string());

    let alice = agreement.generate_key_pair()?;
    let bob = agreement.generate_key_pair()?;
    println!("\x1b[1mAlice:\x1b[0m {}", agreement.fingerprint(alice.public()));
    println!("\x1b[1mBob:\x1b[0m   {}\n", agreement.fingerprint(bob.public()));

    let alice_shared = agreement.scalar_multiply(bob.public(), alice.secret())?;
    let bob_shared = agreement.scalar_multiply(alice.public(), bob.secret())?;
    check(
        alice_shared == bob_shared,
        "Alice and Bob computed the same shared point",
    )?;

    let alice_key = agreement.derive_symmetric_key(&alice_shared)?;
    let bob_key = agreement.derive_symmetric_key(&bob_shared)?;

    let nonce = Nonce::generate()?;
    let ciphertext = alice_key.encrypt_text(DEMO_MESSAGE, &nonce)?;
    let decrypted = bob_key.decrypt_text(&ciphertext, &nonce)?;
    check(
        decrypted == DEMO_MESSAGE,
        &format!(
            "Bob decrypted Alice's {} byte ciphertext: \"{}\"",
            ciphertext.len(),
            decrypted
        ),
    )?;

    let mut tampered = ciphertext.clone();
    tampered[0] ^= 0x01;
    check(
        bob_key.decrypt(&tampered, &nonce).is_err(),
        "A flipped ciphertext bit was rejected",
    )?;

    let carol = agreement.generate_key_pair()?;
    let abc = agreement.scalar_multiply(&alice_shared, carol.secret())?;
    let bc = agreement.scalar_multiply(bob.public(), carol.secret())?;
    let bca = agreement.scalar_multiply(&bc, alice.secret())?;
    let ca = agreement.scalar_multiply(carol.public(), alice.secret())?;
    let cab = agreement.scalar_multiply(&ca, bob.secret())?;
    check(
        abc == bca && bca == cab,
        "Alice, Bob and Carol reached the same three-party point",
    )?;

    println!();
    Ok(())
}

/// Print a step and fail the command if it did not hold.
fn check(ok: bool, message: &str) -> anyhow::Result<()> {
    print_step(ok, message);
    if !ok {
        bail!("demo step failed: {}", message);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvecipher_core::{P256, X25519};

    #[test]
    fn test_failed_step_is_an_error() {
        assert!(check(true, "holds").is_ok());
        let err = check(false, "A flipped ciphertext bit was rejected").unwrap_err();
        assert!(err.to_string().contains("flipped ciphertext bit"));
    }

    #[test]
    fn test_demo_succeeds_on_both_curves() {
        assert!(run_demo(&KeyAgreement::new(X25519)).is_ok());
        assert!(run_demo(&KeyAgreement::new(P256)).is_ok());
    }
}
