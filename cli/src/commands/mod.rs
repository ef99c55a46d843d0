//! CLI command implementations.

mod demo;
mod keys;

use curvecipher_core::{Curve, KeyAgreement};

use crate::Commands;

pub use demo::run_demo;
pub use keys::{decrypt_message, encrypt_message, generate_keys};

/// Run a command on the configured curve.
pub fn dispatch<C: Curve>(agreement: KeyAgreement<C>, command: Commands) -> anyhow::Result<()> {
    tracing::debug!(curve = %agreement.curve().kind(), "dispatching command");
    match command {
        Commands::Demo => run_demo(&agreement),
        Commands::Keygen => generate_keys(&agreement),
        Commands::Encrypt { secret, peer, message } => {
            encrypt_message(&agreement, &secret, &peer, &message)
        }
        Commands::Decrypt { secret, peer, payload } => {
            decrypt_message(&agreement, &secret, &peer, &payload)
        }
    }
}
