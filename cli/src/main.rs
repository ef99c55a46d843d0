//! Curvecipher CLI - elliptic-curve key agreement and AES-256-GCM encryption.

mod commands;
mod ui;

use clap::{Parser, Subcommand};
use curvecipher_core::{CurveKind, KeyAgreement, P256, X25519};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "curvecipher")]
#[command(about = "Diffie-Hellman key agreement with AES-256-GCM encryption", long_about = None)]
struct Cli {
    /// Curve to agree keys on (x25519, p256)
    #[arg(short, long, default_value_t = CurveKind::X25519)]
    curve: CurveKind,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Walk through a two- and three-party exchange (default)
    Demo,
    /// Generate a key pair and print it as JSON
    Keygen,
    /// Encrypt a message for a peer
    Encrypt {
        /// Own private scalar, base64
        #[arg(long)]
        secret: String,
        /// Peer's public point, base64
        #[arg(long)]
        peer: String,
        /// Text to encrypt
        #[arg(short, long)]
        message: String,
    },
    /// Decrypt a JSON payload from a peer
    Decrypt {
        /// Own private scalar, base64
        #[arg(long)]
        secret: String,
        /// Peer's public point, base64
        #[arg(long)]
        peer: String,
        /// Payload printed by `encrypt`
        #[arg(short, long)]
        payload: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("curvecipher=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Demo);

    match cli.curve {
        CurveKind::X25519 => commands::dispatch(KeyAgreement::new(X25519), command),
        CurveKind::P256 => commands::dispatch(KeyAgreement::new(P256), command),
    }
}
