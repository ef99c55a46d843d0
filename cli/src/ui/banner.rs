//! Banner and step printing.

/// Print the application banner.
pub fn print_banner(curve: &str) {
    println!("\n\x1b[1;36m╔══════════════════════════════════════╗\x1b[0m");
    println!("\x1b[1;36m║\x1b[0m            \x1b[1mCurvecipher\x1b[0m               \x1b[1;36m║\x1b[0m");
    println!("\x1b[1;36m║\x1b[0m   ECDH key agreement + AES-256-GCM   \x1b[1;36m║\x1b[0m");
    println!("\x1b[1;36m╚══════════════════════════════════════╝\x1b[0m");
    println!("\x1b[1mCurve:\x1b[0m {}\n", curve);
}

/// Print one demo step with a pass/fail marker.
pub fn print_step(ok: bool, message: &str) {
    if ok {
        println!("\x1b[1;32m✓\x1b[0m {}", message);
    } else {
        println!("\x1b[1;31m✗\x1b[0m {}", message);
    }
}
