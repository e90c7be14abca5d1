//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `marknote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("marknote_core ping={}", marknote_core::ping());
    println!("marknote_core version={}", marknote_core::core_version());
}
