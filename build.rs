//! Build script: embeds provenance into the binary.
//!
//! `version` output reports the commit the binary was built from; release
//! tarballs and other non-git checkouts get a plain version string.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");

    if let Some(hash) = short_git_hash() {
        println!("cargo:rustc-env=LANZAR_GIT_HASH={hash}");
    }
}

/// Abbreviated commit hash of HEAD; `None` outside a git checkout.
fn short_git_hash() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let hash = String::from_utf8(out.stdout).ok()?;
    let trimmed = hash.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
