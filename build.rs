//! Build script: embeds the git hash and pre-flights the `vosk` feature.
//!
//! libvosk is a system library that the vosk crate links against; when it is
//! missing, the failure surfaces as an opaque linker error at the very end of
//! the build. Checking up front lets us fail with an actionable message.

use std::process::Command;

fn main() {
    // Embed git short hash for version string
    if let Ok(output) = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        && output.status.success()
    {
        let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=GIT_HASH={}", hash);
    }
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");

    if cfg!(feature = "vosk") {
        check_libvosk();
    }
}

fn check_libvosk() {
    let pkg_config_ok = Command::new("pkg-config")
        .args(["--exists", "vosk"])
        .status()
        .is_ok_and(|s| s.success());

    if !pkg_config_ok {
        let lib_exists = std::path::Path::new("/usr/lib/libvosk.so").exists()
            || std::path::Path::new("/usr/local/lib/libvosk.so").exists()
            || std::path::Path::new("/usr/lib/x86_64-linux-gnu/libvosk.so").exists()
            || std::env::var("VOSK_LIB_DIR").is_ok();

        if !lib_exists {
            panic!(
                "\n\n\
                ╔══════════════════════════════════════════════════════════╗\n\
                ║  libvosk not found — the `vosk` feature needs it.        ║\n\
                ║                                                          ║\n\
                ║  Download: https://github.com/alphacep/vosk-api/releases ║\n\
                ║  Then set VOSK_LIB_DIR to the directory containing       ║\n\
                ║  libvosk.so, or install it system-wide.                  ║\n\
                ║                                                          ║\n\
                ║  Or build without Vosk: cargo build --release            ║\n\
                ╚══════════════════════════════════════════════════════════╝\n",
            );
        }
    }
}
