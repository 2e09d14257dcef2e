//! `base32-decode` — decode base32 text (stdin) to raw bytes (stdout).
//!
//! Usage:
//!   base32-decode < file.b32
//!
//! Trailing whitespace is ignored. Exits with status 1 on invalid input.

use base32_codec::cli::run_decode;
use std::io;

fn main() {
    if let Err(e) = run_decode(io::stdin().lock(), io::stdout().lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
