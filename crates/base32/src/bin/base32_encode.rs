//! `base32-encode` — encode raw bytes (stdin) to base32 text (stdout).
//!
//! Usage:
//!   base32-encode < file

use base32_codec::cli::run_encode;
use std::io;

fn main() {
    if let Err(e) = run_encode(io::stdin().lock(), io::stdout().lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
