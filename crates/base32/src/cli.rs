//! Command-line filters over the codec.
//!
//! Provides the core logic used by the binary entry points:
//! - `base32-encode` — raw bytes (stdin) → base32 text (stdout)
//! - `base32-decode` — base32 text (stdin) → raw bytes (stdout)

use std::io::{self, Read, Write};

use thiserror::Error;

use crate::{from_base32, to_base32, Base32Error};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Decode(#[from] Base32Error),
    #[error("Input is not valid UTF-8.")]
    NotUtf8,
}

// ── base32-encode ─────────────────────────────────────────────────────────

/// Encode raw bytes to base32 text terminated by a newline.
pub fn encode_line(bytes: &[u8]) -> String {
    let mut line = to_base32(bytes);
    line.push('\n');
    line
}

/// Read all of `input`, write its encoding to `output`.
pub fn run_encode<R: Read, W: Write>(mut input: R, mut output: W) -> Result<(), CliError> {
    let mut buf = Vec::new();
    input.read_to_end(&mut buf)?;
    output.write_all(encode_line(&buf).as_bytes())?;
    output.flush()?;
    Ok(())
}

// ── base32-decode ─────────────────────────────────────────────────────────

/// Decode base32 text, ignoring trailing whitespace such as a final newline.
pub fn decode_text(text: &[u8]) -> Result<Vec<u8>, CliError> {
    let text = std::str::from_utf8(text).map_err(|_| CliError::NotUtf8)?;
    Ok(from_base32(text.trim_end())?)
}

/// Read all of `input`, write the decoded bytes to `output`.
pub fn run_decode<R: Read, W: Write>(mut input: R, mut output: W) -> Result<(), CliError> {
    let mut buf = Vec::new();
    input.read_to_end(&mut buf)?;
    output.write_all(&decode_text(&buf)?)?;
    output.flush()?;
    Ok(())
}
