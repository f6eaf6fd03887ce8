#![allow(missing_docs, dead_code)]

use core::fmt::Write;

use textencoder::{EncodeError, EncodeIntoResult, EscapedStr, encode_into};

/// Space-separated uppercase hex.
pub fn hex(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write!(out, "{b:02X}").unwrap();
    }
    out
}

/// Runs `encode_into` on a fresh `capacity`-byte buffer and renders the
/// outcome on one line.
pub fn render_into(input: &[u8], capacity: usize) -> String {
    let mut dst = vec![0xAAu8; capacity];
    match encode_into(EscapedStr::new(input), &mut dst) {
        Ok(EncodeIntoResult { read, written }) => {
            format!("read={read} written={written} dst=[{}]", hex(&dst))
        }
        Err(err) => render_err(&err),
    }
}

pub fn render_err(err: &EncodeError) -> String {
    format!("error: {err}")
}
