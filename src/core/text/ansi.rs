//! ANSI escape sequence scanning.
//!
//! Decorated text is treated as opaque: escape sequences contribute zero
//! display width and must survive truncation intact. This module only locates
//! sequences; it never interprets them.

/// A single escape sequence found inside a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiCode {
    pub code: String,
    pub length: usize,
}

/// Returns the escape sequence starting at byte `pos`, if any.
///
/// Recognizes CSI (`ESC [`), SS3 (`ESC O`), and the string-terminated forms
/// OSC/APC/DCS (`ESC ]`, `ESC _`, `ESC P`).
pub fn extract_ansi_code(input: &str, pos: usize) -> Option<AnsiCode> {
    let bytes = input.as_bytes();
    if pos + 1 >= bytes.len() || bytes[pos] != 0x1b {
        return None;
    }

    match bytes[pos + 1] {
        b'[' => extract_csi(input, pos),
        b'O' => extract_ss3(input, pos),
        b']' | b'_' | b'P' => extract_string_terminated(input, pos),
        _ => None,
    }
}

fn extract_csi(input: &str, pos: usize) -> Option<AnsiCode> {
    let bytes = input.as_bytes();
    for idx in pos + 2..bytes.len() {
        // Final byte of a CSI sequence is in 0x40..=0x7e.
        if (0x40..=0x7e).contains(&bytes[idx]) {
            return Some(code_at(input, pos, idx + 1));
        }
    }
    None
}

fn extract_ss3(input: &str, pos: usize) -> Option<AnsiCode> {
    if pos + 2 >= input.len() {
        return None;
    }
    // `ESC O` followed by a multibyte character is not an SS3 sequence;
    // slicing at a fixed byte offset would split the character.
    if !input.is_char_boundary(pos + 3) {
        return None;
    }
    Some(code_at(input, pos, pos + 3))
}

fn extract_string_terminated(input: &str, pos: usize) -> Option<AnsiCode> {
    let bytes = input.as_bytes();
    let mut idx = pos + 2;
    while idx < bytes.len() {
        // BEL or ST (ESC \) terminate OSC/APC/DCS strings.
        if bytes[idx] == 0x07 {
            return Some(code_at(input, pos, idx + 1));
        }
        if bytes[idx] == 0x1b && idx + 1 < bytes.len() && bytes[idx + 1] == b'\\' {
            return Some(code_at(input, pos, idx + 2));
        }
        idx += 1;
    }
    None
}

fn code_at(input: &str, start: usize, end: usize) -> AnsiCode {
    AnsiCode {
        code: input[start..end].to_string(),
        length: end - start,
    }
}
