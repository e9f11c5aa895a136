//! Truncation and padding helpers.

use unicode_segmentation::UnicodeSegmentation;

use super::ansi::extract_ansi_code;
use super::width::{grapheme_width, visible_width};

const ANSI_RESET: &str = "\x1b[0m";

/// Shorten `text` to at most `max_width` display cells, appending `ellipsis`
/// when anything was cut. ANSI escape sequences are preserved and measure
/// zero. With `pad`, the result is space-padded to exactly `max_width`.
pub fn truncate_to_width(text: &str, max_width: usize, ellipsis: &str, pad: bool) -> String {
    if max_width == 0 {
        return String::new();
    }

    let text_width = visible_width(text);
    if text_width <= max_width {
        if pad {
            return format!("{text}{}", " ".repeat(max_width - text_width));
        }
        return text.to_string();
    }

    let ellipsis_width = visible_width(ellipsis);
    let target_width = max_width.saturating_sub(ellipsis_width);
    if target_width == 0 {
        return ellipsis.chars().take(max_width).collect();
    }

    let mut out = String::new();
    let mut used = 0;
    let mut saw_ansi = false;
    let mut idx = 0;
    'scan: while idx < text.len() {
        if let Some(ansi) = extract_ansi_code(text, idx) {
            out.push_str(&ansi.code);
            saw_ansi = true;
            idx += ansi.length;
            continue;
        }

        let text_end = next_ansi_or_end(text, idx);
        for grapheme in text[idx..text_end].graphemes(true) {
            let width = grapheme_width(grapheme);
            if used + width > target_width {
                break 'scan;
            }
            out.push_str(grapheme);
            used += width;
        }
        idx = text_end;
    }

    if saw_ansi {
        // Open styles must not bleed into the ellipsis or whatever follows.
        out.push_str(ANSI_RESET);
    }
    out.push_str(ellipsis);

    if pad {
        let out_width = visible_width(&out);
        if out_width < max_width {
            out.push_str(&" ".repeat(max_width - out_width));
        }
    }

    out
}

/// Space-pad `line` on the right to exactly `width` display cells.
pub fn pad_to_width(line: &str, width: usize) -> String {
    let line_width = visible_width(line);
    let needed = width.saturating_sub(line_width);
    if needed == 0 {
        return line.to_string();
    }
    format!("{line}{}", " ".repeat(needed))
}

/// Fit `line` to exactly `width` cells — padding or clipping as needed — and
/// run the decoration over the whole fitted line, so the decoration spans the
/// full viewport width.
pub fn decorate_full_width(line: &str, width: usize, decorate: &dyn Fn(&str) -> String) -> String {
    decorate(&truncate_to_width(line, width, "", true))
}

fn next_ansi_or_end(input: &str, mut idx: usize) -> usize {
    while idx < input.len() {
        if extract_ansi_code(input, idx).is_some() {
            break;
        }
        let Some(ch) = input[idx..].chars().next() else {
            break;
        };
        idx += ch.len_utf8();
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::{decorate_full_width, pad_to_width, truncate_to_width};
    use crate::core::text::width::visible_width;

    #[test]
    fn truncate_returns_original_when_shorter() {
        assert_eq!(truncate_to_width("abc", 5, "\u{2026}", false), "abc");
    }

    #[test]
    fn truncate_pads_to_exact_width() {
        assert_eq!(truncate_to_width("abc", 5, "\u{2026}", true), "abc  ");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("abcdef", 5, "\u{2026}", false), "abcd\u{2026}");
        assert_eq!(truncate_to_width("abcdef", 5, "...", false), "ab...");
    }

    #[test]
    fn truncate_zero_width_is_empty() {
        assert_eq!(truncate_to_width("abc", 0, "\u{2026}", true), "");
    }

    #[test]
    fn truncate_keeps_ansi_and_resets() {
        let input = "\x1b[31mabcdef\x1b[0m";
        let out = truncate_to_width(input, 5, "\u{2026}", false);
        assert_eq!(visible_width(&out), 5);
        assert!(out.starts_with("\x1b[31m"));
        assert!(out.contains("\x1b[0m\u{2026}"));
    }

    #[test]
    fn truncate_does_not_split_wide_graphemes() {
        // "東" is two cells; only one fits after reserving the marker.
        let out = truncate_to_width("東京都", 4, "\u{2026}", false);
        assert_eq!(out, "東\u{2026}");
        assert_eq!(visible_width(&out), 3);
    }

    #[test]
    fn pad_to_width_ignores_ansi() {
        let padded = pad_to_width("\x1b[1mab\x1b[0m", 4);
        assert_eq!(visible_width(&padded), 4);
        assert!(padded.ends_with("  "));
    }

    #[test]
    fn decorate_full_width_wraps_padded_line() {
        let out = decorate_full_width("ab", 4, &|text| format!("<{text}>"));
        assert_eq!(out, "<ab  >");
    }

    #[test]
    fn decorate_full_width_clips_over_wide_lines() {
        let out = decorate_full_width("abcdef", 4, &|text| format!("<{text}>"));
        assert_eq!(out, "<abcd>");
    }
}
