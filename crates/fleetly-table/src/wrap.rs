//! Greedy word-wrapping bounded by display width.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Break `text` into the minimum number of lines no wider than `width`
/// display columns, breaking at whitespace boundaries.
///
/// Runs of whitespace collapse to a single space. An empty or
/// all-whitespace cell produces exactly one empty line, never zero, so a
/// row containing it still occupies vertical space. A single token wider
/// than the column is hard-broken at the width boundary rather than left
/// overflowing.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    // A zero-width column could never make progress; one column minimum.
    let width = width.max(1);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        if current.is_empty() {
            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                (current, current_width) = break_token(word, width, &mut lines);
            }
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                (current, current_width) = break_token(word, width, &mut lines);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Hard-break a token wider than `width`, pushing full chunks and
/// returning the trailing partial chunk with its width.
fn break_token(word: &str, width: usize, lines: &mut Vec<String>) -> (String, usize) {
    let mut chunk = String::new();
    let mut chunk_width = 0usize;
    for ch in word.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if !chunk.is_empty() && chunk_width + ch_width > width {
            lines.push(std::mem::take(&mut chunk));
            chunk_width = 0;
        }
        chunk.push(ch);
        chunk_width += ch_width;
    }
    (chunk, chunk_width)
}
