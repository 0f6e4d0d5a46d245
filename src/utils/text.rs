/// Keep at most `max_chars` characters of `s`, never splitting a code point.
#[must_use]
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Replace CR/LF sequences with single spaces so untrusted text stays on one line.
#[must_use]
pub fn flatten_line_breaks(s: &str) -> String {
    if !s.contains(['\r', '\n']) {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut previous_was_break = false;
    for c in s.chars() {
        if c == '\r' || c == '\n' {
            if !previous_was_break {
                out.push(' ');
            }
            previous_was_break = true;
        } else {
            out.push(c);
            previous_was_break = false;
        }
    }
    out
}
