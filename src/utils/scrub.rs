use std::borrow::Cow;

use super::text::truncate_chars;

const MAX_API_ERROR_CHARS: usize = 200;
const REDACTED: &str = "[REDACTED]";

/// Token prefixes used by common LLM and platform API keys.
const KEY_PREFIXES: [&str; 10] = [
    "sk-", "sk_", "gsk_", "hf_", "ghp_", "github_pat_", "AIza", "xai-", "eyJ", "pplx-",
];

/// Markers after which the next token is a credential.
const VALUE_MARKERS: [&str; 10] = [
    "Authorization: Bearer ",
    "authorization: bearer ",
    "Bearer ",
    "api_key=",
    "apikey=",
    "access_token=",
    "\"api_key\":\"",
    "\"access_token\":\"",
    "\"token\":\"",
    "PRIVATE_KEY=",
];

fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '+' | '/' | '=')
}

fn token_end(input: &str, from: usize) -> usize {
    input[from..]
        .char_indices()
        .find(|&(_, c)| !is_secret_char(c))
        .map_or(input.len(), |(i, _)| from + i)
}

/// `true` when `at` starts a new token rather than continuing a word.
fn starts_token(input: &str, at: usize) -> bool {
    input[..at]
        .chars()
        .next_back()
        .is_none_or(|c| !is_secret_char(c))
}

fn redact_after(scrubbed: &mut String, marker: &str, whole_token: bool) {
    let mut search_from = 0;
    while let Some(rel) = scrubbed[search_from..].find(marker) {
        let start = search_from + rel;
        let value_start = start + marker.len();
        let end = token_end(scrubbed, value_start);

        // A bare marker with nothing after it is not a secret, and a key
        // prefix only counts at the start of a token (`task-42` is not a key).
        if end == value_start || (whole_token && !starts_token(scrubbed, start)) {
            search_from = value_start;
            continue;
        }

        scrubbed.replace_range(start..end, REDACTED);
        search_from = start + REDACTED.len();
    }
}

/// Redact API keys and bearer tokens from text that may be shown to a caller.
pub fn scrub_secret_patterns(input: &str) -> Cow<'_, str> {
    let suspicious = KEY_PREFIXES
        .iter()
        .chain(VALUE_MARKERS.iter())
        .any(|pattern| input.contains(pattern));
    if !suspicious {
        return Cow::Borrowed(input);
    }

    let mut scrubbed = input.to_string();
    for marker in VALUE_MARKERS {
        redact_after(&mut scrubbed, marker, false);
    }
    for prefix in KEY_PREFIXES {
        redact_after(&mut scrubbed, prefix, true);
    }
    Cow::Owned(scrubbed)
}

/// Scrub secrets from a backend error body and cap its length.
pub fn sanitize_api_error(input: &str) -> String {
    let scrubbed = scrub_secret_patterns(input);
    let truncated = truncate_chars(&scrubbed, MAX_API_ERROR_CHARS);
    if truncated.len() == scrubbed.len() {
        scrubbed.into_owned()
    } else {
        format!("{truncated}...")
    }
}
