//! Lenient JSON-subset scanning primitives shared by the config codecs.
//!
//! This is a best-effort scanner for a restricted, known document
//! shape, not a validating parser. Every extraction has a default, so a
//! malformed or partially hand-edited document degrades field by field
//! instead of failing outright. Supported grammar: `#` line comments
//! outside strings, double-quoted strings escaping only `\\` and `\"`,
//! integer numbers, and flat arrays of strings or objects.
//!
//! Key lookup is a first-match substring scan, not a structural walk: a
//! key occurring in a nested object before the intended top-level key
//! would shadow it. The two document shapes this crate reads keep their
//! keys distinct enough that this never bites, and the limitation is
//! kept on purpose rather than silently tightened.

/// Remove everything from an unescaped `#` to end-of-line, except
/// inside a double-quoted string. Comment-free input comes back
/// unchanged (modulo allocation).
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut skipping = false;
    let mut prev = '\0';
    for ch in text.chars() {
        if skipping {
            if ch == '\n' {
                skipping = false;
                out.push(ch);
            }
            prev = ch;
            continue;
        }
        if ch == '"' && prev != '\\' {
            in_string = !in_string;
        }
        if ch == '#' && !in_string {
            skipping = true;
            prev = ch;
            continue;
        }
        out.push(ch);
        prev = ch;
    }
    out
}

/// Index of the bracket matching the opener at `open_index`, tracking
/// nesting depth and ignoring brackets inside quoted strings.
///
/// Unbalanced input returns `text.len() - 1` instead of signaling
/// failure; callers must tolerate a possibly truncated span.
pub fn find_matching_bracket(text: &str, open_index: usize, open: char, close: char) -> usize {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut i = open_index;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'"' && !escaped(bytes, i) {
            in_string = !in_string;
        } else if !in_string {
            if b == open as u8 {
                depth += 1;
            } else if b == close as u8 {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i;
                }
            }
        }
        i += 1;
    }
    text.len().saturating_sub(1)
}

/// Value of the string field `key`, or `None` when the key is missing,
/// its value is the `null` literal, or its value is not a string.
pub fn extract_string_or_null(text: &str, key: &str) -> Option<String> {
    let start = value_start(text, key)?;
    let rest = text[start..].trim_start();
    if rest.starts_with("null") || !rest.starts_with('"') {
        return None;
    }
    let bytes = rest.as_bytes();
    let mut i = 1;
    while i < bytes.len() {
        if bytes[i] == b'"' && !escaped(bytes, i) {
            return Some(unescape(&rest[1..i]));
        }
        i += 1;
    }
    None
}

/// Like [`extract_string_or_null`], substituting `""` for absent.
pub fn extract_string(text: &str, key: &str) -> String {
    extract_string_or_null(text, key).unwrap_or_default()
}

/// Like [`extract_string_or_null`], substituting `default` for absent.
pub fn extract_string_or_default(text: &str, key: &str, default: &str) -> String {
    extract_string_or_null(text, key).unwrap_or_else(|| default.to_string())
}

/// Integer value of `key`: optional leading `-`, then a maximal digit
/// run. Absent key or malformed number falls back to `default`.
pub fn extract_int(text: &str, key: &str, default: i32) -> i32 {
    let Some(start) = value_start(text, key) else {
        return default;
    };
    let rest = text[start..].trim_start();
    let bytes = rest.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'-'));
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    rest[..end].parse().unwrap_or(default)
}

/// Quoted strings inside `key`'s array, in source order. Absent key or
/// array yields an empty sequence.
pub fn extract_string_array(text: &str, key: &str) -> Vec<String> {
    match array_span(text, key) {
        Some(span) => quoted_strings(span),
        None => Vec::new(),
    }
}

/// Contents of `key`'s array, brackets excluded, or `None` when the key
/// or its opening bracket never occurs.
pub fn array_span<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    let start = value_start(text, key)?;
    let rel = text[start..].find('[')?;
    let open = start + rel;
    let close = floor_char_boundary(text, find_matching_bracket(text, open, '[', ']'));
    if close <= open {
        return None;
    }
    Some(&text[open + 1..close])
}

/// Top-level `{...}` slices within an array span, in source order. The
/// shared object-iteration idiom both schema codecs decode with.
pub fn object_slices(span: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut cursor = 0;
    while let Some(rel) = span[cursor..].find('{') {
        let open = cursor + rel;
        let close = find_matching_bracket(span, open, '{', '}');
        if close <= open {
            break;
        }
        out.push(&span[open..=close]);
        cursor = close + 1;
    }
    out
}

/// Byte index just past the colon following the first `"key"`
/// occurrence, or `None` when the key never occurs.
fn value_start(text: &str, key: &str) -> Option<usize> {
    let needle = format!("\"{key}\"");
    let key_at = text.find(&needle)?;
    let after = key_at + needle.len();
    let colon = after + text[after..].find(':')?;
    Some(colon + 1)
}

// The unbalanced-input fallback index can land inside a multi-byte
// character; slicing with an exclusive end must back up to a boundary.
fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

// Single-character lookback only: `\\\"` sequences are not specially
// handled, matching the scanner's minimal escape rule.
fn escaped(bytes: &[u8], index: usize) -> bool {
    index > 0 && bytes[index - 1] == b'\\'
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(ch);
        }
    }
    out
}

fn quoted_strings(span: &str) -> Vec<String> {
    let bytes = span.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'"' && !escaped(bytes, i) {
            let mut j = i + 1;
            while j < bytes.len() && !(bytes[j] == b'"' && !escaped(bytes, j)) {
                j += 1;
            }
            if j >= bytes.len() {
                break;
            }
            out.push(unescape(&span[i + 1..j]));
            i = j + 1;
        } else {
            i += 1;
        }
    }
    out
}
