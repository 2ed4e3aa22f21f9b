// crates/hdrcase-core/src/canonical.rs
//
// Display casing for HTTP header names.
//
// Rules:
// - Split on '-', capitalize each token (first letter upper, rest lower).
// - "www" and "etag" are irregular: WWW, ETag.
// - Empty tokens survive, so "a--b" keeps both hyphens.

/// Canonical display form of a header name, e.g. `content-type` -> `Content-Type`.
pub fn canonicalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, token) in name.split('-').enumerate() {
        if i > 0 {
            out.push('-');
        }
        push_token(&mut out, token);
    }
    out
}

/// Uppercase constant label paired with a display literal, e.g. `CONTENT-TYPE`.
pub fn upper_form(name: &str) -> String {
    name.to_ascii_uppercase()
}

pub fn is_canonical(name: &str) -> bool {
    canonicalize(name) == name
}

fn push_token(out: &mut String, token: &str) {
    if token.eq_ignore_ascii_case("www") {
        out.push_str("WWW");
        return;
    }
    if token.eq_ignore_ascii_case("etag") {
        out.push_str("ETag");
        return;
    }

    let mut chars = token.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        for c in chars {
            out.push(c.to_ascii_lowercase());
        }
    }
}
