// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Ordered fallback: first candidate that is `Some` and non-empty after
/// trimming wins; all empty/absent → empty string.
pub fn first_non_empty<I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    for cand in candidates {
        if let Some(c) = cand {
            let t = c.trim();
            if !t.is_empty() { return t.to_string(); }
        }
    }
    s!()
}
