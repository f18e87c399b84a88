// src/core/html.rs
//
// Minimal case-insensitive HTML slicing. std-only, no DOM: the pages we
// consume are table-shaped enough that positional tag scanning holds up.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Find the next `<o ...> ... </c>` block at or after `from`.
/// Returns (start of open tag, end just past the close tag).
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// First `<table ...>` block whose opening tag mentions `class_marker`
/// (e.g. "wikitable"). Returns the inner HTML between the open and close tags.
/// Nested tables are not handled; the target pages do not nest the data table.
pub fn find_marked_table<'a>(doc: &'a str, class_marker: &str) -> Option<&'a str> {
    let marker = to_lower(class_marker);
    let mut pos = 0usize;
    while let Some((start, end)) = next_tag_block_ci(doc, "<table", "</table>", pos) {
        let block = &doc[start..end];
        let open_end = block.find('>')?;
        if to_lower(&block[..open_end]).contains(&marker) {
            let close_start = block.rfind('<')?;
            return Some(&block[open_end + 1..close_start]);
        }
        pos = end;
    }
    None
}

/// Content between the open tag and the final close tag of a block
/// produced by `next_tag_block_ci`.
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Text of the first hyperlink inside a cell's inner HTML, tags stripped.
/// `None` when the cell has no `<a>` or the link text is empty.
pub fn first_link_text(cell_inner: &str) -> Option<String> {
    let (a_s, a_e) = next_tag_block_ci(cell_inner, "<a", "</a>", 0)?;
    let inner = inner_after_open_tag(&cell_inner[a_s..a_e]);
    let text = strip_tags(super::sanitize::normalize_entities(&inner));
    if text.is_empty() { None } else { Some(text) }
}

/// Drop tags, keep text, collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
