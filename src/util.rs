use unicode_width::UnicodeWidthStr;

/// Terminal display width of a string (wide chars count as two cells)
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Insert a char at a CHARACTER index (clamped to the end)
pub fn insert_char_at(s: &str, idx: usize, c: char) -> String {
    let byte_idx = s
        .char_indices()
        .nth(idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len());

    let mut out = String::with_capacity(s.len() + c.len_utf8());
    out.push_str(&s[..byte_idx]);
    out.push(c);
    out.push_str(&s[byte_idx..]);
    out
}

/// Remove the char at a CHARACTER index; None if out of range
pub fn remove_char_at(s: &str, idx: usize) -> Option<String> {
    let (start, c) = s.char_indices().nth(idx)?;
    let mut out = String::with_capacity(s.len());
    out.push_str(&s[..start]);
    out.push_str(&s[start + c.len_utf8()..]);
    Some(out)
}
