//! Ordered distinct collection of raw text values.

/// True for empty or whitespace-only text.
///
/// No-break spaces (U+00A0, U+2007, U+202F) and NEL (U+0085) are not
/// whitespace here; the information separators U+001C..U+001F are.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_separator_whitespace)
}

fn is_separator_whitespace(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        _ => c.is_whitespace(),
    }
}

/// Append `value` unless it is absent, blank, or already present.
///
/// Comparison is exact and case-sensitive; nothing is trimmed or folded.
pub fn add_distinct(values: &mut Vec<String>, value: Option<&str>) {
    let Some(value) = value else {
        return;
    };
    if is_blank(value) || values.iter().any(|existing| existing == value) {
        return;
    }
    values.push(value.to_string());
}

/// Fold a stream of raw values into their distinct, first-seen-ordered set.
pub fn collect_distinct<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut distinct = Vec::new();
    for value in values {
        add_distinct(&mut distinct, value);
    }
    distinct
}
