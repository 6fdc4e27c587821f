//! Unicode range checks for Japanese text

/// CJK Unified Ideographs as accepted for similar-kanji candidates
pub fn is_cjk_unified(c: char) -> bool {
    ('\u{4E00}'..='\u{9FEF}').contains(&c)
}

/// Kanji, kana, CJK extensions and fullwidth forms
pub fn is_japanese_char(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3040}'..='\u{309F}'
        | '\u{30A0}'..='\u{30FF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{20000}'..='\u{2A6DF}'
        | '\u{FF00}'..='\u{FFEF}')
}

/// The single character of `text`, if it has exactly one
pub fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

pub fn is_single_japanese_char(text: &str) -> bool {
    single_char(text).is_some_and(is_japanese_char)
}
