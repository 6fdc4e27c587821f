//! Kana conversions used for reading-based lookups

const KATAKANA_START: u32 = 0x30A1;
const KATAKANA_END: u32 = 0x30F6;
const KANA_OFFSET: u32 = 0x60;

/// Convert katakana to hiragana, leaving everything else untouched
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if (KATAKANA_START..=KATAKANA_END).contains(&code) {
                char::from_u32(code - KANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Turn a KANJIDIC reading into a key for searching word kana spellings.
///
/// `-` affix markers and `.` okurigana separators are dropped, katakana
/// becomes hiragana: `"た.べる"` → `"たべる"`, `"ニチ"` → `"にち"`.
pub fn reading_search_key(reading: &str) -> String {
    let stripped: String = reading.chars().filter(|c| !matches!(c, '-' | '.')).collect();
    katakana_to_hiragana(&stripped)
}
