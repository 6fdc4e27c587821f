//! Kanji lookup against the bundled sample and generated dictionaries

use std::collections::HashSet;

use serde_json::json;
use yomu_core::dictionary::SearchOptions;

use crate::response::{MAX_EXAMPLE_WORDS, MAX_SENTENCES, MAX_SIMILAR};
use crate::search::SearchService;
use crate::testutil::{dictionary_from, flat_kanji, sample_service, word};

const SAMPLE_KANJI: &[&str] = &[
    "日", "本", "火", "陽", "灯", "曜", "毎", "実", "水", "会", "社", "男", "月", "食", "向", "亜",
    "之", "嬲",
];

#[test]
fn test_sun_kanji_record() {
    let info = sample_service().kanji("日").unwrap().unwrap();

    assert_eq!(info.kanji, "日");
    assert_eq!(info.meanings[0], "day");
    assert_eq!(info.on_yomi, vec!["ジツ", "ニチ"]);
    assert_eq!(info.kun_yomi, vec!["-か", "-び", "ひ"]);
    assert_eq!(info.stroke_count, 4);
    assert_eq!(info.jlpt_level, "N5");
    assert_eq!(info.frequency, 1);

    let words: Vec<&str> = info.examples.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(
        words,
        vec!["日本", "日", "毎日", "日曜日", "本日", "火曜日", "日向"]
    );
    assert_eq!(info.examples[1].reading, "ひ");
    assert_eq!(info.examples[1].meaning, "sun");

    let sentences: Vec<&str> = info.sentences.iter().map(|s| s.english.as_str()).collect();
    assert_eq!(sentences, vec!["The sun rises.", "I study Japanese every day."]);
    assert!(info.sentences.iter().all(|s| s.reading.is_empty()));

    let similar: Vec<(&str, &str)> = info
        .similar
        .iter()
        .map(|s| (s.kanji.as_str(), s.shared_reading.as_str()))
        .collect();
    assert_eq!(
        similar,
        vec![("火", "-び"), ("陽", "ひ"), ("灯", "ひ"), ("実", "ジツ")]
    );

    let fire = &info.similar[0];
    assert_eq!(fire.all_on_yomi, vec!["カ"]);
    assert!(fire.all_kun_yomi.contains(&"ひ".to_string()));
    assert!(fire.meanings.len() <= 3);
}

#[test]
fn test_readings_are_sorted_and_unique() {
    let service = sample_service();

    for kanji in SAMPLE_KANJI {
        let info = service.kanji(kanji).unwrap().unwrap();
        for list in [&info.on_yomi, &info.kun_yomi] {
            let mut expected = list.clone();
            expected.sort();
            expected.dedup();
            assert_eq!(list, &expected, "readings of {kanji}");
        }
    }
}

#[test]
fn test_similar_excludes_self_and_duplicates() {
    let service = sample_service();

    for kanji in SAMPLE_KANJI {
        let info = service.kanji(kanji).unwrap().unwrap();
        let mut seen = HashSet::new();
        for similar in &info.similar {
            assert_ne!(similar.kanji, *kanji);
            assert!(seen.insert(similar.kanji.clone()), "{} repeated", similar.kanji);
        }
        assert!(info.similar.len() <= MAX_SIMILAR);
        assert!(info.examples.len() <= MAX_EXAMPLE_WORDS);
        assert!(info.sentences.len() <= MAX_SENTENCES);
    }
}

#[test]
fn test_jlpt_buckets_from_grade() {
    let service = sample_service();
    let level = |k: &str| service.kanji(k).unwrap().unwrap().jlpt_level;

    assert_eq!(level("陽"), "N4");
    assert_eq!(level("亜"), "N2");
    assert_eq!(level("之"), "N1");
    assert_eq!(level("嬲"), "N/A");
    assert_eq!(service.kanji("之").unwrap().unwrap().frequency, 0);
}

#[test]
fn test_not_found_cases() {
    let service = sample_service();

    assert!(service.kanji("日本").unwrap().is_none());
    assert!(service.kanji("").unwrap().is_none());
    assert!(service.kanji("猫").unwrap().is_none());
}

#[test]
fn test_enrichment_lists_are_capped() {
    // 12 kanji read ひ, each in a word read ひ, plus 12 words spelled with 日
    let others: Vec<char> = ('\u{4E00}'..).take(12).collect();

    let mut words = Vec::new();
    let mut characters = vec![flat_kanji('日', &["ニチ"], &["ひ"], &["day"])];

    for (i, c) in others.iter().enumerate() {
        words.push(word(&format!("1{i:02}"), &[c.to_string().as_str()], &["ひ"], "thing"));
        characters.push(flat_kanji(*c, &[], &["ひ"], &["thing"]));

        let spelling = format!("日{c}");
        let mut compound = word(&format!("2{i:02}"), &[spelling.as_str()], &["にち"], "day thing");
        compound["sense"][0]["examples"] = json!([{
            "sentences": [
                { "lang": "jpn", "text": format!("日{c}です。") },
                { "lang": "eng", "text": format!("It is day thing {i}.") },
            ]
        }]);
        words.push(compound);
    }

    let service = SearchService::new(
        dictionary_from(json!(words), json!(characters)),
        SearchOptions::default(),
    );
    let info = service.kanji("日").unwrap().unwrap();

    assert_eq!(info.examples.len(), MAX_EXAMPLE_WORDS);
    assert_eq!(info.sentences.len(), MAX_SENTENCES);
    assert_eq!(info.similar.len(), MAX_SIMILAR);
    assert!(info.similar.iter().all(|s| s.shared_reading == "ひ"));
}

#[test]
fn test_flat_backend_answers_through_attributes() {
    let service = SearchService::new(
        dictionary_from(
            json!([word("1", &["火"], &["ひ"], "fire"), word("2", &["灯"], &["ひ"], "lamp")]),
            json!([
                flat_kanji('火', &["カ", "カ"], &["ひ", "ほ-"], &["fire"]),
                flat_kanji('灯', &["トウ"], &["ひ"], &["lamp", "light", "torch", "bulb"]),
            ]),
        ),
        SearchOptions::default(),
    );

    let info = service.kanji("火").unwrap().unwrap();
    assert_eq!(info.on_yomi, vec!["カ"]);
    assert_eq!(info.kun_yomi, vec!["ひ", "ほ-"]);
    assert_eq!(info.meanings, vec!["fire"]);
    assert_eq!(info.similar.len(), 1);
    assert_eq!(info.similar[0].kanji, "灯");
    assert_eq!(info.similar[0].meanings, vec!["lamp", "light", "torch"]);
}

#[test]
fn test_candidates_without_any_reading_source_are_skipped() {
    let service = SearchService::new(
        dictionary_from(
            json!([word("1", &["火", "灯"], &["ひ"], "fire")]),
            json!([flat_kanji('火', &["カ"], &["ひ"], &["fire"]), { "kanji": "灯" }]),
        ),
        SearchOptions::default(),
    );

    let info = service.kanji("火").unwrap().unwrap();
    assert!(info.similar.is_empty());

    // A character with no reading source still resolves, with empty readings
    let bare = service.kanji("灯").unwrap().unwrap();
    assert!(bare.on_yomi.is_empty() && bare.kun_yomi.is_empty());
    assert!(bare.meanings.is_empty());
}
