//! General search: kanji detail, direct and English lookups, dedup

use serde_json::json;
use yomu_core::dictionary::SearchOptions;

use crate::response::{SearchResult, WordResult};
use crate::search::SearchService;
use crate::testutil::{dictionary_from, flat_kanji, sample_service, word};

fn words(results: &[SearchResult]) -> Vec<&WordResult> {
    results
        .iter()
        .filter_map(|r| match r {
            SearchResult::Word(w) => Some(w),
            SearchResult::KanjiDetail(_) => None,
        })
        .collect()
}

fn kanji_detail_count(results: &[SearchResult]) -> usize {
    results
        .iter()
        .filter(|r| matches!(r, SearchResult::KanjiDetail(_)))
        .count()
}

#[test]
fn test_single_kanji_gets_detail_and_words() {
    let response = sample_service().search("日");

    match &response.results[0] {
        SearchResult::KanjiDetail(info) => {
            assert_eq!(info.kanji, "日");
            assert!(info.on_yomi.contains(&"ニチ".to_string()));
            assert!(info.on_yomi.contains(&"ジツ".to_string()));
        }
        other => panic!("expected kanji detail first, got {other:?}"),
    }
    assert_eq!(kanji_detail_count(&response.results), 1);

    let words = words(&response.results);
    assert_eq!(words.len(), 2);
    assert!(words.iter().all(|w| w.kanji_forms.iter().any(|k| k.contains('日'))));
}

#[test]
fn test_empty_query() {
    let service = sample_service();
    assert!(service.search("").results.is_empty());
    assert!(service.search("  \n ").results.is_empty());
}

#[test]
fn test_query_is_trimmed() {
    let response = sample_service().search("  日本\n");
    let words = words(&response.results);
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].kana_forms, vec!["にほん", "にっぽん"]);
}

#[test]
fn test_english_queries_fall_back_to_gloss_prefix() {
    let service = sample_service();

    let eat = service.search("eat");
    let eat = words(&eat.results);
    assert_eq!(eat.len(), 1);
    assert_eq!(eat[0].kanji_forms, vec!["食べる"]);

    let water = service.search("Water");
    let water = words(&water.results);
    assert_eq!(water.len(), 1);
    assert_eq!(water[0].kanji_forms, vec!["水"]);

    assert!(service.search("xyzzy").results.is_empty());
}

#[test]
fn test_exact_gloss_does_not_need_fallback() {
    let response = sample_service().search("moon");
    let words = words(&response.results);
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].senses[0].field, vec!["astron"]);
}

#[test]
fn test_single_kana_has_no_kanji_detail() {
    let response = sample_service().search("ひ");

    assert_eq!(kanji_detail_count(&response.results), 0);
    let words = words(&response.results);
    assert_eq!(words.len(), 3);
    assert!(words.iter().all(|w| w.kana_forms.contains(&"ひ".to_string())));
}

#[test]
fn test_kana_only_word() {
    let response = sample_service().search("めっちゃ");
    let words = words(&response.results);
    assert_eq!(words.len(), 1);
    assert!(words[0].kanji_forms.is_empty());
    assert_eq!(words[0].senses[0].dialect, vec!["ksb"]);
}

#[test]
fn test_kanji_without_words_is_detail_only() {
    let response = sample_service().search("嬲");
    assert_eq!(response.results.len(), 1);
    assert_eq!(kanji_detail_count(&response.results), 1);
}

#[test]
fn test_duplicate_entries_collapse() {
    let service = SearchService::new(
        dictionary_from(
            json!([
                word("1", &["日", "陽"], &["ひ"], "sun"),
                word("2", &["陽", "日"], &["ひ"], "sun"),
                word("3", &["日"], &["ひ"], "day"),
            ]),
            json!([]),
        ),
        SearchOptions::default(),
    );

    let response = service.search("ひ");
    let ids: Vec<Option<&str>> = words(&response.results)
        .iter()
        .map(|w| w.idseq.as_deref())
        .collect();
    assert_eq!(ids, vec![Some("1"), Some("3")]);
}

#[test]
fn test_word_results_are_capped() {
    let entries: Vec<_> = (0..5)
        .map(|i| word(&i.to_string(), &[], &["ほし"], &format!("star {i}")))
        .collect();
    let service = SearchService::new(
        dictionary_from(json!(entries), json!([])),
        SearchOptions { max_results: 2 },
    );

    assert_eq!(service.search("ほし").results.len(), 2);
}

#[test]
fn test_character_only_backend_with_fullwidth_query() {
    // Fullwidth letters count as single Japanese characters
    let service = SearchService::new(
        dictionary_from(json!([]), json!([flat_kanji('Ａ', &[], &[], &["letter A"])])),
        SearchOptions::default(),
    );

    let response = service.search("Ａ");
    assert_eq!(kanji_detail_count(&response.results), 1);
}
