mod general_search_tests;
mod kanji_lookup_tests;
