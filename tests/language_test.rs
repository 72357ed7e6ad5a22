use wordify::language::{self, Language};

#[test]
fn test_is_greek_text_matches_greek_blocks() {
    assert!(language::is_greek_text("γειά"));
    assert!(language::is_greek_text("ΣΤΙΧΟΙ"));

    // Greek Extended block (polytonic spellings)
    assert!(language::is_greek_text("ἀγάπη"));

    // A single Greek character among Latin text is enough
    assert!(language::is_greek_text("rock και roll"));
}

#[test]
fn test_is_greek_text_rejects_non_greek() {
    assert!(!language::is_greek_text("hello"));
    assert!(!language::is_greek_text(""));
    assert!(!language::is_greek_text("123 !?"));
}

#[test]
fn test_is_english_text() {
    assert!(language::is_english_text("hello"));
    assert!(language::is_english_text("don't stop believin'"));
    assert!(language::is_english_text("well-known songs here"));

    assert!(!language::is_english_text(""));
    assert!(!language::is_english_text("γειά σου"));

    // Digit tokens do not count as English words
    assert!(!language::is_english_text("99 problems"));
}

#[test]
fn test_is_english_text_majority_threshold() {
    // Exactly half is not a majority
    assert!(!language::is_english_text("hello world γειά σου"));

    // Three of four is
    assert!(language::is_english_text("hello big world γειά"));
}

#[test]
fn test_strip_accents_keeps_case() {
    assert_eq!(language::strip_accents("Γειά"), "Γεια");
    assert_eq!(language::strip_accents("άέήίόύώ"), "αεηιουω");
    assert_eq!(language::strip_accents("café"), "cafe");
    assert_eq!(language::strip_accents("plain"), "plain");
}

#[test]
fn test_normalize_word() {
    assert_eq!(language::normalize_word("ΓΕΙΆ"), "γεια");
    assert_eq!(language::normalize_word("Τραγούδι"), "τραγουδι");

    // Non-Greek words are only lowercased, accents intact
    assert_eq!(language::normalize_word("Hello"), "hello");
    assert_eq!(language::normalize_word("CAFÉ"), "café");
}

#[test]
fn test_normalize_word_is_idempotent() {
    for word in ["ΓΕΙΆ", "Τραγούδι", "ἀγάπη", "Hello", "don't"] {
        let once = language::normalize_word(word);
        assert_eq!(language::normalize_word(&once), once);
    }
}

#[test]
fn test_stop_word_set_modes() {
    let english = language::stop_word_set(Language::English);
    let greek = language::stop_word_set(Language::Greek);
    let both = language::stop_word_set(Language::Both);

    // Base lexicon entries follow the selected language
    assert!(english.contains("the"));
    assert!(greek.contains("και"));
    assert!(both.contains("the"));
    assert!(both.contains("και"));

    // The custom domain list is always present, in both spellings
    for set in [&english, &greek, &both] {
        assert!(set.contains("chorus"));
        assert!(set.contains("yeah"));
        assert!(set.contains("ρεφρέν"));
        assert!(set.contains("ρεφρεν"));
    }
}

#[test]
fn test_language_labels() {
    assert_eq!(Language::Greek.label(), "Greek");
    assert_eq!(Language::English.label(), "English");
    assert_eq!(Language::Both.label(), "Both");

    assert!(Language::Both.includes_greek());
    assert!(Language::Greek.includes_greek());
    assert!(!Language::English.includes_greek());
}
