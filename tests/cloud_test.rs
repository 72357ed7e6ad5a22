use std::collections::HashSet;

use wordify::cloud::{self, layout::Rect};
use wordify::language::{self, Language};

fn no_stops() -> HashSet<String> {
    HashSet::new()
}

#[test]
fn test_word_frequencies_counts_and_order() {
    let frequencies =
        cloud::word_frequencies("night night night star star moon", Language::English, &no_stops());

    // Should be sorted by descending count
    assert_eq!(
        frequencies,
        vec![
            ("night".to_string(), 3),
            ("star".to_string(), 2),
            ("moon".to_string(), 1),
        ]
    );
}

#[test]
fn test_word_frequencies_breaks_ties_alphabetically() {
    let frequencies =
        cloud::word_frequencies("beta alpha beta alpha", Language::English, &no_stops());

    assert_eq!(
        frequencies,
        vec![("alpha".to_string(), 2), ("beta".to_string(), 2)]
    );
}

#[test]
fn test_word_frequencies_drops_stop_words() {
    let stops = language::stop_word_set(Language::English);
    let frequencies =
        cloud::word_frequencies("the night the stars the", Language::English, &stops);

    assert!(frequencies.iter().all(|(word, _)| word != "the"));
    assert!(frequencies.iter().any(|(word, _)| word == "night"));
}

#[test]
fn test_word_frequencies_merges_accented_greek_forms() {
    let frequencies =
        cloud::word_frequencies("Τραγούδι τραγουδι ΤΡΑΓΟΎΔΙ", Language::Greek, &no_stops());

    assert_eq!(frequencies, vec![("τραγουδι".to_string(), 3)]);
}

#[test]
fn test_word_frequencies_drops_short_and_numeric_tokens() {
    let frequencies =
        cloud::word_frequencies("a 1999 99 ok words words", Language::English, &no_stops());

    assert_eq!(
        frequencies,
        vec![("words".to_string(), 2), ("ok".to_string(), 1)]
    );
}

#[test]
fn test_word_frequencies_trims_punctuation() {
    let frequencies =
        cloud::word_frequencies("(night) night! night,", Language::English, &no_stops());

    assert_eq!(frequencies, vec![("night".to_string(), 3)]);
}

#[test]
fn test_word_frequencies_caps_word_count() {
    let text: String = (0..250).map(|i| format!("word{:03} ", i)).collect();
    let frequencies = cloud::word_frequencies(&text, Language::English, &no_stops());

    assert_eq!(frequencies.len(), 200);
    assert_eq!(frequencies[0].0, "word000");
    assert_eq!(frequencies[199].0, "word199");
}

#[test]
fn test_rect_intersections() {
    let base = Rect {
        x: 10,
        y: 10,
        width: 20,
        height: 10,
    };

    let overlapping = Rect {
        x: 25,
        y: 15,
        width: 20,
        height: 10,
    };
    assert!(base.intersects(&overlapping));

    // Edge-to-edge contact does not count as an intersection
    let touching = Rect {
        x: 30,
        y: 10,
        width: 5,
        height: 5,
    };
    assert!(!base.intersects(&touching));

    let below = Rect {
        x: 0,
        y: 25,
        width: 50,
        height: 5,
    };
    assert!(!base.intersects(&below));
}

#[test]
fn test_render_is_deterministic() {
    // Skip on hosts without any of the probed fonts
    let Some(path) = cloud::find_font() else {
        return;
    };
    let bytes = std::fs::read(&path).expect("read font file");
    let font = ab_glyph::FontVec::try_from_vec(bytes).expect("parse font file");

    let text = "stars shine bright tonight stars shine stars";
    let title = "Word Cloud for Test (English lyrics)";

    let first =
        cloud::render_image(&font, text, title, Language::English).expect("render first image");
    let second =
        cloud::render_image(&font, text, title, Language::English).expect("render second image");

    assert_eq!(first.dimensions(), (1600, 900));
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn test_render_rejects_empty_corpus() {
    let Some(path) = cloud::find_font() else {
        return;
    };
    let bytes = std::fs::read(&path).expect("read font file");
    let font = ab_glyph::FontVec::try_from_vec(bytes).expect("parse font file");

    let result = cloud::render_image(&font, "the a of", "Word Cloud", Language::English);
    assert!(matches!(result, Err(cloud::RenderError::NoWords)));
}
