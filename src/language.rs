//! Script classification, diacritic normalization and stop-word assembly.
//!
//! Greek is detected by character-block membership, English by the share of
//! plain ASCII-alphabetic tokens in a line. Normalization folds accented and
//! unaccented spellings of the same Greek word into one form so frequency
//! counting merges them.

use std::collections::HashSet;
use std::fmt;

use clap::ValueEnum;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Language scope for corpus filtering and stop-word selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    Greek,
    English,
    Both,
}

impl Language {
    /// Human-readable label used in titles and messages.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Greek => "Greek",
            Language::English => "English",
            Language::Both => "Both",
        }
    }

    /// True when the mode admits Greek text, which means tokens may carry
    /// diacritics and want normalization.
    pub fn includes_greek(&self) -> bool {
        matches!(self, Language::Greek | Language::Both)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::Greek => "greek",
            Language::English => "english",
            Language::Both => "both",
        })
    }
}

/// True when the text contains at least one character from the Greek and
/// Coptic or Greek Extended blocks.
pub fn is_greek_text(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, '\u{0370}'..='\u{03FF}' | '\u{1F00}'..='\u{1FFF}'))
}

/// True when more than half of the whitespace-delimited tokens are purely
/// ASCII alphabetic, with apostrophes and hyphens allowed.
pub fn is_english_text(text: &str) -> bool {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return false;
    }

    let english = words
        .iter()
        .filter(|word| {
            word.chars()
                .all(|c| c.is_ascii_alphabetic() || c == '\'' || c == '-')
        })
        .count();

    english * 2 > words.len()
}

/// Drops combining marks after canonical decomposition, keeping letter case.
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Lowercases a word, additionally de-accenting it when it is Greek.
pub fn normalize_word(word: &str) -> String {
    let lowered = word.to_lowercase();
    if is_greek_text(&lowered) {
        strip_accents(&lowered)
    } else {
        lowered
    }
}

/// Song-domain noise words kept out of every cloud regardless of language
/// mode. Greek entries appear in accented and de-accented form because
/// normalization may or may not have run upstream.
#[rustfmt::skip]
const CUSTOM_STOP_WORDS: &[&str] = &[
    // English
    "chorus", "verse", "bridge", "yeah", "oh", "uh", "hey",
    "gonna", "wanna", "gotta", "let", "like", "know", "way",
    "make", "made", "say", "said", "get", "got", "one",
    // Greek
    "ρεφρέν", "ρεφρεν", "στίχος", "στιχος", "γέφυρα", "γεφυρα",
    "είναι", "ειναι", "έχω", "εχω", "έχει", "εχει",
    "είμαι", "ειμαι", "ήταν", "ηταν", "κάνω", "κανω",
    "κάνει", "κανει", "πάει", "παει", "πάω", "παω",
    "μου", "σου", "του", "της", "μας", "σας", "τους",
    "και", "να", "θα", "τι", "που", "πως", "γιατί", "γιατι",
    "μην", "ένα", "ενα", "μία", "μια", "ένας", "ενας",
    "την", "τον", "εγώ", "εγω", "εσύ", "εσυ",
    "αυτό", "αυτο", "αυτή", "αυτη", "αυτός", "αυτος",
    "μα", "μες", "όλοι", "ολοι", "όλα", "ολα",
    "έχεις", "εχεις", "κάτι", "κατι", "μέσα", "μεσα",
    "πια", "στους", "είσαι", "εισαι", "όταν", "οταν",
    "απ", "σ", "πιο", "κ", "λες", "λεω", "στα", "σαν",
    "μονο", "καθε", "παντα", "ποσο", "ξανα", "ξερω",
    "αλλη", "κατω", "πανω", "παλι", "εχουνε",
    "ακομα", "στις", "λοιπον",
];

/// Builds the stop-word set for a language mode: the base lexicon for each
/// selected language, Greek entries lowercased, plus the custom list.
pub fn stop_word_set(language: Language) -> HashSet<String> {
    let mut stops = HashSet::new();

    if matches!(language, Language::English | Language::Both) {
        stops.extend(stop_words::get(stop_words::LANGUAGE::English));
    }

    if language.includes_greek() {
        stops.extend(
            stop_words::get(stop_words::LANGUAGE::Greek)
                .into_iter()
                .map(|word| word.to_lowercase()),
        );
    }

    stops.extend(CUSTOM_STOP_WORDS.iter().map(|word| word.to_string()));
    stops
}
