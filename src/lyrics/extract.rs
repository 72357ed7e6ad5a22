use regex::Regex;

use crate::utils;

/// Marker phrases that open a lyrics block inside a video description.
/// Matched case-insensitively, in order; the first marker present wins.
const START_MARKERS: &[&str] = &[
    "LYRICS:",
    "ΣΤΙΧΟΙ:",
    "LYRICS\n",
    "ΣΤΙΧΟΙ\n",
    "---LYRICS---",
    "---ΣΤΙΧΟΙ---",
    "Στίχοι:",
    "lyrics-σίχοι:",
];

/// Marker phrases that close a lyrics block. The block is truncated at the
/// earliest one found after the start marker.
const END_MARKERS: &[&str] = &[
    "follow us:",
    "social media:",
    "credits:",
    "subscribe:",
    "ακολουθήστε μας:",
    "συντελεστές:",
    "facebook:",
    "instagram:",
    "spotify:",
    "music by:",
    "μουσική:",
    "directed by:",
    "subscribe to",
];

/// Blocks shorter than this many words are noise, not lyrics.
const MIN_WORDS: usize = 10;

/// Cuts a plausible lyrics block out of free-form YouTube description text.
///
/// Descriptions mix lyrics with promo links and credits. The extractor scans
/// for a known start marker, truncates at the earliest end marker after it,
/// strips blank lines, and keeps the result only when it is long enough to
/// actually be lyrics.
pub struct LyricsExtractor {
    start_markers: Vec<Regex>,
    end_markers: Vec<Regex>,
}

impl LyricsExtractor {
    pub fn new() -> Self {
        let compile = |marker: &&str| {
            Regex::new(&format!("(?i){}", regex::escape(marker))).unwrap()
        };

        LyricsExtractor {
            start_markers: START_MARKERS.iter().map(compile).collect(),
            end_markers: END_MARKERS.iter().map(compile).collect(),
        }
    }

    /// Returns the cleaned lyrics block, or `None` when the description holds
    /// no usable lyrics.
    ///
    /// # Arguments
    /// * `description` - Raw video description text.
    pub fn extract(&self, description: &str) -> Option<String> {
        if description.is_empty() {
            return None;
        }

        for marker in &self.start_markers {
            let found = match marker.find(description) {
                Some(found) => found,
                None => continue,
            };

            let block = description[found.end()..].trim();

            // Everything past the earliest closing marker is credits and
            // promo text.
            let mut cut = block.len();
            for end_marker in &self.end_markers {
                if let Some(end) = end_marker.find(block) {
                    cut = cut.min(end.start());
                }
            }

            let cleaned = block[..cut]
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("\n");

            if utils::word_count(&cleaned) >= MIN_WORDS {
                return Some(cleaned);
            }
        }

        None
    }
}

impl Default for LyricsExtractor {
    fn default() -> Self {
        Self::new()
    }
}
