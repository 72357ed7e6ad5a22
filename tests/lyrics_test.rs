use wordify::lyrics::{LyricsExtractor, VideoHit, select_video};

// Helper to build a search hit
fn hit(id: &str, title: &str) -> VideoHit {
    VideoHit {
        id: id.to_string(),
        title: title.to_string(),
    }
}

#[test]
fn test_extract_after_english_marker() {
    let description = "New single out now!\nLYRICS:\nhello world this is a lyric line with enough words\ncredits: foo";

    let lyrics = LyricsExtractor::new().extract(description);
    assert_eq!(
        lyrics.as_deref(),
        Some("hello world this is a lyric line with enough words")
    );
}

#[test]
fn test_extract_marker_is_case_insensitive() {
    let extractor = LyricsExtractor::new();

    let lowercase = "lyrics:\nhello world this is a lyric line with enough words";
    assert!(extractor.extract(lowercase).is_some());

    // Accented Greek marker in capitals
    let greek = "ΣΤΊΧΟΙ:\nγεια σου κοσμε αυτο ειναι ενα τραγουδι με πολλα λογια";
    assert_eq!(
        extractor.extract(greek).as_deref(),
        Some("γεια σου κοσμε αυτο ειναι ενα τραγουδι με πολλα λογια")
    );
}

#[test]
fn test_extract_truncates_at_earliest_end_marker() {
    let description = "LYRICS:\nfirst part has exactly ten words right here we go\nfacebook: something\nmore trailing text\nsubscribe: channel";

    let lyrics = LyricsExtractor::new().extract(description);
    assert_eq!(
        lyrics.as_deref(),
        Some("first part has exactly ten words right here we go")
    );
}

#[test]
fn test_extract_drops_blank_lines() {
    let description = "LYRICS:\n\nfirst line of the song text\n\n\nsecond line with more words here\n";

    let lyrics = LyricsExtractor::new().extract(description).unwrap();
    assert_eq!(
        lyrics,
        "first line of the song text\nsecond line with more words here"
    );
}

#[test]
fn test_extract_rejects_short_blocks() {
    // Nine words is noise, not lyrics
    let description = "LYRICS:\nonly nine words are present in this lyric line";
    assert!(LyricsExtractor::new().extract(description).is_none());
}

#[test]
fn test_extract_without_marker() {
    let extractor = LyricsExtractor::new();

    assert!(
        extractor
            .extract("just a promo description with no markers at all")
            .is_none()
    );
    assert!(extractor.extract("").is_none());
}

#[test]
fn test_select_video_prefers_single_track_uploads() {
    let hits = vec![
        hit("a", "Artist - Album (FULL ALBUM)"),
        hit("b", "Artist - Track (Official Video)"),
    ];

    assert_eq!(select_video(&hits).unwrap().id, "b");
}

#[test]
fn test_select_video_falls_back_to_first_hit() {
    let hits = vec![hit("a", "Full Album Mix"), hit("b", "full album again")];

    assert_eq!(select_video(&hits).unwrap().id, "a");
    assert!(select_video(&[]).is_none());
}
