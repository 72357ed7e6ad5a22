use wordify::{
    corpus,
    language::Language,
    types::{AlbumRecord, ArtistCache, NO_LYRICS, SourceStats, SourceTag, TrackRecord},
};

// Helper to build a track record with fixed metadata
fn track(name: &str, lyrics: &str, source: SourceTag) -> TrackRecord {
    TrackRecord {
        track_name: name.to_string(),
        track_id: format!("{}-id", name),
        track_number: 1,
        duration_ms: 200_000,
        lyrics: lyrics.to_string(),
        lyrics_source: source,
    }
}

fn album(name: &str, tracks: Vec<TrackRecord>) -> AlbumRecord {
    AlbumRecord {
        album_name: name.to_string(),
        album_id: format!("{}-id", name),
        release_date: "2020-01-01".to_string(),
        total_tracks: tracks.len() as u32,
        tracks,
    }
}

fn cache_with_albums(albums: Vec<AlbumRecord>) -> ArtistCache {
    ArtistCache {
        artist_name: "Test Artist".to_string(),
        artist_id: "artist-1".to_string(),
        albums,
        stats: SourceStats::default(),
    }
}

#[test]
fn test_corpus_keeps_album_then_track_order() {
    let cache = cache_with_albums(vec![
        album(
            "First",
            vec![
                track("a", "alpha lines", SourceTag::Spotify),
                track("b", "beta lines", SourceTag::Cache),
            ],
        ),
        album("Second", vec![track("c", "gamma lines", SourceTag::Youtube)]),
    ]);

    let corpus = corpus::corpus_from_cache(&cache, None, Language::Both).unwrap();
    assert_eq!(corpus, "alpha lines\nbeta lines\ngamma lines");
}

#[test]
fn test_corpus_excludes_sentinel_tracks() {
    let cache = cache_with_albums(vec![album(
        "Only",
        vec![
            track("a", "real lyrics here", SourceTag::Spotify),
            track("b", NO_LYRICS, SourceTag::NotFound),
        ],
    )]);

    let corpus = corpus::corpus_from_cache(&cache, None, Language::Both).unwrap();
    assert_eq!(corpus, "real lyrics here");
}

#[test]
fn test_corpus_album_filter_is_case_insensitive() {
    let cache = cache_with_albums(vec![
        album(
            "Powerslave",
            vec![track("a", "album one text", SourceTag::Spotify)],
        ),
        album(
            "Killers",
            vec![track("b", "album two text", SourceTag::Spotify)],
        ),
    ]);

    let corpus = corpus::corpus_from_cache(&cache, Some("powerslave"), Language::Both).unwrap();
    assert_eq!(corpus, "album one text");

    let corpus = corpus::corpus_from_cache(&cache, Some("KILLERS"), Language::Both).unwrap();
    assert_eq!(corpus, "album two text");
}

#[test]
fn test_corpus_unknown_album_is_not_found() {
    let cache = cache_with_albums(vec![album(
        "Known",
        vec![track("a", "some text", SourceTag::Spotify)],
    )]);

    let err = corpus::corpus_from_cache(&cache, Some("Unknown"), Language::Both).unwrap_err();
    assert_eq!(
        err,
        "No lyrics found for artist 'Test Artist' and album 'Unknown'."
    );
}

#[test]
fn test_corpus_all_sentinel_is_not_found() {
    let cache = cache_with_albums(vec![album(
        "Silent",
        vec![track("a", NO_LYRICS, SourceTag::NotFound)],
    )]);

    let err = corpus::corpus_from_cache(&cache, None, Language::Both).unwrap_err();
    assert_eq!(err, "No lyrics found for artist 'Test Artist'.");
}

#[test]
fn test_corpus_language_filtering() {
    let cache = cache_with_albums(vec![album(
        "Mixed",
        vec![track("a", "hello\nγειά σου\n", SourceTag::Spotify)],
    )]);

    assert_eq!(
        corpus::corpus_from_cache(&cache, None, Language::English).unwrap(),
        "hello"
    );
    assert_eq!(
        corpus::corpus_from_cache(&cache, None, Language::Greek).unwrap(),
        "γειά σου"
    );
    assert_eq!(
        corpus::corpus_from_cache(&cache, None, Language::Both).unwrap(),
        "hello\nγειά σου\n"
    );
}

#[test]
fn test_corpus_empty_after_language_filter_is_an_error() {
    let cache = cache_with_albums(vec![album(
        "Only",
        vec![track("a", "only english lines here", SourceTag::Spotify)],
    )]);

    let err = corpus::corpus_from_cache(&cache, None, Language::Greek).unwrap_err();
    assert_eq!(err, "No Greek lyrics found for artist 'Test Artist'.");
}

#[test]
fn test_filter_lines_drops_blank_lines() {
    let text = "first english line\n\n  \nγραμμή στα ελληνικά\nsecond english line";

    assert_eq!(
        corpus::filter_lines(text, Language::English),
        "first english line\nsecond english line"
    );
    assert_eq!(
        corpus::filter_lines(text, Language::Greek),
        "γραμμή στα ελληνικά"
    );
}
