//! Turns the per-artist cache into the text corpus the renderer consumes.
//!
//! A present cache file is authoritative and is never re-fetched; missing or
//! unreadable caches trigger a full catalog build that overwrites them.
//! Corpus assembly keeps album-then-track order, drops sentinel tracks, and
//! applies line-level language filtering last.

use crate::{
    catalog,
    language::{self, Language},
    lyrics::LyricsResolver,
    management::ArtistCacheManager,
    spotify::SpotifyClient,
    types::{ArtistCache, NO_LYRICS},
    warning,
};

/// Builds the language-filtered corpus for an artist, scoped to one album
/// when a name is given.
///
/// # Errors
/// Fails when the catalog build fails, or when the requested scope or
/// language yields no text at all.
pub async fn build_corpus(
    client: &mut SpotifyClient,
    resolver: &LyricsResolver,
    artist_name: &str,
    album_name: Option<&str>,
    language: Language,
) -> Result<String, String> {
    let cache = load_or_build(client, resolver, artist_name).await?;
    corpus_from_cache(&cache, album_name, language)
}

async fn load_or_build(
    client: &mut SpotifyClient,
    resolver: &LyricsResolver,
    artist_name: &str,
) -> Result<ArtistCache, String> {
    let manager = ArtistCacheManager::new(artist_name.to_string(), None);

    // Unreadable cache files count as a miss and get rebuilt.
    if let Ok(loaded) = manager.load_from_cache().await {
        if let Some(cache) = loaded.get_cache() {
            return Ok(cache);
        }
    }

    let cache = catalog::build(client, resolver, artist_name).await?;

    let manager = ArtistCacheManager::new(artist_name.to_string(), Some(cache.clone()));
    if let Err(err) = manager.save_to_cache().await {
        warning!("Cannot persist artist cache: {:?}", err);
    }

    Ok(cache)
}

/// Assembles the corpus from an already loaded cache.
///
/// Tracks whose lyrics equal the sentinel are excluded. An album filter
/// matches case-insensitively; an album name matching nothing yields the
/// same not-found error as an artist with no lyrics at all.
pub fn corpus_from_cache(
    cache: &ArtistCache,
    album_name: Option<&str>,
    language: Language,
) -> Result<String, String> {
    let wanted = album_name.map(str::to_lowercase);

    let mut lyrics = Vec::new();
    for album in &cache.albums {
        if let Some(wanted) = &wanted {
            if album.album_name.to_lowercase() != *wanted {
                continue;
            }
        }

        for track in &album.tracks {
            if track.lyrics != NO_LYRICS {
                lyrics.push(track.lyrics.as_str());
            }
        }
    }

    if lyrics.is_empty() {
        return Err(format!(
            "No lyrics found for {}.",
            scope_label(cache, album_name)
        ));
    }

    let filtered = filter_lines(&lyrics.join("\n"), language);
    if filtered.is_empty() {
        return Err(format!(
            "No {} lyrics found for {}.",
            language.label(),
            scope_label(cache, album_name)
        ));
    }

    Ok(filtered)
}

/// Line-level language filter. `both` passes text through untouched.
pub fn filter_lines(text: &str, language: Language) -> String {
    match language {
        Language::Both => text.to_string(),
        Language::Greek => keep_lines(text, language::is_greek_text),
        Language::English => keep_lines(text, language::is_english_text),
    }
}

fn keep_lines(text: &str, keep: fn(&str) -> bool) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && keep(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn scope_label(cache: &ArtistCache, album_name: Option<&str>) -> String {
    match album_name {
        Some(album) => format!("artist '{}' and album '{}'", cache.artist_name, album),
        None => format!("artist '{}'", cache.artist_name),
    }
}
