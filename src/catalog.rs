//! Walks an artist's full catalog and assembles the per-artist cache.
//!
//! The build resolves the artist by name, pages through every album and
//! single, pages through each album's tracks, and runs every track through
//! the lyrics resolver with a small bounded fan-out. Track order inside an
//! album and album order across the catalog follow the remote listing, not
//! fetch completion order. Catalog enumeration failures abort the build;
//! per-track lyric faults do not.

use std::time::Duration;

use futures::{StreamExt, stream};
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    info,
    lyrics::{LyricsResolver, TrackQuery},
    spotify::SpotifyClient,
    success,
    types::{AlbumRecord, ArtistCache, SourceStats, StatsTableRow, TrackRecord},
    utils, warning,
};

/// How many tracks resolve lyrics in flight per album.
const RESOLVE_WIDTH: usize = 4;

/// Builds the full artist cache, lyrics and stats included.
///
/// # Arguments
/// * `client` - Authenticated catalog client.
/// * `resolver` - Lyrics resolution chain shared across tracks.
/// * `artist_name` - Artist to look up, as typed by the user.
///
/// # Errors
/// Returns an error when the artist cannot be found or when album/track
/// enumeration fails. Lyric faults for single tracks are recorded inline
/// and never fail the build.
pub async fn build(
    client: &mut SpotifyClient,
    resolver: &LyricsResolver,
    artist_name: &str,
) -> Result<ArtistCache, String> {
    let artist = client
        .search_artist(artist_name)
        .await?
        .ok_or_else(|| format!("Artist '{}' not found.", artist_name))?;

    info!("Found artist: {} ({})", artist.name, artist.id);

    let album_summaries = client.artist_albums(&artist.id).await?;
    info!("Found {} albums and singles.", album_summaries.len());

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let albums_total = album_summaries.len();
    let mut albums = Vec::new();
    let mut stats = SourceStats::default();

    for (album_index, summary) in album_summaries.into_iter().enumerate() {
        pb.set_message(format!(
            "Processing album: {album_name} ({albums_count}/{albums_total})",
            album_name = summary.name,
            albums_count = album_index + 1,
            albums_total = albums_total
        ));

        let detail = client.album(&summary.id).await?;
        let track_items = client.album_tracks(&summary.id).await?;

        // Tracks without an id cannot be resolved or cached; skip them.
        let queries: Vec<(TrackQuery, u32, u64)> = track_items
            .into_iter()
            .filter_map(|item| {
                let track_id = item.id?;
                Some((
                    TrackQuery {
                        track_id,
                        track_name: item.name,
                        artist_name: artist.name.clone(),
                    },
                    item.track_number,
                    item.duration_ms,
                ))
            })
            .collect();

        let tracks: Vec<TrackRecord> = stream::iter(queries)
            .map(|(query, track_number, duration_ms)| {
                let pb = &pb;
                async move {
                    pb.set_message(format!(
                        "Fetching lyrics: {track_name} [{duration}]",
                        track_name = query.track_name,
                        duration = utils::format_duration(duration_ms)
                    ));

                    let (lyrics, lyrics_source) = resolver.resolve(&query).await;
                    TrackRecord {
                        track_name: query.track_name,
                        track_id: query.track_id,
                        track_number,
                        duration_ms,
                        lyrics,
                        lyrics_source,
                    }
                }
            })
            .buffered(RESOLVE_WIDTH)
            .collect()
            .await;

        for track in &tracks {
            stats.record(track.lyrics_source);
        }

        albums.push(AlbumRecord {
            album_name: detail.name,
            album_id: detail.id,
            release_date: detail.release_date,
            total_tracks: detail.total_tracks,
            tracks,
        });
    }

    pb.finish_and_clear();
    success!("Processed {} albums for {}.", albums.len(), artist.name);

    print_stats(&stats);

    Ok(ArtistCache {
        artist_name: artist.name,
        artist_id: artist.id,
        albums,
        stats,
    })
}

/// Prints the per-source breakdown for a finished build.
fn print_stats(stats: &SourceStats) {
    let rows = vec![
        StatsTableRow {
            source: "Spotify".to_string(),
            tracks: stats.spotify_lyrics,
            share: utils::format_share(stats.spotify_lyrics, stats.total_tracks),
        },
        StatsTableRow {
            source: "YouTube".to_string(),
            tracks: stats.youtube_lyrics,
            share: utils::format_share(stats.youtube_lyrics, stats.total_tracks),
        },
        StatsTableRow {
            source: "Cache".to_string(),
            tracks: stats.cache_hits,
            share: utils::format_share(stats.cache_hits, stats.total_tracks),
        },
    ];

    let table = Table::new(rows);
    println!("{}", table);

    info!("Total tracks processed: {}", stats.total_tracks);
    info!(
        "Lyrics coverage: {count} of {total} tracks ({share})",
        count = stats.with_lyrics(),
        total = stats.total_tracks,
        share = utils::format_share(stats.with_lyrics(), stats.total_tracks)
    );

    if stats.no_lyrics > 0 {
        warning!(
            "Missing lyrics: {count} tracks ({share})",
            count = stats.no_lyrics,
            share = utils::format_share(stats.no_lyrics, stats.total_tracks)
        );
    }

    if stats.errors > 0 {
        warning!("Errors encountered: {} tracks", stats.errors);
    }
}
