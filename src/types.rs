use serde::{Deserialize, Serialize};
use tabled::Tabled;

pub const NO_LYRICS: &str = "No lyrics found for this track.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSearchResponse {
    pub artists: ArtistsContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistsContainer {
    pub items: Vec<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumsPage {
    pub items: Vec<AlbumSummary>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub id: String,
    pub name: String,
    pub release_date: String,
    pub album_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumDetail {
    pub id: String,
    pub name: String,
    pub release_date: String,
    pub total_tracks: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksPage {
    pub items: Vec<TrackItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItem {
    pub id: Option<String>,
    pub name: String,
    pub track_number: u32,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LyricsApiResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub lines: Vec<LyricsLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LyricsLine {
    pub words: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceTag {
    Cache,
    Spotify,
    Youtube,
    #[serde(rename = "none")]
    NotFound,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRecord {
    pub track_name: String,
    pub track_id: String,
    pub track_number: u32,
    pub duration_ms: u64,
    pub lyrics: String,
    pub lyrics_source: SourceTag,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub album_name: String,
    pub album_id: String,
    pub release_date: String,
    pub total_tracks: u32,
    pub tracks: Vec<TrackRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceStats {
    pub total_tracks: u32,
    pub spotify_lyrics: u32,
    pub youtube_lyrics: u32,
    pub cache_hits: u32,
    pub no_lyrics: u32,
    pub errors: u32,
}

impl SourceStats {
    pub fn record(&mut self, tag: SourceTag) {
        self.total_tracks += 1;
        match tag {
            SourceTag::Cache => self.cache_hits += 1,
            SourceTag::Spotify => self.spotify_lyrics += 1,
            SourceTag::Youtube => self.youtube_lyrics += 1,
            SourceTag::NotFound => self.no_lyrics += 1,
            SourceTag::Error => self.errors += 1,
        }
    }

    pub fn with_lyrics(&self) -> u32 {
        self.cache_hits + self.spotify_lyrics + self.youtube_lyrics
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistCache {
    pub artist_name: String,
    pub artist_id: String,
    pub albums: Vec<AlbumRecord>,
    pub stats: SourceStats,
}

#[derive(Tabled)]
pub struct StatsTableRow {
    pub source: String,
    pub tracks: u32,
    pub share: String,
}
