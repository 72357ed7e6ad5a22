use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    lyrics::{LyricsSource, SourceError, TrackQuery},
    types::{LyricsApiResponse, SourceTag},
};

/// Thin client for the lyrics mirror API.
///
/// The mirror indexes lyrics by Spotify track id and serves them as a list of
/// per-line word segments. A track the mirror does not know is a miss, not an
/// error; only transport and decode failures bubble up.
pub struct LyricsApiClient {
    http: Client,
    base_url: String,
}

impl LyricsApiClient {
    pub fn new(base_url: String) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        LyricsApiClient { http, base_url }
    }

    /// Fetches plain-text lyrics for a Spotify track id.
    ///
    /// Returns `Ok(None)` when the mirror has nothing for the track: a
    /// non-success status, an error payload, or an empty line list.
    pub async fn track_lyrics(&self, track_id: &str) -> Result<Option<String>, SourceError> {
        let api_url = format!(
            "{base}/?trackid={id}&format=txt",
            base = self.base_url,
            id = track_id
        );

        let response = self.http.get(&api_url).send().await?;
        if !response.status().is_success() {
            return Ok(None);
        }

        let payload: LyricsApiResponse = response.json().await?;
        if payload.error || payload.lines.is_empty() {
            return Ok(None);
        }

        let lyrics = payload
            .lines
            .into_iter()
            .map(|line| line.words)
            .collect::<Vec<_>>()
            .join("\n");

        Ok(Some(lyrics))
    }
}

/// Primary resolution strategy: look the track up on the lyrics mirror.
pub struct SpotifyLyricsSource {
    client: LyricsApiClient,
}

impl SpotifyLyricsSource {
    pub fn new(client: LyricsApiClient) -> Self {
        SpotifyLyricsSource { client }
    }
}

#[async_trait]
impl LyricsSource for SpotifyLyricsSource {
    fn tag(&self) -> SourceTag {
        SourceTag::Spotify
    }

    async fn try_fetch(&self, query: &TrackQuery) -> Result<Option<String>, SourceError> {
        self.client.track_lyrics(&query.track_id).await
    }
}
