//! # Lyrics Resolution Module
//!
//! Resolves lyrics for individual tracks by walking an ordered chain of
//! sources until one produces text. The chain mirrors how cheap each source
//! is to ask:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     LyricsResolver                       │
//! │                                                          │
//! │  CacheSource ──► SpotifyLyricsSource ──► YoutubeSource   │
//! │  (local file)    (lyrics mirror API)     (description    │
//! │                                           scraping)      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Each source answers one of three ways: `Ok(Some(lyrics))` ends the walk,
//! `Ok(None)` passes the track to the next source, and `Err` aborts the walk
//! for this track with an `error` tag. A track no source can answer gets the
//! shared sentinel string and a `none` tag.
//!
//! ## Caching
//!
//! Lyrics fetched from a remote source are written back to the track-level
//! cache before they are returned, and exhausted tracks cache the sentinel,
//! so a rerun never repeats a remote lookup it already made. Errors are never
//! cached; a failed track is retried on the next run.
//!
//! ## Concurrency
//!
//! The resolver holds the cache behind an async mutex and takes `&self`, so
//! several tracks can resolve in flight at once against shared sources.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    config,
    management::LyricsCacheManager,
    types::{NO_LYRICS, SourceTag},
    warning,
};

pub mod extract;
pub mod spotify;
pub mod youtube;

pub use extract::LyricsExtractor;
pub use spotify::{LyricsApiClient, SpotifyLyricsSource};
pub use youtube::{VideoHit, YoutubeClient, YoutubeSource, select_video};

/// Failure inside a single source while resolving one track. Never fatal to
/// the run; the track is tagged and the walk moves on.
#[derive(Debug)]
pub enum SourceError {
    /// Transport or status failure talking to a remote endpoint.
    Http(reqwest::Error),
    /// The endpoint answered, but the payload was not usable.
    Parse(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Http(err) => write!(f, "{}", err),
            SourceError::Parse(msg) => write!(f, "{}", msg),
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Http(err)
    }
}

/// Identity of one track to resolve lyrics for.
#[derive(Debug, Clone)]
pub struct TrackQuery {
    pub track_id: String,
    pub track_name: String,
    pub artist_name: String,
}

/// One strategy in the resolution chain.
#[async_trait]
pub trait LyricsSource: Send + Sync {
    /// Tag recorded on tracks this source answers.
    fn tag(&self) -> SourceTag;

    /// Attempts to produce lyrics for the track. `Ok(None)` means "not here,
    /// ask the next source".
    async fn try_fetch(&self, query: &TrackQuery) -> Result<Option<String>, SourceError>;
}

/// First link in the chain: previously resolved lyrics from the local cache.
pub struct CacheSource {
    cache: Arc<Mutex<LyricsCacheManager>>,
}

impl CacheSource {
    pub fn new(cache: Arc<Mutex<LyricsCacheManager>>) -> Self {
        CacheSource { cache }
    }
}

#[async_trait]
impl LyricsSource for CacheSource {
    fn tag(&self) -> SourceTag {
        SourceTag::Cache
    }

    async fn try_fetch(&self, query: &TrackQuery) -> Result<Option<String>, SourceError> {
        Ok(self.cache.lock().await.get(&query.track_id))
    }
}

/// Walks the source chain for one track at a time and keeps the track-level
/// cache current with whatever the chain learned.
pub struct LyricsResolver {
    sources: Vec<Box<dyn LyricsSource>>,
    cache: Arc<Mutex<LyricsCacheManager>>,
}

impl LyricsResolver {
    /// Builds the default chain: cache, then the lyrics mirror, then YouTube
    /// description scraping.
    pub fn new(cache: Arc<Mutex<LyricsCacheManager>>) -> Self {
        let sources: Vec<Box<dyn LyricsSource>> = vec![
            Box::new(CacheSource::new(Arc::clone(&cache))),
            Box::new(SpotifyLyricsSource::new(LyricsApiClient::new(
                config::lyrics_apiurl(),
            ))),
            Box::new(YoutubeSource::new(YoutubeClient::new(
                config::youtube_baseurl(),
            ))),
        ];

        LyricsResolver { sources, cache }
    }

    /// Builds a resolver over an explicit chain. Order is significant.
    pub fn with_sources(
        sources: Vec<Box<dyn LyricsSource>>,
        cache: Arc<Mutex<LyricsCacheManager>>,
    ) -> Self {
        LyricsResolver { sources, cache }
    }

    /// Resolves lyrics for one track.
    ///
    /// Always comes back with usable text and the tag describing where it
    /// came from: real lyrics tagged with their source, the sentinel tagged
    /// `none` when every source came up empty, or an error message tagged
    /// `error` when a source failed outright.
    pub async fn resolve(&self, query: &TrackQuery) -> (String, SourceTag) {
        for source in &self.sources {
            match source.try_fetch(query).await {
                Ok(Some(lyrics)) => {
                    if source.tag() != SourceTag::Cache {
                        self.store(&query.track_id, &lyrics).await;
                    }
                    return (lyrics, source.tag());
                }
                Ok(None) => continue,
                Err(err) => {
                    return (format!("Error fetching lyrics: {}", err), SourceTag::Error);
                }
            }
        }

        self.store(&query.track_id, NO_LYRICS).await;
        (NO_LYRICS.to_string(), SourceTag::NotFound)
    }

    async fn store(&self, track_id: &str, lyrics: &str) {
        let mut cache = self.cache.lock().await;
        cache.set(track_id, lyrics);
        if let Err(err) = cache.persist().await {
            warning!("Cannot persist lyrics cache: {:?}", err);
        }
    }
}
