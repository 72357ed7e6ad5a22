//! YouTube description scraping via the public `youtubei` web endpoints.
//!
//! The endpoints want an API key and client version that only exist inside
//! the homepage markup, so the client bootstraps itself once per process:
//! fetch the homepage, lift both values out of the embedded config blob, and
//! reuse them for every search and player call afterwards.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tokio::sync::OnceCell;

use crate::{
    lyrics::{LyricsExtractor, LyricsSource, SourceError, TrackQuery},
    types::SourceTag,
};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// How many search results to consider per track.
const SEARCH_LIMIT: usize = 2;

struct Innertube {
    api_key: String,
    client_version: String,
}

/// A video surfaced by a search call.
#[derive(Debug, Clone)]
pub struct VideoHit {
    pub id: String,
    pub title: String,
}

pub struct YoutubeClient {
    http: Client,
    base_url: String,
    innertube: OnceCell<Innertube>,
}

impl YoutubeClient {
    pub fn new(base_url: String) -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        YoutubeClient {
            http,
            base_url,
            innertube: OnceCell::new(),
        }
    }

    /// Runs a search query and returns the first few video results in the
    /// order the response lists them.
    pub async fn search_videos(&self, query: &str) -> Result<Vec<VideoHit>, SourceError> {
        let response = self.call("search", json!({ "query": query })).await?;

        let mut hits = Vec::new();
        collect_video_hits(&response, &mut hits);
        hits.truncate(SEARCH_LIMIT);

        Ok(hits)
    }

    /// Returns the full description text of a video, or `None` when the
    /// player response does not carry one.
    pub async fn video_description(&self, video_id: &str) -> Result<Option<String>, SourceError> {
        let response = self.call("player", json!({ "videoId": video_id })).await?;

        Ok(response
            .pointer("/videoDetails/shortDescription")
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    async fn call(&self, endpoint: &str, payload: Value) -> Result<Value, SourceError> {
        let innertube = self.innertube().await?;

        let mut body = json!({
            "context": {
                "client": {
                    "clientName": "WEB",
                    "clientVersion": innertube.client_version,
                }
            }
        });
        if let (Value::Object(body_map), Value::Object(payload_map)) = (&mut body, payload) {
            body_map.extend(payload_map);
        }

        let api_url = format!(
            "{base}/youtubei/v1/{endpoint}?key={key}&prettyPrint=false",
            base = self.base_url,
            key = innertube.api_key
        );

        let response = self
            .http
            .post(&api_url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    async fn innertube(&self) -> Result<&Innertube, SourceError> {
        self.innertube
            .get_or_try_init(|| async {
                let page = self
                    .http
                    .get(&self.base_url)
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await?;

                let api_key = parse_page_value(&page, "INNERTUBE_API_KEY").ok_or_else(|| {
                    SourceError::Parse("INNERTUBE_API_KEY not found in page".into())
                })?;
                let client_version =
                    parse_page_value(&page, "INNERTUBE_CLIENT_VERSION").ok_or_else(|| {
                        SourceError::Parse("INNERTUBE_CLIENT_VERSION not found in page".into())
                    })?;

                Ok(Innertube {
                    api_key,
                    client_version,
                })
            })
            .await
    }
}

/// Picks the most promising search hit. Full-album uploads bury single-track
/// lyrics, so a title without that phrase wins over raw search order.
pub fn select_video(hits: &[VideoHit]) -> Option<&VideoHit> {
    hits.iter()
        .find(|hit| !hit.title.to_lowercase().contains("full album"))
        .or_else(|| hits.first())
}

/// Pulls a quoted string value for `key` out of the config blob embedded in
/// the homepage markup.
fn parse_page_value(page: &str, key: &str) -> Option<String> {
    let needle = format!("\"{key}\":\"");
    let start = page.find(&needle)? + needle.len();
    let end = page[start..].find('"')? + start;

    Some(page[start..end].to_string())
}

/// Walks the response tree collecting `videoRenderer` nodes. Search responses
/// nest them at varying depths depending on the result layout.
fn collect_video_hits(value: &Value, hits: &mut Vec<VideoHit>) {
    match value {
        Value::Object(map) => {
            if let Some(renderer) = map.get("videoRenderer") {
                let id = renderer.get("videoId").and_then(Value::as_str);
                let title = renderer.pointer("/title/runs/0/text").and_then(Value::as_str);
                if let (Some(id), Some(title)) = (id, title) {
                    hits.push(VideoHit {
                        id: id.to_string(),
                        title: title.to_string(),
                    });
                }
            }
            for nested in map.values() {
                collect_video_hits(nested, hits);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_video_hits(item, hits);
            }
        }
        _ => {}
    }
}

/// Fallback resolution strategy: search YouTube for the track and mine the
/// top video description for a lyrics block.
pub struct YoutubeSource {
    client: YoutubeClient,
    extractor: LyricsExtractor,
}

impl YoutubeSource {
    pub fn new(client: YoutubeClient) -> Self {
        YoutubeSource {
            client,
            extractor: LyricsExtractor::new(),
        }
    }
}

#[async_trait]
impl LyricsSource for YoutubeSource {
    fn tag(&self) -> SourceTag {
        SourceTag::Youtube
    }

    async fn try_fetch(&self, query: &TrackQuery) -> Result<Option<String>, SourceError> {
        let search = format!("{} {}", query.artist_name, query.track_name);
        let hits = self.client.search_videos(&search).await?;

        let video = match select_video(&hits) {
            Some(video) => video,
            None => return Ok(None),
        };

        let description = match self.client.video_description(&video.id).await? {
            Some(description) => description,
            None => return Ok(None),
        };

        Ok(self.extractor.extract(&description))
    }
}
