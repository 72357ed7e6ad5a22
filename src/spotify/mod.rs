//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used to walk an
//! artist's catalog: artist search, album listing, album details, and track
//! listing, plus the client-credentials authentication that backs them. It
//! handles all HTTP communication, token lifecycle, error handling, and rate
//! limiting for the catalog side of the application.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Catalog Builder)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (Client Credentials)
//!     ├── Artist Operations (Search)
//!     └── Album Operations (Listing, Details, Tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Client Object
//!
//! All operations hang off [`SpotifyClient`], which owns a single
//! `reqwest::Client` and a [`TokenManager`]. The client is constructed once
//! at startup and passed by reference to whichever component needs catalog
//! access; there is no ambient global state.
//!
//! ```rust
//! let mut spotify = SpotifyClient::new().await;
//! let artist = spotify.search_artist("Iron Maiden").await?;
//! ```
//!
//! ## Authentication Strategy
//!
//! The catalog endpoints only need application-level access, so the module
//! uses the OAuth 2.0 client-credentials grant: the client ID and secret are
//! exchanged for a short-lived access token, which is cached on disk and
//! refreshed with a safety margin before expiry. No user interaction or
//! callback server is involved.
//!
//! ## Error Handling
//!
//! - **Rate limiting**: 429 responses honor the `Retry-After` header before
//!   the request is retried; abnormal delays produce a warning instead.
//! - **Transient upstream failures**: 502 responses are retried after a
//!   10-second pause.
//! - **Everything else**: network errors and other HTTP failures are
//!   propagated to the caller as catalog-fatal errors.
//!
//! ## API Coverage
//!
//! - `GET /search` - Artist search (first match wins)
//! - `GET /artists/{id}/albums` - Albums and singles with offset pagination
//! - `GET /albums/{id}` - Album details (release date, track count)
//! - `GET /albums/{id}/tracks` - Track listing with offset pagination
//! - `POST /api/token` - Client-credentials token requests

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{management::TokenManager, warning};

pub mod albums;
pub mod artists;
pub mod auth;

pub struct SpotifyClient {
    http: Client,
    tokens: TokenManager,
}

impl SpotifyClient {
    /// Creates a client with a fresh HTTP connection pool and whatever token
    /// is still cached on disk. Credentials are not read until the first
    /// request that needs a new token.
    pub async fn new() -> Self {
        Self {
            http: Client::new(),
            tokens: TokenManager::load().await,
        }
    }

    /// Performs an authenticated GET against the Web API and decodes the
    /// JSON response, retrying on 502 and honoring `Retry-After` on 429.
    async fn get_json<T: DeserializeOwned>(&mut self, api_url: &str) -> Result<T, String> {
        loop {
            let token = self.tokens.get_valid_token(&self.http).await?;
            let response = self
                .http
                .get(api_url)
                .bearer_auth(token)
                .send()
                .await
                .map_err(|e| e.to_string())?;

            if response.status() == StatusCode::TOO_MANY_REQUESTS {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(0);
                if retry_after <= 120 {
                    sleep(Duration::from_secs(retry_after)).await;
                    continue; // retry
                }
                warning!(
                    "Retry after has reached an abnormal high of {} seconds. Try again later.",
                    retry_after
                );
                return Err(format!("rate limited for {} seconds", retry_after));
            }

            let response = match response.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }

                    return Err(err.to_string()); // propagate other errors
                }
            };

            return response.json::<T>().await.map_err(|e| e.to_string());
        }
    }
}
