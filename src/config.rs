//! Configuration management for wordify.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials, the
//! lyrics API endpoint, cache locations, and the rendering font.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from `.env` files.
///
/// Reads a `.env` in the current working directory first, then one in the
/// platform-specific local data directory under `wordify/.env`. Both files
/// are optional; variables already present in the environment win. The data
/// directory is created if it doesn't exist so a template can be placed
/// there.
///
/// # Directory Structure
///
/// The data-directory `.env` is looked up in:
/// - Linux: `~/.local/share/wordify/.env`
/// - macOS: `~/Library/Application Support/wordify/.env`
/// - Windows: `%LOCALAPPDATA%/wordify/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    // Working-directory .env, if any
    dotenv::dotenv().ok();

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("wordify/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_ID` environment variable which contains
/// the client ID obtained when registering the application with Spotify's
/// developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_SECRET` environment variable which contains
/// the client secret obtained when registering the application with
/// Spotify's developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Reads the `SPOTIFY_API_URL` environment variable, falling back to the
/// public endpoint when unset.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify token exchange URL for the client-credentials grant.
///
/// Reads the `SPOTIFY_TOKEN_URL` environment variable, falling back to the
/// public accounts endpoint when unset.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the base URL of the lyrics API.
///
/// Reads the `LYRICS_API_URL` environment variable, falling back to the
/// public deployment when unset.
pub fn lyrics_apiurl() -> String {
    env::var("LYRICS_API_URL")
        .unwrap_or_else(|_| "https://spotify-lyrics-api-pi.vercel.app".to_string())
}

/// Returns the YouTube base URL used for search and description lookups.
///
/// Reads the `YOUTUBE_BASE_URL` environment variable, falling back to the
/// public site when unset.
pub fn youtube_baseurl() -> String {
    env::var("YOUTUBE_BASE_URL").unwrap_or_else(|_| "https://www.youtube.com".to_string())
}

/// Returns the directory where all cache files live.
///
/// Honors the `WORDIFY_CACHE_DIR` override, otherwise uses
/// `<local data dir>/wordify/cache`. The directory itself is created lazily
/// by the cache managers when they first persist.
pub fn cache_dir() -> PathBuf {
    match env::var("WORDIFY_CACHE_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
            path.push("wordify");
            path.push("cache");
            path
        }
    }
}

/// Returns the user-configured rendering font, if any.
///
/// Reads the `WORDIFY_FONT` environment variable. When unset the renderer
/// falls back to a list of well-known system font locations.
pub fn font_path() -> Option<String> {
    env::var("WORDIFY_FONT").ok()
}
