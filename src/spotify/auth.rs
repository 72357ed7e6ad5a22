use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;

use crate::{
    config,
    types::{Token, TokenResponse},
};

/// Requests an application access token via the client-credentials grant.
///
/// Exchanges the configured client ID and secret for a short-lived token by
/// POSTing to Spotify's token endpoint with a Basic authorization header.
/// The credentials are read from the environment at call time, so a run that
/// is served entirely from cache never needs them set.
///
/// # Arguments
///
/// * `http` - The shared HTTP client the request is sent through
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Access token stamped with the time it was obtained
/// - `Err(String)` - Network error or non-success response from the token
///   endpoint
///
/// # Panics
///
/// Panics if `SPOTIFY_CLIENT_ID` or `SPOTIFY_CLIENT_SECRET` is not set.
///
/// # Token Lifecycle
///
/// Client-credentials tokens are application-scoped and short-lived (one
/// hour). The caller is expected to cache the token and only come back here
/// once it approaches expiry; see `TokenManager::get_valid_token`.
pub async fn request_token(http: &Client) -> Result<Token, String> {
    let credentials = STANDARD.encode(format!(
        "{id}:{secret}",
        id = config::spotify_client_id(),
        secret = config::spotify_client_secret()
    ));

    let response = http
        .post(config::spotify_apitoken_url())
        .header("Authorization", format!("Basic {}", credentials))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;

    let token: TokenResponse = response.json().await.map_err(|e| e.to_string())?;

    Ok(Token {
        access_token: token.access_token,
        expires_in: token.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
