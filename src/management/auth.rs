use std::path::PathBuf;

use chrono::Utc;
use reqwest::Client;

use crate::{config, spotify, types::Token, warning};

pub struct TokenManager {
    token: Option<Token>,
}

impl TokenManager {
    pub fn new(token: Option<Token>) -> Self {
        TokenManager { token }
    }

    /// Reads the cached token, starting without one when the cache file is
    /// missing or unreadable.
    pub async fn load() -> Self {
        let path = Self::token_path();
        let token = match async_fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content).ok(),
            Err(_) => None,
        };
        Self { token }
    }

    pub async fn persist(&self) -> Result<(), String> {
        let token = match &self.token {
            Some(token) => token,
            None => return Err("no token to persist".to_string()),
        };

        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(token).map_err(|e| e.to_string())?;
        async_fs::write(&path, json).await.map_err(|e| e.to_string())
    }

    /// Returns a non-expired access token, requesting a fresh one through the
    /// client-credentials grant when needed.
    pub async fn get_valid_token(&mut self, http: &Client) -> Result<String, String> {
        if self.needs_refresh() {
            let token = spotify::auth::request_token(http).await?;
            self.token = Some(token);
            if let Err(err) = self.persist().await {
                warning!("Cannot persist token cache: {}", err);
            }
        }

        match &self.token {
            Some(token) => Ok(token.access_token.clone()),
            None => Err("no access token available".to_string()),
        }
    }

    fn needs_refresh(&self) -> bool {
        match &self.token {
            Some(token) => {
                let now = Utc::now().timestamp() as u64;
                now >= token.obtained_at + token.expires_in - 60
            }
            None => true,
        }
    }

    fn token_path() -> PathBuf {
        let mut path = config::cache_dir();
        path.push("token.json");
        path
    }
}
