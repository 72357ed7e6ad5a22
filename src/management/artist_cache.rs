use std::{io::Error, path::PathBuf};

use crate::{config, types::ArtistCache, utils};

#[derive(Debug)]
pub enum ArtistCacheError {
    IoError(Error),
    CriticalError(String),
    SerdeError(serde_json::Error),
}

impl From<Error> for ArtistCacheError {
    fn from(err: Error) -> Self {
        ArtistCacheError::IoError(err)
    }
}

pub struct ArtistCacheManager {
    artist_name: String,
    cache: Option<ArtistCache>,
}

impl ArtistCacheManager {
    pub fn new(artist_name: String, cache: Option<ArtistCache>) -> Self {
        Self { artist_name, cache }
    }

    pub async fn load_from_cache(&self) -> Result<Self, ArtistCacheError> {
        let path = Self::get_path(&self);
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| ArtistCacheError::IoError(e))?;
        let cache = serde_json::from_str(&content).map_err(|e| ArtistCacheError::SerdeError(e))?;
        Ok(Self {
            artist_name: self.artist_name.clone(),
            cache: Some(cache),
        })
    }

    pub async fn save_to_cache(&self) -> Result<(), ArtistCacheError> {
        let cache = match &self.cache {
            Some(cache) => cache,
            None => {
                return Err(ArtistCacheError::CriticalError(
                    "no cache data to persist".to_string(),
                ));
            }
        };

        let path = Self::get_path(&self);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| ArtistCacheError::IoError(e))?;
        }

        let json =
            serde_json::to_string_pretty(cache).map_err(|e| ArtistCacheError::SerdeError(e))?;
        async_fs::write(&path, json)
            .await
            .map_err(|e| ArtistCacheError::IoError(e))
    }

    pub fn get_cache(&self) -> Option<ArtistCache> {
        self.cache.clone()
    }

    fn get_path(&self) -> PathBuf {
        let mut path = config::cache_dir();
        path.push(utils::cache_file_name(&self.artist_name));
        path
    }
}
