use std::{collections::BTreeMap, io::Error, path::PathBuf};

use crate::{config, types::NO_LYRICS};

#[derive(Debug)]
pub enum LyricsCacheError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for LyricsCacheError {
    fn from(err: Error) -> Self {
        LyricsCacheError::IoError(err)
    }
}

pub struct LyricsCacheManager {
    entries: BTreeMap<String, String>,
}

impl LyricsCacheManager {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Reads the cache file, starting empty when it is missing or unreadable.
    pub async fn load() -> Self {
        let path = Self::get_path();
        let entries = match async_fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => BTreeMap::new(),
        };
        Self { entries }
    }

    /// Returns the cached lyrics for a track. A stored sentinel or empty
    /// string counts as a negative entry, not a hit.
    pub fn get(&self, track_id: &str) -> Option<String> {
        match self.entries.get(track_id) {
            Some(lyrics) if lyrics != NO_LYRICS && !lyrics.is_empty() => Some(lyrics.clone()),
            _ => None,
        }
    }

    pub fn contains(&self, track_id: &str) -> bool {
        self.entries.contains_key(track_id)
    }

    pub fn set(&mut self, track_id: &str, lyrics: &str) {
        self.entries.insert(track_id.to_string(), lyrics.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub async fn persist(&self) -> Result<(), LyricsCacheError> {
        let path = Self::get_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| LyricsCacheError::IoError(e))?;
        }

        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| LyricsCacheError::SerdeError(e))?;
        async_fs::write(&path, json)
            .await
            .map_err(|e| LyricsCacheError::IoError(e))
    }

    fn get_path() -> PathBuf {
        let mut path = config::cache_dir();
        path.push("lyrics_cache.json");
        path
    }
}

impl Default for LyricsCacheManager {
    fn default() -> Self {
        Self::new()
    }
}
