mod artist_cache;
mod auth;
mod lyrics_cache;

pub use artist_cache::ArtistCacheError;
pub use artist_cache::ArtistCacheManager;
pub use auth::TokenManager;
pub use lyrics_cache::LyricsCacheError;
pub use lyrics_cache::LyricsCacheManager;
