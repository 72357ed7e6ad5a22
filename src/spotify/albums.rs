use crate::{
    spotify::SpotifyClient,
    types::{AlbumDetail, AlbumSummary, AlbumsPage, TrackItem, TracksPage},
};

const PAGE_LIMIT: u32 = 50;

impl SpotifyClient {
    /// Retrieves every album and single released by an artist.
    ///
    /// Walks the `/artists/{id}/albums` endpoint with
    /// `include_groups=album,single` and offset pagination, following pages
    /// until the API reports no `next` page. The result preserves the API's
    /// listing order, which downstream code relies on for stable cache and
    /// corpus ordering.
    ///
    /// # Arguments
    ///
    /// * `artist_id` - Spotify ID of the artist
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<AlbumSummary>)` - All albums and singles, in listing order
    /// - `Err(String)` - Network error, API error, or token failure
    ///
    /// # Pagination
    ///
    /// Uses a fixed page size of 50 (the API maximum). Each page is subject
    /// to the client's shared retry policy for 502 and 429 responses.
    pub async fn artist_albums(&mut self, artist_id: &str) -> Result<Vec<AlbumSummary>, String> {
        let mut albums: Vec<AlbumSummary> = Vec::new();
        let mut offset: u32 = 0;

        loop {
            let api_url = format!(
                "{uri}/artists/{id}/albums?include_groups=album,single&limit={limit}&offset={offset}",
                uri = &crate::config::spotify_apiurl(),
                id = artist_id,
                limit = PAGE_LIMIT,
                offset = offset
            );

            let page: AlbumsPage = self.get_json(&api_url).await?;
            let has_more = page.next.is_some();
            albums.extend(page.items);

            if !has_more {
                break;
            }
            offset += PAGE_LIMIT;
        }

        Ok(albums)
    }

    /// Retrieves the detail record for a single album.
    ///
    /// Supplies the fields the album listing omits or truncates, most
    /// importantly `release_date` and `total_tracks`.
    ///
    /// # Arguments
    ///
    /// * `album_id` - Spotify ID of the album
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(AlbumDetail)` - Album metadata
    /// - `Err(String)` - Network error, API error, or token failure
    pub async fn album(&mut self, album_id: &str) -> Result<AlbumDetail, String> {
        let api_url = format!(
            "{uri}/albums/{id}",
            uri = &crate::config::spotify_apiurl(),
            id = album_id
        );

        self.get_json(&api_url).await
    }

    /// Retrieves the full track listing of an album.
    ///
    /// Walks the `/albums/{id}/tracks` endpoint with offset pagination until
    /// no `next` page remains, preserving track order. Items may carry a
    /// null track ID (local or unavailable tracks); callers are expected to
    /// skip those.
    ///
    /// # Arguments
    ///
    /// * `album_id` - Spotify ID of the album
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<TrackItem>)` - All tracks, in album order
    /// - `Err(String)` - Network error, API error, or token failure
    pub async fn album_tracks(&mut self, album_id: &str) -> Result<Vec<TrackItem>, String> {
        let mut tracks: Vec<TrackItem> = Vec::new();
        let mut offset: u32 = 0;

        loop {
            let api_url = format!(
                "{uri}/albums/{id}/tracks?limit={limit}&offset={offset}",
                uri = &crate::config::spotify_apiurl(),
                id = album_id,
                limit = PAGE_LIMIT,
                offset = offset
            );

            let page: TracksPage = self.get_json(&api_url).await?;
            let has_more = page.next.is_some();
            tracks.extend(page.items);

            if !has_more {
                break;
            }
            offset += PAGE_LIMIT;
        }

        Ok(tracks)
    }
}
