use crate::{
    spotify::SpotifyClient,
    types::{Artist, ArtistSearchResponse},
};

impl SpotifyClient {
    /// Looks up an artist by name and returns the best match.
    ///
    /// Runs a search against the Spotify Web API with `type=artist` and
    /// `limit=1`, mirroring the "first search result wins" resolution the
    /// rest of the pipeline is keyed on. The query is percent-encoded; the
    /// returned artist carries the canonical Spotify name, which may differ
    /// in casing or spelling from what the user typed.
    ///
    /// # Arguments
    ///
    /// * `name` - Artist name as typed by the user
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Some(Artist))` - The first matching artist
    /// - `Ok(None)` - The search produced no results
    /// - `Err(String)` - Network error, API error, or token failure
    ///
    /// # Example
    ///
    /// ```
    /// let artist = spotify.search_artist("iron maiden").await?;
    /// if let Some(artist) = artist {
    ///     println!("Found {} ({})", artist.name, artist.id);
    /// }
    /// ```
    pub async fn search_artist(&mut self, name: &str) -> Result<Option<Artist>, String> {
        let api_url = format!(
            "{uri}/search?q={query}&type=artist&limit=1",
            uri = &crate::config::spotify_apiurl(),
            query = urlencoding::encode(&format!("artist:{name}"))
        );

        let response: ArtistSearchResponse = self.get_json(&api_url).await?;
        Ok(response.artists.items.into_iter().next())
    }
}
