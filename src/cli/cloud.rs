use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    cloud, corpus, error,
    language::Language,
    lyrics::LyricsResolver,
    management::LyricsCacheManager,
    spotify::SpotifyClient,
    success, utils, warning,
};

/// Runs the full pipeline for one invocation: corpus assembly (building the
/// artist cache on a miss), rendering, saving the image and opening it in
/// the default viewer.
///
/// This is the outermost layer; every failure here is terminal and ends the
/// process with a printed message and a non-zero exit.
///
/// # Arguments
/// * `artist` - Artist name as typed by the user.
/// * `album` - Optional album filter, matched case-insensitively.
/// * `language` - Language mode for filtering and stop words.
pub async fn cloud(artist: String, album: Option<String>, language: Language) {
    let lyrics_cache = Arc::new(Mutex::new(LyricsCacheManager::load().await));
    let resolver = LyricsResolver::new(Arc::clone(&lyrics_cache));
    let mut client = SpotifyClient::new().await;

    let text =
        match corpus::build_corpus(&mut client, &resolver, &artist, album.as_deref(), language)
            .await
        {
            Ok(text) => text,
            Err(e) => error!("{}", e),
        };

    let font = match cloud::load_font().await {
        Ok(font) => font,
        Err(e) => error!("Cannot prepare rendering font: {}", e),
    };

    let title = match &album {
        Some(album) => format!(
            "Word Cloud for {} - {} ({} lyrics)",
            artist,
            album,
            language.label()
        ),
        None => format!("Word Cloud for {} ({} lyrics)", artist, language.label()),
    };

    let image = match cloud::render_image(&font, &text, &title, language) {
        Ok(image) => image,
        Err(e) => error!("Cannot render word cloud: {}", e),
    };

    let file_name = utils::output_file_name(&artist, album.as_deref());
    if let Err(e) = image.save(&file_name) {
        error!("Cannot save word cloud to {}: {}", file_name, e);
    }

    success!("Saved word cloud to {}", file_name);

    match async_fs::canonicalize(&file_name).await {
        Ok(path) => {
            let url = format!("file://{}", path.display());
            if webbrowser::open(&url).is_err() {
                warning!("Failed to open viewer. The image is at {}", path.display());
            }
        }
        Err(_) => warning!("Failed to open viewer. The image is at {}", file_name),
    }
}
