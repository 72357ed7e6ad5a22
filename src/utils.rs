pub fn cache_slug(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

pub fn cache_file_name(artist_name: &str) -> String {
    format!("{}_lyrics.json", cache_slug(artist_name))
}

pub fn output_file_name(artist_name: &str, album_name: Option<&str>) -> String {
    match album_name {
        Some(album) => format!("{}_{}_wordcloud.png", cache_slug(artist_name), cache_slug(album)),
        None => format!("{}_wordcloud.png", cache_slug(artist_name)),
    }
}

pub fn format_duration(ms: u64) -> String {
    let minutes = (ms / 60_000) % 60;
    let seconds = (ms / 1000) % 60;
    let hundredths = (ms % 1000) / 10;
    format!("{:02}:{:02}.{:02}", minutes, seconds, hundredths)
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn format_share(count: u32, total: u32) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", (count as f64 / total as f64) * 100.0)
}
