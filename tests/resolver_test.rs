use std::sync::{
    Arc, OnceLock,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::sync::Mutex;

use wordify::{
    lyrics::{CacheSource, LyricsResolver, LyricsSource, SourceError, TrackQuery},
    management::LyricsCacheManager,
    types::{NO_LYRICS, SourceTag},
};

static CACHE_DIR: OnceLock<TempDir> = OnceLock::new();

// All tests in this binary share one cache directory override.
fn setup_cache_dir() {
    CACHE_DIR.get_or_init(|| {
        let dir = tempfile::tempdir().expect("create temp cache dir");
        unsafe { std::env::set_var("WORDIFY_CACHE_DIR", dir.path()) };
        dir
    });
}

enum StubAnswer {
    Hit(&'static str),
    Miss,
    Fail(&'static str),
}

struct StubSource {
    tag: SourceTag,
    answer: StubAnswer,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl LyricsSource for StubSource {
    fn tag(&self) -> SourceTag {
        self.tag
    }

    async fn try_fetch(&self, _query: &TrackQuery) -> Result<Option<String>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            StubAnswer::Hit(lyrics) => Ok(Some(lyrics.to_string())),
            StubAnswer::Miss => Ok(None),
            StubAnswer::Fail(msg) => Err(SourceError::Parse(msg.to_string())),
        }
    }
}

fn stub(tag: SourceTag, answer: StubAnswer) -> (Box<dyn LyricsSource>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let source = StubSource {
        tag,
        answer,
        calls: Arc::clone(&calls),
    };
    (Box::new(source), calls)
}

fn query(track_id: &str) -> TrackQuery {
    TrackQuery {
        track_id: track_id.to_string(),
        track_name: "Test Track".to_string(),
        artist_name: "Test Artist".to_string(),
    }
}

fn resolver_with(
    cache: &Arc<Mutex<LyricsCacheManager>>,
    remote: Vec<Box<dyn LyricsSource>>,
) -> LyricsResolver {
    let mut sources: Vec<Box<dyn LyricsSource>> = vec![Box::new(CacheSource::new(Arc::clone(cache)))];
    sources.extend(remote);
    LyricsResolver::with_sources(sources, Arc::clone(cache))
}

#[tokio::test]
async fn test_cache_hit_makes_no_remote_calls() {
    setup_cache_dir();

    let mut manager = LyricsCacheManager::new();
    manager.set("t-cached", "cached lyrics text");
    let cache = Arc::new(Mutex::new(manager));

    let (primary, primary_calls) = stub(SourceTag::Spotify, StubAnswer::Hit("remote lyrics"));
    let (fallback, fallback_calls) = stub(SourceTag::Youtube, StubAnswer::Hit("scraped lyrics"));
    let resolver = resolver_with(&cache, vec![primary, fallback]);

    let (lyrics, tag) = resolver.resolve(&query("t-cached")).await;

    assert_eq!(lyrics, "cached lyrics text");
    assert_eq!(tag, SourceTag::Cache);
    assert_eq!(primary_calls.load(Ordering::SeqCst), 0);
    assert_eq!(fallback_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_sentinel_cache_entry_falls_through_to_scrape() {
    setup_cache_dir();

    let mut manager = LyricsCacheManager::new();
    manager.set("t1", NO_LYRICS);
    let cache = Arc::new(Mutex::new(manager));

    let (primary, _) = stub(SourceTag::Spotify, StubAnswer::Miss);
    let (fallback, _) = stub(
        SourceTag::Youtube,
        StubAnswer::Hit("hello world this is a lyric line with enough words"),
    );
    let resolver = resolver_with(&cache, vec![primary, fallback]);

    let (lyrics, tag) = resolver.resolve(&query("t1")).await;

    assert_eq!(lyrics, "hello world this is a lyric line with enough words");
    assert_eq!(tag, SourceTag::Youtube);

    // The scraped lyrics replace the sentinel in the cache
    assert_eq!(
        cache.lock().await.get("t1").as_deref(),
        Some("hello world this is a lyric line with enough words")
    );
}

#[tokio::test]
async fn test_primary_hit_is_written_back_to_cache() {
    setup_cache_dir();

    let cache = Arc::new(Mutex::new(LyricsCacheManager::new()));

    let (primary, primary_calls) = stub(SourceTag::Spotify, StubAnswer::Hit("line one\nline two"));
    let (fallback, fallback_calls) = stub(SourceTag::Youtube, StubAnswer::Hit("unused"));
    let resolver = resolver_with(&cache, vec![primary, fallback]);

    let (lyrics, tag) = resolver.resolve(&query("t-spotify")).await;

    assert_eq!(lyrics, "line one\nline two");
    assert_eq!(tag, SourceTag::Spotify);
    assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
    assert_eq!(fallback_calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        cache.lock().await.get("t-spotify").as_deref(),
        Some("line one\nline two")
    );
}

#[tokio::test]
async fn test_exhausted_chain_persists_sentinel() {
    setup_cache_dir();

    let cache = Arc::new(Mutex::new(LyricsCacheManager::new()));

    let (primary, _) = stub(SourceTag::Spotify, StubAnswer::Miss);
    let (fallback, _) = stub(SourceTag::Youtube, StubAnswer::Miss);
    let resolver = resolver_with(&cache, vec![primary, fallback]);

    let (lyrics, tag) = resolver.resolve(&query("t-none")).await;

    assert_eq!(lyrics, NO_LYRICS);
    assert_eq!(tag, SourceTag::NotFound);

    // The negative result is remembered but never served as a hit
    let manager = cache.lock().await;
    assert!(manager.contains("t-none"));
    assert!(manager.get("t-none").is_none());
}

#[tokio::test]
async fn test_source_failure_yields_error_tag() {
    setup_cache_dir();

    let cache = Arc::new(Mutex::new(LyricsCacheManager::new()));

    let (primary, _) = stub(SourceTag::Spotify, StubAnswer::Fail("boom"));
    let (fallback, fallback_calls) = stub(SourceTag::Youtube, StubAnswer::Hit("never reached"));
    let resolver = resolver_with(&cache, vec![primary, fallback]);

    let (lyrics, tag) = resolver.resolve(&query("t-err")).await;

    assert_eq!(tag, SourceTag::Error);
    assert!(lyrics.starts_with("Error fetching lyrics:"));
    assert!(lyrics.contains("boom"));

    // The chain stops at the failure and errors are never cached
    assert_eq!(fallback_calls.load(Ordering::SeqCst), 0);
    assert!(!cache.lock().await.contains("t-err"));
}
