//! Wordify CLI Library
//!
//! This library turns an artist's song lyrics into a word-cloud image. It
//! walks the artist's full Spotify catalog, resolves lyrics for every track
//! through a chain of sources (local cache, lyrics API, YouTube description
//! scrape), caches the results on disk, and renders a frequency-weighted
//! cloud from the language-filtered corpus.
//!
//! # Modules
//!
//! - `catalog` - Full-catalog walk producing the per-artist lyrics cache
//! - `cli` - Command-line interface implementations
//! - `cloud` - Word frequency model, layout and rasterization
//! - `config` - Configuration management and environment variables
//! - `corpus` - Cache loading plus album/language filtering
//! - `language` - Script classification, normalization and stop words
//! - `lyrics` - Ordered lyric source resolver
//! - `management` - On-disk caches (artist, lyrics, token)
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use wordify::{cli, config, language::Language};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env().await.ok();
//!     cli::cloud("Iron Maiden".into(), None, Language::English).await;
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod cloud;
pub mod config;
pub mod corpus;
pub mod language;
pub mod lyrics;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Accepts the same arguments as
/// `println!`.
///
/// # Example
///
/// ```
/// info!("Fetching albums for {}...", artist);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations. Accepts the same arguments as
/// `println!`.
///
/// # Example
///
/// ```
/// success!("Saved word cloud to {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// where processing cannot continue.
///
/// # Example
///
/// ```
/// error!("Artist '{}' not found.", name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues that don't require program termination. Accepts the same
/// arguments as `println!`.
///
/// # Example
///
/// ```
/// warning!("Cannot cache lyrics: {:?}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
