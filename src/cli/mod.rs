//! # CLI Module
//!
//! This module provides the command-line interface layer for Wordify, a tool
//! that renders word-cloud images from an artist's song lyrics. It wires the
//! catalog, lyrics resolution, corpus and rendering components together into
//! the single user-facing operation.
//!
//! ## Overview
//!
//! One invocation performs the whole pipeline:
//!
//! 1. **Cache lookup**: A per-artist cache file is authoritative when present
//! 2. **Catalog build**: On a miss, the artist's full catalog is walked and
//!    lyrics are resolved per track through the source chain
//! 3. **Corpus assembly**: Lyrics are scoped by album and filtered by
//!    language at the line level
//! 4. **Rendering**: A deterministic frequency cloud is rasterized, saved as
//!    PNG into the working directory, and opened in the default viewer
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Corpus / Catalog Layer (Cache Orchestration)
//!     ↓
//! Resolver + API Layer (Spotify, Lyrics Mirror, YouTube)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Error Handling Philosophy
//!
//! Failures that affect the whole run (unknown artist, empty corpus, no
//! usable font) surface here as a single printed message and a non-zero
//! exit. Failures local to one track were already absorbed during the
//! catalog build and never reach this layer.
//!
//! ## Progress and User Experience
//!
//! Long-running builds report per-album and per-track progress through a
//! spinner, and finish with a per-source statistics table so the user can
//! judge how complete the lyric coverage is.

mod cloud;

pub use cloud::cloud;
