//! # letter2pptx
//!
//! Render a mentoring letter into a fixed-layout, single-slide PowerPoint
//! document.
//!
//! ## Why this crate?
//!
//! HRD teams send each new mentor a "mentoring letter": one 16:9 page with
//! the leader's request items, the mentee's questions, and a card for the
//! mentor's activity report. Producing it by hand means copying a deck
//! template and retyping names; this crate turns the filled form fields
//! directly into the finished `.pptx`, byte-for-byte reproducible for the
//! same input and date.
//!
//! ## Pipeline Overview
//!
//! ```text
//! LetterRequest
//!  │
//!  ├─ 1. Validate  mentor/mentee present after trim
//!  ├─ 2. Logo      decode upload bytes, capture intrinsic size
//!  ├─ 3. Layout    place border, header, captions, columns, footer
//!  └─ 4. Package   OPC container (zip + XML parts) → Vec<u8>
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use letter2pptx::{compose_to_file, LayoutConfig, LetterRequest};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut request = LetterRequest::new("김지훈", "이서연");
//!     request.qna_text = Some("온보딩 일정이 궁금합니다.".into());
//!
//!     let config = LayoutConfig::default();
//!     compose_to_file(&request, &config, request.suggested_file_name())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `letter2pptx` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! letter2pptx = { version = "0.3", default-features = false }
//! ```
//!
//! ## Determinism
//!
//! [`compose_with_date`] is a pure function: the produced buffer depends
//! only on the request, the [`LayoutConfig`] and the injected date. Zip
//! entry metadata is pinned, so equal input means equal bytes, which makes
//! snapshot tests and content-addressed storage possible.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod compose;
pub mod config;
pub mod defaults;
pub mod error;
pub mod layout;
pub mod pptx;
pub mod request;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use compose::{compose, compose_to_file, compose_with_date};
pub use config::{LayoutConfig, LayoutConfigBuilder};
pub use error::ComposeError;
pub use layout::geometry::RgbColor;
pub use request::LetterRequest;
