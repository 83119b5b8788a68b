//! Letter composition entry points.
//!
//! [`compose`] is the primary API: one request in, one single-page `.pptx`
//! byte buffer out, no other side effect. [`compose_with_date`] is the
//! deterministic core with the calendar date injected; identical input
//! (including the date) produces byte-identical output, which is what the
//! idempotence tests pin down. [`compose_to_file`] adds an atomic file
//! write for callers that want the buffer on disk.

use crate::config::LayoutConfig;
use crate::error::ComposeError;
use crate::layout::logo::Logo;
use crate::layout::page;
use crate::pptx::package;
use crate::request::LetterRequest;
use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, info};

/// Compose a mentoring letter dated today.
///
/// # Errors
/// - [`ComposeError::Validation`] when a required name is blank (the
///   calling layer should have caught this already)
/// - [`ComposeError::ImageDecode`] / [`ComposeError::UnsupportedImageFormat`]
///   when logo bytes are unreadable
/// - [`ComposeError::Package`] / [`ComposeError::Io`] when the container
///   cannot be assembled
///
/// # Example
/// ```rust
/// use letter2pptx::{compose, LayoutConfig, LetterRequest};
///
/// let request = LetterRequest::new("Kim", "Lee");
/// let bytes = compose(&request, &LayoutConfig::default())?;
/// assert!(!bytes.is_empty());
/// # Ok::<(), letter2pptx::ComposeError>(())
/// ```
pub fn compose(request: &LetterRequest, config: &LayoutConfig) -> Result<Vec<u8>, ComposeError> {
    compose_with_date(request, config, chrono::Local::now().date_naive())
}

/// Compose a mentoring letter for a specific footer/document date.
///
/// Pure function of its arguments; this is the variant tests drive.
pub fn compose_with_date(
    request: &LetterRequest,
    config: &LayoutConfig,
    date: NaiveDate,
) -> Result<Vec<u8>, ComposeError> {
    info!(
        "composing letter: mentor='{}' mentee='{}'",
        request.mentor_name.trim(),
        request.mentee_name.trim()
    );

    // ── Step 1: Validate required names ──────────────────────────────────
    request.validate()?;

    // ── Step 2: Decode the optional logo ─────────────────────────────────
    let logo = match &request.logo_image {
        Some(bytes) => Some(Logo::decode(bytes.clone())?),
        None => None,
    };

    // ── Step 3: Lay out the single page ──────────────────────────────────
    let slide = page::build_slide(request, config, logo, date);
    debug!("slide laid out: {} shapes", slide.shapes.len());

    // ── Step 4: Serialise the container ──────────────────────────────────
    package::write_package(&slide, config, date)
}

/// Compose and write the buffer to `path` atomically (temp file + rename),
/// so a failed write never leaves a partial document behind.
///
/// Returns the number of bytes written.
pub fn compose_to_file(
    request: &LetterRequest,
    config: &LayoutConfig,
    path: impl AsRef<Path>,
) -> Result<usize, ComposeError> {
    let path = path.as_ref();
    let bytes = compose(request, config)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ComposeError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let tmp_path = path.with_extension("pptx.tmp");
    std::fs::write(&tmp_path, &bytes).map_err(|e| ComposeError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::rename(&tmp_path, path).map_err(|e| ComposeError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!("letter written: {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes.len())
}
