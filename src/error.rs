//! Error types for the letter2pptx library.
//!
//! A single [`ComposeError`] enum covers every failure class. There is no
//! partial-success mode: either every fixed element is placed and the
//! container serialises, or the call fails outright and no document is
//! returned.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the letter2pptx library.
#[derive(Debug, Error)]
pub enum ComposeError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// A required name field is empty after trimming.
    ///
    /// The calling layer is expected to check this before invoking the
    /// composer; the composer re-checks so a bad request can never reach the
    /// layout stage.
    #[error("required field '{field}' is empty\nBoth mentor and mentee names must be non-empty.")]
    Validation { field: &'static str },

    /// The logo bytes could not be decoded as a raster image.
    #[error("logo image could not be decoded: {source}\nSupply a valid PNG or JPEG file.")]
    ImageDecode {
        #[from]
        source: image::ImageError,
    },

    /// The logo decoded, but to a format the package cannot embed.
    #[error("unsupported logo image format '{format}': use PNG or JPEG")]
    UnsupportedImageFormat { format: String },

    /// A colour string did not parse as `#RRGGBB`.
    #[error("invalid colour '{value}': expected #RRGGBB, e.g. #0B2B4C")]
    InvalidColor { value: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),

    // ── Package errors ────────────────────────────────────────────────────
    /// The zip container could not be assembled.
    #[error("failed to assemble the pptx container: {0}")]
    Package(#[from] zip::result::ZipError),

    /// I/O failure while writing into the in-memory container.
    #[error("i/o error while writing the pptx container: {0}")]
    Io(#[from] std::io::Error),

    /// Could not create or write the output file.
    #[error("failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_names_the_field() {
        let e = ComposeError::Validation {
            field: "mentor_name",
        };
        assert!(e.to_string().contains("mentor_name"));
    }

    #[test]
    fn unsupported_format_display() {
        let e = ComposeError::UnsupportedImageFormat {
            format: "Bmp".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("Bmp"));
        assert!(msg.contains("PNG or JPEG"));
    }

    #[test]
    fn invalid_color_display() {
        let e = ComposeError::InvalidColor {
            value: "blue".into(),
        };
        assert!(e.to_string().contains("blue"));
        assert!(e.to_string().contains("#RRGGBB"));
    }
}
