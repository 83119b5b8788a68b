//! Logo decoding: raw upload bytes → validated, embeddable image.
//!
//! The original bytes are embedded in the package unmodified (no
//! re-encoding pass that could degrade the image); decoding here serves two
//! purposes only: reject bytes that are not a readable raster image before
//! any layout work happens, and capture the intrinsic pixel size that
//! drives the aspect-correct extent on the slide.

use crate::error::ComposeError;
use crate::layout::geometry::Emu;
use image::{GenericImageView, ImageFormat};
use tracing::debug;

/// Raster format of an embedded logo. Only the formats the upload form
/// offers are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoFormat {
    Png,
    Jpeg,
}

impl LogoFormat {
    /// Part-name extension inside the package (`ppt/media/image1.<ext>`).
    pub fn extension(self) -> &'static str {
        match self {
            LogoFormat::Png => "png",
            LogoFormat::Jpeg => "jpeg",
        }
    }

    /// Content type declared in `[Content_Types].xml`.
    pub fn content_type(self) -> &'static str {
        match self {
            LogoFormat::Png => "image/png",
            LogoFormat::Jpeg => "image/jpeg",
        }
    }
}

/// A decoded, validated logo ready for embedding.
#[derive(Debug, Clone)]
pub struct Logo {
    pub bytes: Vec<u8>,
    pub format: LogoFormat,
    pub width_px: u32,
    pub height_px: u32,
}

impl Logo {
    /// Decode and validate uploaded logo bytes.
    ///
    /// Fails with [`ComposeError::ImageDecode`] when the bytes are not a
    /// readable image, and [`ComposeError::UnsupportedImageFormat`] when
    /// they decode to something other than PNG or JPEG.
    pub fn decode(bytes: Vec<u8>) -> Result<Self, ComposeError> {
        let format = image::guess_format(&bytes)?;
        let format = match format {
            ImageFormat::Png => LogoFormat::Png,
            ImageFormat::Jpeg => LogoFormat::Jpeg,
            other => {
                return Err(ComposeError::UnsupportedImageFormat {
                    format: format!("{:?}", other),
                })
            }
        };

        // Full decode: catches truncated or corrupt files, not just a
        // plausible magic number.
        let decoded = image::load_from_memory(&bytes)?;
        let (width_px, height_px) = decoded.dimensions();
        debug!(
            "logo decoded: {:?} {}x{} px, {} bytes",
            format,
            width_px,
            height_px,
            bytes.len()
        );

        Ok(Logo {
            bytes,
            format,
            width_px,
            height_px,
        })
    }

    /// Width, in EMU, when the logo is scaled to `height` preserving the
    /// natural aspect ratio.
    pub fn scaled_width(&self, height: Emu) -> Emu {
        let aspect = self.width_px as f64 / self.height_px as f64;
        Emu((height.0 as f64 * aspect).round() as i64)
    }
}
