//! Styling configuration for the rendered letter.
//!
//! Every fixed styling constant of the document (canvas size, border,
//! fonts, colours, column geometry) lives in one immutable
//! [`LayoutConfig`] passed into the composer. There is no module-level
//! mutable state; two calls with the same config and request are fully
//! independent.
//!
//! `LayoutConfig::default()` reproduces the house letter template exactly.
//! The builder exists for callers that need to rebrand (different font,
//! card tint, canvas) without forking the layout code.

use crate::error::ComposeError;
use crate::layout::geometry::RgbColor;
use serde::{Deserialize, Serialize};

/// Styling constants for a letter document.
///
/// Built via [`LayoutConfig::builder()`] or [`LayoutConfig::default()`].
///
/// # Example
/// ```rust
/// use letter2pptx::LayoutConfig;
///
/// let config = LayoutConfig::builder()
///     .font_name("Noto Sans KR")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Canvas width in inches. Default: 13.33 (16:9 widescreen).
    pub canvas_width_in: f64,

    /// Canvas height in inches. Default: 7.5.
    pub canvas_height_in: f64,

    /// Inset of the outer border rectangle from the canvas edge, in inches.
    /// Default: 0.4.
    pub border_inset_in: f64,

    /// Stroke width of the outer border, in points. Default: 1.25.
    pub border_width_pt: f64,

    /// Stroke colour of the outer border. Default: rgb(80, 80, 80).
    pub border_color: RgbColor,

    /// Top-left anchor of the optional logo, in inches. Default: (0.55, 0.55).
    pub logo_anchor_in: (f64, f64),

    /// Fixed logo height in inches; width follows the image's natural
    /// aspect ratio. Default: 0.45.
    pub logo_height_in: f64,

    /// Header sentence size in points. Default: 14.
    pub header_size_pt: f64,

    /// Section caption size in points. Default: 20.
    pub section_title_size_pt: f64,

    /// Opening sentence size in points. Default: 14.
    pub opening_size_pt: f64,

    /// Text-block title size in points. Default: 15.
    pub block_title_size_pt: f64,

    /// Body text size in points. Default: 12.
    pub body_size_pt: f64,

    /// Footer line size in points. Default: 9.
    pub footer_size_pt: f64,

    /// Typeface applied to every run. Default: "Malgun Gothic".
    pub font_name: String,

    /// Left edge of the two content columns, in inches. Default: 0.8.
    pub column_left_in: f64,

    /// Top edge of the two content columns, in inches. Default: 2.2.
    pub column_top_in: f64,

    /// Column width in inches. Default: 6.0.
    pub column_width_in: f64,

    /// Column height in inches. Default: 4.5.
    pub column_height_in: f64,

    /// Fill tint of the right-column card. Default: rgb(237, 233, 226).
    pub card_fill: RgbColor,

    /// Outline colour of the right-column card. Default: rgb(180, 180, 180).
    pub card_outline: RgbColor,

    /// Outline width of the right-column card, in points. Default: 0.75.
    pub card_outline_width_pt: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width_in: 13.33,
            canvas_height_in: 7.5,
            border_inset_in: 0.4,
            border_width_pt: 1.25,
            border_color: RgbColor::new(80, 80, 80),
            logo_anchor_in: (0.55, 0.55),
            logo_height_in: 0.45,
            header_size_pt: 14.0,
            section_title_size_pt: 20.0,
            opening_size_pt: 14.0,
            block_title_size_pt: 15.0,
            body_size_pt: 12.0,
            footer_size_pt: 9.0,
            font_name: "Malgun Gothic".to_string(),
            column_left_in: 0.8,
            column_top_in: 2.2,
            column_width_in: 6.0,
            column_height_in: 4.5,
            card_fill: RgbColor::new(237, 233, 226),
            card_outline: RgbColor::new(180, 180, 180),
            card_outline_width_pt: 0.75,
        }
    }
}

impl LayoutConfig {
    /// Create a new builder seeded with the default letter styling.
    pub fn builder() -> LayoutConfigBuilder {
        LayoutConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`LayoutConfig`].
#[derive(Debug)]
pub struct LayoutConfigBuilder {
    config: LayoutConfig,
}

impl LayoutConfigBuilder {
    pub fn canvas_inches(mut self, width: f64, height: f64) -> Self {
        self.config.canvas_width_in = width;
        self.config.canvas_height_in = height;
        self
    }

    pub fn border_inset(mut self, inches: f64) -> Self {
        self.config.border_inset_in = inches;
        self
    }

    pub fn border(mut self, color: RgbColor, width_pt: f64) -> Self {
        self.config.border_color = color;
        self.config.border_width_pt = width_pt;
        self
    }

    pub fn logo_anchor(mut self, left: f64, top: f64) -> Self {
        self.config.logo_anchor_in = (left, top);
        self
    }

    pub fn logo_height(mut self, inches: f64) -> Self {
        self.config.logo_height_in = inches;
        self
    }

    pub fn font_name(mut self, name: impl Into<String>) -> Self {
        self.config.font_name = name.into();
        self
    }

    pub fn card_fill(mut self, color: RgbColor) -> Self {
        self.config.card_fill = color;
        self
    }

    pub fn card_outline(mut self, color: RgbColor, width_pt: f64) -> Self {
        self.config.card_outline = color;
        self.config.card_outline_width_pt = width_pt;
        self
    }

    pub fn columns(mut self, left: f64, top: f64, width: f64, height: f64) -> Self {
        self.config.column_left_in = left;
        self.config.column_top_in = top;
        self.config.column_width_in = width;
        self.config.column_height_in = height;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<LayoutConfig, ComposeError> {
        let c = &self.config;
        if c.canvas_width_in <= 0.0 || c.canvas_height_in <= 0.0 {
            return Err(ComposeError::InvalidConfig(format!(
                "canvas must have positive dimensions, got {} x {}",
                c.canvas_width_in, c.canvas_height_in
            )));
        }
        if c.border_inset_in * 2.0 >= c.canvas_width_in.min(c.canvas_height_in) {
            return Err(ComposeError::InvalidConfig(format!(
                "border inset {} leaves no drawable area",
                c.border_inset_in
            )));
        }
        if c.logo_height_in <= 0.0 {
            return Err(ComposeError::InvalidConfig(
                "logo height must be positive".into(),
            ));
        }
        let sizes = [
            c.header_size_pt,
            c.section_title_size_pt,
            c.opening_size_pt,
            c.block_title_size_pt,
            c.body_size_pt,
            c.footer_size_pt,
        ];
        if sizes.iter().any(|s| *s <= 0.0) {
            return Err(ComposeError::InvalidConfig(
                "font sizes must be positive".into(),
            ));
        }
        if c.font_name.trim().is_empty() {
            return Err(ComposeError::InvalidConfig(
                "font name must not be empty".into(),
            ));
        }
        if c.column_width_in <= 0.0 || c.column_height_in <= 0.0 {
            return Err(ComposeError::InvalidConfig(
                "columns must have positive dimensions".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_house_template() {
        let c = LayoutConfig::default();
        assert_eq!(c.canvas_width_in, 13.33);
        assert_eq!(c.canvas_height_in, 7.5);
        assert_eq!(c.font_name, "Malgun Gothic");
        assert_eq!(c.card_fill, RgbColor::new(237, 233, 226));
        assert_eq!(c.block_title_size_pt, 15.0);
    }

    #[test]
    fn builder_overrides_font() {
        let c = LayoutConfig::builder()
            .font_name("Noto Sans KR")
            .build()
            .unwrap();
        assert_eq!(c.font_name, "Noto Sans KR");
        assert_eq!(c.canvas_width_in, 13.33);
    }

    #[test]
    fn builder_rejects_zero_canvas() {
        let err = LayoutConfig::builder().canvas_inches(0.0, 7.5).build();
        assert!(err.is_err());
    }

    #[test]
    fn builder_rejects_oversized_inset() {
        let err = LayoutConfig::builder().border_inset(4.0).build();
        assert!(err.is_err());
    }
}
