//! The slide shape model.
//!
//! Layout produces an ordered list of [`Shape`]s (z-order = insertion
//! order) accumulated through [`SlideBuilder`]; the package stage renders
//! the list into the slide part XML. The model is flat: the letter has no
//! grouped or nested shapes, so a `Vec` is the whole tree.

use crate::layout::geometry::{Emu, Rect, RgbColor};
use crate::layout::logo::Logo;

/// Horizontal paragraph alignment. Left is the DrawingML default and is
/// not written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// A single styled run of text.
#[derive(Debug, Clone)]
pub struct Run {
    pub text: String,
    pub size_pt: f64,
    pub bold: bool,
}

/// One paragraph: zero or more runs plus paragraph-level properties.
/// A paragraph with no runs renders as a blank line.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub align: Align,
    pub space_after_pt: Option<f64>,
}

impl Paragraph {
    /// Paragraph holding a single run.
    pub fn run(text: impl Into<String>, size_pt: f64, bold: bool) -> Self {
        Paragraph {
            runs: vec![Run {
                text: text.into(),
                size_pt,
                bold,
            }],
            ..Paragraph::default()
        }
    }

    /// Empty spacer paragraph with trailing space.
    pub fn spacer(space_after_pt: f64) -> Self {
        Paragraph {
            space_after_pt: Some(space_after_pt),
            ..Paragraph::default()
        }
    }
}

/// Outline stroke of a rectangle.
#[derive(Debug, Clone, Copy)]
pub struct Outline {
    pub color: RgbColor,
    pub width_pt: f64,
}

/// A rectangle: no fill with a coloured outline (the outer border), or a
/// solid fill with an optional outline (the right-column card).
#[derive(Debug, Clone)]
pub struct RectShape {
    pub frame: Rect,
    pub fill: Option<RgbColor>,
    pub outline: Option<Outline>,
}

/// A word-wrapped text box.
#[derive(Debug, Clone)]
pub struct TextShape {
    pub frame: Rect,
    pub paragraphs: Vec<Paragraph>,
}

/// An embedded picture, already scaled to its frame.
#[derive(Debug, Clone)]
pub struct PictureShape {
    pub frame: Rect,
    pub logo: Logo,
}

/// One element on the slide.
#[derive(Debug, Clone)]
pub enum Shape {
    Rect(RectShape),
    Text(TextShape),
    Picture(PictureShape),
}

/// The assembled single slide: shapes in z-order.
#[derive(Debug, Clone, Default)]
pub struct Slide {
    pub shapes: Vec<Shape>,
}

impl Slide {
    /// The embedded picture, if any. The letter carries at most one.
    pub fn picture(&self) -> Option<&PictureShape> {
        self.shapes.iter().find_map(|s| match s {
            Shape::Picture(p) => Some(p),
            _ => None,
        })
    }
}

/// Ordered accumulation of "place element" operations.
#[derive(Debug, Default)]
pub struct SlideBuilder {
    slide: Slide,
}

impl SlideBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a rectangle.
    pub fn rect(&mut self, frame: Rect, fill: Option<RgbColor>, outline: Option<Outline>) {
        self.slide.shapes.push(Shape::Rect(RectShape {
            frame,
            fill,
            outline,
        }));
    }

    /// Place a text box with pre-built paragraphs.
    pub fn text(&mut self, frame: Rect, paragraphs: Vec<Paragraph>) {
        self.slide
            .shapes
            .push(Shape::Text(TextShape { frame, paragraphs }));
    }

    /// Place a titled text block: bold title, blank spacer, then one
    /// paragraph per newline-delimited body segment. An empty body yields
    /// title and spacer only.
    pub fn text_block(
        &mut self,
        frame: Rect,
        title: &str,
        body: &str,
        title_size_pt: f64,
        body_size_pt: f64,
    ) {
        let mut paragraphs = Vec::with_capacity(2 + body.lines().count());
        paragraphs.push(Paragraph::run(title, title_size_pt, true));
        paragraphs.push(Paragraph::spacer(2.0));
        for line in body.lines() {
            paragraphs.push(Paragraph::run(line, body_size_pt, false));
        }
        self.text(frame, paragraphs);
    }

    /// Place the logo at the given anchor, scaled to `height` with the
    /// image's natural aspect ratio.
    pub fn picture(&mut self, logo: Logo, left: Emu, top: Emu, height: Emu) {
        let frame = Rect {
            x: left,
            y: top,
            cx: logo.scaled_width(height),
            cy: height,
        };
        self.slide
            .shapes
            .push(Shape::Picture(PictureShape { frame, logo }));
    }

    pub fn finish(self) -> Slide {
        self.slide
    }
}
