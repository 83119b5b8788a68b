//! The layout algorithm: request + styling → one slide of shapes.
//!
//! A deterministic, pure function of its input. Positions are the fixed
//! inch offsets of the house letter template; the tunable subset (canvas,
//! border, logo, fonts, columns, card) comes from [`LayoutConfig`], the
//! remaining element frames are anchored relative to those.

use crate::config::LayoutConfig;
use crate::defaults;
use crate::layout::geometry::{Emu, Rect};
use crate::layout::logo::Logo;
use crate::layout::shapes::{Align, Outline, Paragraph, Slide, SlideBuilder};
use crate::request::LetterRequest;
use chrono::NaiveDate;
use tracing::debug;

// Frames that stay anchored to the house letter template, in inches.
const HEADER_FRAME: (f64, f64, f64, f64) = (0.8, 0.55, 11.2, 0.5);
const SECTION_Y: f64 = 1.15;
const SECTION_SIZE: (f64, f64) = (5.5, 0.5);
const SECTION_REPORT_X: f64 = 7.2;
const OPENING_FRAME: (f64, f64, f64, f64) = (0.8, 1.65, 11.2, 0.5);
const REQUEST_BLOCK_HEIGHT: f64 = 2.4;
const QNA_BLOCK_OFFSET: f64 = 2.45;
const QNA_BLOCK_HEIGHT: f64 = 2.25;
const CARD_GAP: f64 = 0.25;
const NOTE_INSET_X: f64 = 0.35;
const NOTE_INSET_Y: f64 = 0.15;
const NOTE_MARGIN: (f64, f64) = (0.6, 0.3);
const FOOTER_FRAME: (f64, f64, f64, f64) = (0.6, 7.25, 12.2, 0.4);

/// Lay out the whole letter. `logo` is already decoded; `date` is the
/// calendar date shown in the footer.
pub fn build_slide(
    request: &LetterRequest,
    config: &LayoutConfig,
    logo: Option<Logo>,
    date: NaiveDate,
) -> Slide {
    let mut slide = SlideBuilder::new();

    // Outer border, fixed inset from every canvas edge.
    slide.rect(
        Rect::from_inches(
            config.border_inset_in,
            config.border_inset_in,
            config.canvas_width_in - 2.0 * config.border_inset_in,
            config.canvas_height_in - 2.0 * config.border_inset_in,
        ),
        None,
        Some(Outline {
            color: config.border_color,
            width_pt: config.border_width_pt,
        }),
    );

    // Logo, fixed anchor and height, natural aspect.
    if let Some(logo) = logo {
        let (left, top) = config.logo_anchor_in;
        slide.picture(
            logo,
            Emu::from_inches(left),
            Emu::from_inches(top),
            Emu::from_inches(config.logo_height_in),
        );
    }

    // Header sentence.
    slide.text(
        rect(HEADER_FRAME),
        vec![Paragraph::run(
            defaults::HEADER_SENTENCE,
            config.header_size_pt,
            true,
        )],
    );

    // Section captions, side by side.
    let (caption_w, caption_h) = SECTION_SIZE;
    for (text, x) in [
        (defaults::SECTION_MENTOR, config.column_left_in),
        (defaults::SECTION_REPORT, SECTION_REPORT_X),
    ] {
        slide.text(
            Rect::from_inches(x, SECTION_Y, caption_w, caption_h),
            vec![Paragraph::run(text, config.section_title_size_pt, true)],
        );
    }

    // Opening sentence.
    slide.text(
        rect(OPENING_FRAME),
        vec![Paragraph::run(
            request.opening_sentence(),
            config.opening_size_pt,
            false,
        )],
    );

    let left_x = config.column_left_in;
    let top_y = config.column_top_in;
    let col_w = config.column_width_in;
    let col_h = config.column_height_in;

    // Right-column card background, behind its text block.
    slide.rect(
        Rect::from_inches(left_x + col_w + CARD_GAP, top_y, col_w, col_h),
        Some(config.card_fill),
        Some(Outline {
            color: config.card_outline,
            width_pt: config.card_outline_width_pt,
        }),
    );

    // Left column, top slot: request block.
    slide.text_block(
        Rect::from_inches(left_x, top_y, col_w, REQUEST_BLOCK_HEIGHT),
        defaults::REQUEST_TITLE,
        &request.resolved_request_body(),
        config.block_title_size_pt,
        config.body_size_pt,
    );

    // Left column, bottom slot: Q&A block unless suppressed.
    match request.resolved_qna_body() {
        Some(body) => slide.text_block(
            Rect::from_inches(left_x, top_y + QNA_BLOCK_OFFSET, col_w, QNA_BLOCK_HEIGHT),
            defaults::QNA_TITLE,
            &body,
            config.block_title_size_pt,
            config.body_size_pt,
        ),
        None => debug!("Q&A block suppressed: empty text with hide_qna_if_empty"),
    }

    // Right column: activity report, verbatim body.
    let (note_margin_x, note_margin_y) = NOTE_MARGIN;
    slide.text_block(
        Rect::from_inches(
            left_x + col_w + NOTE_INSET_X,
            top_y + NOTE_INSET_Y,
            col_w - note_margin_x,
            col_h - note_margin_y,
        ),
        defaults::MENTOR_NOTE_TITLE,
        &request.mentor_note_text,
        config.block_title_size_pt,
        config.body_size_pt,
    );

    // Footer, right-aligned.
    let mut footer = Paragraph::run(request.footer_line(date), config.footer_size_pt, false);
    footer.align = Align::Right;
    slide.text(rect(FOOTER_FRAME), vec![footer]);

    slide.finish()
}

fn rect((left, top, width, height): (f64, f64, f64, f64)) -> Rect {
    Rect::from_inches(left, top, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::shapes::Shape;

    fn slide_for(request: &LetterRequest) -> Slide {
        build_slide(
            request,
            &LayoutConfig::default(),
            None,
            NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
        )
    }

    fn text_shapes(slide: &Slide) -> Vec<&crate::layout::shapes::TextShape> {
        slide
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    fn block_titles(slide: &Slide) -> Vec<String> {
        text_shapes(slide)
            .iter()
            .filter_map(|t| t.paragraphs.first())
            .filter_map(|p| p.runs.first())
            .map(|r| r.text.clone())
            .collect()
    }

    #[test]
    fn default_request_places_all_blocks() {
        let slide = slide_for(&LetterRequest::new("Kim", "Lee"));

        // border + card
        let rects: Vec<_> = slide
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Rect(_)))
            .collect();
        assert_eq!(rects.len(), 2);

        let titles = block_titles(&slide);
        assert!(titles.contains(&defaults::REQUEST_TITLE.to_string()));
        assert!(titles.contains(&defaults::MENTOR_NOTE_TITLE.to_string()));
        // default request hides the empty Q&A block
        assert!(!titles.contains(&defaults::QNA_TITLE.to_string()));
    }

    #[test]
    fn qna_block_present_when_not_hidden() {
        let mut req = LetterRequest::new("Kim", "Lee");
        req.hide_qna_if_empty = false;
        let slide = slide_for(&req);
        assert!(block_titles(&slide).contains(&defaults::QNA_TITLE.to_string()));
    }

    #[test]
    fn card_sits_before_its_text_block() {
        let slide = slide_for(&LetterRequest::new("Kim", "Lee"));
        let card_idx = slide
            .shapes
            .iter()
            .position(|s| matches!(s, Shape::Rect(r) if r.fill.is_some()))
            .expect("card rect");
        let note_idx = slide
            .shapes
            .iter()
            .position(|s| {
                matches!(s, Shape::Text(t)
                    if t.paragraphs.first().and_then(|p| p.runs.first())
                        .is_some_and(|r| r.text == defaults::MENTOR_NOTE_TITLE))
            })
            .expect("note block");
        assert!(card_idx < note_idx, "card background must render first");
    }

    #[test]
    fn footer_is_right_aligned_with_date() {
        let slide = slide_for(&LetterRequest::new("Kim", "Lee"));
        let footer = text_shapes(&slide)
            .into_iter()
            .flat_map(|t| t.paragraphs.iter())
            .find(|p| p.align == Align::Right)
            .expect("right-aligned footer");
        assert!(footer.runs[0].text.contains("2026.08.06"));
        assert!(footer.runs[0].text.contains("Kim"));
        assert!(footer.runs[0].text.contains("Lee"));
    }

    #[test]
    fn no_logo_means_no_picture_shape() {
        let slide = slide_for(&LetterRequest::new("Kim", "Lee"));
        assert!(slide.picture().is_none());
    }
}
