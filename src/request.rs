//! The input value object for one letter generation.
//!
//! [`LetterRequest`] is constructed fresh per invocation by the form layer
//! (or the CLI shim) and discarded once the byte buffer is produced. The
//! text fields round-trip through serde so a form backend can hand over a
//! JSON payload; the logo travels out-of-band as raw bytes and is skipped
//! during serialisation.
//!
//! The field-resolution rules (default request block, Q&A suppression,
//! opening-sentence substitution) live here as pure methods so they can be
//! unit-tested without building a document.

use crate::defaults;
use crate::error::ComposeError;
use crate::layout::geometry::RgbColor;
use serde::{Deserialize, Serialize};
use tracing::warn;

fn default_opening_template() -> String {
    defaults::OPENING_TEMPLATE.to_string()
}

fn default_mentor_note() -> String {
    defaults::MENTOR_NOTE_DEFAULT.to_string()
}

fn default_accent() -> RgbColor {
    RgbColor::new(0x0B, 0x2B, 0x4C)
}

fn default_true() -> bool {
    true
}

/// Input fields for one mentoring letter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterRequest {
    /// Mentor name. Required: must be non-empty after trimming.
    pub mentor_name: String,

    /// Mentee name. Required: must be non-empty after trimming.
    pub mentee_name: String,

    /// Manager name. Collected by the form but never placed on the canvas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_name: Option<String>,

    /// Opening-sentence template containing `{mentor}` and `{mentee}`.
    /// Placeholders that never occur pass through literally.
    #[serde(default = "default_opening_template")]
    pub opening_template: String,

    /// Free-text body for the request block. Replaced by the default block
    /// when [`use_default_request`](Self::use_default_request) is set or the
    /// trimmed text is shorter than five characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_text: Option<String>,

    /// Force the default request block regardless of `request_text`.
    #[serde(default = "default_true")]
    pub use_default_request: bool,

    /// Free-text body for the Q&A block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qna_text: Option<String>,

    /// Omit the Q&A block entirely when `qna_text` trims to empty.
    #[serde(default = "default_true")]
    pub hide_qna_if_empty: bool,

    /// Body of the activity-report block, rendered verbatim (not trimmed,
    /// not defaulted at compose time).
    #[serde(default = "default_mentor_note")]
    pub mentor_note_text: String,

    /// Optional PNG/JPEG logo bytes, embedded at a fixed height with
    /// natural aspect ratio. Not part of the JSON payload.
    #[serde(skip)]
    pub logo_image: Option<Vec<u8>>,

    /// Branding accent colour. Accepted and carried with the request; no
    /// layout rule consults it.
    #[serde(default = "default_accent")]
    pub accent_color: RgbColor,
}

impl LetterRequest {
    /// A request for the given mentor/mentee with every other field at its
    /// form default.
    pub fn new(mentor_name: impl Into<String>, mentee_name: impl Into<String>) -> Self {
        Self {
            mentor_name: mentor_name.into(),
            mentee_name: mentee_name.into(),
            manager_name: None,
            opening_template: default_opening_template(),
            request_text: None,
            use_default_request: true,
            qna_text: None,
            hide_qna_if_empty: true,
            mentor_note_text: default_mentor_note(),
            logo_image: None,
            accent_color: default_accent(),
        }
    }

    /// Check the two required name fields.
    ///
    /// The calling layer runs this before invoking the composer so the user
    /// sees a blocking message instead of a generated document.
    pub fn validate(&self) -> Result<(), ComposeError> {
        if self.mentor_name.trim().is_empty() {
            return Err(ComposeError::Validation {
                field: "mentor_name",
            });
        }
        if self.mentee_name.trim().is_empty() {
            return Err(ComposeError::Validation {
                field: "mentee_name",
            });
        }
        Ok(())
    }

    /// The dynamic opening sentence: trimmed names substituted into the
    /// template.
    ///
    /// Substitution is plain string replacement. A template missing a
    /// placeholder produces a sentence without that name; this is logged,
    /// not raised.
    pub fn opening_sentence(&self) -> String {
        for placeholder in ["{mentor}", "{mentee}"] {
            if !self.opening_template.contains(placeholder) {
                warn!(
                    "opening template does not contain {}; the name will not appear",
                    placeholder
                );
            }
        }
        self.opening_template
            .replace("{mentor}", self.mentor_name.trim())
            .replace("{mentee}", self.mentee_name.trim())
    }

    /// Body of the request block after the default-substitution rule.
    ///
    /// The default block is used when the caller asked for it, or when the
    /// trimmed text is shorter than five characters (counted in chars, so
    /// Korean text is not penalised).
    pub fn resolved_request_body(&self) -> String {
        let trimmed = self.request_text.as_deref().unwrap_or("").trim();
        if self.use_default_request || trimmed.chars().count() < 5 {
            defaults::REQUEST_DEFAULT.to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Body of the Q&A block, or `None` when the block is suppressed.
    ///
    /// Suppression requires both: [`hide_qna_if_empty`](Self::hide_qna_if_empty)
    /// set and the trimmed text empty. An empty but unsuppressed block gets
    /// the literal placeholder body.
    pub fn resolved_qna_body(&self) -> Option<String> {
        let trimmed = self.qna_text.as_deref().unwrap_or("").trim();
        if self.hide_qna_if_empty && trimmed.is_empty() {
            return None;
        }
        if trimmed.is_empty() {
            Some(defaults::QNA_PLACEHOLDER.to_string())
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Footer line with the raw (untrimmed) names and a formatted date.
    pub fn footer_line(&self, date: chrono::NaiveDate) -> String {
        defaults::FOOTER_TEMPLATE
            .replace("{mentor}", &self.mentor_name)
            .replace("{mentee}", &self.mentee_name)
            .replace("{date}", &date.format(defaults::FOOTER_DATE_FORMAT).to_string())
    }

    /// Suggested download file name: `Mentoring_Letter_{mentee}_{mentor}.pptx`.
    pub fn suggested_file_name(&self) -> String {
        format!(
            "Mentoring_Letter_{}_{}.pptx",
            self.mentee_name.trim(),
            self.mentor_name.trim()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_blank_names() {
        let mut req = LetterRequest::new("  ", "Lee");
        assert!(matches!(
            req.validate(),
            Err(ComposeError::Validation {
                field: "mentor_name"
            })
        ));
        req.mentor_name = "Kim".into();
        req.mentee_name = "\t".into();
        assert!(matches!(
            req.validate(),
            Err(ComposeError::Validation {
                field: "mentee_name"
            })
        ));
    }

    #[test]
    fn opening_sentence_trims_names() {
        let req = LetterRequest::new(" Kim ", "Lee");
        let s = req.opening_sentence();
        assert!(s.starts_with("Kim 멘토님"));
        assert!(s.contains("Lee 멘티"));
        assert!(!s.contains(" Kim "));
    }

    #[test]
    fn opening_sentence_leaves_missing_placeholder_literal() {
        let mut req = LetterRequest::new("Kim", "Lee");
        req.opening_template = "{mentor} 멘토님께".into();
        assert_eq!(req.opening_sentence(), "Kim 멘토님께");
    }

    #[test]
    fn request_body_defaults_when_short() {
        let mut req = LetterRequest::new("Kim", "Lee");
        req.use_default_request = false;
        req.request_text = Some("".into());
        assert_eq!(req.resolved_request_body(), defaults::REQUEST_DEFAULT);

        // four characters: still the default
        req.request_text = Some("abcd".into());
        assert_eq!(req.resolved_request_body(), defaults::REQUEST_DEFAULT);
    }

    #[test]
    fn request_body_kept_at_five_chars() {
        let mut req = LetterRequest::new("Kim", "Lee");
        req.use_default_request = false;
        req.request_text = Some("hello".into());
        assert_eq!(req.resolved_request_body(), "hello");

        // five Korean characters also pass the char-count rule
        req.request_text = Some("가나다라마".into());
        assert_eq!(req.resolved_request_body(), "가나다라마");
    }

    #[test]
    fn request_body_forced_default_wins_over_long_text() {
        let mut req = LetterRequest::new("Kim", "Lee");
        req.use_default_request = true;
        req.request_text = Some("a perfectly long request".into());
        assert_eq!(req.resolved_request_body(), defaults::REQUEST_DEFAULT);
    }

    #[test]
    fn qna_suppressed_only_when_hidden_and_empty() {
        let mut req = LetterRequest::new("Kim", "Lee");
        req.qna_text = Some("  ".into());
        req.hide_qna_if_empty = true;
        assert_eq!(req.resolved_qna_body(), None);

        req.hide_qna_if_empty = false;
        assert_eq!(
            req.resolved_qna_body().as_deref(),
            Some(defaults::QNA_PLACEHOLDER)
        );

        req.qna_text = Some(" 온보딩 일정 문의 ".into());
        req.hide_qna_if_empty = true;
        assert_eq!(req.resolved_qna_body().as_deref(), Some("온보딩 일정 문의"));
    }

    #[test]
    fn footer_uses_raw_names_and_dotted_date() {
        let req = LetterRequest::new(" Kim ", "Lee");
        let d = chrono::NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(
            req.footer_line(d),
            "Mentor:  Kim   |  Mentee: Lee  |  Date: 2026.08.06"
        );
    }

    #[test]
    fn suggested_file_name_is_mentee_first() {
        let req = LetterRequest::new("Kim", "Lee");
        assert_eq!(req.suggested_file_name(), "Mentoring_Letter_Lee_Kim.pptx");
    }

    #[test]
    fn json_payload_round_trip_skips_logo() {
        let mut req = LetterRequest::new("Kim", "Lee");
        req.logo_image = Some(vec![1, 2, 3]);
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("logo_image"));

        let back: LetterRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.mentor_name, "Kim");
        assert!(back.logo_image.is_none());
        assert!(back.use_default_request);
        assert!(back.hide_qna_if_empty);
    }

    #[test]
    fn json_defaults_applied_to_minimal_payload() {
        let req: LetterRequest =
            serde_json::from_str(r#"{"mentor_name":"Kim","mentee_name":"Lee"}"#).unwrap();
        assert_eq!(req.opening_template, defaults::OPENING_TEMPLATE);
        assert_eq!(req.mentor_note_text, defaults::MENTOR_NOTE_DEFAULT);
        assert_eq!(req.accent_color.to_hex(), "#0B2B4C");
    }
}
