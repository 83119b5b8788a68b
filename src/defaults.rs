//! Literal text used on the rendered letter.
//!
//! Centralising every fixed string here serves two purposes:
//!
//! 1. **Single source of truth** — the wording on the slide (captions,
//!    default blocks, footer labels) is edited in exactly one place.
//!
//! 2. **Testability** — unit and integration tests can import the literals
//!    and assert against the rendered slide part without duplicating the
//!    wording.
//!
//! Callers can override the opening template, the request block and the
//! mentor note via [`crate::request::LetterRequest`]; the constants here are
//! used when no override is provided.

/// Explanatory sentence rendered bold across the top of the letter.
pub const HEADER_SENTENCE: &str =
    "멘토링 Letter는 멘토/멘티가 유의미한 멘토링이 되도록 참고할 수 있는 내용을 리더가 멘토에게 보내는 메시지 입니다.";

/// Left section caption ("to the mentor").
pub const SECTION_MENTOR: &str = "멘토에게";

/// Right section caption ("activity report").
pub const SECTION_REPORT: &str = "활동 후기";

/// Default opening-sentence template.
///
/// `{mentor}` and `{mentee}` are replaced with the trimmed names; a
/// placeholder that never occurs in the template passes through literally.
pub const OPENING_TEMPLATE: &str =
    "{mentor} 멘토님, {mentee} 멘티의 멘토링 지원을 잘 부탁드립니다.";

/// Title of the left-column request block.
pub const REQUEST_TITLE: &str = "조직장 요청사항";

/// Body used for the request block when the caller supplied none (or fewer
/// than five characters), or explicitly asked for the default form.
pub const REQUEST_DEFAULT: &str = "1) 조직, 회사에 대한 이해
  - 조직의 방향성 및 구성에 대한 빠른 학습
  - 안정적으로 팀 문화에 적응할 수 있도록 도와주세요.
  - 업무적으로 편안하게 질문 할 수 있는 관계 형성이 되면 좋겠습니다.

2) 성장 및 업무 관련 지원
  - 팀 업무를 위해 사용 필요한 각종 시스템 및 프로세스에 대해 알려주세요.
  - 앞으로 맡아서 진행할 프로젝트 내 역할 분담";

/// Title of the left-column Q&A block.
pub const QNA_TITLE: &str = "멘티 질문·고민";

/// Body shown in the Q&A block when it is empty but not suppressed.
pub const QNA_PLACEHOLDER: &str = "(멘티 작성 예정)";

/// Title of the right-column activity-report block.
pub const MENTOR_NOTE_TITLE: &str = "멘토 활동 후기";

/// Default guidance body for the activity-report block.
pub const MENTOR_NOTE_DEFAULT: &str = "▶ 리더 요청 사항 기반 활동한 내용을 간단하게 작성해주세요
▶ 추가적으로 조직장이 F/U이 필요한 사항을 작성해주세요.
   (ex 멘토링 활동간 멘티 궁금해 했으나, 답변을 못한 부분 or 요청한 사항)";

/// Footer line. `{mentor}`, `{mentee}` and `{date}` are substituted; the
/// names are used exactly as supplied (not trimmed).
pub const FOOTER_TEMPLATE: &str = "Mentor: {mentor}  |  Mentee: {mentee}  |  Date: {date}";

/// Date format used in the footer.
pub const FOOTER_DATE_FORMAT: &str = "%Y.%m.%d";

/// MIME type of the produced buffer.
pub const PPTX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";
