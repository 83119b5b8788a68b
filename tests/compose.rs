//! End-to-end tests for letter2pptx.
//!
//! Every test drives the public API and then reads the produced buffer
//! back as a zip archive, asserting against the actual part contents,
//! the same thing PowerPoint sees. No file system or network access is
//! required except for the explicit output-file test.

use chrono::NaiveDate;
use letter2pptx::defaults;
use letter2pptx::{compose, compose_to_file, compose_with_date, ComposeError, LayoutConfig, LetterRequest};
use std::io::{Cursor, Read};

// ── Test helpers ─────────────────────────────────────────────────────────────

/// Route library logs through the test harness; `RUST_LOG=debug` shows the
/// compose steps when a test fails.
fn init_logs() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

fn request() -> LetterRequest {
    LetterRequest::new("Kim", "Lee")
}

fn compose_ok(request: &LetterRequest) -> Vec<u8> {
    init_logs();
    compose_with_date(request, &LayoutConfig::default(), fixed_date())
        .expect("compose should succeed")
}

fn part_names(bytes: &[u8]) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("output must be a zip");
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("output must be a zip");
    let mut part = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing part {name}"));
    let mut out = String::new();
    part.read_to_string(&mut out).expect("part must be UTF-8");
    out
}

fn slide_xml(bytes: &[u8]) -> String {
    read_part(bytes, "ppt/slides/slide1.xml")
}

/// A valid in-memory PNG of the given pixel size.
fn png_logo(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([11, 43, 76, 255]));
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .expect("png encode");
    buf.into_inner()
}

/// All `<a:off …/>` position attributes in a slide part, in order.
fn offsets(xml: &str) -> Vec<&str> {
    xml.match_indices("<a:off ")
        .map(|(i, _)| &xml[i..i + xml[i..].find("/>").unwrap() + 2])
        .collect()
}

// ── Property 1: one page, non-empty buffer ───────────────────────────────────

#[test]
fn produces_a_non_empty_single_slide_document() {
    let bytes = compose_ok(&request());
    assert!(!bytes.is_empty());
    assert_eq!(&bytes[..2], b"PK", "buffer must be a zip container");

    let names = part_names(&bytes);
    let slides: Vec<_> = names
        .iter()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .collect();
    assert_eq!(slides.len(), 1, "exactly one slide part, got {slides:?}");
    assert!(read_part(&bytes, "ppt/presentation.xml").contains("<p:sldIdLst><p:sldId"));
}

// ── Property 2: idempotence ──────────────────────────────────────────────────

#[test]
fn identical_input_and_date_give_identical_bytes() {
    let req = request();
    let a = compose_ok(&req);
    let b = compose_ok(&req);
    assert_eq!(a, b, "same input and date must be byte-identical");
}

// ── Properties 3–4: request-block default substitution ───────────────────────

#[test]
fn empty_request_text_falls_back_to_default_block() {
    let mut req = request();
    req.use_default_request = false;
    req.request_text = Some(String::new());
    let xml = slide_xml(&compose_ok(&req));
    assert!(xml.contains("1) 조직, 회사에 대한 이해"));
}

#[test]
fn five_char_request_text_is_kept_verbatim() {
    let mut req = request();
    req.use_default_request = false;
    req.request_text = Some("hello".into());
    let xml = slide_xml(&compose_ok(&req));
    assert!(xml.contains("<a:t>hello</a:t>"));
    assert!(!xml.contains("1) 조직, 회사에 대한 이해"));
}

#[test]
fn four_char_request_text_falls_back_to_default_block() {
    let mut req = request();
    req.use_default_request = false;
    req.request_text = Some("hell".into());
    let xml = slide_xml(&compose_ok(&req));
    assert!(!xml.contains("<a:t>hell</a:t>"));
    assert!(xml.contains("1) 조직, 회사에 대한 이해"));
}

// ── Property 5: Q&A suppression ──────────────────────────────────────────────

#[test]
fn empty_qna_with_hide_flag_omits_the_block() {
    let mut req = request();
    req.qna_text = Some(String::new());
    req.hide_qna_if_empty = true;
    let xml = slide_xml(&compose_ok(&req));
    assert!(!xml.contains(defaults::QNA_TITLE));
    assert!(!xml.contains(defaults::QNA_PLACEHOLDER));
}

#[test]
fn empty_qna_without_hide_flag_renders_placeholder() {
    let mut req = request();
    req.qna_text = Some(String::new());
    req.hide_qna_if_empty = false;
    let xml = slide_xml(&compose_ok(&req));
    assert!(xml.contains(defaults::QNA_TITLE));
    assert!(xml.contains(defaults::QNA_PLACEHOLDER));
}

// ── Property 6: opening sentence substitution ────────────────────────────────

#[test]
fn opening_sentence_substitutes_trimmed_names() {
    let mut req = LetterRequest::new(" Kim ", "Lee");
    req.qna_text = Some("질문".into());
    let xml = slide_xml(&compose_ok(&req));
    assert!(xml.contains("Kim 멘토님, Lee 멘티의 멘토링 지원을 잘 부탁드립니다."));
}

// ── Property 7: footer names and date ────────────────────────────────────────

#[test]
fn footer_carries_names_and_injected_date() {
    let xml = slide_xml(&compose_ok(&request()));
    assert!(xml.contains("Mentor: Kim  |  Mentee: Lee  |  Date: 2026.08.06"));
}

#[test]
fn footer_date_matches_the_calling_day() {
    // `compose` stamps today's date; tolerate a midnight rollover between
    // the two clock reads.
    let before = chrono::Local::now().date_naive();
    let bytes = compose(&request(), &LayoutConfig::default()).expect("compose");
    let after = chrono::Local::now().date_naive();

    let xml = slide_xml(&bytes);
    let found = [before, after]
        .iter()
        .any(|d| xml.contains(&format!("Date: {}", d.format("%Y.%m.%d"))));
    assert!(found, "footer must carry the date of the call");
}

// ── Property 8: optional logo ────────────────────────────────────────────────

#[test]
fn missing_logo_means_no_picture_and_no_media() {
    let bytes = compose_ok(&request());
    assert!(!slide_xml(&bytes).contains("<p:pic>"));
    assert!(!part_names(&bytes).iter().any(|n| n.starts_with("ppt/media/")));
}

#[test]
fn logo_is_embedded_with_natural_aspect_ratio() {
    let mut req = request();
    req.logo_image = Some(png_logo(10, 5));
    let bytes = compose_ok(&req);

    assert!(part_names(&bytes).contains(&"ppt/media/image1.png".to_string()));
    let xml = slide_xml(&bytes);
    assert!(xml.contains("<p:pic>"));
    // fixed 0.45 in height, width doubled for the 2:1 source
    assert!(xml.contains(r#"<a:ext cx="822960" cy="411480"/>"#));
}

#[test]
fn logo_does_not_move_the_other_elements() {
    let plain = slide_xml(&compose_ok(&request()));
    let mut req = request();
    req.logo_image = Some(png_logo(10, 5));
    let with_logo = slide_xml(&compose_ok(&req));

    let plain_offsets = offsets(&plain);
    let logo_offsets = offsets(&with_logo);
    assert_eq!(logo_offsets.len(), plain_offsets.len() + 1);
    for off in &plain_offsets {
        assert!(
            logo_offsets.contains(off),
            "element moved when the logo was added: {off}"
        );
    }
}

// ── Failure modes ────────────────────────────────────────────────────────────

#[test]
fn unreadable_logo_fails_the_whole_call() {
    let mut req = request();
    req.logo_image = Some(vec![0x00, 0x01, 0x02, 0x03]);
    let err = compose_with_date(&req, &LayoutConfig::default(), fixed_date()).unwrap_err();
    assert!(matches!(err, ComposeError::ImageDecode { .. }));
}

#[test]
fn blank_names_are_rejected() {
    let err = compose_with_date(
        &LetterRequest::new("", "Lee"),
        &LayoutConfig::default(),
        fixed_date(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ComposeError::Validation {
            field: "mentor_name"
        }
    ));
}

// ── Structural details ───────────────────────────────────────────────────────

#[test]
fn manager_name_is_accepted_but_never_rendered() {
    let mut req = request();
    req.manager_name = Some("Director Park".into());
    let xml = slide_xml(&compose_ok(&req));
    assert!(!xml.contains("Director Park"));
}

#[test]
fn template_without_placeholders_passes_through_literally() {
    let mut req = request();
    req.opening_template = "고정 인사말".into();
    let xml = slide_xml(&compose_ok(&req));
    assert!(xml.contains("<a:t>고정 인사말</a:t>"));
}

#[test]
fn markup_in_fields_is_escaped() {
    let mut req = LetterRequest::new("<Kim & Co>", "Lee");
    req.use_default_request = false;
    req.request_text = Some("a < b && c > d".into());
    let xml = slide_xml(&compose_ok(&req));
    assert!(xml.contains("a &lt; b &amp;&amp; c &gt; d"));
    assert!(!xml.contains("<Kim & Co>"));
}

#[test]
fn multi_line_body_becomes_one_paragraph_per_line() {
    let mut req = request();
    req.use_default_request = false;
    req.request_text = Some("첫 번째 줄\n두 번째 줄".into());
    let xml = slide_xml(&compose_ok(&req));
    assert!(xml.contains("<a:t>첫 번째 줄</a:t>"));
    assert!(xml.contains("<a:t>두 번째 줄</a:t>"));
    assert!(!xml.contains("첫 번째 줄\n두 번째 줄"));
}

#[test]
fn custom_font_flows_into_every_run() {
    let config = LayoutConfig::builder()
        .font_name("Noto Sans KR")
        .build()
        .unwrap();
    let bytes = compose_with_date(&request(), &config, fixed_date()).unwrap();
    let xml = slide_xml(&bytes);
    assert!(xml.contains(r#"<a:latin typeface="Noto Sans KR"/>"#));
    assert!(!xml.contains("Malgun Gothic"));
}

// ── File output ──────────────────────────────────────────────────────────────

#[test]
fn compose_to_file_writes_a_readable_package() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("letters").join("out.pptx");

    let written =
        compose_to_file(&request(), &LayoutConfig::default(), &path).expect("write letter");
    let on_disk = std::fs::read(&path).expect("file exists");
    assert_eq!(on_disk.len(), written);
    assert_eq!(&on_disk[..2], b"PK");

    // no temp file left behind
    let siblings: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(siblings.len(), 1, "unexpected leftovers: {siblings:?}");
}
