//! CLI binary for letter2pptx.
//!
//! The stand-in for the interactive form: collects field values, enforces
//! that mentor/mentee names are present before invoking the composer,
//! reads the logo file into raw bytes, and writes the returned buffer to
//! disk under the suggested file name.

use anyhow::{bail, Context, Result};
use clap::Parser;
use letter2pptx::{compose_to_file, LayoutConfig, LetterRequest, RgbColor};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}

const AFTER_HELP: &str = r##"EXAMPLES:
  # Minimal letter with the default request form and guidance note
  letter2pptx --mentor "김지훈" --mentee "이서연"

  # Custom request items from a file, mentee questions inline
  letter2pptx --mentor 김지훈 --mentee 이서연 \
      --request-file request.txt --no-default-request \
      --qna "온보딩 일정이 궁금합니다."

  # Branding: logo and accent colour, explicit output path
  letter2pptx --mentor Kim --mentee Lee --logo logo.png \
      --accent "#0B2B4C" -o letters/onboarding.pptx

  # Load the text fields from a form backend's JSON payload
  letter2pptx --request-json payload.json --logo logo.png

  # Preview the opening sentence without generating a document
  letter2pptx --mentor Kim --mentee Lee --preview

FIELD DEFAULTS:
  The request block falls back to the built-in form when it is empty,
  shorter than five characters, or --use-default-request is in effect
  (the default, matching the HRD form; pass --no-default-request to
  keep your own text). An empty Q&A block is omitted unless
  --keep-empty-qna is given, in which case it renders a placeholder.

ENVIRONMENT VARIABLES:
  LETTER2PPTX_OUTPUT   Default output path
  LETTER2PPTX_LOGO     Default logo file
  LETTER2PPTX_ACCENT   Default accent colour (#RRGGBB)
"##;

/// Generate a single-slide mentoring-letter .pptx from form fields.
#[derive(Parser, Debug)]
#[command(
    name = "letter2pptx",
    version,
    about = "Generate a single-slide mentoring-letter .pptx from form fields",
    long_about = "Render the mentoring-letter form fields (mentor/mentee names, leader \
request items, mentee questions, activity-report guidance, optional logo) into a \
fixed-layout 16:9 PowerPoint document.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Mentor name (required unless supplied via --request-json).
    #[arg(long)]
    mentor: Option<String>,

    /// Mentee name (required unless supplied via --request-json).
    #[arg(long)]
    mentee: Option<String>,

    /// Manager name. Collected for the record; not rendered on the letter.
    #[arg(long)]
    manager: Option<String>,

    /// Opening-sentence template with {mentor} and {mentee} placeholders.
    #[arg(long)]
    template: Option<String>,

    /// Leader request items, inline.
    #[arg(long, conflicts_with = "request_file")]
    request: Option<String>,

    /// Leader request items, read from a text file.
    #[arg(long, value_name = "PATH")]
    request_file: Option<PathBuf>,

    /// Keep the supplied request text even when short; without this flag
    /// the built-in default form is used, as on the HRD form.
    #[arg(long)]
    no_default_request: bool,

    /// Mentee questions/concerns, inline.
    #[arg(long, conflicts_with = "qna_file")]
    qna: Option<String>,

    /// Mentee questions/concerns, read from a text file.
    #[arg(long, value_name = "PATH")]
    qna_file: Option<PathBuf>,

    /// Render the Q&A block with a placeholder even when empty, instead of
    /// omitting it.
    #[arg(long)]
    keep_empty_qna: bool,

    /// Activity-report guidance, inline (defaults to the built-in note).
    #[arg(long, conflicts_with = "note_file")]
    note: Option<String>,

    /// Activity-report guidance, read from a text file.
    #[arg(long, value_name = "PATH")]
    note_file: Option<PathBuf>,

    /// Logo image file (PNG or JPEG), placed top-left at fixed height.
    #[arg(long, env = "LETTER2PPTX_LOGO", value_name = "PATH")]
    logo: Option<PathBuf>,

    /// Branding accent colour as #RRGGBB.
    #[arg(long, env = "LETTER2PPTX_ACCENT")]
    accent: Option<String>,

    /// Typeface for every run on the slide.
    #[arg(long, default_value = "Malgun Gothic")]
    font: String,

    /// Load the text fields from a JSON payload (CLI flags override it).
    #[arg(long, value_name = "PATH")]
    request_json: Option<PathBuf>,

    /// Output path. Default: Mentoring_Letter_{mentee}_{mentor}.pptx.
    #[arg(short, long, env = "LETTER2PPTX_OUTPUT")]
    output: Option<PathBuf>,

    /// Print the opening sentence and exit without generating a document.
    #[arg(long)]
    preview: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build the request ────────────────────────────────────────────────
    let request = build_request(&cli)?;

    // Caller-side validation: a blank name is a form error, and no
    // document is produced.
    if request.validate().is_err() {
        bail!("mentor and mentee names are required (got mentor='{}', mentee='{}')",
            request.mentor_name, request.mentee_name);
    }

    // ── Preview mode ─────────────────────────────────────────────────────
    if cli.preview {
        println!("{}", request.opening_sentence());
        return Ok(());
    }

    // ── Compose and write ────────────────────────────────────────────────
    let config = LayoutConfig::builder()
        .font_name(cli.font.as_str())
        .build()
        .context("Invalid layout configuration")?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(request.suggested_file_name()));

    let written = compose_to_file(&request, &config, &output)
        .context("Letter generation failed")?;

    if !cli.quiet {
        eprintln!(
            "{}  {}  {}",
            green("✔"),
            bold(&output.display().to_string()),
            dim(&format!("{:.1} KB", written as f64 / 1024.0)),
        );
    }

    Ok(())
}

/// Map CLI args (and the optional JSON payload) to a `LetterRequest`.
fn build_request(cli: &Cli) -> Result<LetterRequest> {
    let mut request = match &cli.request_json {
        Some(path) => {
            let payload = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read request payload {:?}", path))?;
            serde_json::from_str(&payload)
                .with_context(|| format!("Invalid request payload {:?}", path))?
        }
        None => LetterRequest::new(
            cli.mentor.clone().unwrap_or_default(),
            cli.mentee.clone().unwrap_or_default(),
        ),
    };

    // Flags override the payload.
    if let Some(mentor) = &cli.mentor {
        request.mentor_name = mentor.clone();
    }
    if let Some(mentee) = &cli.mentee {
        request.mentee_name = mentee.clone();
    }
    if let Some(manager) = &cli.manager {
        request.manager_name = Some(manager.clone());
    }
    if let Some(template) = &cli.template {
        request.opening_template = template.clone();
    }

    if let Some(text) = text_arg(&cli.request, &cli.request_file, "request")? {
        request.request_text = Some(text);
    }
    if cli.no_default_request {
        request.use_default_request = false;
    }

    if let Some(text) = text_arg(&cli.qna, &cli.qna_file, "Q&A")? {
        request.qna_text = Some(text);
    }
    if cli.keep_empty_qna {
        request.hide_qna_if_empty = false;
    }

    if let Some(text) = text_arg(&cli.note, &cli.note_file, "note")? {
        request.mentor_note_text = text;
    }

    if let Some(path) = &cli.logo {
        request.logo_image = Some(
            std::fs::read(path).with_context(|| format!("Failed to read logo {:?}", path))?,
        );
    }
    if let Some(accent) = &cli.accent {
        request.accent_color =
            RgbColor::from_hex(accent).with_context(|| format!("Invalid --accent '{accent}'"))?;
    }

    Ok(request)
}

/// Resolve an inline-or-file text argument.
fn text_arg(
    inline: &Option<String>,
    file: &Option<PathBuf>,
    what: &str,
) -> Result<Option<String>> {
    match (inline, file) {
        (Some(text), _) => Ok(Some(text.clone())),
        (None, Some(path)) => read_text_file(path, what).map(Some),
        (None, None) => Ok(None),
    }
}

fn read_text_file(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {what} text from {:?}", path))
}
