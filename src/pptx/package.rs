//! Zip assembly: all parts → the final `.pptx` byte buffer.
//!
//! Entry metadata is pinned (fixed timestamp, fixed ordering, fixed
//! compression) so the buffer is a pure function of the slide content and
//! the compose date: identical input yields byte-identical output.

use crate::config::LayoutConfig;
use crate::error::ComposeError;
use crate::layout::shapes::Slide;
use crate::pptx::{parts, slide as slide_xml};
use chrono::NaiveDate;
use std::io::{Cursor, Write};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Serialise the assembled slide into a complete presentation package.
pub fn write_package(
    slide: &Slide,
    config: &LayoutConfig,
    date: NaiveDate,
) -> Result<Vec<u8>, ComposeError> {
    let logo = slide.picture().map(|p| &p.logo);
    let logo_format = logo.map(|l| l.format);

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    // zip::DateTime::default() is the DOS epoch; wall-clock time must not
    // leak into the buffer.
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    let part = |zip: &mut ZipWriter<Cursor<Vec<u8>>>,
                name: &str,
                content: &[u8]|
     -> Result<(), ComposeError> {
        zip.start_file(name, options.clone())?;
        zip.write_all(content)?;
        Ok(())
    };

    part(
        &mut zip,
        "[Content_Types].xml",
        parts::content_types(logo_format).as_bytes(),
    )?;
    part(&mut zip, "_rels/.rels", parts::ROOT_RELS.as_bytes())?;
    part(&mut zip, "docProps/app.xml", parts::APP_PROPERTIES.as_bytes())?;
    part(
        &mut zip,
        "docProps/core.xml",
        parts::core_properties(date).as_bytes(),
    )?;
    part(
        &mut zip,
        "ppt/presentation.xml",
        parts::presentation(config).as_bytes(),
    )?;
    part(
        &mut zip,
        "ppt/_rels/presentation.xml.rels",
        parts::PRESENTATION_RELS.as_bytes(),
    )?;
    part(
        &mut zip,
        "ppt/slideMasters/slideMaster1.xml",
        parts::slide_master().as_bytes(),
    )?;
    part(
        &mut zip,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        parts::SLIDE_MASTER_RELS.as_bytes(),
    )?;
    part(
        &mut zip,
        "ppt/slideLayouts/slideLayout1.xml",
        parts::slide_layout().as_bytes(),
    )?;
    part(
        &mut zip,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        parts::SLIDE_LAYOUT_RELS.as_bytes(),
    )?;
    part(&mut zip, "ppt/theme/theme1.xml", parts::THEME.as_bytes())?;
    part(
        &mut zip,
        "ppt/slides/slide1.xml",
        slide_xml::render(slide, &config.font_name).as_bytes(),
    )?;
    part(
        &mut zip,
        "ppt/slides/_rels/slide1.xml.rels",
        parts::slide_rels(logo_format).as_bytes(),
    )?;

    if let Some(logo) = logo {
        let name = format!("ppt/media/image1.{}", logo.format.extension());
        part(&mut zip, &name, &logo.bytes)?;
    }

    let cursor = zip.finish()?;
    let bytes = cursor.into_inner();
    debug!("package assembled: {} bytes", bytes.len());
    Ok(bytes)
}
