//! Renders the slide part (`ppt/slides/slide1.xml`) from the shape list.
//!
//! Shape ids start at 2; id 1 belongs to the root group of the shape tree.
//! The z-order of the XML is the insertion order of the shapes, which is
//! how the card background ends up behind the activity-report text.

use crate::layout::geometry::{centipoints, Emu, Rect};
use crate::layout::shapes::{
    Align, Paragraph, PictureShape, RectShape, Shape, Slide, TextShape,
};
use crate::pptx::parts::LOGO_REL_ID;
use crate::pptx::xml::escape;

/// Render the complete slide part.
pub fn render(slide: &Slide, font_name: &str) -> String {
    let mut shapes_xml = String::new();
    for (index, shape) in slide.shapes.iter().enumerate() {
        let id = index + 2;
        match shape {
            Shape::Rect(rect) => render_rect(&mut shapes_xml, rect, id),
            Shape::Text(text) => render_text(&mut shapes_xml, text, id, font_name),
            Shape::Picture(pic) => render_picture(&mut shapes_xml, pic, id),
        }
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>{shapes_xml}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"#
    )
}

fn xfrm(frame: &Rect) -> String {
    format!(
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        frame.x, frame.y, frame.cx, frame.cy
    )
}

fn render_rect(out: &mut String, rect: &RectShape, id: usize) {
    let fill = match rect.fill {
        Some(color) => format!(
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            color.to_drawingml()
        ),
        None => "<a:noFill/>".to_string(),
    };
    let line = match rect.outline {
        Some(outline) => format!(
            r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
            Emu::from_points(outline.width_pt),
            outline.color.to_drawingml()
        ),
        None => String::new(),
    };
    out.push_str(&format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Rectangle {id}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr>{}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>{fill}{line}</p:spPr><p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody></p:sp>"#,
        xfrm(&rect.frame)
    ));
}

fn render_text(out: &mut String, text: &TextShape, id: usize, font_name: &str) {
    let mut body = String::new();
    for paragraph in &text.paragraphs {
        body.push_str(&render_paragraph(paragraph, font_name));
    }
    out.push_str(&format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="TextBox {id}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr>{}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr><p:txBody><a:bodyPr wrap="square"/><a:lstStyle/>{body}</p:txBody></p:sp>"#,
        xfrm(&text.frame)
    ));
}

fn render_paragraph(paragraph: &Paragraph, font_name: &str) -> String {
    let mut props = String::new();
    let algn = match paragraph.align {
        Align::Left => "",
        Align::Right => r#" algn="r""#,
    };
    let spacing = match paragraph.space_after_pt {
        Some(pt) => format!(
            r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
            centipoints(pt)
        ),
        None => String::new(),
    };
    if !algn.is_empty() || !spacing.is_empty() {
        props = format!("<a:pPr{algn}>{spacing}</a:pPr>");
    }

    let mut runs = String::new();
    for run in &paragraph.runs {
        let bold = if run.bold { r#" b="1""# } else { "" };
        runs.push_str(&format!(
            r#"<a:r><a:rPr sz="{}"{bold}><a:latin typeface="{font}"/><a:ea typeface="{font}"/></a:rPr><a:t>{}</a:t></a:r>"#,
            centipoints(run.size_pt),
            escape(&run.text),
            font = escape(font_name),
        ));
    }

    format!("<a:p>{props}{runs}</a:p>")
}

fn render_picture(out: &mut String, pic: &PictureShape, id: usize) {
    out.push_str(&format!(
        r#"<p:pic><p:nvPicPr><p:cNvPr id="{id}" name="Logo"/><p:cNvPicPr/><p:nvPr/></p:nvPicPr><p:blipFill><a:blip r:embed="{LOGO_REL_ID}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr>{}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>"#,
        xfrm(&pic.frame)
    ));
}
