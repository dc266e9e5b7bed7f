/// Shapes placed on a slide.
use crate::common::{Emu, RgbColor, escape_xml};
use crate::error::Result;
use serde::Deserialize;
use std::fmt::Write as FmtWrite;

use super::text::TextFrame;

/// Preset geometries available for autoshapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoShapeType {
    Rectangle,
    Oval,
    RoundedRectangle,
}

impl AutoShapeType {
    /// Value of the `prst` attribute of `<a:prstGeom>`.
    pub fn preset(&self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::Oval => "ellipse",
            Self::RoundedRectangle => "roundRect",
        }
    }

    /// Prefix of the default shape name.
    pub fn basename(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Oval => "Oval",
            Self::RoundedRectangle => "Rounded Rectangle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    AutoShape(AutoShapeType),
    TextBox,
}

/// Outline of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineFormat {
    /// Outline from the theme's line style
    #[default]
    Theme,
    /// No outline at all
    NoLine,
}

/// A shape on a slide: an autoshape or a text box.
#[derive(Debug, Clone)]
pub struct Shape {
    id: u32,
    name: String,
    kind: ShapeKind,
    left: Emu,
    top: Emu,
    width: Emu,
    height: Emu,
    fill: Option<RgbColor>,
    line: LineFormat,
    text_frame: Option<TextFrame>,
}

impl Shape {
    pub(crate) fn new_autoshape(
        id: u32,
        shape_type: AutoShapeType,
        left: Emu,
        top: Emu,
        width: Emu,
        height: Emu,
    ) -> Self {
        Self {
            id,
            name: format!("{} {}", shape_type.basename(), id - 1),
            kind: ShapeKind::AutoShape(shape_type),
            left,
            top,
            width,
            height,
            fill: None,
            line: LineFormat::Theme,
            text_frame: None,
        }
    }

    pub(crate) fn new_textbox(id: u32, left: Emu, top: Emu, width: Emu, height: Emu) -> Self {
        Self {
            id,
            name: format!("TextBox {}", id - 1),
            kind: ShapeKind::TextBox,
            left,
            top,
            width,
            height,
            fill: None,
            line: LineFormat::Theme,
            text_frame: Some(TextFrame::for_textbox()),
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn left(&self) -> Emu {
        self.left
    }

    pub fn top(&self) -> Emu {
        self.top
    }

    pub fn width(&self) -> Emu {
        self.width
    }

    pub fn height(&self) -> Emu {
        self.height
    }

    pub fn fill(&self) -> Option<RgbColor> {
        self.fill
    }

    /// Fill the shape with a solid color.
    pub fn set_fill(&mut self, color: RgbColor) -> &mut Self {
        self.fill = Some(color);
        self
    }

    pub fn line(&self) -> LineFormat {
        self.line
    }

    /// Remove the outline.
    pub fn clear_line(&mut self) -> &mut Self {
        self.line = LineFormat::NoLine;
        self
    }

    pub fn text_frame(&self) -> Option<&TextFrame> {
        self.text_frame.as_ref()
    }

    /// The shape's text frame, created on first access for autoshapes.
    pub fn text_frame_mut(&mut self) -> &mut TextFrame {
        self.text_frame.get_or_insert_with(TextFrame::for_autoshape)
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp>");

        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.id,
            escape_xml(&self.name)
        )?;
        match self.kind {
            ShapeKind::TextBox => xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#),
            ShapeKind::AutoShape(_) => xml.push_str("<p:cNvSpPr/>"),
        }
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        xml.push_str("<a:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, self.left, self.top)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, self.width, self.height)?;
        xml.push_str("</a:xfrm>");

        let preset = match self.kind {
            ShapeKind::AutoShape(shape_type) => shape_type.preset(),
            ShapeKind::TextBox => "rect",
        };
        write!(xml, r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#, preset)?;

        match (self.fill, self.kind) {
            (Some(color), _) => {
                write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color)?
            },
            (None, ShapeKind::TextBox) => xml.push_str("<a:noFill/>"),
            (None, ShapeKind::AutoShape(_)) => {},
        }

        if self.line == LineFormat::NoLine {
            xml.push_str("<a:ln><a:noFill/></a:ln>");
        }
        xml.push_str("</p:spPr>");

        if let ShapeKind::AutoShape(_) = self.kind {
            xml.push_str(AUTOSHAPE_STYLE);
        }

        match (&self.text_frame, self.kind) {
            (Some(text_frame), _) => text_frame.to_xml(xml)?,
            // Autoshapes always carry a text body, even an empty one
            (None, ShapeKind::AutoShape(_)) => TextFrame::for_autoshape().to_xml(xml)?,
            (None, ShapeKind::TextBox) => {},
        }

        xml.push_str("</p:sp>");
        Ok(())
    }
}

/// Theme references given to every new autoshape.
const AUTOSHAPE_STYLE: &str = concat!(
    "<p:style>",
    r#"<a:lnRef idx="1"><a:schemeClr val="accent1"/></a:lnRef>"#,
    r#"<a:fillRef idx="3"><a:schemeClr val="accent1"/></a:fillRef>"#,
    r#"<a:effectRef idx="2"><a:schemeClr val="accent1"/></a:effectRef>"#,
    r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef>"#,
    "</p:style>"
);

#[cfg(test)]
mod tests {
    use super::*;

    fn xml_of(shape: &Shape) -> String {
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_rectangle_xml() {
        let mut shape = Shape::new_autoshape(
            2,
            AutoShapeType::Rectangle,
            Emu::ZERO,
            Emu::ZERO,
            Emu::inches(13.33),
            Emu::inches(0.06),
        );
        shape.set_fill(RgbColor::new(0x1E, 0x90, 0xFF)).clear_line();

        let xml = xml_of(&shape);
        assert!(xml.contains(r#"<p:cNvPr id="2" name="Rectangle 1"/>"#));
        assert!(xml.contains(r#"<a:ext cx="12188952" cy="54864"/>"#));
        assert!(xml.contains(r#"<a:prstGeom prst="rect">"#));
        assert!(xml.contains(
            r#"<a:solidFill><a:srgbClr val="1E90FF"/></a:solidFill><a:ln><a:noFill/></a:ln></p:spPr>"#
        ));
        assert!(xml.contains(r#"<a:fillRef idx="3">"#));
        assert!(xml.contains(r#"<a:bodyPr rtlCol="0" anchor="ctr"/>"#));
    }

    #[test]
    fn test_oval_geometry_and_name() {
        let shape = Shape::new_autoshape(
            5,
            AutoShapeType::Oval,
            Emu::inches(1.0),
            Emu::inches(1.0),
            Emu::inches(0.5),
            Emu::inches(0.5),
        );
        let xml = xml_of(&shape);
        assert_eq!(shape.name(), "Oval 4");
        assert!(xml.contains(r#"prst="ellipse""#));
        // Theme outline is left alone
        assert!(!xml.contains("<a:ln>"));
    }

    #[test]
    fn test_textbox_xml() {
        let mut shape = Shape::new_textbox(3, Emu::inches(0.8), Emu::inches(2.0), Emu::inches(11.0), Emu::inches(1.2));
        shape
            .text_frame_mut()
            .paragraph_mut(0)
            .add_run("Test Presentation")
            .font_mut()
            .size(54.0)
            .bold(true);

        let xml = xml_of(&shape);
        assert!(xml.contains(r#"<p:cNvPr id="3" name="TextBox 2"/><p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains("<a:noFill/></p:spPr>"));
        assert!(!xml.contains("<p:style>"));
        assert!(xml.contains(r#"<a:bodyPr wrap="none"><a:spAutoFit/></a:bodyPr>"#));
        assert!(xml.contains(r#"sz="5400" b="1""#));
        assert!(xml.contains("<a:t>Test Presentation</a:t>"));
    }

    #[test]
    fn test_autoshape_text_frame_created_lazily() {
        let mut shape = Shape::new_autoshape(
            2,
            AutoShapeType::Rectangle,
            Emu::ZERO,
            Emu::ZERO,
            Emu::inches(1.0),
            Emu::inches(1.0),
        );
        assert!(shape.text_frame().is_none());
        shape.text_frame_mut().set_text("$200M");
        assert_eq!(shape.text_frame().map(TextFrame::text).as_deref(), Some("$200M"));
    }
}
