/// Slides and their shape trees.
use crate::common::{Emu, RgbColor};
use crate::error::Result;
use crate::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

use super::shape::{AutoShapeType, Shape};

/// A slide built on the blank layout.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Slide ID, unique within the presentation
    slide_id: u32,
    /// Solid background color; `None` follows the master
    background: Option<RgbColor>,
    /// Shapes in z-order, back to front
    shapes: Vec<Shape>,
}

impl Slide {
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            background: None,
            shapes: Vec::new(),
        }
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Give the slide a solid background color.
    pub fn set_background(&mut self, color: RgbColor) -> &mut Self {
        self.background = Some(color);
        self
    }

    pub fn background(&self) -> Option<RgbColor> {
        self.background
    }

    /// Next free shape id; id 1 belongs to the shape tree itself.
    fn next_shape_id(&self) -> u32 {
        self.shapes.iter().map(Shape::id).max().unwrap_or(1) + 1
    }

    /// Add an autoshape on top of the existing shapes.
    pub fn add_shape(
        &mut self,
        shape_type: AutoShapeType,
        left: Emu,
        top: Emu,
        width: Emu,
        height: Emu,
    ) -> &mut Shape {
        let id = self.next_shape_id();
        let index = self.shapes.len();
        self.shapes
            .push(Shape::new_autoshape(id, shape_type, left, top, width, height));
        &mut self.shapes[index]
    }

    /// Add a text box on top of the existing shapes.
    pub fn add_textbox(&mut self, left: Emu, top: Emu, width: Emu, height: Emu) -> &mut Shape {
        let id = self.next_shape_id();
        let index = self.shapes.len();
        self.shapes
            .push(Shape::new_textbox(id, left, top, width, height));
        &mut self.shapes[index]
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Generate the slide part XML.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.shapes.len() * 1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;
        xml.push_str("<p:cSld>");

        // Background must come before the shape tree
        if let Some(color) = self.background {
            write!(
                xml,
                r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
                color
            )?;
        }

        xml.push_str("<p:spTree>");
        xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
        xml.push_str("<p:grpSpPr>");
        xml.push_str(r#"<a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm>"#);
        xml.push_str("</p:grpSpPr>");

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_ids_start_after_group() {
        let mut slide = Slide::new(256);
        let a = slide
            .add_shape(AutoShapeType::Rectangle, Emu::ZERO, Emu::ZERO, Emu::inches(1.0), Emu::inches(1.0))
            .id();
        let b = slide
            .add_textbox(Emu::ZERO, Emu::ZERO, Emu::inches(1.0), Emu::inches(1.0))
            .id();
        assert_eq!((a, b), (2, 3));
        assert_eq!(slide.shape_count(), 2);
        assert_eq!(slide.shapes()[1].name(), "TextBox 2");
    }

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = Slide::new(256);
        slide.set_background(RgbColor::new(0x0A, 0x16, 0x28));
        slide.add_textbox(Emu::ZERO, Emu::ZERO, Emu::inches(1.0), Emu::inches(1.0));

        let xml = slide.to_xml().unwrap();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.contains(r#"<a:srgbClr val="0A1628"/>"#));
        assert!(xml.ends_with("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"));
    }

    #[test]
    fn test_no_background_follows_master() {
        let slide = Slide::new(256);
        let xml = slide.to_xml().unwrap();
        assert!(!xml.contains("<p:bg>"));
        assert!(xml.contains(r#"<p:cNvPr id="1" name=""/>"#));
    }

    #[test]
    fn test_shapes_keep_z_order() {
        let mut slide = Slide::new(256);
        slide
            .add_shape(AutoShapeType::Rectangle, Emu::ZERO, Emu::ZERO, Emu::inches(1.0), Emu::inches(1.0))
            .set_fill(RgbColor::BLACK);
        slide
            .add_textbox(Emu::ZERO, Emu::ZERO, Emu::inches(1.0), Emu::inches(1.0))
            .text_frame_mut()
            .set_text("on top");

        let xml = slide.to_xml().unwrap();
        assert!(xml.find("Rectangle 1").unwrap() < xml.find("on top").unwrap());
    }
}
