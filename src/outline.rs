//! YAML deck outlines.
//!
//! An outline describes a deck with the same primitives the built-in decks
//! use: a slide size in inches, a background color per slide and a list of
//! rectangles, ovals and text boxes placed at inch coordinates.
//!
//! ```yaml
//! title: Quarterly update
//! width: 13.33
//! height: 7.5
//! slides:
//!   - background: "1C2833"
//!     elements:
//!       - { kind: rect, left: 0, top: 0, width: 0.35, height: 7.5, fill: "2E4053" }
//!       - kind: text
//!         left: 1.0
//!         top: 2.2
//!         width: 11.0
//!         height: 1.5
//!         text: Quarterly update
//!         size: 54
//!         bold: true
//!         color: "F4F6F6"
//! ```
//!
//! Colors are hex triples and must be quoted, otherwise YAML may read
//! values such as `000000` as numbers.

use crate::common::{Emu, RgbColor};
use crate::error::{DeckError, Result};
use crate::pptx::{Alignment, AutoShapeType, Paragraph, Presentation, Shape, Slide};
use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::Path;

fn default_width() -> f64 {
    13.33
}

fn default_height() -> f64 {
    7.5
}

/// A whole deck.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Outline {
    pub title: Option<String>,
    /// Slide width in inches
    #[serde(default = "default_width")]
    pub width: f64,
    /// Slide height in inches
    #[serde(default = "default_height")]
    pub height: f64,
    /// Typeface for every element that does not name its own
    pub font: Option<String>,
    #[serde(default)]
    pub slides: Vec<SlideOutline>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlideOutline {
    pub background: Option<RgbColor>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Rect,
    Oval,
    Text,
}

/// One shape; coordinates and sizes in inches, font sizes in points.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Element {
    pub kind: ElementKind,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<RgbColor>,
    /// Keep the theme outline on rectangles and ovals
    #[serde(default)]
    pub outline: bool,
    pub text: Option<String>,
    pub font: Option<String>,
    pub size: Option<f64>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    pub color: Option<RgbColor>,
    pub align: Option<Alignment>,
    /// Word wrap for text boxes; on unless set to false
    pub wrap: Option<bool>,
    /// Space before the first paragraph, in points
    pub space_before: Option<f64>,
}

/// Slide sides PowerPoint accepts, in inches.
const SLIDE_INCHES: RangeInclusive<f64> = 1.0..=56.0;
/// Font sizes PowerPoint accepts, in points.
const FONT_POINTS: RangeInclusive<f64> = 1.0..=4000.0;
/// Paragraph spacing PowerPoint accepts, in points.
const SPACING_POINTS: RangeInclusive<f64> = 0.0..=1584.0;

impl Element {
    fn validate(&self) -> std::result::Result<(), String> {
        for (name, value) in [("left", self.left), ("top", self.top)] {
            if !value.is_finite() {
                return Err(format!("{} must be a finite number, got {}", name, value));
            }
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{} must be positive, got {}", name, value));
            }
        }
        if let Some(size) = self.size
            && !FONT_POINTS.contains(&size)
        {
            return Err(format!(
                "font size must be between {} and {} points, got {}",
                FONT_POINTS.start(),
                FONT_POINTS.end(),
                size
            ));
        }
        if let Some(pt) = self.space_before
            && !SPACING_POINTS.contains(&pt)
        {
            return Err(format!(
                "space before must be between {} and {} points, got {}",
                SPACING_POINTS.start(),
                SPACING_POINTS.end(),
                pt
            ));
        }
        Ok(())
    }
}

impl Outline {
    /// Parse an outline from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let outline: Outline =
            serde_saphyr::from_str(yaml).map_err(|e| DeckError::InvalidOutline(e.to_string()))?;
        outline.validate()?;
        Ok(outline)
    }

    /// Read and parse an outline file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&yaml)
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !SLIDE_INCHES.contains(&value) {
                return Err(DeckError::InvalidOutline(format!(
                    "slide {} must be between {} and {} inches, got {}",
                    name,
                    SLIDE_INCHES.start(),
                    SLIDE_INCHES.end(),
                    value
                )));
            }
        }
        if self.slides.is_empty() {
            return Err(DeckError::InvalidOutline("outline has no slides".to_string()));
        }

        for (slide_no, slide) in self.slides.iter().enumerate() {
            for (element_no, element) in slide.elements.iter().enumerate() {
                element.validate().map_err(|msg| {
                    DeckError::InvalidOutline(format!(
                        "slide {}, element {}: {}",
                        slide_no + 1,
                        element_no + 1,
                        msg
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// Build the presentation the outline describes.
    pub fn render(&self) -> Result<Presentation> {
        let mut pres = Presentation::with_size(Emu::inches(self.width), Emu::inches(self.height));
        pres.properties_mut().title = self.title.clone();

        for slide_outline in &self.slides {
            let slide = pres.add_slide();
            if let Some(color) = slide_outline.background {
                slide.set_background(color);
            }
            for element in &slide_outline.elements {
                self.add_element(slide, element);
            }
        }

        tracing::debug!(slides = pres.slide_count(), "Rendered outline");
        Ok(pres)
    }

    fn add_element(&self, slide: &mut Slide, element: &Element) {
        let (left, top) = (Emu::inches(element.left), Emu::inches(element.top));
        let (width, height) = (Emu::inches(element.width), Emu::inches(element.height));

        let shape: &mut Shape = match element.kind {
            ElementKind::Text => {
                let shape = slide.add_textbox(left, top, width, height);
                shape
                    .text_frame_mut()
                    .set_word_wrap(element.wrap.unwrap_or(true));
                if let Some(color) = element.fill {
                    shape.set_fill(color);
                }
                shape
            },
            ElementKind::Rect | ElementKind::Oval => {
                let shape_type = if element.kind == ElementKind::Rect {
                    AutoShapeType::Rectangle
                } else {
                    AutoShapeType::Oval
                };
                let shape = slide.add_shape(shape_type, left, top, width, height);
                if let Some(color) = element.fill {
                    shape.set_fill(color);
                }
                if !element.outline {
                    shape.clear_line();
                }
                if let Some(wrap) = element.wrap {
                    shape.text_frame_mut().set_word_wrap(wrap);
                }
                shape
            },
        };

        if let Some(ref text) = element.text {
            self.style_paragraph(shape.text_frame_mut().paragraph_mut(0), text, element);
        }
    }

    fn style_paragraph(&self, p: &mut Paragraph, text: &str, element: &Element) {
        p.set_text(text);
        if let Some(align) = element.align {
            p.set_alignment(align);
        }
        if let Some(pt) = element.space_before {
            p.set_space_before(pt);
        }

        let font = p.font_mut();
        if let Some(name) = element.font.as_deref().or(self.font.as_deref()) {
            font.name(name);
        }
        if let Some(size) = element.size {
            font.size(size);
        }
        if element.bold {
            font.bold(true);
        }
        if element.italic {
            font.italic(true);
        }
        if let Some(color) = element.color {
            font.color(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::ShapeKind;

    const SAMPLE: &str = r##"
title: Sample
width: 16
height: 9
font: Arial
slides:
  - background: "0D0626"
    elements:
      - kind: text
        left: 0
        top: 2.4
        width: 16
        height: 1.5
        text: HYPERVOLUME
        size: 72
        bold: true
        color: "FFFFFF"
        align: center
      - { kind: rect, left: 6.5, top: 5.0, width: 3, height: 0.06, fill: "E25B67" }
  - elements:
      - kind: oval
        left: 1
        top: 1
        width: 0.7
        height: 0.7
        fill: "#3A7C89"
        text: "1"
        size: 24
"##;

    #[test]
    fn test_parse_sample() {
        let outline = Outline::from_yaml(SAMPLE).unwrap();
        assert_eq!(outline.title.as_deref(), Some("Sample"));
        assert_eq!(outline.slides.len(), 2);
        assert_eq!(outline.slides[0].elements[1].kind, ElementKind::Rect);
        assert_eq!(
            outline.slides[1].elements[0].fill,
            Some(RgbColor::new(0x3A, 0x7C, 0x89))
        );
    }

    #[test]
    fn test_defaults() {
        let outline = Outline::from_yaml("slides:\n  - elements: []\n").unwrap();
        assert_eq!(outline.width, 13.33);
        assert_eq!(outline.height, 7.5);
        assert!(outline.slides[0].background.is_none());
    }

    #[test]
    fn test_render_sample() {
        let pres = Outline::from_yaml(SAMPLE).unwrap().render().unwrap();
        assert_eq!(pres.slide_count(), 2);
        assert_eq!(pres.slide_width().get(), 14630400);

        let first = pres.slide(0).unwrap();
        assert_eq!(first.background(), Some(RgbColor::new(0x0D, 0x06, 0x26)));
        let title = &first.shapes()[0];
        assert_eq!(title.kind(), ShapeKind::TextBox);
        let tf = title.text_frame().unwrap();
        assert_eq!(tf.word_wrap(), Some(true));
        let p = &tf.paragraphs()[0];
        assert_eq!(p.text(), "HYPERVOLUME");
        assert_eq!(p.alignment(), Some(Alignment::Center));
        assert_eq!(p.font().name.as_deref(), Some("Arial"));
        assert_eq!(p.font().size, Some(72.0));

        let oval = &pres.slide(1).unwrap().shapes()[0];
        assert_eq!(oval.kind(), ShapeKind::AutoShape(AutoShapeType::Oval));
        assert_eq!(oval.text_frame().map(|tf| tf.text()).as_deref(), Some("1"));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let yaml = "slides:\n  - elements:\n      - { kind: star, left: 0, top: 0, width: 1, height: 1 }\n";
        assert!(matches!(
            Outline::from_yaml(yaml),
            Err(DeckError::InvalidOutline(_))
        ));
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let yaml = "slides:\n  - background: \"navy\"\n";
        assert!(matches!(
            Outline::from_yaml(yaml),
            Err(DeckError::InvalidOutline(_))
        ));
    }

    #[test]
    fn test_empty_outline_is_rejected() {
        assert!(matches!(
            Outline::from_yaml("title: nothing\n"),
            Err(DeckError::InvalidOutline(msg)) if msg.contains("no slides")
        ));
    }

    fn element_error(fields: &str) -> String {
        let yaml = format!(
            "slides:\n  - elements:\n      - {{ kind: text, left: 0, top: 0, width: 1, height: 1, {} }}\n",
            fields
        );
        match Outline::from_yaml(&yaml) {
            Err(DeckError::InvalidOutline(msg)) => msg,
            other => panic!("expected an invalid outline, got {:?}", other.map(|o| o.slides.len())),
        }
    }

    #[test]
    fn test_slide_size_limits() {
        for (width, height) in [("100", "7.5"), ("13.33", "0.1"), (".nan", "7.5"), ("13.33", ".inf")] {
            let yaml = format!("width: {}\nheight: {}\nslides:\n  - elements: []\n", width, height);
            assert!(
                matches!(Outline::from_yaml(&yaml), Err(DeckError::InvalidOutline(_))),
                "{} x {} should be rejected",
                width,
                height
            );
        }

        let yaml = "width: 56\nheight: 1\nslides:\n  - elements: []\n";
        let pres = Outline::from_yaml(yaml).unwrap().render().unwrap();
        assert_eq!(pres.slide_width(), Emu::inches(56.0));
        assert_eq!(pres.slide_height().get(), 914400);
    }

    #[test]
    fn test_font_size_limits() {
        assert!(element_error("size: -5").contains("font size"));
        assert!(element_error("size: 0.5").contains("font size"));
        assert!(element_error("size: 5000").contains("font size"));
        assert!(element_error("size: .nan").contains("font size"));
    }

    #[test]
    fn test_space_before_limits() {
        assert!(element_error("space_before: -3").contains("space before"));
        assert!(element_error("space_before: 2000").contains("space before"));
        assert!(Outline::from_yaml(
            "slides:\n  - elements:\n      - { kind: text, left: 0, top: 0, width: 1, height: 1, space_before: 0 }\n"
        )
        .is_ok());
    }

    #[test]
    fn test_non_finite_geometry_is_rejected() {
        for yaml in [
            "slides:\n  - elements:\n      - { kind: rect, left: 0, top: 0, width: .nan, height: 1 }\n",
            "slides:\n  - elements:\n      - { kind: rect, left: .inf, top: 0, width: 1, height: 1 }\n",
        ] {
            assert!(matches!(
                Outline::from_yaml(yaml),
                Err(DeckError::InvalidOutline(msg)) if msg.starts_with("slide 1, element 1")
            ));
        }
    }

    #[test]
    fn test_zero_sized_element_is_rejected() {
        let yaml = "slides:\n  - elements:\n      - { kind: rect, left: 0, top: 0, width: 0, height: 1 }\n";
        assert!(Outline::from_yaml(yaml).is_err());
    }
}
