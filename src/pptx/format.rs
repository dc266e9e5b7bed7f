//! Format types for PPTX text.

use crate::common::{RgbColor, escape_xml};
use crate::error::Result;
use serde::Deserialize;
use std::fmt::Write as FmtWrite;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Value of the `algn` attribute.
    pub fn as_xml(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
            Self::Justify => "just",
        }
    }
}

/// Vertical anchoring of text inside its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Top,
    Middle,
    Bottom,
}

impl Anchor {
    /// Value of the `anchor` attribute.
    pub fn as_xml(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// How a text frame and its shape adjust to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoSize {
    /// Neither the shape nor the text is resized
    None,
    /// The shape grows to fit its text
    ShapeToFitText,
    /// The text shrinks to fit its shape
    TextToFitShape,
}

impl AutoSize {
    pub(crate) fn as_xml(&self) -> &'static str {
        match self {
            Self::None => "<a:noAutofit/>",
            Self::ShapeToFitText => "<a:spAutoFit/>",
            Self::TextToFitShape => "<a:normAutofit/>",
        }
    }
}

/// Character formatting for a run of text.
///
/// Unset properties inherit from the slide master's text styles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Font {
    /// Latin typeface, e.g. "Arial"
    pub name: Option<String>,
    /// Size in points
    pub size: Option<f64>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    /// Solid text color
    pub color: Option<RgbColor>,
}

impl Font {
    /// Builder method: set typeface.
    pub fn name(&mut self, name: &str) -> &mut Self {
        self.name = Some(name.to_string());
        self
    }

    /// Builder method: set size in points.
    pub fn size(&mut self, size: f64) -> &mut Self {
        self.size = Some(size);
        self
    }

    /// Builder method: set bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.bold = Some(bold);
        self
    }

    /// Builder method: set italic.
    pub fn italic(&mut self, italic: bool) -> &mut Self {
        self.italic = Some(italic);
        self
    }

    /// Builder method: set underline.
    pub fn underline(&mut self, underline: bool) -> &mut Self {
        self.underline = Some(underline);
        self
    }

    /// Builder method: set color.
    pub fn color(&mut self, color: RgbColor) -> &mut Self {
        self.color = Some(color);
        self
    }

    /// Properties set here win; unset ones fall back to `base`.
    pub(crate) fn over(&self, base: &Font) -> Font {
        Font {
            name: self.name.clone().or_else(|| base.name.clone()),
            size: self.size.or(base.size),
            bold: self.bold.or(base.bold),
            italic: self.italic.or(base.italic),
            underline: self.underline.or(base.underline),
            color: self.color.or(base.color),
        }
    }

    /// Write an `<a:rPr>` element for this font.
    pub(crate) fn write_rpr(&self, xml: &mut String) -> Result<()> {
        xml.push_str(r#"<a:rPr lang="en-US""#);

        if let Some(size) = self.size {
            // Hundredths of a point, limited to 100..=400000
            let sz = if size.is_nan() {
                100.0
            } else {
                (size * 100.0).round().clamp(100.0, 400_000.0)
            };
            write!(xml, r#" sz="{}""#, sz as u32)?;
        }
        if let Some(bold) = self.bold {
            xml.push_str(if bold { r#" b="1""# } else { r#" b="0""# });
        }
        if let Some(italic) = self.italic {
            xml.push_str(if italic { r#" i="1""# } else { r#" i="0""# });
        }
        if let Some(underline) = self.underline {
            xml.push_str(if underline {
                r#" u="sng""#
            } else {
                r#" u="none""#
            });
        }
        xml.push_str(r#" dirty="0""#);

        if self.color.is_none() && self.name.is_none() {
            xml.push_str("/>");
            return Ok(());
        }

        xml.push('>');
        // Fill precedes the typeface elements in CT_TextCharacterProperties
        if let Some(color) = self.color {
            write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color)?;
        }
        if let Some(ref name) = self.name {
            write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(name))?;
        }
        xml.push_str("</a:rPr>");

        Ok(())
    }
}
