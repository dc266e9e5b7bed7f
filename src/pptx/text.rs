/// Text frames, paragraphs and runs.
use crate::common::escape_xml;
use crate::error::Result;
use std::fmt::Write as FmtWrite;

use super::format::{Alignment, Anchor, AutoSize, Font};

/// A run of uniformly formatted text.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    text: String,
    font: Font,
}

impl Run {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            font: Font::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn font_mut(&mut self) -> &mut Font {
        &mut self.font
    }

    /// Write the run; a newline becomes an `<a:br/>` carrying the same
    /// formatting.
    fn to_xml(&self, xml: &mut String, base: &Font) -> Result<()> {
        let font = self.font.over(base);

        for (i, line) in self.text.split(['\n', '\u{b}']).enumerate() {
            if i > 0 {
                xml.push_str("<a:br>");
                font.write_rpr(xml)?;
                xml.push_str("</a:br>");
            }
            if line.is_empty() {
                continue;
            }
            xml.push_str("<a:r>");
            font.write_rpr(xml)?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
            xml.push_str("</a:r>");
        }

        Ok(())
    }
}

/// A paragraph: alignment, spacing and a sequence of runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    alignment: Option<Alignment>,
    /// Space before, in points
    space_before: Option<f64>,
    /// Space after, in points
    space_after: Option<f64>,
    /// Character formatting shared by every run of the paragraph
    font: Font,
    runs: Vec<Run>,
}

/// `a:spcPts` value: hundredths of a point, limited to 0..=158400.
fn spacing_val(pt: f64) -> i64 {
    if pt.is_nan() {
        return 0;
    }
    (pt * 100.0).round().clamp(0.0, 158_400.0) as i64
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn space_before(&self) -> Option<f64> {
        self.space_before
    }

    /// Set the space before the paragraph, in points.
    pub fn set_space_before(&mut self, pt: f64) -> &mut Self {
        self.space_before = Some(pt);
        self
    }

    pub fn space_after(&self) -> Option<f64> {
        self.space_after
    }

    /// Set the space after the paragraph, in points.
    pub fn set_space_after(&mut self, pt: f64) -> &mut Self {
        self.space_after = Some(pt);
        self
    }

    /// Paragraph-level formatting, applied to every run that does not
    /// override it.
    pub fn font_mut(&mut self) -> &mut Font {
        &mut self.font
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Append a run and return it for formatting.
    pub fn add_run(&mut self, text: &str) -> &mut Run {
        let index = self.runs.len();
        self.runs.push(Run::new(text));
        &mut self.runs[index]
    }

    /// Replace all runs with a single run of `text`.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.runs.clear();
        self.runs.push(Run::new(text));
        self
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Concatenated text of every run.
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }

    fn write_ppr(&self, xml: &mut String) -> Result<()> {
        if self.alignment.is_none() && self.space_before.is_none() && self.space_after.is_none() {
            return Ok(());
        }

        xml.push_str("<a:pPr");
        if let Some(alignment) = self.alignment {
            write!(xml, r#" algn="{}""#, alignment.as_xml())?;
        }

        if self.space_before.is_none() && self.space_after.is_none() {
            xml.push_str("/>");
            return Ok(());
        }

        xml.push('>');
        if let Some(pt) = self.space_before {
            write!(xml, r#"<a:spcBef><a:spcPts val="{}"/></a:spcBef>"#, spacing_val(pt))?;
        }
        if let Some(pt) = self.space_after {
            write!(xml, r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#, spacing_val(pt))?;
        }
        xml.push_str("</a:pPr>");

        Ok(())
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");
        self.write_ppr(xml)?;
        for run in &self.runs {
            run.to_xml(xml, &self.font)?;
        }
        xml.push_str("</a:p>");
        Ok(())
    }
}

/// The text container of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    /// `Some(true)` wraps at the shape edge, `Some(false)` never wraps
    word_wrap: Option<bool>,
    auto_size: Option<AutoSize>,
    anchor: Option<Anchor>,
    /// Written as `rtlCol="0"`, as autoshapes carry it
    rtl_col: bool,
    paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Text frame of a new text box: no wrapping, shape grows to fit text.
    pub(crate) fn for_textbox() -> Self {
        Self {
            word_wrap: Some(false),
            auto_size: Some(AutoSize::ShapeToFitText),
            anchor: None,
            rtl_col: false,
            paragraphs: vec![Paragraph::new()],
        }
    }

    /// Text frame of a new autoshape: vertically and horizontally centered.
    pub(crate) fn for_autoshape() -> Self {
        let mut paragraph = Paragraph::new();
        paragraph.set_alignment(Alignment::Center);
        Self {
            word_wrap: None,
            auto_size: None,
            anchor: Some(Anchor::Middle),
            rtl_col: true,
            paragraphs: vec![paragraph],
        }
    }

    pub fn word_wrap(&self) -> Option<bool> {
        self.word_wrap
    }

    pub fn set_word_wrap(&mut self, wrap: bool) -> &mut Self {
        self.word_wrap = Some(wrap);
        self
    }

    pub fn auto_size(&self) -> Option<AutoSize> {
        self.auto_size
    }

    /// `None` removes any auto-fit setting so the slide master decides.
    pub fn set_auto_size(&mut self, auto_size: Option<AutoSize>) -> &mut Self {
        self.auto_size = auto_size;
        self
    }

    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: Anchor) -> &mut Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Get a paragraph by index, adding empty paragraphs up to it if needed.
    pub fn paragraph_mut(&mut self, index: usize) -> &mut Paragraph {
        while self.paragraphs.len() <= index {
            self.paragraphs.push(Paragraph::new());
        }
        &mut self.paragraphs[index]
    }

    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        let index = self.paragraphs.len();
        self.paragraphs.push(Paragraph::new());
        &mut self.paragraphs[index]
    }

    /// Replace the text: one paragraph per line of `text`, each a single run.
    ///
    /// The first paragraph keeps its alignment, spacing and font.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        let template = self.paragraphs.first().cloned().unwrap_or_default();
        self.paragraphs = text
            .split('\n')
            .enumerate()
            .map(|(i, line)| {
                let mut paragraph = if i == 0 {
                    template.clone()
                } else {
                    Paragraph::new()
                };
                paragraph.set_text(line);
                paragraph
            })
            .collect();
        self
    }

    /// Text of all paragraphs joined by newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:txBody>");

        xml.push_str("<a:bodyPr");
        match self.word_wrap {
            Some(true) => xml.push_str(r#" wrap="square""#),
            Some(false) => xml.push_str(r#" wrap="none""#),
            None => {},
        }
        if self.rtl_col {
            xml.push_str(r#" rtlCol="0""#);
        }
        if let Some(anchor) = self.anchor {
            write!(xml, r#" anchor="{}""#, anchor.as_xml())?;
        }
        match self.auto_size {
            Some(auto_size) => {
                xml.push('>');
                xml.push_str(auto_size.as_xml());
                xml.push_str("</a:bodyPr>");
            },
            None => xml.push_str("/>"),
        }

        xml.push_str("<a:lstStyle/>");
        for paragraph in &self.paragraphs {
            paragraph.to_xml(xml)?;
        }
        xml.push_str("</p:txBody>");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RgbColor;

    fn paragraph_xml(p: &Paragraph) -> String {
        let mut xml = String::new();
        p.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_textbox_defaults() {
        let mut xml = String::new();
        TextFrame::for_textbox().to_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            r#"<p:txBody><a:bodyPr wrap="none"><a:spAutoFit/></a:bodyPr><a:lstStyle/><a:p></a:p></p:txBody>"#
        );
    }

    #[test]
    fn test_autoshape_defaults() {
        let mut xml = String::new();
        TextFrame::for_autoshape().to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<a:bodyPr rtlCol="0" anchor="ctr"/>"#));
        assert!(xml.contains(r#"<a:p><a:pPr algn="ctr"/></a:p>"#));
    }

    #[test]
    fn test_wrap_without_autofit() {
        let mut tf = TextFrame::for_textbox();
        tf.set_word_wrap(true).set_auto_size(None);
        let mut xml = String::new();
        tf.to_xml(&mut xml).unwrap();
        assert!(xml.starts_with(r#"<p:txBody><a:bodyPr wrap="square"/>"#));
    }

    #[test]
    fn test_paragraph_spacing_and_alignment() {
        let mut p = Paragraph::new();
        p.set_alignment(Alignment::Center)
            .set_space_before(8.0)
            .set_space_after(0.0);
        let xml = paragraph_xml(&p);
        assert_eq!(
            xml,
            concat!(
                r#"<a:p><a:pPr algn="ctr"><a:spcBef><a:spcPts val="800"/></a:spcBef>"#,
                r#"<a:spcAft><a:spcPts val="0"/></a:spcAft></a:pPr></a:p>"#
            )
        );
    }

    #[test]
    fn test_spacing_is_clamped() {
        let mut p = Paragraph::new();
        p.set_space_before(-3.0).set_space_after(5000.0);
        let xml = paragraph_xml(&p);
        assert!(xml.contains(r#"<a:spcBef><a:spcPts val="0"/></a:spcBef>"#));
        assert!(xml.contains(r#"<a:spcAft><a:spcPts val="158400"/></a:spcAft>"#));
    }

    #[test]
    fn test_newline_becomes_line_break() {
        let mut p = Paragraph::new();
        p.add_run("Proprietary\nPersistence Layer").font_mut().bold(true);
        let xml = paragraph_xml(&p);

        assert_eq!(xml.matches("<a:r>").count(), 2);
        assert_eq!(xml.matches("<a:br>").count(), 1);
        assert!(xml.contains("<a:t>Proprietary</a:t>"));
        assert!(xml.contains("<a:t>Persistence Layer</a:t>"));
        assert_eq!(p.text(), "Proprietary\nPersistence Layer");
    }

    #[test]
    fn test_paragraph_font_reaches_runs() {
        let mut p = Paragraph::new();
        p.set_text("Healthcare");
        p.font_mut().size(14.0).color(RgbColor::WHITE);
        let xml = paragraph_xml(&p);
        assert!(xml.contains(r#"sz="1400""#));
        assert!(xml.contains(r#"<a:srgbClr val="FFFFFF"/>"#));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut p = Paragraph::new();
        p.set_text("<3% & rising");
        assert!(paragraph_xml(&p).contains("<a:t>&lt;3% &amp; rising</a:t>"));
    }

    #[test]
    fn test_set_text_splits_paragraphs_and_keeps_first_format() {
        let mut tf = TextFrame::for_autoshape();
        tf.set_text("one\ntwo");
        assert_eq!(tf.paragraphs().len(), 2);
        assert_eq!(tf.paragraphs()[0].alignment(), Some(Alignment::Center));
        assert_eq!(tf.paragraphs()[1].alignment(), None);
        assert_eq!(tf.text(), "one\ntwo");
    }

    #[test]
    fn test_paragraph_mut_grows() {
        let mut tf = TextFrame::for_textbox();
        tf.paragraph_mut(2).set_text("third");
        assert_eq!(tf.paragraphs().len(), 3);
        assert_eq!(tf.text(), "\n\nthird");
    }
}
