//! Read a written deck back into a summary.
//!
//! Only what a deck is checked against is extracted: the slide size, and per
//! slide the background color, the number of shapes and the text of each
//! text body, in slide order.

use crate::common::{Emu, RgbColor};
use crate::error::{DeckError, Result};
use crate::opc::PackURI;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fmt;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;
use zip::result::ZipError;

/// What one slide holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideSummary {
    /// 1-based position in the deck
    pub index: usize,
    /// Number of `p:sp` shapes on the slide
    pub shape_count: usize,
    /// Solid background color, when the slide sets one
    pub background: Option<RgbColor>,
    /// Text of every non-empty text body, paragraphs joined by newlines
    pub texts: Vec<String>,
}

/// What a whole deck holds.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckSummary {
    pub slide_width: Emu,
    pub slide_height: Emu,
    pub slides: Vec<SlideSummary>,
}

impl DeckSummary {
    /// Summarize a .pptx file.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_bytes(&bytes)
    }

    /// Summarize .pptx bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;

        let pres_uri = PackURI::new("/ppt/presentation.xml")?;
        let pres_xml = read_part(&mut archive, pres_uri.membername())?;
        let (slide_width, slide_height, slide_r_ids) = parse_presentation(&pres_xml)?;

        let rels_uri = pres_uri.rels_uri()?;
        let rels_xml = read_part(&mut archive, rels_uri.membername())?;
        let targets = parse_rels(&rels_xml)?;

        let mut slides = Vec::with_capacity(slide_r_ids.len());
        for (index, r_id) in slide_r_ids.iter().enumerate() {
            let target = targets
                .iter()
                .find(|(id, _)| id == r_id)
                .map(|(_, target)| target.as_str())
                .ok_or_else(|| DeckError::MissingPart(format!("relationship {}", r_id)))?;
            let slide_uri = PackURI::from_rel_ref(pres_uri.base_uri(), target)?;
            let slide_xml = read_part(&mut archive, slide_uri.membername())?;
            slides.push(parse_slide(index + 1, &slide_xml)?);
        }

        Ok(Self {
            slide_width,
            slide_height,
            slides,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Every text body in the deck, in slide order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.slides
            .iter()
            .flat_map(|slide| slide.texts.iter().map(String::as_str))
    }
}

impl fmt::Display for DeckSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} slides, {:.2}\" x {:.2}\"",
            self.slides.len(),
            self.slide_width.to_inches(),
            self.slide_height.to_inches()
        )?;
        for slide in &self.slides {
            write!(f, "Slide {}: {} shapes", slide.index, slide.shape_count)?;
            if let Some(color) = slide.background {
                write!(f, ", background #{}", color)?;
            }
            writeln!(f)?;
            for text in &slide.texts {
                writeln!(f, "  {}", text.replace('\n', " / "))?;
            }
        }
        Ok(())
    }
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Err(DeckError::MissingPart(name.to_string())),
        Err(e) => return Err(e.into()),
    };
    let mut xml = String::with_capacity(entry.size() as usize);
    entry.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Raw value of the attribute whose qualified name is `key`.
fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            let value =
                std::str::from_utf8(&attr.value).map_err(|e| DeckError::Xml(e.to_string()))?;
            return Ok(Some(value.to_string()));
        }
    }
    Ok(None)
}

fn parse_emu(e: &BytesStart<'_>, key: &[u8]) -> Result<Emu> {
    let value = attr_value(e, key)?.ok_or_else(|| {
        DeckError::Xml(format!(
            "<{}> has no {} attribute",
            String::from_utf8_lossy(e.name().as_ref()),
            String::from_utf8_lossy(key)
        ))
    })?;
    atoi_simd::parse::<i64, false, false>(value.as_bytes())
        .map(Emu)
        .map_err(|_| DeckError::Xml(format!("invalid length: {}", value)))
}

/// Slide size and the slide rIds, in presentation order.
fn parse_presentation(xml: &str) -> Result<(Emu, Emu, Vec<String>)> {
    let mut reader = Reader::from_str(xml);
    let mut size = None;
    let mut r_ids = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                b"sldSz" => size = Some((parse_emu(&e, b"cx")?, parse_emu(&e, b"cy")?)),
                b"sldId" => {
                    if let Some(r_id) = attr_value(&e, b"r:id")? {
                        r_ids.push(r_id);
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    let (width, height) =
        size.ok_or_else(|| DeckError::Xml("presentation has no slide size".to_string()))?;
    Ok((width, height, r_ids))
}

/// `(rId, target)` pairs of a .rels part.
fn parse_rels(xml: &str) -> Result<Vec<(String, String)>> {
    let mut reader = Reader::from_str(xml);
    let mut rels = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                if let (Some(id), Some(target)) =
                    (attr_value(&e, b"Id")?, attr_value(&e, b"Target")?)
                {
                    rels.push((id, target));
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(rels)
}

/// Character for a predefined or numeric entity reference.
fn resolve_entity(name: &[u8]) -> Option<char> {
    match name {
        b"amp" => Some('&'),
        b"lt" => Some('<'),
        b"gt" => Some('>'),
        b"quot" => Some('"'),
        b"apos" => Some('\''),
        [b'#', b'x' | b'X', hex @ ..] => std::str::from_utf8(hex)
            .ok()
            .and_then(|h| u32::from_str_radix(h, 16).ok())
            .and_then(char::from_u32),
        [b'#', dec @ ..] => atoi_simd::parse::<u32, false, false>(dec).ok().and_then(char::from_u32),
        _ => None,
    }
}

fn parse_slide(index: usize, xml: &str) -> Result<SlideSummary> {
    let mut reader = Reader::from_str(xml);
    let mut summary = SlideSummary {
        index,
        ..Default::default()
    };

    let mut in_bg = false;
    let mut in_t = false;
    let mut body: Option<String> = None;
    let mut paragraphs = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"sp" => summary.shape_count += 1,
                b"bg" => in_bg = true,
                b"txBody" => {
                    body = Some(String::new());
                    paragraphs = 0;
                },
                b"p" => {
                    if let Some(ref mut text) = body {
                        if paragraphs > 0 {
                            text.push('\n');
                        }
                        paragraphs += 1;
                    }
                },
                b"t" => in_t = true,
                b"br" => {
                    if let Some(ref mut text) = body {
                        text.push('\n');
                    }
                },
                b"srgbClr" if in_bg && summary.background.is_none() => {
                    summary.background = background_color(&e)?;
                },
                _ => {},
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" => {
                    if let Some(ref mut text) = body {
                        if paragraphs > 0 {
                            text.push('\n');
                        }
                        paragraphs += 1;
                    }
                },
                b"br" => {
                    if let Some(ref mut text) = body {
                        text.push('\n');
                    }
                },
                b"srgbClr" if in_bg && summary.background.is_none() => {
                    summary.background = background_color(&e)?;
                },
                _ => {},
            },
            Event::Text(e) if in_t => {
                let t = std::str::from_utf8(e.as_ref()).map_err(|e| DeckError::Xml(e.to_string()))?;
                if let Some(ref mut text) = body {
                    text.push_str(t);
                }
            },
            Event::GeneralRef(e) if in_t => {
                let c = resolve_entity(e.as_ref()).ok_or_else(|| {
                    DeckError::Xml(format!(
                        "unknown entity &{};",
                        String::from_utf8_lossy(e.as_ref())
                    ))
                })?;
                if let Some(ref mut text) = body {
                    text.push(c);
                }
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"bg" => in_bg = false,
                b"t" => in_t = false,
                b"txBody" => {
                    if let Some(text) = body.take() {
                        let trimmed = text.trim_end_matches('\n');
                        if !trimmed.is_empty() {
                            summary.texts.push(trimmed.to_string());
                        }
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(summary)
}

fn background_color(e: &BytesStart<'_>) -> Result<Option<RgbColor>> {
    attr_value(e, b"val")?
        .map(|val| RgbColor::from_hex(&val))
        .transpose()
}
