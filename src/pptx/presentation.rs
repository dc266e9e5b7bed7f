/// The presentation: slide size, slides and the package they are saved as.
use crate::common::Emu;
use crate::error::Result;
use crate::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::opc::{OpcPackage, PackURI, Part, PackageWriter};
use std::fmt::Write as FmtWrite;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use super::properties::CoreProperties;
use super::slide::Slide;
use super::template;

/// First id handed out to slides in `<p:sldIdLst>`.
const FIRST_SLIDE_ID: u32 = 256;

/// A presentation under construction.
///
/// Slides are appended with [`Presentation::add_slide`]; each one uses the
/// single blank layout, so everything on it comes from shapes added
/// explicitly.
#[derive(Debug, Clone)]
pub struct Presentation {
    slide_width: Emu,
    slide_height: Emu,
    slides: Vec<Slide>,
    properties: CoreProperties,
}

impl Presentation {
    /// Create an empty presentation with the default 10" x 7.5" slide size.
    pub fn new() -> Self {
        Self::with_size(Emu::inches(10.0), Emu::inches(7.5))
    }

    /// Create an empty presentation with the given slide size.
    pub fn with_size(width: Emu, height: Emu) -> Self {
        Self {
            slide_width: width,
            slide_height: height,
            slides: Vec::new(),
            properties: CoreProperties::default(),
        }
    }

    pub fn slide_width(&self) -> Emu {
        self.slide_width
    }

    pub fn set_slide_width(&mut self, width: Emu) {
        self.slide_width = width;
    }

    pub fn slide_height(&self) -> Emu {
        self.slide_height
    }

    pub fn set_slide_height(&mut self, height: Emu) {
        self.slide_height = height;
    }

    /// Append a blank slide and return it.
    pub fn add_slide(&mut self) -> &mut Slide {
        let slide_id = self
            .slides
            .iter()
            .map(Slide::slide_id)
            .max()
            .map_or(FIRST_SLIDE_ID, |id| id + 1);
        let index = self.slides.len();
        self.slides.push(Slide::new(slide_id));
        &mut self.slides[index]
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slide_mut(&mut self, index: usize) -> Option<&mut Slide> {
        self.slides.get_mut(index)
    }

    pub fn properties(&self) -> &CoreProperties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut CoreProperties {
        &mut self.properties
    }

    /// Generate `presentation.xml`.
    fn presentation_xml(&self, master_r_id: &str, slide_r_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(1024 + slide_r_ids.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        write!(
            xml,
            r#"<p:sldMasterIdLst><p:sldMasterId id="{}" r:id="{}"/></p:sldMasterIdLst>"#,
            template::SLIDE_MASTER_ID,
            master_r_id
        )?;

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, r_id) in self.slides.iter().zip(slide_r_ids) {
                write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide.slide_id(), r_id)?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Assemble the OPC package for this presentation.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let pres_uri = PackURI::new("/ppt/presentation.xml")?;
        let master_uri = PackURI::new("/ppt/slideMasters/slideMaster1.xml")?;
        let layout_uri = PackURI::new("/ppt/slideLayouts/slideLayout1.xml")?;
        let theme_uri = PackURI::new("/ppt/theme/theme1.xml")?;
        let pres_props_uri = PackURI::new("/ppt/presProps.xml")?;
        let table_styles_uri = PackURI::new("/ppt/tableStyles.xml")?;
        let core_uri = PackURI::new("/docProps/core.xml")?;
        let app_uri = PackURI::new("/docProps/app.xml")?;

        let mut package = OpcPackage::new();
        package.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        package.relate_to(&core_uri, rt::CORE_PROPERTIES);
        package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        let mut pres_part = Part::empty(pres_uri, ct::PML_PRESENTATION_MAIN);
        let master_r_id = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);

        let mut slide_parts = Vec::with_capacity(self.slides.len());
        let mut slide_r_ids = Vec::with_capacity(self.slides.len());
        for (index, slide) in self.slides.iter().enumerate() {
            let slide_uri = PackURI::new(format!("/ppt/slides/slide{}.xml", index + 1))?;
            slide_r_ids.push(pres_part.relate_to(&slide_uri, rt::SLIDE));

            let mut slide_part = Part::empty(slide_uri, ct::PML_SLIDE);
            slide_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
            slide_part.set_blob(slide.to_xml()?);
            debug!(
                slide = index + 1,
                shapes = slide.shape_count(),
                "Serialized slide"
            );
            slide_parts.push(slide_part);
        }

        pres_part.relate_to(&pres_props_uri, rt::PRES_PROPS);
        pres_part.relate_to(&table_styles_uri, rt::TABLE_STYLES);
        pres_part.relate_to(&theme_uri, rt::THEME);
        pres_part.set_blob(self.presentation_xml(&master_r_id, &slide_r_ids)?);

        let mut master_part = Part::empty(master_uri, ct::PML_SLIDE_MASTER);
        let layout_r_id = master_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        master_part.relate_to(&theme_uri, rt::THEME);
        master_part.set_blob(template::slide_master_xml(&layout_r_id)?);

        let mut layout_part = Part::new(
            layout_uri,
            ct::PML_SLIDE_LAYOUT,
            template::blank_layout_xml().into_bytes(),
        );
        layout_part.relate_to(master_part.partname(), rt::SLIDE_MASTER);

        package.add_part(pres_part)?;
        package.add_part(master_part)?;
        package.add_part(layout_part)?;
        for slide_part in slide_parts {
            package.add_part(slide_part)?;
        }
        package.add_part(Part::new(theme_uri, ct::OFC_THEME, template::THEME_XML.into()))?;
        package.add_part(Part::new(
            pres_props_uri,
            ct::PML_PRES_PROPS,
            template::PRES_PROPS_XML.into(),
        ))?;
        package.add_part(Part::new(
            table_styles_uri,
            ct::PML_TABLE_STYLES,
            template::TABLE_STYLES_XML.into(),
        ))?;
        package.add_part(Part::new(
            core_uri,
            ct::OPC_CORE_PROPERTIES,
            self.properties.to_xml()?.into_bytes(),
        ))?;
        package.add_part(Part::new(
            app_uri,
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_xml(self.slides.len())?.into_bytes(),
        ))?;

        Ok(package)
    }

    /// Serialize the presentation to .pptx bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(PackageWriter::to_bytes(&self.to_package()?)?)
    }

    /// Write the presentation as .pptx to any writer.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        Ok(PackageWriter::write_to_stream(writer, &self.to_package()?)?)
    }

    /// Save the presentation to a .pptx file, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        PackageWriter::write(path, &self.to_package()?)?;
        info!(
            path = %path.display(),
            slides = self.slides.len(),
            "Saved presentation"
        );
        Ok(())
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}
