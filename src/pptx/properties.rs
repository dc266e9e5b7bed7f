//! Document properties (`docProps/core.xml`).

use crate::common::escape_xml;
use crate::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write as FmtWrite;

/// Core document properties written to `docProps/core.xml`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreProperties {
    pub title: Option<String>,
    pub creator: Option<String>,
    pub last_modified_by: Option<String>,
    pub revision: u32,
    /// Creation time; the save time when unset
    pub created: Option<DateTime<Utc>>,
    /// Modification time; the save time when unset
    pub modified: Option<DateTime<Utc>>,
}

impl Default for CoreProperties {
    fn default() -> Self {
        Self {
            title: None,
            creator: Some(env!("CARGO_PKG_NAME").to_string()),
            last_modified_by: None,
            revision: 1,
            created: None,
            modified: None,
        }
    }
}

impl CoreProperties {
    pub(crate) fn to_xml(&self) -> Result<String> {
        let now = Utc::now();
        let created = self.created.unwrap_or(now);
        let modified = self.modified.unwrap_or(now);

        let mut xml = String::with_capacity(768);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(concat!(
            r#"<cp:coreProperties "#,
            r#"xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" "#,
            r#"xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
        ));

        if let Some(ref title) = self.title {
            write!(xml, "<dc:title>{}</dc:title>", escape_xml(title))?;
        }
        if let Some(ref creator) = self.creator {
            write!(xml, "<dc:creator>{}</dc:creator>", escape_xml(creator))?;
        }
        if let Some(ref last_modified_by) = self.last_modified_by {
            write!(
                xml,
                "<cp:lastModifiedBy>{}</cp:lastModifiedBy>",
                escape_xml(last_modified_by)
            )?;
        }
        write!(xml, "<cp:revision>{}</cp:revision>", self.revision)?;
        write!(
            xml,
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
            created.to_rfc3339_opts(SecondsFormat::Secs, true)
        )?;
        write!(
            xml,
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
            modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        )?;
        xml.push_str("</cp:coreProperties>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_timestamps() {
        let when = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let props = CoreProperties {
            title: Some("Q&A".to_string()),
            created: Some(when),
            modified: Some(when),
            ..Default::default()
        };

        let xml = props.to_xml().unwrap();
        assert!(xml.contains("<dc:title>Q&amp;A</dc:title>"));
        assert!(xml.contains("<dc:creator>deckwright</dc:creator>"));
        assert!(xml.contains(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">2024-03-01T12:00:00Z</dcterms:created>"#
        ));
        assert!(xml.contains("<cp:revision>1</cp:revision>"));
    }
}
