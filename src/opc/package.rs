/// The in-memory OPC package a writer assembles before serialization.
///
/// OpcPackage holds the package-level relationships and every part in the
/// order it was added, which is also the order the parts land in the ZIP
/// container.
use crate::opc::error::{OpcError, Result};
use crate::opc::packuri::{PACKAGE_URI, PackURI};
use crate::opc::part::Part;
use crate::opc::pkgwriter::PackageWriter;
use crate::opc::rel::Relationships;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    /// All parts in the package, in insertion order
    parts: Vec<Part>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: Vec::new(),
        }
    }

    /// Add a part; part names must be unique within the package.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        if self.contains(part.partname()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Check whether a part with this name exists.
    pub fn contains(&self, partname: &PackURI) -> bool {
        self.parts.iter().any(|p| p.partname() == partname)
    }

    /// Get a part by name.
    pub fn part(&self, partname: &PackURI) -> Result<&Part> {
        self.parts
            .iter()
            .find(|p| p.partname() == partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Get a mutable part by name.
    pub fn part_mut(&mut self, partname: &PackURI) -> Result<&mut Part> {
        self.parts
            .iter_mut()
            .find(|p| p.partname() == partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Iterate over all parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Number of parts, not counting `.rels` and content type entries.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Package-level relationships (`/_rels/.rels`).
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package itself to a part and return the rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(PACKAGE_URI);
        self.rels.get_or_add(reltype, &target_ref).r_id().to_string()
    }

    /// Check that every relationship points at a part in the package.
    pub fn validate(&self) -> Result<()> {
        let sources = std::iter::once((PACKAGE_URI, &self.rels))
            .chain(self.parts.iter().map(|p| (p.partname().as_str(), p.rels())));

        for (source_uri, rels) in sources {
            for rel in rels.iter() {
                let target = rel.target_partname()?;
                if !self.contains(&target) {
                    return Err(OpcError::DanglingRelationship {
                        source_uri: source_uri.to_string(),
                        r_id: rel.r_id().to_string(),
                        target: target.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Serialize the package to ZIP bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(self)
    }

    /// Save the package to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PackageWriter::write(path, self)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opc::constants::{content_type as ct, relationship_type as rt};

    fn uri(s: &str) -> PackURI {
        PackURI::new(s).unwrap()
    }

    #[test]
    fn test_add_and_lookup_parts() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(Part::new(uri("/ppt/presProps.xml"), ct::PML_PRES_PROPS, b"<x/>".to_vec()))
            .unwrap();

        assert_eq!(pkg.part_count(), 1);
        assert!(pkg.part(&uri("/ppt/presProps.xml")).is_ok());
        assert!(matches!(
            pkg.part(&uri("/ppt/missing.xml")),
            Err(OpcError::PartNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_part_rejected() {
        let mut pkg = OpcPackage::new();
        let part = Part::empty(uri("/ppt/presentation.xml"), ct::PML_PRESENTATION_MAIN);
        pkg.add_part(part.clone()).unwrap();
        assert!(matches!(
            pkg.add_part(part),
            Err(OpcError::DuplicatePart(_))
        ));
    }

    #[test]
    fn test_validate_detects_dangling_relationship() {
        let mut pkg = OpcPackage::new();
        let pres = uri("/ppt/presentation.xml");
        pkg.relate_to(&pres, rt::OFFICE_DOCUMENT);
        assert!(matches!(
            pkg.validate(),
            Err(OpcError::DanglingRelationship { .. })
        ));

        pkg.add_part(Part::empty(pres, ct::PML_PRESENTATION_MAIN)).unwrap();
        assert!(pkg.validate().is_ok());
    }
}
