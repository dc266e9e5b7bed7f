use crate::opc::packuri::PackURI;
use crate::opc::rel::Relationships;

/// A part in an OPC package.
///
/// Parts are the fundamental units of content in an OPC package. Each part
/// has a unique partname, a content type, its serialized content, and
/// relationships to other parts.
#[derive(Debug, Clone)]
pub struct Part {
    /// The partname (URI) of this part
    partname: PackURI,

    /// The content type of this part
    content_type: String,

    /// The serialized content of this part
    blob: Vec<u8>,

    /// Relationships from this part to other parts
    rels: Relationships,
}

impl Part {
    /// Create a new part.
    pub fn new(partname: PackURI, content_type: impl Into<String>, blob: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type: content_type.into(),
            blob,
            rels,
        }
    }

    /// Create a part whose content is written after its relationships exist.
    ///
    /// Parts such as the slide master reference their own rIds from inside
    /// their XML, so the relationships have to be allocated first.
    pub fn empty(partname: PackURI, content_type: impl Into<String>) -> Self {
        Self::new(partname, content_type, Vec::new())
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Replace the content of this part.
    pub fn set_blob(&mut self, blob: impl Into<Vec<u8>>) {
        self.blob = blob.into();
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Add or get a relationship to another part and return its rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(self.partname.base_uri());
        self.rels.get_or_add(reltype, &target_ref).r_id().to_string()
    }
}
