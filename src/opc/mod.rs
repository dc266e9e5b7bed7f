//! Open Packaging Conventions (OPC) writer.
//!
//! This module provides the subset of the OPC specification a PresentationML
//! writer needs:
//!
//! - Part names (`PackURI`) and relative references between them
//! - Relationships between parts, serialized as `.rels` parts
//! - Content type management (`[Content_Types].xml`)
//! - ZIP-based physical packaging

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
