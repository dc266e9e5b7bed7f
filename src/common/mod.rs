//! Common value types shared by the presentation model and the deck builders.
//!
//! Lengths are carried as integer EMUs (English Metric Units) and colors as
//! plain RGB triples, the two units every DrawingML attribute is written in.

pub mod color;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use color::RgbColor;
pub use unit::Emu;
pub use xml::escape_xml;
