//! PresentationML object model.
//!
//! A [`Presentation`] owns its slides, a [`Slide`] owns its shapes, and a
//! [`Shape`] may own a [`TextFrame`] of paragraphs and runs. Everything is
//! serialized to XML when the presentation is saved.

pub mod format;
pub mod presentation;
pub mod properties;
pub mod shape;
pub mod slide;
pub mod template;
pub mod text;

pub use format::{Alignment, Anchor, AutoSize, Font};
pub use presentation::Presentation;
pub use properties::CoreProperties;
pub use shape::{AutoShapeType, LineFormat, Shape, ShapeKind};
pub use slide::Slide;
pub use text::{Paragraph, Run, TextFrame};
