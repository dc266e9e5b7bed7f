//! Deckwright - builds fixed PowerPoint slide decks
//!
//! This library assembles slide decks out of literal shapes, colors,
//! coordinates and text, and writes them as PresentationML (.pptx) packages.
//!
//! # Features
//!
//! - **Presentation model**: slides, rectangles, ovals, text boxes, text frames,
//!   paragraphs and runs, measured in EMUs
//! - **PPTX writer**: a minimal Open Packaging Conventions writer with one
//!   slide master, one blank layout and a flat theme
//! - **Built-in decks**: a three-slide demo deck and a six-slide investor pitch
//! - **Outlines**: YAML deck descriptions rendered through the same model
//! - **Inspection**: read a written deck back into a summary
//!
//! # Example - Building a deck by hand
//!
//! ```no_run
//! use deckwright::common::{Emu, RgbColor};
//! use deckwright::pptx::{AutoShapeType, Presentation};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pres = Presentation::with_size(Emu::inches(13.33), Emu::inches(7.5));
//! let slide = pres.add_slide();
//! slide.set_background(RgbColor::new(0x1C, 0x28, 0x33));
//!
//! let bar = slide.add_shape(
//!     AutoShapeType::Rectangle,
//!     Emu::ZERO,
//!     Emu::ZERO,
//!     Emu::inches(0.35),
//!     Emu::inches(7.5),
//! );
//! bar.set_fill(RgbColor::new(0x2E, 0x40, 0x53));
//! bar.clear_line();
//!
//! let title = slide.add_textbox(
//!     Emu::inches(1.0),
//!     Emu::inches(2.2),
//!     Emu::inches(11.0),
//!     Emu::inches(1.5),
//! );
//! title
//!     .text_frame_mut()
//!     .paragraph_mut(0)
//!     .add_run("Hello")
//!     .font_mut()
//!     .size(54.0)
//!     .bold(true);
//!
//! pres.save("hello.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Building a built-in deck
//!
//! ```no_run
//! use deckwright::decks::DeckKind;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pres = DeckKind::Pitch.build()?;
//! pres.save(DeckKind::Pitch.default_file_name())?;
//! # Ok(())
//! # }
//! ```

/// Shared value types: lengths, colors and XML escaping
pub mod common;

/// Error types for deck assembly
pub mod error;

/// Open Packaging Conventions (OPC) writer
///
/// Part names, relationships, content types and the ZIP container used by
/// every Office Open XML format.
pub mod opc;

/// PresentationML object model and serialization
pub mod pptx;

/// The built-in decks
pub mod decks;

/// YAML deck outlines
pub mod outline;

/// Read written decks back into summaries
pub mod inspect;

pub use error::{DeckError, Result};
