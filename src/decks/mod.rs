//! The built-in decks.
//!
//! Each deck is a fixed sequence of shapes, colors, coordinates and text.
//! [`DeckKind`] names them so the CLI and callers can pick one by name.

pub mod demo;
pub mod pitch;

use crate::error::{DeckError, Result};
use crate::pptx::Presentation;
use std::fmt;
use std::str::FromStr;

/// A built-in deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeckKind {
    /// Three-slide demo: title, key points, closing
    Demo,
    /// Six-slide investor pitch
    Pitch,
}

impl DeckKind {
    /// Every built-in deck, in listing order.
    pub const ALL: [DeckKind; 2] = [DeckKind::Demo, DeckKind::Pitch];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Pitch => "pitch",
        }
    }

    /// File name the deck is saved under when no output path is given.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Demo => demo::DEFAULT_FILE_NAME,
            Self::Pitch => pitch::DEFAULT_FILE_NAME,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Demo => "A simple three-slide demo (13.33\" x 7.5\")",
            Self::Pitch => "Hypervolume 90-second investor pitch, six slides (16\" x 9\")",
        }
    }

    /// Assemble the deck in memory.
    pub fn build(&self) -> Result<Presentation> {
        tracing::debug!(deck = self.name(), "Building deck");
        match self {
            Self::Demo => demo::build(),
            Self::Pitch => pitch::build(),
        }
    }
}

impl FromStr for DeckKind {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DeckError::UnknownDeck(s.to_string()))
    }
}

impl fmt::Display for DeckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("demo".parse::<DeckKind>().unwrap(), DeckKind::Demo);
        assert_eq!("Pitch".parse::<DeckKind>().unwrap(), DeckKind::Pitch);
        assert!(matches!(
            "keynote".parse::<DeckKind>(),
            Err(DeckError::UnknownDeck(name)) if name == "keynote"
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for kind in DeckKind::ALL {
            assert_eq!(kind.to_string().parse::<DeckKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(DeckKind::Demo.default_file_name(), "test-presentation.pptx");
        assert_eq!(
            DeckKind::Pitch.default_file_name(),
            "Hypervolume-Investor-Pitch-90s.pptx"
        );
    }

    #[test]
    fn test_build_each_deck() {
        let counts: Vec<usize> = DeckKind::ALL
            .iter()
            .map(|kind| kind.build().unwrap().slide_count())
            .collect();
        assert_eq!(counts, vec![3, 6]);
    }
}
