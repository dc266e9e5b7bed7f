//! XML helpers for the hand-written PresentationML serializers.

mod escape;

pub use escape::escape_xml;
