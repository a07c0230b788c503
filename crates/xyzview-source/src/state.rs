//! Source state
//!
//! Holds the raw text, its display name, the cached validity flag and the
//! atoms of the last successful validation.

use xyzview_io::Atom;

/// The single active source
#[derive(Debug, Clone, PartialEq)]
pub struct SourceState {
    /// Full unparsed file contents
    pub raw_text: String,
    /// Human-readable label, usually the originating file name
    pub display_name: String,
    /// Outcome of the last explicit validation
    pub is_valid: bool,
    /// Atoms from the last successful validation
    pub atoms: Vec<Atom>,
}

impl Default for SourceState {
    fn default() -> Self {
        SourceState {
            raw_text: String::new(),
            display_name: String::new(),
            // Nothing has been rejected yet
            is_valid: true,
            atoms: Vec::new(),
        }
    }
}

impl SourceState {
    /// Create a state with restored text and name
    pub fn restored(raw_text: String, display_name: String) -> Self {
        SourceState {
            raw_text,
            display_name,
            ..Default::default()
        }
    }
}
