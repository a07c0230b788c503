//! Source lifecycle manager
//!
//! Owns the [`SourceState`] and the store it is persisted to. Every change
//! to the text or the name goes through one write-through transaction that
//! saves both fields together before returning; a failed save rolls the
//! in-memory change back.
//!
//! Validation is a separate, caller-driven step. Setting the text never
//! re-parses it.
//!
//! # Example
//!
//! ```
//! use xyzview_source::{MemoryStore, SourceManager};
//!
//! # fn main() -> xyzview_source::SourceResult<()> {
//! let mut manager = SourceManager::initialize(MemoryStore::new())?;
//! manager.set_source("1\nHydrogen\nH 0.0 0.0 0.0\n")?;
//! manager.set_source_name("h.xyz")?;
//!
//! assert!(manager.validate());
//! assert_eq!(manager.atoms().len(), 1);
//! # Ok(())
//! # }
//! ```

use std::mem;

use xyzview_io::{Atom, ParseResult, XyzError};

use crate::error::SourceResult;
use crate::file::SourceFile;
use crate::state::SourceState;
use crate::store::{SourceStore, SOURCE_NAME_KEY, SOURCE_TEXT_KEY};

/// Manages the active source and its persistence
#[derive(Debug)]
pub struct SourceManager<S: SourceStore> {
    state: SourceState,
    store: S,
}

impl<S: SourceStore> SourceManager<S> {
    /// Restore the source text and name from a store
    ///
    /// Absent keys become empty strings. The restored text is not parsed.
    pub fn initialize(store: S) -> SourceResult<Self> {
        let raw_text = store.load(SOURCE_TEXT_KEY)?.unwrap_or_default();
        let display_name = store.load(SOURCE_NAME_KEY)?.unwrap_or_default();

        log::info!(
            "Restored source '{}' ({} bytes)",
            display_name,
            raw_text.len()
        );

        Ok(SourceManager {
            state: SourceState::restored(raw_text, display_name),
            store,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current raw text
    pub fn source(&self) -> &str {
        &self.state.raw_text
    }

    /// Current display name
    pub fn source_name(&self) -> &str {
        &self.state.display_name
    }

    /// Cached validity flag
    pub fn is_valid_xyz_format(&self) -> bool {
        self.state.is_valid
    }

    /// Atoms of the last successful validation
    pub fn atoms(&self) -> &[Atom] {
        &self.state.atoms
    }

    /// Full state snapshot
    pub fn state(&self) -> &SourceState {
        &self.state
    }

    /// Backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Replace the raw text and persist
    ///
    /// The validity flag is left untouched.
    pub fn set_source(&mut self, text: impl Into<String>) -> SourceResult<()> {
        self.commit(Some(text.into()), None)
    }

    /// Replace the display name and persist
    pub fn set_source_name(&mut self, name: impl Into<String>) -> SourceResult<()> {
        self.commit(None, Some(name.into()))
    }

    /// Import text and name from a file handle
    ///
    /// The whole file is read before anything changes. A failed read leaves
    /// the state and the store untouched and returns the error.
    pub async fn import_source<F>(&mut self, file: &F) -> SourceResult<()>
    where
        F: SourceFile + ?Sized,
    {
        let contents = file.read_text().await?;
        let name = file.name().to_string();

        log::info!("Imported '{}' ({} bytes)", name, contents.len());
        self.commit(Some(contents), Some(name))
    }

    /// Record the outcome of an externally run validation
    pub fn set_is_valid_xyz_format(&mut self, is_valid: bool) {
        self.state.is_valid = is_valid;
    }

    /// Parse the current text and record the outcome
    ///
    /// A valid parse replaces the atom list. An invalid one only clears the
    /// flag, keeping the previously valid atoms available.
    pub fn validate(&mut self) -> bool {
        match xyzview_io::parse(&self.state.raw_text) {
            ParseResult::Valid(atoms) => {
                log::debug!(
                    "Source '{}' is valid ({} atoms)",
                    self.state.display_name,
                    atoms.len()
                );
                self.state.atoms = atoms;
                self.state.is_valid = true;
            }
            ParseResult::Invalid => {
                log::info!("Source '{}' is not valid XYZ", self.state.display_name);
                self.state.is_valid = false;
            }
        }
        self.state.is_valid
    }

    /// Why the current text fails to parse, if it does
    ///
    /// Does not touch the validity flag.
    pub fn validation_error(&self) -> Option<XyzError> {
        xyzview_io::parse_detailed(&self.state.raw_text).err()
    }

    /// Flush the store and hand it back
    ///
    /// Every commit already wrote through, so nothing is saved again here.
    pub fn teardown(mut self) -> SourceResult<S> {
        self.store.flush()?;
        log::debug!("Source manager torn down");
        Ok(self.store)
    }

    // =========================================================================
    // Write-through
    // =========================================================================

    fn commit(&mut self, text: Option<String>, name: Option<String>) -> SourceResult<()> {
        let old_text = text.map(|t| mem::replace(&mut self.state.raw_text, t));
        let old_name = name.map(|n| mem::replace(&mut self.state.display_name, n));

        if let Err(e) = self.persist() {
            log::warn!("Failed to persist source, rolling back: {}", e);
            if let Some(t) = old_text {
                self.state.raw_text = t;
            }
            if let Some(n) = old_name {
                self.state.display_name = n;
            }
            return Err(e);
        }
        Ok(())
    }

    fn persist(&mut self) -> SourceResult<()> {
        self.store.save_pair([
            (SOURCE_TEXT_KEY, self.state.raw_text.as_str()),
            (SOURCE_NAME_KEY, self.state.display_name.as_str()),
        ])
    }
}
