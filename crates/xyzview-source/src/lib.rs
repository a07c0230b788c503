//! Source lifecycle for XYZ viewing
//!
//! Keeps the raw XYZ text of the active source, its display name and the
//! cached validity flag, persisting text and name to a key-value store on
//! every change.
//!
//! # Architecture
//!
//! ```text
//! store ──initialize──▶ SourceManager ◀──import_source── SourceFile
//!   ▲                        │
//!   └──── save_pair ─────────┤ validate
//!                            ▼
//!                   xyzview_io::parse ──▶ atoms
//! ```
//!
//! The manager is an owned value: create it with
//! [`SourceManager::initialize`], hand out references to whoever needs it,
//! and call [`SourceManager::teardown`] on exit.

mod config;
mod error;
mod file;
mod manager;
mod state;
mod store;

pub use config::{SourceConfig, CONFIG_ENV, STORE_ENV};
pub use error::{SourceError, SourceResult};
pub use file::{PathFile, ReadFuture, SourceFile};
pub use manager::SourceManager;
pub use state::SourceState;
pub use store::{JsonFileStore, MemoryStore, SourceStore, SOURCE_NAME_KEY, SOURCE_TEXT_KEY};

