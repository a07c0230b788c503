//! XYZ molecular geometry parsing
//!
//! This crate validates plain-text XYZ files and converts them into atom
//! records for downstream visualization.
//!
//! # Quick Start
//!
//! ```
//! use xyzview_io::{parse, ParseResult};
//!
//! let result = parse("1\nHydrogen\nH 0.0 0.0 0.74\n");
//! let atoms = result.atoms().unwrap();
//! assert_eq!(atoms[0].element, "H");
//!
//! assert_eq!(parse("1\nbroken\nH 0.0 0.0\n"), ParseResult::Invalid);
//! ```
//!
//! Use [`parse_detailed`] to find out why a text was rejected.

pub mod atom;
pub mod compress;
pub mod error;
pub mod xyz;

pub use atom::Atom;
pub use compress::decode_text;
pub use error::{XyzError, XyzResult};
pub use xyz::{parse, parse_detailed, read_xyz, read_xyz_detailed, ParseResult};

/// Re-export of the vector type used for atom positions
pub use lin_alg::f64::Vec3;
