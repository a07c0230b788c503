//! XYZ coordinate format
//!
//! Single-frame reading of the plain-text XYZ format: an atom count, a
//! comment line, then one `element x y z` line per atom.

mod parser;

pub use parser::{parse, parse_detailed, ParseResult};

use std::path::Path;

use crate::atom::Atom;
use crate::error::XyzResult;

/// Read and validate an XYZ file from a path
///
/// Gzip-compressed files are decoded transparently. I/O failures are
/// returned as errors; malformed content is reported through the result.
pub fn read_xyz(path: &Path) -> std::io::Result<ParseResult> {
    let text = read_text(path)?;
    Ok(parse(&text))
}

/// Read an XYZ file from a path, reporting why it is malformed
pub fn read_xyz_detailed(path: &Path) -> std::io::Result<XyzResult<Vec<Atom>>> {
    let text = read_text(path)?;
    Ok(parse_detailed(&text))
}

fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    crate::compress::decode_text(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XyzError;

    #[test]
    fn test_read_xyz_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("h2.xyz");
        std::fs::write(&path, "2\nhydrogen\nH 0 0 0\nH 0 0 0.74\n").unwrap();

        let result = read_xyz(&path).unwrap();
        assert_eq!(result.atoms().map(|a| a.len()), Some(2));
    }

    #[test]
    fn test_read_xyz_detailed_reports_cause() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.xyz");
        std::fs::write(&path, "two\nhydrogen\n").unwrap();

        let result = read_xyz_detailed(&path).unwrap();
        assert!(matches!(result, Err(XyzError::MalformedCount(_))));
    }

    #[test]
    fn test_read_xyz_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_xyz(&dir.path().join("missing.xyz")).is_err());
    }
}
