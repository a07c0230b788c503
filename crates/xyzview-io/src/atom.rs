//! Atom record produced by the XYZ parser

use lin_alg::f64::Vec3;

/// One parsed atomic site
///
/// `id` is the zero-based position of the atom in the file body, not the
/// file's own line number.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Zero-based order of appearance
    pub id: usize,
    /// Element token, stored verbatim
    pub element: String,
    /// Cartesian position
    pub position: Vec3,
}

impl Atom {
    /// Create a new atom
    pub fn new(id: usize, element: impl Into<String>, position: Vec3) -> Self {
        Atom {
            id,
            element: element.into(),
            position,
        }
    }

    /// Position as a plain array
    #[inline]
    pub fn coords(&self) -> [f64; 3] {
        [self.position.x, self.position.y, self.position.z]
    }
}
