//! XYZ text parser
//!
//! Validates a single-frame XYZ text and turns its body into atom records.
//! Parsing fails fast: the first bad line aborts the whole parse and no
//! partial atom list is ever returned.

use lin_alg::f64::Vec3;

use crate::atom::Atom;
use crate::error::{XyzError, XyzResult};

/// Number of header lines (atom count + comment)
const HEADER_LINES: usize = 2;

/// Outcome of a parse attempt
///
/// `Invalid` deliberately carries no cause; use [`parse_detailed`] when the
/// reason matters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    /// Well-formed text and its atoms in file order
    Valid(Vec<Atom>),
    /// Malformed text
    Invalid,
}

impl ParseResult {
    /// Whether the text was well-formed
    pub fn is_valid(&self) -> bool {
        matches!(self, ParseResult::Valid(_))
    }

    /// Parsed atoms, `None` when invalid
    pub fn atoms(&self) -> Option<&[Atom]> {
        match self {
            ParseResult::Valid(atoms) => Some(atoms),
            ParseResult::Invalid => None,
        }
    }

    /// Consume the result, returning the atoms when valid
    pub fn into_atoms(self) -> Option<Vec<Atom>> {
        match self {
            ParseResult::Valid(atoms) => Some(atoms),
            ParseResult::Invalid => None,
        }
    }
}

impl From<XyzResult<Vec<Atom>>> for ParseResult {
    fn from(result: XyzResult<Vec<Atom>>) -> Self {
        match result {
            Ok(atoms) => ParseResult::Valid(atoms),
            Err(_) => ParseResult::Invalid,
        }
    }
}

/// Parse XYZ text into a validation verdict
///
/// Malformed input is an ordinary outcome, never an error; the cause is
/// logged at debug level and otherwise dropped.
pub fn parse(text: &str) -> ParseResult {
    let result = parse_detailed(text);
    if let Err(e) = &result {
        log::debug!("XYZ validation failed: {}", e);
    }
    result.into()
}

/// Parse XYZ text, reporting why it is malformed
pub fn parse_detailed(text: &str) -> XyzResult<Vec<Atom>> {
    let lines: Vec<&str> = text.split('\n').collect();

    // Line 1: number of atoms
    let count_line = lines[0];
    let count: i64 = count_line
        .trim()
        .parse()
        .map_err(|_| XyzError::MalformedCount(count_line.trim().to_string()))?;

    // Line 2 is a free-form comment and is never inspected. The line check
    // uses the signed count, so a negative count needs fewer lines.
    let found = i64::try_from(lines.len()).unwrap_or(i64::MAX);
    match count.checked_add(HEADER_LINES as i64) {
        Some(required) if found >= required => {}
        required => {
            return Err(XyzError::TruncatedBody {
                declared: count,
                found: lines.len(),
                required: required.unwrap_or(i64::MAX),
            })
        }
    }

    // Negative counts declare an empty body; positive ones fit after the check
    let n_atoms = usize::try_from(count.max(0)).unwrap_or(0);

    lines
        .get(HEADER_LINES..HEADER_LINES + n_atoms)
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(id, line)| parse_atom_line(line, id, id + HEADER_LINES + 1))
        .collect()
}

/// Parse one body line
///
/// Format: `element x y z [ignored columns]`, separated by any run of
/// whitespace.
fn parse_atom_line(line: &str, id: usize, line_number: usize) -> XyzResult<Atom> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.len() < 4 {
        return Err(XyzError::malformed_line(line_number, line));
    }

    let x = parse_coord(parts[1], 'x', line_number)?;
    let y = parse_coord(parts[2], 'y', line_number)?;
    let z = parse_coord(parts[3], 'z', line_number)?;

    Ok(Atom::new(id, parts[0], Vec3::new(x, y, z)))
}

fn parse_coord(token: &str, axis: char, line_number: usize) -> XyzResult<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(XyzError::non_numeric(line_number, axis, token)),
    }
}
