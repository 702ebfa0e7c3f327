//! Error types for environment construction.

use std::error::Error;
use std::fmt;

/// Errors arising while building a grid environment from text or cells.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// The description ended before a required header line.
    MissingHeader {
        /// Name of the missing header value.
        field: &'static str,
    },
    /// A header line did not parse as a number.
    InvalidHeader {
        /// Name of the header value.
        field: &'static str,
        /// The offending text.
        value: String,
    },
    /// The drift line did not hold exactly four probabilities.
    DriftArity {
        /// Number of probabilities found.
        found: usize,
    },
    /// A grid token is neither `*`, `x`, nor a number.
    MalformedGrid {
        /// 1-based line number in the description.
        line: usize,
        /// 1-based token position within the line.
        column: usize,
        /// The offending token.
        token: String,
    },
    /// A grid row has a different width than the first row.
    RaggedRow {
        /// 1-based line number in the description.
        line: usize,
        /// Width of the first grid row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },
    /// The grid has zero rows or zero columns.
    EmptyGrid,
    /// A cell buffer does not match the declared dimensions.
    CellCountMismatch {
        /// `nrows * ncols`.
        expected: usize,
        /// Cells supplied.
        found: usize,
    },
}

impl GridError {
    /// Returns `true` for errors describing a malformed grid body:
    /// unrecognised tokens and ragged rows.
    pub fn is_malformed_grid(&self) -> bool {
        matches!(self, Self::MalformedGrid { .. } | Self::RaggedRow { .. })
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader { field } => write!(f, "missing header line: {field}"),
            Self::InvalidHeader { field, value } => {
                write!(f, "invalid {field}: {value:?} is not a number")
            }
            Self::DriftArity { found } => {
                write!(f, "expected 4 drift probabilities, found {found}")
            }
            Self::MalformedGrid {
                line,
                column,
                token,
            } => write!(
                f,
                "bad grid value {token:?} at line {line}, column {column}"
            ),
            Self::RaggedRow {
                line,
                expected,
                found,
            } => write!(
                f,
                "bad grid row at line {line}: expected {expected} cells, found {found}"
            ),
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::CellCountMismatch { expected, found } => {
                write!(f, "expected {expected} cells, found {found}")
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_grouping() {
        let bad = GridError::MalformedGrid {
            line: 4,
            column: 2,
            token: "abc".into(),
        };
        let ragged = GridError::RaggedRow {
            line: 5,
            expected: 3,
            found: 2,
        };
        assert!(bad.is_malformed_grid());
        assert!(ragged.is_malformed_grid());
        assert!(!GridError::EmptyGrid.is_malformed_grid());
    }

    #[test]
    fn display_names_the_token() {
        let e = GridError::MalformedGrid {
            line: 4,
            column: 2,
            token: "abc".into(),
        };
        assert_eq!(e.to_string(), "bad grid value \"abc\" at line 4, column 2");
    }
}
