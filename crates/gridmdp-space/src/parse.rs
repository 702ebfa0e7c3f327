//! Loader for the plain-text environment description.
//!
//! ```text
//! 0.9            <- gamma
//! -0.04          <- living cost
//! 0.8 0.1 0 0.1  <- drift: forward, right, back, left
//! * * * 1        <- grid rows, one token per cell
//! * x * -1
//! * * * *
//! ```
//!
//! Grid tokens: `*` is an ordinary cell, `x` is a wall, and any number is
//! a terminal with that value. Blank lines after the header are skipped.

use std::str::FromStr;

use gridmdp_core::{Cell, DriftModel, GridError};
use smallvec::SmallVec;

use crate::grid::{GridWorld, MdpParams};

/// Number of header lines preceding the grid body.
pub const HEADER_LINES: usize = 3;

impl GridWorld {
    /// Parse an environment description.
    ///
    /// # Errors
    ///
    /// - [`GridError::MissingHeader`] / [`GridError::InvalidHeader`] if one
    ///   of the three header lines is absent or not numeric.
    /// - [`GridError::DriftArity`] if the drift line does not hold four values.
    /// - [`GridError::MalformedGrid`] for a token that is not `*`, `x` or a number.
    /// - [`GridError::RaggedRow`] if a row's width differs from the first row.
    /// - [`GridError::EmptyGrid`] if no grid rows follow the header.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut lines = text.lines();

        let gamma = parse_header(lines.next(), "gamma")?;
        let living_cost = parse_header(lines.next(), "living cost")?;
        let drift = parse_drift(lines.next())?;
        let params = MdpParams {
            gamma,
            living_cost,
            drift,
        };

        let mut ncols = None;
        let mut nrows = 0;
        let mut cells = Vec::new();
        for (offset, line) in lines.enumerate() {
            let line_no = HEADER_LINES + offset + 1;
            let width_before = cells.len();
            for (col, token) in line.split_whitespace().enumerate() {
                cells.push(parse_cell(token).ok_or_else(|| GridError::MalformedGrid {
                    line: line_no,
                    column: col + 1,
                    token: token.to_string(),
                })?);
            }
            let width = cells.len() - width_before;
            if width == 0 {
                continue;
            }
            match ncols {
                None => ncols = Some(width),
                Some(expected) if expected != width => {
                    return Err(GridError::RaggedRow {
                        line: line_no,
                        expected,
                        found: width,
                    });
                }
                Some(_) => {}
            }
            nrows += 1;
        }

        let ncols = ncols.unwrap_or(0);
        log::trace!("parsed {nrows}x{ncols} grid, gamma={gamma}, living_cost={living_cost}");
        Self::new(nrows, ncols, cells, params)
    }
}

impl FromStr for GridWorld {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Classify one grid token.
fn parse_cell(token: &str) -> Option<Cell> {
    match token {
        "*" => Some(Cell::open()),
        "x" => Some(Cell::Wall),
        _ => token.parse::<f64>().ok().map(Cell::terminal),
    }
}

fn parse_header(line: Option<&str>, field: &'static str) -> Result<f64, GridError> {
    let line = line.ok_or(GridError::MissingHeader { field })?;
    let trimmed = line.trim();
    trimmed.parse().map_err(|_| GridError::InvalidHeader {
        field,
        value: trimmed.to_string(),
    })
}

fn parse_drift(line: Option<&str>) -> Result<DriftModel, GridError> {
    let field = "drift probabilities";
    let line = line.ok_or(GridError::MissingHeader { field })?;
    let weights = line
        .split_whitespace()
        .map(|tok| {
            tok.parse::<f64>().map_err(|_| GridError::InvalidHeader {
                field,
                value: tok.to_string(),
            })
        })
        .collect::<Result<SmallVec<[f64; 4]>, _>>()?;
    DriftModel::from_slice(&weights)
}
