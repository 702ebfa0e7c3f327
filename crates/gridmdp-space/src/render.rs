//! Text rendering of grid utilities.

use std::fmt;

use crate::grid::GridWorld;

/// Values at or above this magnitude print in exponent form.
const EXPONENT_THRESHOLD: f64 = 1e16;

/// Format a utility rounded to three decimal places.
///
/// Rounding is done on the exact binary value, so `-5.8645` (stored as
/// `-5.86449999...`) prints as `-5.864`. The rounded value prints in
/// shortest round-trip form and always keeps a fractional digit: `10.0`,
/// `8.96`, `-0.04`. Magnitudes from `1e16` up use a signed exponent,
/// e.g. `1.5e+16`.
pub fn format_utility(u: f64) -> String {
    if !u.is_finite() {
        return u.to_string().to_lowercase();
    }
    let rounded: f64 = format!("{u:.3}").parse().unwrap_or(u);
    if rounded.abs() >= EXPONENT_THRESHOLD {
        let s = format!("{rounded:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    let mut s = rounded.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

impl GridWorld {
    /// Render the grid, one row per line.
    ///
    /// Every cell is followed by a single space; walls print as `x`,
    /// everything else as [`format_utility`] of its utility.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GridWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                match cell.utility() {
                    Some(u) => write!(f, "{} ", format_utility(u))?,
                    None => f.write_str("x ")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utilities_keep_a_fractional_digit() {
        assert_eq!(format_utility(10.0), "10.0");
        assert_eq!(format_utility(0.0), "0.0");
        assert_eq!(format_utility(-1.0), "-1.0");
    }

    #[test]
    fn utilities_round_to_three_places() {
        assert_eq!(format_utility(8.96), "8.96");
        assert_eq!(format_utility(-0.04), "-0.04");
        assert_eq!(format_utility(0.811_530_1), "0.812");
        assert_eq!(format_utility(0.0004), "0.0");
        assert_eq!(format_utility(-0.0004), "-0.0");
    }

    #[test]
    fn rounding_uses_the_stored_binary_value() {
        // none of these is an exact tie once stored as f64
        assert_eq!(format_utility(-5.8645), "-5.864");
        assert_eq!(format_utility(2.0005), "2.001");
        assert_eq!(format_utility(0.1235), "0.123");
    }

    #[test]
    fn huge_values_use_signed_exponent() {
        assert_eq!(format_utility(1e16), "1e+16");
        assert_eq!(format_utility(1.5e16), "1.5e+16");
        assert_eq!(format_utility(-3e20), "-3e+20");
        assert_eq!(format_utility(9.5e15), "9500000000000000.0");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_utility(f64::INFINITY), "inf");
        assert_eq!(format_utility(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_utility(f64::NAN), "nan");
    }

    #[test]
    fn renders_rows_with_walls() {
        let g: GridWorld = "0.9\n-0.04\n1 0 0 0\n* x 1\n-1 * *\n".parse().unwrap();
        assert_eq!(g.render(), "0.0 x 1.0 \n-1.0 0.0 0.0 \n");
    }
}
