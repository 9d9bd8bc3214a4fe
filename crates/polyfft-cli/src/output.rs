//! CLI output formatting.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Coefficients shown at each end of a truncated result.
const PREVIEW_COEFFS: usize = 8;

/// Format coefficients as a comma-separated list, lowest degree first.
///
/// This is the same format accepted by `--lhs` / `--rhs`.
#[must_use]
pub fn format_coefficients(coeffs: &[i64]) -> String {
    coeffs
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Format coefficients for display, potentially truncating.
#[must_use]
pub fn format_result(coeffs: &[i64], verbose: bool) -> String {
    if !verbose && coeffs.len() > 4 * PREVIEW_COEFFS {
        format!(
            "{},...,{} ({} coefficients)",
            format_coefficients(&coeffs[..PREVIEW_COEFFS]),
            format_coefficients(&coeffs[coeffs.len() - PREVIEW_COEFFS..]),
            coeffs.len()
        )
    } else {
        format_coefficients(coeffs)
    }
}

/// Render coefficients as a polynomial in `x`, highest degree first.
///
/// Zero terms are skipped; the zero polynomial renders as `0`.
#[must_use]
pub fn format_polynomial(coeffs: &[i64]) -> String {
    let mut out = String::new();
    for (degree, &c) in coeffs.iter().enumerate().rev() {
        if c == 0 {
            continue;
        }
        let magnitude = c.unsigned_abs();
        if out.is_empty() {
            if c < 0 {
                out.push('-');
            }
        } else {
            out.push_str(if c < 0 { " - " } else { " + " });
        }
        if magnitude != 1 || degree == 0 {
            let _ = write!(out, "{magnitude}");
        }
        match degree {
            0 => {}
            1 => out.push('x'),
            d => {
                let _ = write!(out, "x^{d}");
            }
        }
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

/// Degree of the polynomial, ignoring trailing zeros (`None` for zero).
#[must_use]
pub fn degree(coeffs: &[i64]) -> Option<usize> {
    coeffs.iter().rposition(|&c| c != 0)
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write the product coefficients to a file, one comma-separated line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, coeffs: &[i64]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{}", format_coefficients(coeffs))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_coefficients_list() {
        assert_eq!(format_coefficients(&[1, 3, 5, 3]), "1,3,5,3");
        assert_eq!(format_coefficients(&[-2]), "-2");
        assert_eq!(format_coefficients(&[]), "");
    }

    #[test]
    fn format_result_short() {
        assert_eq!(format_result(&[35, 0], false), "35,0");
    }

    #[test]
    fn format_result_truncates_long() {
        let coeffs: Vec<i64> = (0..100).collect();
        let s = format_result(&coeffs, false);
        assert!(s.starts_with("0,1,2,3,4,5,6,7,...,92,"));
        assert!(s.ends_with("(100 coefficients)"));
        assert_eq!(format_result(&coeffs, true).split(',').count(), 100);
    }

    #[test]
    fn format_polynomial_terms() {
        assert_eq!(format_polynomial(&[1, 3, 5, 3]), "3x^3 + 5x^2 + 3x + 1");
        assert_eq!(format_polynomial(&[1, 0, -1]), "-x^2 + 1");
        assert_eq!(format_polynomial(&[0, -1, 0, 0]), "-x");
        assert_eq!(format_polynomial(&[-7, 1]), "x - 7");
        assert_eq!(format_polynomial(&[0, 0]), "0");
        assert_eq!(format_polynomial(&[]), "0");
    }

    #[test]
    fn degree_ignores_padding() {
        assert_eq!(degree(&[1, 3, 5, 3, 0, 0, 0, 0]), Some(3));
        assert_eq!(degree(&[0, 0]), None);
        assert_eq!(degree(&[35, 0]), Some(0));
    }

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert!(s.contains("ms"));
    }

    #[test]
    fn format_duration_minutes() {
        let s = format_duration(Duration::from_secs(90));
        assert_eq!(s, "1m30.0s");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
    }

    #[test]
    fn write_to_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("polyfft-output-{}.txt", std::process::id()));
        write_to_file(&path, &[1, -3, 5]).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(written, "1,-3,5\n");
    }
}
