//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;
use polyfft_core::constants::DEFAULT_PARALLEL_THRESHOLD;
use polyfft_core::options::Options;

/// polyfft: multiply integer polynomials with a radix-2 FFT.
///
/// Coefficients are given lowest degree first, separated by commas or
/// whitespace: `--lhs 1,2,3` is 1 + 2x + 3x².
#[derive(Parser, Debug)]
#[command(name = "polyfft", version, about)]
pub struct AppConfig {
    /// Left operand coefficients.
    #[arg(
        short = 'a',
        long,
        env = "POLYFFT_LHS",
        allow_hyphen_values = true,
        required_unless_present = "completion"
    )]
    pub lhs: Option<String>,

    /// Right operand coefficients.
    #[arg(
        short = 'b',
        long,
        env = "POLYFFT_RHS",
        allow_hyphen_values = true,
        required_unless_present = "completion"
    )]
    pub rhs: Option<String>,

    /// Multiplier to use: fft, fft-recursive, schoolbook, or all.
    #[arg(long, default_value = "fft", env = "POLYFFT_ALGO")]
    pub algo: String,

    /// Keep the full padded product instead of trimming trailing zeros.
    #[arg(long)]
    pub raw: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the coefficients).
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,

    /// Emit results as JSON lines.
    #[arg(long)]
    pub json: bool,

    /// Split recursive FFT work across threads.
    #[arg(long)]
    pub parallel: bool,

    /// Half-transform length at which the recursive FFT goes parallel
    /// (0 = use the default when --parallel is set).
    #[arg(long, default_value = "0", env = "POLYFFT_PARALLEL_THRESHOLD")]
    pub parallel_threshold: usize,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Errors in user-supplied coefficient lists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// A token is not a valid 64-bit integer.
    #[error("{operand}: invalid coefficient {token:?} at position {position}")]
    InvalidCoefficient {
        operand: &'static str,
        position: usize,
        token: String,
    },

    /// An operand was not supplied.
    #[error("missing {0} coefficients")]
    Missing(&'static str),
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse both operands.
    pub fn operands(&self) -> Result<(Vec<i64>, Vec<i64>), InputError> {
        let lhs = self.lhs.as_deref().ok_or(InputError::Missing("lhs"))?;
        let rhs = self.rhs.as_deref().ok_or(InputError::Missing("rhs"))?;
        Ok((
            parse_coefficients("lhs", lhs)?,
            parse_coefficients("rhs", rhs)?,
        ))
    }

    /// Multiplication options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        let parallel_threshold = if self.parallel_threshold != 0 {
            self.parallel_threshold
        } else if self.parallel {
            DEFAULT_PARALLEL_THRESHOLD
        } else {
            0
        };
        Options {
            parallel_threshold,
            trim: !self.raw,
        }
        .normalize()
    }
}

/// Parse a list like `"1, -2 3"` into coefficients.
pub fn parse_coefficients(operand: &'static str, s: &str) -> Result<Vec<i64>, InputError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<i64>()
                .map_err(|_| InputError::InvalidCoefficient {
                    operand,
                    position,
                    token: token.to_string(),
                })
        })
        .collect()
}
