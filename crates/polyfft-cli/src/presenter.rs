//! CLI result presenters.

use std::time::Duration;

use serde::Serialize;

use polyfft_orchestration::interfaces::{MultiplicationResult, ResultPresenter};

use crate::output::{degree, format_duration, format_number, format_polynomial, format_result};
use crate::ui::{print_header, status_label};

/// Human-readable result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        algorithm: &str,
        a: &[i64],
        b: &[i64],
        product: &[i64],
        duration: Duration,
        details: bool,
    ) {
        if self.quiet {
            println!("{}", format_result(product, true));
            return;
        }

        println!("Algorithm: {algorithm}");
        println!("Duration: {}", format_duration(duration));

        if details {
            println!("LHS coefficients: {}", format_number(a.len()));
            println!("RHS coefficients: {}", format_number(b.len()));
            println!("Product coefficients: {}", format_number(product.len()));
            match degree(product) {
                Some(d) => println!("Product degree: {}", format_number(d)),
                None => println!("Product degree: -"),
            }
        }

        println!("Product: {}", format_result(product, self.verbose));
        if self.verbose {
            println!("P(x) = {}", format_polynomial(product));
        }
    }

    fn present_comparison(&self, results: &[MultiplicationResult]) {
        if self.quiet {
            return;
        }

        println!();
        print_header("Comparison Results");
        for result in results {
            println!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status_label(result.outcome.is_ok()),
            );
        }
    }

    fn present_error(&self, error: &str) {
        crate::ui::print_error(error);
    }
}

/// JSON document emitted per multiplier by `JsonResultPresenter`.
#[derive(Debug, Serialize)]
struct JsonResult<'a> {
    algorithm: &'a str,
    lhs: &'a [i64],
    rhs: &'a [i64],
    product: &'a [i64],
    degree: Option<usize>,
    duration_us: u128,
}

/// JSON document for a comparison run: `{"comparison": [...]}`.
#[derive(Debug, Serialize)]
struct JsonComparison<'a> {
    comparison: Vec<JsonComparisonRow<'a>>,
}

/// One multiplier's row in a comparison document.
#[derive(Debug, Serialize)]
struct JsonComparisonRow<'a> {
    algorithm: &'a str,
    ok: bool,
    error: Option<String>,
    duration_us: u128,
}

/// Machine-readable presenter: one JSON object per line.
pub struct JsonResultPresenter;

impl JsonResultPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonResultPresenter {
    fn default() -> Self {
        Self::new()
    }
}

fn emit<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(line) => println!("{line}"),
        Err(e) => tracing::error!(error = %e, "failed to serialize result"),
    }
}

fn comparison_document(results: &[MultiplicationResult]) -> JsonComparison<'_> {
    JsonComparison {
        comparison: results
            .iter()
            .map(|r| JsonComparisonRow {
                algorithm: &r.algorithm,
                ok: r.outcome.is_ok(),
                error: r.outcome.as_ref().err().map(ToString::to_string),
                duration_us: r.duration.as_micros(),
            })
            .collect(),
    }
}

impl ResultPresenter for JsonResultPresenter {
    fn present_result(
        &self,
        algorithm: &str,
        a: &[i64],
        b: &[i64],
        product: &[i64],
        duration: Duration,
        _details: bool,
    ) {
        emit(&JsonResult {
            algorithm,
            lhs: a,
            rhs: b,
            product,
            degree: degree(product),
            duration_us: duration.as_micros(),
        });
    }

    fn present_comparison(&self, results: &[MultiplicationResult]) {
        emit(&comparison_document(results));
    }

    fn present_error(&self, error: &str) {
        emit(&serde_json::json!({ "error": error }));
    }
}
