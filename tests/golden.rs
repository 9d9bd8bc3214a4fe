//! Golden file integration tests.
//!
//! Reads tests/testdata/products_golden.json and checks every multiplier
//! against known products, both trimmed and with full padding.

use serde::Deserialize;

use polyfft_core::registry::{DefaultFactory, MultiplierFactory};
use polyfft_core::{multiply_trimmed, Options};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    name: String,
    lhs: Vec<i64>,
    rhs: Vec<i64>,
    product: Vec<i64>,
    padded_len: usize,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/products_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn options(trim: bool) -> Options {
    Options {
        parallel_threshold: 0,
        trim,
    }
}

// ---------------------------------------------------------------------------
// Golden: trimmed products
// ---------------------------------------------------------------------------

#[test]
fn golden_trimmed_every_multiplier() {
    let factory = DefaultFactory::new();
    let data = load_golden_data();
    for name in factory.available() {
        let mult = factory.get(name).unwrap();
        for entry in &data.values {
            let product = mult
                .multiply(&entry.lhs, &entry.rhs, &options(true))
                .unwrap();
            assert_eq!(
                product, entry.product,
                "{name} mismatch on {}",
                entry.name
            );
        }
    }
}

#[test]
fn golden_multiply_trimmed() {
    let data = load_golden_data();
    for entry in &data.values {
        assert_eq!(
            multiply_trimmed(&entry.lhs, &entry.rhs).unwrap(),
            entry.product,
            "multiply_trimmed mismatch on {}",
            entry.name
        );
    }
}

// ---------------------------------------------------------------------------
// Golden: padded products
// ---------------------------------------------------------------------------

#[test]
fn golden_padded_length() {
    let factory = DefaultFactory::new();
    let data = load_golden_data();
    for name in factory.available() {
        let mult = factory.get(name).unwrap();
        for entry in &data.values {
            let product = mult
                .multiply(&entry.lhs, &entry.rhs, &options(false))
                .unwrap();
            assert_eq!(
                product.len(),
                entry.padded_len,
                "{name} padded length on {}",
                entry.name
            );
            assert_eq!(&product[..entry.product.len()], entry.product.as_slice());
            assert!(product[entry.product.len()..].iter().all(|&c| c == 0));
        }
    }
}

#[test]
fn golden_fft_engine_directly() {
    let data = load_golden_data();
    for entry in &data.values {
        let product = polyfft_fft::multiply(&entry.lhs, &entry.rhs).unwrap();
        assert_eq!(product.len(), entry.padded_len, "length on {}", entry.name);
        assert_eq!(
            polyfft_fft::trim_trailing_zeros(product),
            entry.product,
            "product on {}",
            entry.name
        );
    }
}

// ---------------------------------------------------------------------------
// Golden: empty operands
// ---------------------------------------------------------------------------

#[test]
fn empty_operand_gives_empty_product() {
    let factory = DefaultFactory::new();
    for name in factory.available() {
        let mult = factory.get(name).unwrap();
        assert!(mult.multiply(&[], &[1, 2], &options(false)).unwrap().is_empty());
        assert!(mult.multiply(&[3], &[], &options(true)).unwrap().is_empty());
    }
}
