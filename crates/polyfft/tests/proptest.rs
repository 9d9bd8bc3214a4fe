//! Property-based tests for coefficient parsing and multiplier selection.

use proptest::prelude::*;

use polyfft_core::registry::{DefaultFactory, MultiplierFactory};
use polyfft_core::schoolbook::convolve;
use polyfft_core::Options;
use polyfft_lib::config::parse_coefficients;

fn join(coeffs: &[i64], sep: &str) -> String {
    coeffs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any list of integers survives formatting and parsing.
    #[test]
    fn parse_round_trip(coeffs in prop::collection::vec(any::<i64>(), 0..32)) {
        prop_assert_eq!(parse_coefficients("lhs", &join(&coeffs, ",")).unwrap(), coeffs.clone());
        prop_assert_eq!(parse_coefficients("lhs", &join(&coeffs, " ")).unwrap(), coeffs);
    }

    /// Every registered multiplier matches direct convolution once trimmed.
    #[test]
    fn registered_multipliers_match_convolution(
        a in prop::collection::vec(-1000i64..1000, 1..24),
        b in prop::collection::vec(-1000i64..1000, 1..24),
    ) {
        let factory = DefaultFactory::new();
        let opts = Options { parallel_threshold: 0, trim: true };
        let mut expected = convolve(&a, &b).unwrap();
        while expected.last() == Some(&0) {
            expected.pop();
        }

        for name in factory.available() {
            let mult = factory.get(name).unwrap();
            let product = mult.multiply(&a, &b, &opts).unwrap();
            prop_assert_eq!(&product, &expected, "{} disagrees", name);
        }
    }
}
