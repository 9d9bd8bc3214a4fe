//! Property-based tests for the transform and multiplication laws.

use proptest::prelude::*;

use polyfft_fft::{
    forward_transform, forward_transform_with, inverse_transform, multiply, trim_trailing_zeros,
    Complex, FftError, TransformStrategy,
};

fn samples(shift: u32) -> impl Strategy<Value = Vec<Complex>> {
    prop::collection::vec(
        (-50.0f64..50.0, -50.0f64..50.0).prop_map(|(re, im)| Complex::new(re, im)),
        1usize << shift,
    )
}

fn sample_pair() -> impl Strategy<Value = (Vec<Complex>, Vec<Complex>)> {
    (0u32..8).prop_flat_map(|shift| (samples(shift), samples(shift)))
}

fn convolve(a: &[i64], b: &[i64]) -> Vec<i64> {
    let mut out = vec![0i64; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// F(αx + βy) = αF(x) + βF(y).
    #[test]
    fn forward_is_linear(
        (x, y) in sample_pair(),
        alpha in -4.0f64..4.0,
        beta in -4.0f64..4.0,
    ) {
        let combined: Vec<Complex> = x
            .iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| xi.scale(alpha) + yi.scale(beta))
            .collect();
        let lhs = forward_transform(&combined).unwrap();
        let fx = forward_transform(&x).unwrap();
        let fy = forward_transform(&y).unwrap();
        for (i, got) in lhs.iter().enumerate() {
            let want = fx[i].scale(alpha) + fy[i].scale(beta);
            prop_assert!((*got - want).magnitude() < 1e-6, "bin {}: {} vs {}", i, got, want);
        }
    }

    /// Both strategies preserve length and round-trip.
    #[test]
    fn roundtrip_and_length((x, _) in sample_pair()) {
        let strategies = [
            TransformStrategy::Iterative,
            TransformStrategy::Recursive { parallel_threshold: 0 },
        ];
        for strategy in strategies {
            let fx = forward_transform_with(&x, strategy).unwrap();
            prop_assert_eq!(fx.len(), x.len());
            let back = inverse_transform(&fx).unwrap();
            prop_assert_eq!(back.len(), x.len());
            for (got, want) in back.iter().zip(x.iter()) {
                prop_assert!((got.re - want.re).abs() < 1e-6);
                prop_assert!((got.im - want.im).abs() < 1e-6);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// FFT product matches direct convolution for degree <= 16.
    #[test]
    fn multiply_matches_convolution(
        a in prop::collection::vec(-10_000i64..=10_000, 1..=17),
        b in prop::collection::vec(-10_000i64..=10_000, 1..=17),
    ) {
        let got = multiply(&a, &b).unwrap();
        let n = 2 * a.len().max(b.len()).next_power_of_two();
        prop_assert_eq!(got.len(), n);
        prop_assert_eq!(
            trim_trailing_zeros(got),
            trim_trailing_zeros(convolve(&a, &b))
        );
    }
}

#[test]
fn invalid_lengths_are_rejected() {
    for len in [0usize, 3, 5, 6, 12] {
        let x = vec![Complex::ONE; len];
        assert!(matches!(forward_transform(&x), Err(FftError::InvalidArgument(_))));
        assert!(matches!(inverse_transform(&x), Err(FftError::InvalidArgument(_))));
    }
}

#[test]
fn small_products() {
    assert_eq!(
        trim_trailing_zeros(multiply(&[1, 2, 3], &[1, 1]).unwrap()),
        vec![1, 3, 5, 3]
    );
    assert_eq!(trim_trailing_zeros(multiply(&[5], &[7]).unwrap()), vec![35]);
}
