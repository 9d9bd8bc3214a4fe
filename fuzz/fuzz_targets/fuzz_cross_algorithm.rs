#![no_main]

use libfuzzer_sys::fuzz_target;

use polyfft_core::schoolbook::convolve;
use polyfft_fft::{multiply, trim_trailing_zeros};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte splits the rest into two operands of small signed coefficients
    let split = 1 + usize::from(data[0]) % (data.len() - 1);
    let lhs: Vec<i64> = data[1..split].iter().map(|&b| i64::from(b as i8)).collect();
    let rhs: Vec<i64> = data[split..].iter().map(|&b| i64::from(b as i8)).collect();

    let fft = multiply(&lhs, &rhs).expect("small coefficients never overflow");
    let naive = convolve(&lhs, &rhs).expect("small coefficients never overflow");
    assert_eq!(
        trim_trailing_zeros(fft),
        trim_trailing_zeros(naive),
        "FFT != schoolbook for {lhs:?} * {rhs:?}"
    );
});
