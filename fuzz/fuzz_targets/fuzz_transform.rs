#![no_main]

use libfuzzer_sys::fuzz_target;

use polyfft_fft::{forward_transform, inverse_transform, Complex};

fuzz_target!(|data: &[u8]| {
    let n = data.len().next_power_of_two().min(1 << 12);
    if data.is_empty() {
        return;
    }
    let mut signal = vec![Complex::ZERO; n];
    for (slot, &b) in signal.iter_mut().zip(data) {
        *slot = Complex::from_real(f64::from(b as i8));
    }

    let spectrum = forward_transform(&signal).expect("power-of-two length");
    let back = inverse_transform(&spectrum).expect("power-of-two length");
    for (orig, got) in signal.iter().zip(&back) {
        assert!((orig.re - got.re).abs() < 1e-6 && got.im.abs() < 1e-6);
    }
});
