//! Direct discrete Fourier transform of sampled time series.
//!
//! Spectra are needed at arbitrary (e.g. log-spaced) frequencies, so this
//! evaluates X(f) = Σ_t x(t)·exp(-2πi·f·t) directly instead of going
//! through an FFT on a fixed grid.

use std::f64::consts::PI;

/// Complex spectrum magnitude |X(f)| for each requested frequency.
///
/// `samples` and `times` must have equal length; `times` carries whatever
/// unit the frequencies are reciprocal to.
pub fn dft_magnitudes(samples: &[f64], times: &[f64], frequencies: &[f64]) -> Vec<f64> {
    assert_eq!(samples.len(), times.len(), "one sample per time point");

    frequencies
        .iter()
        .map(|&f| {
            let mut re = 0.0;
            let mut im = 0.0;
            for (&x, &t) in samples.iter().zip(times) {
                let phase = -2.0 * PI * f * t;
                re += x * phase.cos();
                im += x * phase.sin();
            }
            (re * re + im * im).sqrt()
        })
        .collect()
}

/// Logarithmically spaced frequencies from 10^start to 10^stop inclusive.
pub fn log_frequencies(start_exp: f64, stop_exp: f64, count: usize) -> Vec<f64> {
    assert!(count >= 2);
    let step = (stop_exp - start_exp) / (count - 1) as f64;
    (0..count)
        .map(|i| 10f64.powf(start_exp + i as f64 * step))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_tone_magnitude() {
        // A unit cosine sampled over an integer number of periods has
        // |X| = N/2 at its own frequency.
        let f0 = 5.0;
        let n = 1000;
        let dt = 1.0 / 100.0; // 10 periods
        let times: Vec<f64> = (0..n).map(|i| i as f64 * dt).collect();
        let samples: Vec<f64> = times.iter().map(|&t| (2.0 * PI * f0 * t).cos()).collect();

        let mags = dft_magnitudes(&samples, &times, &[f0]);
        assert!(
            (mags[0] - n as f64 / 2.0).abs() < 1.0,
            "tone magnitude {} vs {}",
            mags[0],
            n / 2
        );
    }

    #[test]
    fn test_orthogonal_tone_rejected() {
        let f0 = 5.0;
        let n = 1000;
        let dt = 1.0 / 100.0;
        let times: Vec<f64> = (0..n).map(|i| i as f64 * dt).collect();
        let samples: Vec<f64> = times.iter().map(|&t| (2.0 * PI * f0 * t).cos()).collect();

        // A harmonically unrelated bin sees almost nothing.
        let mags = dft_magnitudes(&samples, &times, &[7.0]);
        assert!(mags[0] < 1.0);
    }

    #[test]
    fn test_log_frequencies_endpoints() {
        let f = log_frequencies(8.0, 9.0, 301);
        assert_eq!(f.len(), 301);
        assert!((f[0] - 1e8).abs() / 1e8 < 1e-12);
        assert!((f[300] - 1e9).abs() / 1e9 < 1e-12);
    }
}
