//! Post-processing helpers: field probes and spectra of sampled series.

mod dft;
mod probe;

pub use dft::{dft_magnitudes, log_frequencies};
pub use probe::Probe;
