//! Frequency-domain analysis of a Tesla valve driven by a sinusoidal head.
//!
//! The pieces compose into a single pass:
//!
//! 1. [`SineConfig::synthesize`] builds a uniformly sampled head signal.
//! 2. Any [`Model`] mapping head samples to flow samples produces the flow.
//! 3. [`TransferFunction::estimate`] divides the head spectrum by the flow
//!    spectrum, bin by bin.
//!
//! [`analyze`] runs all three steps and returns an [`Analysis`].
//!
//! The transfer function is oriented input over output (`FFT(head) /
//! FFT(flow)`). Bins where the flow spectrum is exactly zero are not errors:
//! they hold infinite or `NaN` values following IEEE division, and the rest
//! of the spectrum stays usable.
//!
//! [`Model`]: tesla_core::Model

mod analysis;
mod error;
mod fft;
mod signal;
mod sine;
mod transfer;

pub use analysis::{Analysis, analyze};
pub use error::SpectrumError;
pub use fft::{fft, fftfreq};
pub use realfft::num_complex::Complex;
pub use signal::{Signal, linspace};
pub use sine::{ConfigError, SineConfig};
pub use transfer::{TransferFunction, gain_db};
