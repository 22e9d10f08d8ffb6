use ndarray::{Array1, ArrayView1, s};
use realfft::num_complex::Complex;
use tracing::{debug, warn};

use crate::{Signal, SpectrumError, fft, fftfreq, signal::SPACING_REL_TOL};

/// Returns the gain of a complex ratio in decibels, `20 * log10(|value|)`.
///
/// Zero maps to negative infinity and non-finite values stay non-finite.
#[must_use]
pub fn gain_db(value: Complex<f64>) -> f64 {
    20.0 * value.norm().log10()
}

/// A transfer function estimated as the bin-wise ratio of two spectra.
///
/// The ratio is `FFT(input) / FFT(output)`. For the valve this is head over
/// flow, so attenuation of the flow shows up as positive gain.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    frequencies: Array1<f64>,
    values: Array1<Complex<f64>>,
    singular_bins: Vec<usize>,
}

impl TransferFunction {
    /// Estimates the transfer function between an input and an output signal.
    ///
    /// Bins where the output spectrum is exactly zero are kept: their values
    /// are infinite or `NaN` per IEEE division, and their indices are reported
    /// by [`singular_bins`](Self::singular_bins).
    ///
    /// # Errors
    ///
    /// Returns [`SpectrumError::InvalidParameter`] if the signals differ in
    /// length or sample spacing, or hold fewer than two samples.
    /// Returns [`SpectrumError::Fft`] if either transform fails.
    pub fn estimate(input: &Signal, output: &Signal) -> Result<Self, SpectrumError> {
        if input.len() != output.len() {
            return Err(SpectrumError::InvalidParameter(format!(
                "input has {} samples but output has {}",
                input.len(),
                output.len()
            )));
        }
        let (Some(spacing), Some(output_spacing)) = (input.spacing(), output.spacing()) else {
            return Err(SpectrumError::InvalidParameter(
                "transfer function needs at least two samples".to_string(),
            ));
        };
        if (spacing - output_spacing).abs() > SPACING_REL_TOL * spacing.abs() {
            return Err(SpectrumError::InvalidParameter(format!(
                "input spacing {spacing} differs from output spacing {output_spacing}"
            )));
        }

        let frequencies = fftfreq(input.len(), spacing)?;
        let input_spectrum = fft(input.values().view())?;
        let output_spectrum = fft(output.values().view())?;

        let singular_bins: Vec<usize> = output_spectrum
            .iter()
            .enumerate()
            .filter(|(_, bin)| bin.re == 0.0 && bin.im == 0.0)
            .map(|(k, _)| k)
            .collect();
        if !singular_bins.is_empty() {
            warn!(
                bins = singular_bins.len(),
                "output spectrum is zero at some bins, transfer function is not finite there"
            );
        }

        let values = &input_spectrum / &output_spectrum;
        debug!(bins = values.len(), spacing, "estimated transfer function");

        Ok(Self {
            frequencies,
            values,
            singular_bins,
        })
    }

    /// Returns the frequency of every bin, in standard FFT order.
    #[must_use]
    pub fn frequencies(&self) -> &Array1<f64> {
        &self.frequencies
    }

    /// Returns the complex ratio at every bin, in standard FFT order.
    #[must_use]
    pub fn values(&self) -> &Array1<Complex<f64>> {
        &self.values
    }

    /// Returns the number of bins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no bins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the indices of bins where the output spectrum is exactly zero.
    #[must_use]
    pub fn singular_bins(&self) -> &[usize] {
        &self.singular_bins
    }

    /// Returns the non-negative half of the spectrum.
    ///
    /// This is the first `n / 2` bins: zero frequency upward, with the
    /// mirrored negative frequencies excluded.
    #[must_use]
    pub fn one_sided(&self) -> (ArrayView1<'_, f64>, ArrayView1<'_, Complex<f64>>) {
        let half = self.len() / 2;
        (
            self.frequencies.slice(s![..half]),
            self.values.slice(s![..half]),
        )
    }

    /// Returns the gain in decibels over the non-negative half of the spectrum.
    #[must_use]
    pub fn gain_db(&self) -> Array1<f64> {
        let (_, values) = self.one_sided();
        values.mapv(gain_db)
    }

    /// Returns the gain in decibels at the one-sided bin nearest `frequency`.
    ///
    /// Returns `None` if the one-sided spectrum is empty.
    #[must_use]
    pub fn gain_at(&self, frequency: f64) -> Option<f64> {
        let (frequencies, values) = self.one_sided();

        frequencies
            .iter()
            .map(|f| (f - frequency).abs())
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(k, _)| gain_db(values[k]))
    }
}
