use ndarray::{Array1, ArrayView1};
use realfft::{RealFftPlanner, num_complex::Complex};

use crate::SpectrumError;

/// Computes the full-length discrete Fourier transform of a real signal.
///
/// No window is applied and no zero padding is added: the result has exactly
/// one bin per input sample, in standard FFT order. Only the non-negative half
/// is computed directly; the mirrored half follows from the conjugate symmetry
/// of a real signal's spectrum, `X[n - k] = conj(X[k])`.
///
/// # Errors
///
/// Returns [`SpectrumError::InvalidParameter`] if `values` is empty, or
/// [`SpectrumError::Fft`] if the transform fails.
pub fn fft(values: ArrayView1<'_, f64>) -> Result<Array1<Complex<f64>>, SpectrumError> {
    let n = values.len();
    if n == 0 {
        return Err(SpectrumError::InvalidParameter(
            "cannot transform an empty signal".to_string(),
        ));
    }

    let mut planner = RealFftPlanner::<f64>::new();
    let r2c = planner.plan_fft_forward(n);
    let mut input = values.to_vec();
    let mut half = r2c.make_output_vec();
    r2c.process(&mut input, &mut half)
        .map_err(|e| SpectrumError::Fft(e.to_string()))?;

    Ok(Array1::from_shape_fn(n, |k| {
        if k < half.len() {
            half[k]
        } else {
            half[n - k].conj()
        }
    }))
}

/// Returns the frequency of each bin of an `n`-point FFT with sample spacing `spacing`.
///
/// Bins follow the standard layout `[0, 1, …, ⌈n/2⌉ - 1, -⌊n/2⌋, …, -1] / (n * spacing)`,
/// so the first bin is always zero and the negative frequencies mirror the
/// positive ones.
///
/// # Errors
///
/// Returns [`SpectrumError::InvalidParameter`] if `n` is zero or `spacing` is
/// not finite and positive.
#[allow(clippy::cast_precision_loss)]
pub fn fftfreq(n: usize, spacing: f64) -> Result<Array1<f64>, SpectrumError> {
    if n == 0 {
        return Err(SpectrumError::InvalidParameter(
            "frequency axis needs at least one bin".to_string(),
        ));
    }
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(SpectrumError::InvalidParameter(format!(
            "sample spacing must be finite and positive, got {spacing}"
        )));
    }

    let scale = 1.0 / (n as f64 * spacing);
    let positive = n.div_ceil(2);

    Ok(Array1::from_shape_fn(n, |i| {
        if i < positive {
            i as f64 * scale
        } else {
            (i as f64 - n as f64) * scale
        }
    }))
}
