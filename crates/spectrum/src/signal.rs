use ndarray::Array1;

use crate::SpectrumError;

/// Relative tolerance when checking that sample instants are evenly spaced.
pub(crate) const SPACING_REL_TOL: f64 = 1e-9;

/// Returns `samples` evenly spaced values over `[start, stop]`, inclusive of
/// both endpoints.
///
/// # Errors
///
/// Returns [`SpectrumError::InvalidParameter`] if fewer than two samples are
/// requested, if either bound is not finite, or if `stop <= start`.
pub fn linspace(start: f64, stop: f64, samples: usize) -> Result<Array1<f64>, SpectrumError> {
    if samples < 2 {
        return Err(SpectrumError::InvalidParameter(format!(
            "linspace needs at least two samples, got {samples}"
        )));
    }
    if !start.is_finite() || !stop.is_finite() || stop <= start {
        return Err(SpectrumError::InvalidParameter(format!(
            "linspace bounds must be finite and increasing, got [{start}, {stop}]"
        )));
    }

    Ok(Array1::linspace(start, stop, samples))
}

/// A uniformly sampled real signal.
///
/// Pairs a time vector with one value per sample instant. Both arrays always
/// have the same, non-zero length, and the instants are strictly increasing
/// with a constant spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    time: Array1<f64>,
    values: Array1<f64>,
}

impl Signal {
    /// Creates a signal from a time vector and its sample values.
    ///
    /// # Errors
    ///
    /// Returns [`SpectrumError::InvalidParameter`] if either array is empty,
    /// if their lengths differ, or if the time instants are not evenly spaced
    /// with a finite, positive step.
    pub fn new(time: Array1<f64>, values: Array1<f64>) -> Result<Self, SpectrumError> {
        if time.is_empty() || values.is_empty() {
            return Err(SpectrumError::InvalidParameter(
                "signal must contain at least one sample".to_string(),
            ));
        }
        if time.len() != values.len() {
            return Err(SpectrumError::InvalidParameter(format!(
                "time has {} samples but values has {}",
                time.len(),
                values.len()
            )));
        }
        check_uniform(&time)?;

        Ok(Self { time, values })
    }

    /// Creates a signal sharing this signal's time base.
    ///
    /// # Errors
    ///
    /// Returns [`SpectrumError::InvalidParameter`] if `values` does not have
    /// one sample per instant of this signal.
    pub fn with_values(&self, values: Array1<f64>) -> Result<Self, SpectrumError> {
        Self::new(self.time.clone(), values)
    }

    /// Returns the sample instants.
    #[must_use]
    pub fn time(&self) -> &Array1<f64> {
        &self.time
    }

    /// Returns the sample values.
    #[must_use]
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: a signal holds at least one sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the sample spacing `t[1] - t[0]`, or `None` for a single sample.
    #[must_use]
    pub fn spacing(&self) -> Option<f64> {
        (self.time.len() >= 2).then(|| self.time[1] - self.time[0])
    }

    /// Returns the mean of the sample values.
    ///
    /// For a flow signal this is the net throughput over the record, which is
    /// what a diode rectifies an oscillating head into.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f64 {
        self.values.sum() / self.values.len() as f64
    }

    /// Returns the indices at which the signal crosses or touches zero.
    ///
    /// Index `i` is reported when sample `i` is exactly zero, or when samples
    /// `i` and `i + 1` have strictly opposite signs.
    #[must_use]
    pub fn zero_crossings(&self) -> Vec<usize> {
        let mut crossings = Vec::new();

        for (i, &value) in self.values.iter().enumerate() {
            let next = self.values.get(i + 1).copied();
            let changes_sign = next.is_some_and(|next| value * next < 0.0);
            if value == 0.0 || changes_sign {
                crossings.push(i);
            }
        }

        crossings
    }
}

fn check_uniform(time: &Array1<f64>) -> Result<(), SpectrumError> {
    if time.len() < 2 {
        return Ok(());
    }

    let spacing = time[1] - time[0];
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(SpectrumError::InvalidParameter(format!(
            "time step must be finite and positive, got {spacing}"
        )));
    }

    for (i, pair) in time.windows(2).into_iter().enumerate() {
        let step = pair[1] - pair[0];
        if (step - spacing).abs() > SPACING_REL_TOL * spacing {
            return Err(SpectrumError::InvalidParameter(format!(
                "time is not evenly spaced: step {i} is {step}, expected {spacing}"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn linspace_includes_both_endpoints() {
        let t = linspace(0.0, 2.0, 1000).unwrap();

        assert_eq!(t.len(), 1000);
        assert_eq!(t[0], 0.0);
        assert_relative_eq!(t[999], 2.0, epsilon = 1e-12);
        assert_relative_eq!(t[1] - t[0], 2.0 / 999.0, epsilon = 1e-15);
    }

    #[test]
    fn linspace_rejects_degenerate_requests() {
        assert!(matches!(
            linspace(0.0, 1.0, 1),
            Err(SpectrumError::InvalidParameter(_))
        ));
        assert!(matches!(
            linspace(1.0, 1.0, 10),
            Err(SpectrumError::InvalidParameter(_))
        ));
        assert!(matches!(
            linspace(0.0, f64::INFINITY, 10),
            Err(SpectrumError::InvalidParameter(_))
        ));
    }

    #[test]
    fn rejects_empty_or_mismatched_arrays() {
        let empty = Array1::<f64>::zeros(0);
        assert!(matches!(
            Signal::new(empty.clone(), empty),
            Err(SpectrumError::InvalidParameter(_))
        ));

        let err = Signal::new(array![0.0, 1.0, 2.0], array![1.0, 2.0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid parameter: time has 3 samples but values has 2"
        );
    }

    #[test]
    fn rejects_unevenly_spaced_time() {
        let err = Signal::new(array![0.0, 0.1, 5.0, 5.1], array![1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert!(matches!(err, SpectrumError::InvalidParameter(_)));

        assert!(matches!(
            Signal::new(array![1.0, 0.5, 0.0], array![1.0, 2.0, 3.0]),
            Err(SpectrumError::InvalidParameter(_))
        ));
        assert!(matches!(
            Signal::new(array![0.0, 0.0], array![1.0, 2.0]),
            Err(SpectrumError::InvalidParameter(_))
        ));
    }

    #[test]
    fn accepts_linspace_time_base() {
        let time = linspace(0.0, 2.0, 1000).unwrap();
        let values = time.mapv(f64::sin);

        assert!(Signal::new(time, values).is_ok());
    }

    #[test]
    fn with_values_keeps_time_base() {
        let signal = Signal::new(array![0.0, 0.5, 1.0], array![1.0, 2.0, 3.0]).unwrap();

        let other = signal.with_values(array![-1.0, -2.0, -3.0]).unwrap();
        assert_eq!(other.time(), signal.time());
        assert_eq!(other.spacing(), Some(0.5));

        assert!(signal.with_values(array![1.0]).is_err());
    }

    #[test]
    fn single_sample_has_no_spacing() {
        let signal = Signal::new(array![0.0], array![4.0]).unwrap();
        assert_eq!(signal.spacing(), None);
        assert_eq!(signal.len(), 1);
        assert!(!signal.is_empty());
    }

    #[test]
    fn mean_of_values() {
        let signal = Signal::new(array![0.0, 1.0, 2.0, 3.0], array![1.0, -1.0, 4.0, 0.0]).unwrap();
        assert_relative_eq!(signal.mean(), 1.0);
    }

    #[test]
    fn zero_crossings_report_sign_changes_and_exact_zeros() {
        let time = Array1::linspace(0.0, 6.0, 7);
        let signal = Signal::new(time, array![0.0, 1.0, 2.0, -1.0, -3.0, 0.0, 2.0]).unwrap();

        assert_eq!(signal.zero_crossings(), vec![0, 2, 5]);
    }

    #[test]
    fn touching_zero_is_reported_once() {
        let time = Array1::linspace(0.0, 4.0, 5);
        let signal = Signal::new(time, array![1.0, 0.0, 1.0, 0.5, 0.25]).unwrap();

        assert_eq!(signal.zero_crossings(), vec![1]);
    }
}
