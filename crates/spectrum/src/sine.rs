use std::f64::consts::TAU;

use thiserror::Error;

use crate::{Signal, SpectrumError, linspace};

/// Configuration for synthesizing a sinusoidal head-difference signal.
///
/// The synthesized signal is `amplitude * sin(2π * frequency * t) + offset`,
/// sampled at `samples` evenly spaced instants over `window`, endpoints
/// included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineConfig {
    frequency: f64,
    amplitude: f64,
    offset: f64,
    window: [f64; 2],
    samples: usize,
}

/// Errors that can occur when validating a [`SineConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("frequency must be finite and positive")]
    Frequency,

    #[error("amplitude must be finite")]
    Amplitude,

    #[error("height offset must be finite")]
    Offset,

    #[error("time window must be finite and increasing")]
    Window,

    #[error("at least two samples are required")]
    Samples,
}

impl Default for SineConfig {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1.0, 1.0, 0.0, [0.0, 2.0], 1000).unwrap()
    }
}

impl SineConfig {
    /// Creates a new config with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the frequency is not finite and positive, if the
    /// amplitude or offset is not finite, if the window is not finite and
    /// increasing, or if fewer than two samples are requested.
    pub fn new(
        frequency: f64,
        amplitude: f64,
        offset: f64,
        window: [f64; 2],
        samples: usize,
    ) -> Result<Self, ConfigError> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(ConfigError::Frequency);
        }
        if !amplitude.is_finite() {
            return Err(ConfigError::Amplitude);
        }
        if !offset.is_finite() {
            return Err(ConfigError::Offset);
        }
        let [start, stop] = window;
        if !start.is_finite() || !stop.is_finite() || stop <= start {
            return Err(ConfigError::Window);
        }
        if samples < 2 {
            return Err(ConfigError::Samples);
        }

        Ok(Self {
            frequency,
            amplitude,
            offset,
            window,
            samples,
        })
    }

    /// Returns a copy of this config with a different driving frequency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Frequency`] if `frequency` is not finite and positive.
    pub fn with_frequency(self, frequency: f64) -> Result<Self, ConfigError> {
        Self::new(
            frequency,
            self.amplitude,
            self.offset,
            self.window,
            self.samples,
        )
    }

    /// Returns a copy of this config with a different height offset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Offset`] if `offset` is not finite.
    pub fn with_offset(self, offset: f64) -> Result<Self, ConfigError> {
        Self::new(
            self.frequency,
            self.amplitude,
            offset,
            self.window,
            self.samples,
        )
    }

    /// Returns the driving frequency in hertz.
    #[must_use]
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Returns the amplitude of the head oscillation.
    #[must_use]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Returns the constant height offset added to the oscillation.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns the `[start, stop]` time window in seconds.
    #[must_use]
    pub fn window(&self) -> [f64; 2] {
        self.window
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Returns the spacing between consecutive samples in seconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn spacing(&self) -> f64 {
        let [start, stop] = self.window;
        (stop - start) / (self.samples - 1) as f64
    }

    /// Synthesizes the head-difference signal.
    ///
    /// # Errors
    ///
    /// Returns [`SpectrumError::InvalidParameter`] if the window is too narrow
    /// for its samples to be told apart in floating point.
    pub fn synthesize(&self) -> Result<Signal, SpectrumError> {
        let [start, stop] = self.window;
        let time = linspace(start, stop, self.samples)?;
        let values = time.mapv(|t| self.amplitude * (TAU * self.frequency * t).sin() + self.offset);

        Signal::new(time, values)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn default_is_one_hertz_over_two_seconds() {
        let config = SineConfig::default();

        assert_eq!(config.frequency(), 1.0);
        assert_eq!(config.amplitude(), 1.0);
        assert_eq!(config.offset(), 0.0);
        assert_eq!(config.window(), [0.0, 2.0]);
        assert_eq!(config.samples(), 1000);
        assert_relative_eq!(config.spacing(), 2.0 / 999.0);
    }

    #[test]
    fn rejects_invalid_parameters() {
        let window = [0.0, 2.0];

        assert_eq!(
            SineConfig::new(0.0, 1.0, 0.0, window, 100),
            Err(ConfigError::Frequency)
        );
        assert_eq!(
            SineConfig::new(f64::NAN, 1.0, 0.0, window, 100),
            Err(ConfigError::Frequency)
        );
        assert_eq!(
            SineConfig::new(1.0, f64::INFINITY, 0.0, window, 100),
            Err(ConfigError::Amplitude)
        );
        assert_eq!(
            SineConfig::new(1.0, 1.0, f64::NAN, window, 100),
            Err(ConfigError::Offset)
        );
        assert_eq!(
            SineConfig::new(1.0, 1.0, 0.0, [2.0, 0.0], 100),
            Err(ConfigError::Window)
        );
        assert_eq!(
            SineConfig::new(1.0, 1.0, 0.0, window, 1),
            Err(ConfigError::Samples)
        );
    }

    #[test]
    fn builders_revalidate() {
        let config = SineConfig::default().with_frequency(4.0).unwrap();
        assert_eq!(config.frequency(), 4.0);
        assert_eq!(config.samples(), 1000);

        assert_eq!(
            SineConfig::default().with_frequency(-1.0),
            Err(ConfigError::Frequency)
        );
        assert_eq!(
            SineConfig::default().with_offset(0.5).unwrap().offset(),
            0.5
        );
    }

    #[test]
    fn synthesizes_offset_sine() {
        let config = SineConfig::new(1.0, 2.0, 0.5, [0.0, 1.0], 5).unwrap();
        let signal = config.synthesize().unwrap();

        assert_eq!(signal.len(), 5);
        assert_relative_eq!(signal.spacing().unwrap(), 0.25);

        let expected = [0.5, 2.5, 0.5, -1.5, 0.5];
        for (value, expected) in signal.values().iter().zip(expected) {
            assert_relative_eq!(*value, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn default_signal_starts_at_zero() {
        let signal = SineConfig::default().synthesize().unwrap();

        assert_eq!(signal.values()[0], 0.0);
        assert_relative_eq!(signal.spacing().unwrap(), 2.0 / 999.0, epsilon = 1e-15);
        assert!(signal.values().iter().all(|h| h.abs() <= 1.0));
    }

    #[test]
    fn time_base_is_the_inclusive_linspace() {
        let signal = SineConfig::default().synthesize().unwrap();
        assert_eq!(signal.time(), &linspace(0.0, 2.0, 1000).unwrap());
    }

    #[test]
    fn unresolvable_window_fails_to_synthesize() {
        let config = SineConfig::new(1.0, 1.0, 0.0, [1.0, 1.0 + 1e-15], 1000).unwrap();

        assert!(matches!(
            config.synthesize(),
            Err(SpectrumError::InvalidParameter(_))
        ));
    }
}
