use ndarray::Array1;
use tesla_core::Model;
use tracing::{debug, info};

use crate::{Signal, SineConfig, SpectrumError, TransferFunction};

/// The result of driving a model with a synthesized head signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    head: Signal,
    flow: Signal,
    transfer: TransferFunction,
}

impl Analysis {
    /// Returns the synthesized head-difference signal.
    #[must_use]
    pub fn head(&self) -> &Signal {
        &self.head
    }

    /// Returns the flow produced by the model, aligned with the head samples.
    #[must_use]
    pub fn flow(&self) -> &Signal {
        &self.flow
    }

    /// Returns the head-over-flow transfer function.
    #[must_use]
    pub fn transfer(&self) -> &TransferFunction {
        &self.transfer
    }
}

/// Synthesizes a head signal, runs it through `model`, and estimates the
/// transfer function from head to flow.
///
/// # Errors
///
/// Returns [`SpectrumError::Model`] if the model fails,
/// [`SpectrumError::InvalidParameter`] if the head cannot be synthesized or the
/// model returns a different number of samples than it was given, or any error
/// from [`TransferFunction::estimate`].
pub fn analyze<M>(model: &M, config: &SineConfig) -> Result<Analysis, SpectrumError>
where
    M: Model<Input = Array1<f64>, Output = Array1<f64>>,
{
    let head = config.synthesize()?;
    debug!(
        frequency = config.frequency(),
        samples = head.len(),
        "synthesized head signal"
    );

    let flow = model
        .call(head.values())
        .map_err(|e| SpectrumError::Model(Box::new(e)))?;
    let flow = head.with_values(flow)?;

    let transfer = TransferFunction::estimate(&head, &flow)?;
    info!(
        net_flow = flow.mean(),
        singular_bins = transfer.singular_bins().len(),
        "analysis complete"
    );

    Ok(Analysis {
        head,
        flow,
        transfer,
    })
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use thiserror::Error;

    use super::*;

    /// A memoryless linear model: flow = gain * head.
    struct Linear(f64);

    impl Model for Linear {
        type Input = Array1<f64>;
        type Output = Array1<f64>;
        type Error = Infallible;

        fn call(&self, input: &Array1<f64>) -> Result<Array1<f64>, Self::Error> {
            Ok(input * self.0)
        }
    }

    #[derive(Debug, Error)]
    #[error("pump stalled")]
    struct Stalled;

    struct Failing;

    impl Model for Failing {
        type Input = Array1<f64>;
        type Output = Array1<f64>;
        type Error = Stalled;

        fn call(&self, _input: &Array1<f64>) -> Result<Array1<f64>, Self::Error> {
            Err(Stalled)
        }
    }

    /// Drops the last sample, breaking alignment with the head signal.
    struct Truncating;

    impl Model for Truncating {
        type Input = Array1<f64>;
        type Output = Array1<f64>;
        type Error = Infallible;

        fn call(&self, input: &Array1<f64>) -> Result<Array1<f64>, Self::Error> {
            Ok(input.slice(ndarray::s![..-1]).to_owned())
        }
    }

    #[test]
    fn linear_model_round_trip() {
        let config = SineConfig::default();
        let analysis = analyze(&Linear(2.0), &config).unwrap();

        assert_eq!(analysis.head().len(), 1000);
        assert_eq!(analysis.flow().time(), analysis.head().time());
        assert_relative_eq!(analysis.flow().values()[250], 2.0 * analysis.head().values()[250]);
        assert_relative_eq!(
            analysis.transfer().gain_at(1.0).unwrap(),
            20.0 * 0.5_f64.log10(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn model_errors_are_boxed() {
        let err = analyze(&Failing, &SineConfig::default()).unwrap_err();

        assert!(matches!(err, SpectrumError::Model(_)));
        assert_eq!(err.to_string(), "model error: pump stalled");
    }

    #[test]
    fn misaligned_model_output_is_rejected() {
        let err = analyze(&Truncating, &SineConfig::default()).unwrap_err();
        assert!(matches!(err, SpectrumError::InvalidParameter(_)));
    }
}
