
use ndarray::{Array1, ArrayView1};
use tesla_core::Model;
use tracing::trace;
use uom::{
    ConstZero,
    si::{
        acceleration::meter_per_second_squared,
        f64::{Acceleration, Length, Velocity, VolumeRate},
    },
};

use crate::{GRAVITY, ValveError, ValveParams};

/// A Tesla valve modeled as a pair of effective orifice areas.
///
/// Flow follows Torricelli's law in both directions, with the larger forward
/// area passing fluid more easily than the backward one. The sign of the flow
/// always matches the sign of the head difference.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TeslaValve {
    params: ValveParams,
}

impl TeslaValve {
    /// Creates a valve from validated parameters.
    #[must_use]
    pub fn new(params: ValveParams) -> Self {
        Self { params }
    }

    /// Returns the valve parameters.
    #[must_use]
    pub fn params(&self) -> &ValveParams {
        &self.params
    }

    /// Returns the flow rate for a single head difference.
    ///
    /// Heads and areas are in the parameters' [`LengthUnit`], so the result
    /// is in that unit cubed per second. A zero head takes the forward branch
    /// and yields exactly zero.
    ///
    /// [`LengthUnit`]: crate::LengthUnit
    #[must_use]
    pub fn flow_rate(&self, head: f64) -> f64 {
        let g = self.params.unit().gravity();
        if head >= 0.0 {
            self.params.forward_area() * (2.0 * g * head).sqrt()
        } else {
            -self.params.backward_area() * (-2.0 * g * head).sqrt()
        }
    }

    /// Returns the flow rate for each sample of a head-difference signal.
    ///
    /// # Errors
    ///
    /// Returns [`ValveError::EmptyHead`] if `heads` has no samples.
    pub fn flow(&self, heads: ArrayView1<'_, f64>) -> Result<Array1<f64>, ValveError> {
        if heads.is_empty() {
            return Err(ValveError::EmptyHead);
        }
        trace!(samples = heads.len(), "evaluating valve flow");

        Ok(heads.mapv(|head| self.flow_rate(head)))
    }

    /// Returns the volume flow rate for a dimensioned head difference.
    ///
    /// The effective areas are interpreted in the square of the parameters'
    /// length unit; the result carries its own units and does not depend on
    /// which unit the caller reads it in.
    #[must_use]
    pub fn volume_rate(&self, head: Length) -> VolumeRate {
        let g = Acceleration::new::<meter_per_second_squared>(GRAVITY);
        let unit = self.params.unit();

        if head >= Length::ZERO {
            let velocity: Velocity = (2.0 * g * head).sqrt();
            unit.area(self.params.forward_area()) * velocity
        } else {
            let velocity: Velocity = (-2.0 * g * head).sqrt();
            -(unit.area(self.params.backward_area()) * velocity)
        }
    }

    /// Returns the ratio of forward to reverse flow magnitude at equal and
    /// opposite heads.
    ///
    /// A value above one means the valve favors the forward direction.
    #[must_use]
    pub fn diodicity(&self) -> f64 {
        self.params.forward_area() / self.params.backward_area()
    }
}

impl Model for TeslaValve {
    type Input = Array1<f64>;
    type Output = Array1<f64>;
    type Error = ValveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.flow(input.view())
    }
}
