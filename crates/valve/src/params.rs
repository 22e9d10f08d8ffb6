use tesla_core::constraint::{Constrained, StrictlyPositive};

use crate::{LengthUnit, ValveError};

/// Effective forward flow area used by [`ValveParams::default`].
const DEFAULT_FORWARD_AREA: f64 = 0.4;

/// Effective backward flow area used by [`ValveParams::default`].
const DEFAULT_BACKWARD_AREA: f64 = 0.22;

/// Parameters of a [`TeslaValve`].
///
/// The effective areas are expressed in the square of [`LengthUnit`], and
/// both are guaranteed strictly positive.
///
/// [`TeslaValve`]: crate::TeslaValve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValveParams {
    forward_area: Constrained<f64, StrictlyPositive>,
    backward_area: Constrained<f64, StrictlyPositive>,
    unit: LengthUnit,
}

impl Default for ValveParams {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(
            DEFAULT_FORWARD_AREA,
            DEFAULT_BACKWARD_AREA,
            LengthUnit::Centimeter,
        )
        .unwrap()
    }
}

impl ValveParams {
    /// Creates validated valve parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ValveError::InvalidParameter`] if either area is zero,
    /// negative, or not a number.
    pub fn new(forward_area: f64, backward_area: f64, unit: LengthUnit) -> Result<Self, ValveError> {
        let forward_area =
            StrictlyPositive::new(forward_area).map_err(|source| ValveError::InvalidParameter {
                name: "forward_area",
                source,
            })?;
        let backward_area =
            StrictlyPositive::new(backward_area).map_err(|source| ValveError::InvalidParameter {
                name: "backward_area",
                source,
            })?;

        Ok(Self {
            forward_area,
            backward_area,
            unit,
        })
    }

    /// Returns the effective area of the forward (low-resistance) direction.
    #[must_use]
    pub fn forward_area(&self) -> f64 {
        *self.forward_area.as_ref()
    }

    /// Returns the effective area of the reverse (high-resistance) direction.
    #[must_use]
    pub fn backward_area(&self) -> f64 {
        *self.backward_area.as_ref()
    }

    /// Returns the length unit heads and areas are expressed in.
    #[must_use]
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }
}
