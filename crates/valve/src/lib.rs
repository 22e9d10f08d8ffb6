//! Flow model of a Tesla valve, a passive fluidic diode.
//!
//! The valve is modeled purely by two effective flow areas: a larger one for
//! the low-resistance forward direction and a smaller one for the reverse
//! direction. For a head difference `h` between two reservoirs,
//!
//! - `h >= 0`: `Q = A_f * sqrt(2 g h)`
//! - `h < 0`: `Q = -A_b * sqrt(-2 g h)`
//!
//! where `g` is expressed in the length unit selected by [`LengthUnit`].
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use tesla_valve::{TeslaValve, ValveParams};
//!
//! let valve = TeslaValve::new(ValveParams::default());
//! let flow = valve.flow(array![1.0, 0.0, -1.0].view()).unwrap();
//!
//! assert!(flow[0] > 17.7 && flow[0] < 17.8);
//! assert_eq!(flow[1], 0.0);
//! assert!(flow[2] < -9.7 && flow[2] > -9.8);
//! ```

mod error;
mod params;
mod units;
mod valve;

pub use error::ValveError;
pub use params::ValveParams;
pub use units::{GRAVITY, LengthUnit};
pub use valve::TeslaValve;
