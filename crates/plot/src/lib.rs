//! Plotting for Tesla valve response analyses.
//!
//! [`ResponsePlot`] renders an [`Analysis`] as two side-by-side panels:
//!
//! - **Time**: head difference on the left axis and flow on a right-hand axis,
//!   overlaid on a shared time axis.
//! - **Frequency**: transfer-function gain in decibels against a logarithmic
//!   frequency axis, restricted to the non-negative half of the spectrum.
//!
//! egui plots have a single coordinate system, so the flow trace is mapped
//! onto the head axis with a [`DualAxis`] and the right-hand tick labels map
//! back. The log frequency axis is drawn the same way, by plotting `log₁₀(f)`
//! and labeling ticks with `10^x`.
//!
//! [`Analysis`]: tesla_spectrum::Analysis

mod axes;
mod config;
mod response;

pub use axes::{DualAxis, log_tick_label, log_x_points};
pub use config::ShowConfig;
pub use response::ResponsePlot;
