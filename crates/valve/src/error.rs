use tesla_core::constraint::ConstraintError;
use thiserror::Error;

/// Errors that can occur when configuring or evaluating a [`TeslaValve`].
///
/// [`TeslaValve`]: crate::TeslaValve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValveError {
    /// A valve parameter violates its constraint.
    ///
    /// Both effective flow areas must be strictly positive.
    #[error("invalid parameter `{name}`: {source}")]
    InvalidParameter {
        name: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The head-difference signal contains no samples.
    #[error("invalid parameter `head`: signal must contain at least one sample")]
    EmptyHead,
}
