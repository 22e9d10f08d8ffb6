/// Errors that can occur while building signals or estimating spectra.
#[derive(Debug, thiserror::Error)]
pub enum SpectrumError {
    /// An input array or scalar is outside its valid domain.
    ///
    /// For example, an empty signal, time and value arrays of different
    /// lengths, or a non-positive sample spacing.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The FFT backend rejected the transform.
    #[error("fft failed: {0}")]
    Fft(String),

    /// The flow model failed while evaluating the head signal.
    #[error("model error: {0}")]
    Model(Box<dyn std::error::Error + Send + Sync>),
}
