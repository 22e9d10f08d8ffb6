/// Configuration for rendering a [`ResponsePlot`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// plot.show(ShowConfig::new().title("Tesla valve").legend().length_unit("m"))?;
/// ```
///
/// [`ResponsePlot`]: crate::ResponsePlot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    length_unit: String,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, centimeters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            length_unit: "cm".to_string(),
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Sets the length unit symbol used in the height and flow axis labels.
    #[must_use]
    pub fn length_unit(mut self, symbol: impl Into<String>) -> Self {
        self.length_unit = symbol.into();
        self
    }

    /// Returns the window title, empty if none was set.
    #[must_use]
    pub fn window_title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Returns whether a legend is shown.
    #[must_use]
    pub fn has_legend(&self) -> bool {
        self.legend
    }

    /// Label for the head-difference axis.
    #[must_use]
    pub fn height_label(&self) -> String {
        format!("height ({})", self.length_unit)
    }

    /// Label for the flow axis.
    #[must_use]
    pub fn flow_label(&self) -> String {
        format!("flow ({}^3/s)", self.length_unit)
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_centimeter_labels() {
        let config = ShowConfig::default();

        assert_eq!(config.window_title(), "");
        assert!(!config.has_legend());
        assert_eq!(config.height_label(), "height (cm)");
        assert_eq!(config.flow_label(), "flow (cm^3/s)");
    }

    #[test]
    fn builder_methods_chain() {
        let config = ShowConfig::new()
            .title("Tesla valve")
            .legend()
            .length_unit("m");

        assert_eq!(config.window_title(), "Tesla valve");
        assert!(config.has_legend());
        assert_eq!(config.height_label(), "height (m)");
        assert_eq!(config.flow_label(), "flow (m^3/s)");
    }
}
