use eframe::egui::{self, Color32};
use egui_plot::{AxisHints, HPlacement, Legend, Line, Plot, PlotPoints};
use tesla_spectrum::Analysis;
use tracing::debug;

use crate::{DualAxis, ShowConfig, log_tick_label, log_x_points};

/// Plot-ready traces of a valve response [`Analysis`].
///
/// Construct with [`ResponsePlot::new`], then call [`show`](Self::show) to
/// open a blocking window with the time and frequency panels side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsePlot {
    head: Vec<[f64; 2]>,
    flow: Vec<[f64; 2]>,
    flow_axis: DualAxis,
    gain: Vec<[f64; 2]>,
}

impl ResponsePlot {
    /// Prepares the traces of an analysis for plotting.
    ///
    /// Flow is mapped onto the head axis, and the gain keeps only the
    /// positive frequencies of the one-sided spectrum.
    #[must_use]
    pub fn new(analysis: &Analysis) -> Self {
        let time = analysis.head().time();
        let head = analysis.head().values();
        let flow = analysis.flow().values();

        let flow_axis = DualAxis::fit(head.iter().copied(), flow.iter().copied());

        let transfer = analysis.transfer();
        let (frequencies, _) = transfer.one_sided();
        let gain = log_x_points(frequencies.iter().copied(), transfer.gain_db());

        Self {
            head: time.iter().zip(head).map(|(&t, &h)| [t, h]).collect(),
            flow: time
                .iter()
                .zip(flow)
                .map(|(&t, &q)| [t, flow_axis.to_primary(q)])
                .collect(),
            flow_axis,
            gain,
        }
    }

    /// Returns the `[time, head]` points.
    #[must_use]
    pub fn head(&self) -> &[[f64; 2]] {
        &self.head
    }

    /// Returns the `[time, flow]` points in flow units.
    #[must_use]
    pub fn flow(&self) -> Vec<[f64; 2]> {
        self.flow
            .iter()
            .map(|&[t, y]| [t, self.flow_axis.to_secondary(y)])
            .collect()
    }

    /// Returns the `[log₁₀(frequency), gain in dB]` points.
    #[must_use]
    pub fn gain(&self) -> &[[f64; 2]] {
        &self.gain
    }

    /// Opens a blocking egui window displaying both panels.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        debug!(
            head_points = self.head.len(),
            gain_points = self.gain.len(),
            "opening response plot"
        );
        let title = config.window_title().to_owned();

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(ResponseApp { plot: self, config }))),
        )
    }
}

/// The egui [`eframe::App`] that renders a [`ResponsePlot`].
struct ResponseApp {
    plot: ResponsePlot,
    config: ShowConfig,
}

impl ResponseApp {
    fn time_panel(&self, ui: &mut egui::Ui) {
        let flow_axis = self.plot.flow_axis;
        let axes = vec![
            AxisHints::new_y().label(self.config.height_label()),
            AxisHints::new_y()
                .label(self.config.flow_label())
                .placement(HPlacement::Right)
                .formatter(move |mark, _range| format!("{:.1}", flow_axis.to_secondary(mark.value))),
        ];

        let mut plot = Plot::new("valve_time")
            .x_axis_label("time (s)")
            .custom_y_axes(axes);
        if self.config.has_legend() {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(self.plot.head.clone()))
                    .name("input signal")
                    .color(Color32::BLUE),
            );
            plot_ui.line(
                Line::new(PlotPoints::from(self.plot.flow.clone()))
                    .name("flow")
                    .color(Color32::RED),
            );
        });
    }

    fn frequency_panel(&self, ui: &mut egui::Ui) {
        let axes = vec![
            AxisHints::new_x()
                .label("frequency (Hz)")
                .formatter(|mark, _range| log_tick_label(mark.value)),
        ];

        let mut plot = Plot::new("valve_gain")
            .y_axis_label("gain (dB)")
            .custom_x_axes(axes);
        if self.config.has_legend() {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(self.plot.gain.clone()))
                    .name("transfer function")
                    .color(Color32::BLACK),
            );
        });
    }
}

impl eframe::App for ResponseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                self.time_panel(&mut columns[0]);
                self.frequency_panel(&mut columns[1]);
            });
        });
    }
}
