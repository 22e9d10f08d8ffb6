//! Drives the reference Tesla valve with a 1 Hz head oscillation and shows
//! its time and frequency response.
//!
//! Run with `RUST_LOG=debug` to see each analysis step.

use tesla_plot::{ResponsePlot, ShowConfig};
use tesla_spectrum::{SineConfig, analyze};
use tesla_valve::{TeslaValve, ValveParams};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let valve = TeslaValve::new(ValveParams::default());
    let config = SineConfig::default();

    let analysis = analyze(&valve, &config)?;
    info!(
        diodicity = valve.diodicity(),
        net_flow = analysis.flow().mean(),
        gain_db = analysis.transfer().gain_at(config.frequency()),
        "valve response computed"
    );

    let show = ShowConfig::new()
        .title("Tesla valve response")
        .legend()
        .length_unit(valve.params().unit().symbol());
    ResponsePlot::new(&analysis).show(show)?;

    Ok(())
}
