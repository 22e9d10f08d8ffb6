/// An affine map between a primary axis and an overlaid secondary axis.
///
/// The secondary values' finite range is stretched onto the primary values'
/// finite range, so both traces fill the same plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualAxis {
    primary_min: f64,
    secondary_min: f64,
    scale: f64,
}

impl DualAxis {
    /// Fits the map from the data of each axis.
    ///
    /// Non-finite values are ignored. If either range is empty or has zero
    /// span, the secondary axis is only shifted, not scaled.
    pub fn fit<P, S>(primary: P, secondary: S) -> Self
    where
        P: IntoIterator<Item = f64>,
        S: IntoIterator<Item = f64>,
    {
        let (primary_min, primary_max) = finite_range(primary).unwrap_or((0.0, 1.0));
        let (secondary_min, secondary_max) = finite_range(secondary).unwrap_or((0.0, 1.0));

        let primary_span = primary_max - primary_min;
        let secondary_span = secondary_max - secondary_min;
        let scale = if primary_span > 0.0 && secondary_span > 0.0 {
            primary_span / secondary_span
        } else {
            1.0
        };

        Self {
            primary_min,
            secondary_min,
            scale,
        }
    }

    /// Maps a secondary-axis value to plot coordinates.
    #[must_use]
    pub fn to_primary(&self, secondary: f64) -> f64 {
        self.primary_min + (secondary - self.secondary_min) * self.scale
    }

    /// Maps a plot coordinate back to the secondary-axis value it represents.
    #[must_use]
    pub fn to_secondary(&self, primary: f64) -> f64 {
        self.secondary_min + (primary - self.primary_min) / self.scale
    }
}

fn finite_range<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Pairs frequencies with values as `[log₁₀(f), y]` points.
///
/// Points with a non-positive frequency (including the zero-frequency bin) or
/// a non-finite value cannot be drawn on a log axis and are skipped.
pub fn log_x_points<F, Y>(frequencies: F, values: Y) -> Vec<[f64; 2]>
where
    F: IntoIterator<Item = f64>,
    Y: IntoIterator<Item = f64>,
{
    frequencies
        .into_iter()
        .zip(values)
        .filter(|(f, y)| *f > 0.0 && f.is_finite() && y.is_finite())
        .map(|(f, y)| [f.log10(), y])
        .collect()
}

/// Formats a tick on a log₁₀ axis as the value it represents.
#[must_use]
pub fn log_tick_label(exponent: f64) -> String {
    let value = 10_f64.powf(exponent);
    if value >= 10.0 {
        format!("{value:.0}")
    } else if value >= 1.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn secondary_range_maps_onto_primary_range() {
        let axis = DualAxis::fit([-1.0, 0.5, 1.0], [-10.0, 5.0, 20.0]);

        assert_relative_eq!(axis.to_primary(-10.0), -1.0);
        assert_relative_eq!(axis.to_primary(20.0), 1.0);
        assert_relative_eq!(axis.to_primary(5.0), 0.0);
    }

    #[test]
    fn mapping_round_trips() {
        let axis = DualAxis::fit([0.0, 2.0], [-9.7, 17.7]);

        for value in [-9.7, -3.0, 0.0, 8.8, 17.7] {
            assert_relative_eq!(axis.to_secondary(axis.to_primary(value)), value, epsilon = 1e-12);
        }
    }

    #[test]
    fn degenerate_ranges_only_shift() {
        let axis = DualAxis::fit([1.0, 3.0], [5.0, 5.0]);
        assert_relative_eq!(axis.to_primary(5.0), 1.0);
        assert_relative_eq!(axis.to_primary(6.0), 2.0);

        let axis = DualAxis::fit(Vec::new(), [f64::NAN]);
        assert_relative_eq!(axis.to_primary(0.0), 0.0);
    }

    #[test]
    fn non_finite_values_are_ignored_when_fitting() {
        let axis = DualAxis::fit([0.0, 1.0, f64::INFINITY], [0.0, f64::NAN, 4.0]);
        assert_relative_eq!(axis.to_primary(4.0), 1.0);
    }

    #[test]
    fn log_points_skip_zero_frequency_and_non_finite_gain() {
        let points = log_x_points(
            [0.0, 1.0, 10.0, 100.0, -1.0],
            [3.0, -20.0, f64::NAN, 6.0, 1.0],
        );

        assert_eq!(points, vec![[0.0, -20.0], [2.0, 6.0]]);
    }

    #[test]
    fn log_ticks_show_represented_value() {
        assert_eq!(log_tick_label(0.0), "1.0");
        assert_eq!(log_tick_label(2.0), "100");
        assert_eq!(log_tick_label(-1.0), "0.10");
    }
}
