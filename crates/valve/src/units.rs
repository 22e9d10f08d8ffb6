use uom::si::{
    acceleration::{centimeter_per_second_squared, meter_per_second_squared},
    area::{square_centimeter, square_meter},
    f64::{Acceleration, Area, VolumeRate},
    volume_rate::{cubic_centimeter_per_second, cubic_meter_per_second},
};

/// Gravitational acceleration used by the flow rule, in m/s².
pub const GRAVITY: f64 = 9.81;

/// The length unit that heads and areas are expressed in.
///
/// Selecting centimeters scales the gravitational constant to 981 cm/s², so
/// heads in cm and areas in cm² produce flow in cm³/s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    #[default]
    Centimeter,
    Meter,
}

impl LengthUnit {
    /// Returns the gravitational acceleration in this unit per second squared.
    #[must_use]
    pub fn gravity(self) -> f64 {
        let g = Acceleration::new::<meter_per_second_squared>(GRAVITY);
        match self {
            Self::Centimeter => g.get::<centimeter_per_second_squared>(),
            Self::Meter => g.get::<meter_per_second_squared>(),
        }
    }

    /// Interprets a raw value as an area in this unit squared.
    #[must_use]
    pub fn area(self, value: f64) -> Area {
        match self {
            Self::Centimeter => Area::new::<square_centimeter>(value),
            Self::Meter => Area::new::<square_meter>(value),
        }
    }

    /// Returns a volume rate as a raw value in this unit cubed per second.
    #[must_use]
    pub fn volume_rate_value(self, rate: VolumeRate) -> f64 {
        match self {
            Self::Centimeter => rate.get::<cubic_centimeter_per_second>(),
            Self::Meter => rate.get::<cubic_meter_per_second>(),
        }
    }

    /// Abbreviated length symbol, used for axis labels.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Centimeter => "cm",
            Self::Meter => "m",
        }
    }
}
