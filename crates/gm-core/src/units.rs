// gm-core/src/units.rs

use uom::si::f64::{Frequency as UomFrequency, Time as UomTime};

// Public canonical unit types (SI, f64)
pub type Frequency = UomFrequency;
pub type Time = UomTime;

#[inline]
pub fn hz(v: f64) -> Frequency {
    use uom::si::frequency::hertz;
    Frequency::new::<hertz>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn as_hz(f: Frequency) -> f64 {
    use uom::si::frequency::hertz;
    f.get::<hertz>()
}

/// Frequency of an oscillator with the given natural period.
#[inline]
pub fn frequency_of_period(period: Time) -> Frequency {
    use uom::si::time::second;
    hz(1.0 / period.get::<second>())
}

pub mod constants {
    /// Gravitational acceleration used by the Arias Intensity definition.
    pub const G_MPS2: f64 = 9.81;

    /// Archive convention for converting stored cm/s² to g.
    pub const CMPS2_PER_G: f64 = 981.0;
}
