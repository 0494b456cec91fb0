// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Atmospheric pressure at altitude.

use log::{trace, warn};

use crate::error::Error;
use crate::measurements::{Length, LengthUnit, Pressure, PressureUnit};

mod constants {
    /// Pressure at mean sea level in Pa.
    pub const SEA_LEVEL_PA: f64 = 101325.0;
    /// Temperature lapse rate divided by the sea level temperature in 1/m.
    pub const LAPSE_RATIO: f64 = 2.25577e-5;
    /// Exponent of the barometric formula, g·M/(R·L).
    pub const EXPONENT: f64 = 5.525588;
    /// Altitude in m at which the formula's base reaches zero.
    pub const MAX_ALTITUDE_M: f64 = 1.0 / LAPSE_RATIO;
}

/// Returns `false` above the formula's range and for NaN.
fn in_range(meters: f64) -> bool {
    meters <= constants::MAX_ALTITUDE_M
}

fn barometric_pa(meters: f64) -> f64 {
    constants::SEA_LEVEL_PA * (1.0 - constants::LAPSE_RATIO * meters).powf(constants::EXPONENT)
}

impl Pressure {
    /// Returns the atmospheric pressure at the `altitude` in the `unit`.
    ///
    /// The pressure is estimated with the barometric formula
    ///
    /// ```text
    /// p = 101325 Pa · (1 - 2.25577e-5 · h)^5.525588
    /// ```
    ///
    /// with `h` as altitude in meters. The formula is defined up to about
    /// 44 330 m (145 442 ft). Above, the returned pressure's value is NaN.
    /// Use [`try_for_altitude`] to get an error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use pressure::prelude::*;
    ///
    /// let p = Pressure::for_altitude(Length::ft(1000.0), PressureUnit::Psi);
    /// assert_eq!((p.value() * 100.0).round() / 100.0, 14.15);
    /// ```
    ///
    /// [`try_for_altitude`]: Pressure::try_for_altitude
    pub fn for_altitude(altitude: Length, unit: PressureUnit) -> Self {
        let meters = *altitude.convert_to(LengthUnit::Meters).value();

        if !in_range(meters) {
            warn!("altitude of {meters} m is beyond the range of the barometric formula");
        }

        let pa = barometric_pa(meters);
        trace!("pressure at {meters} m is {pa} Pa");

        Self::pa(pa).convert_to(unit)
    }

    /// Returns the atmospheric pressure at an altitude of `feet` in the
    /// `unit`.
    ///
    /// Pass [`PressureUnit::default()`] to get the pressure in psi:
    ///
    /// ```
    /// use pressure::prelude::*;
    ///
    /// let sea_level = Pressure::for_altitude_ft(0.0, PressureUnit::default());
    /// assert_eq!((sea_level.value() * 10.0).round() / 10.0, 14.7);
    /// ```
    pub fn for_altitude_ft(feet: f64, unit: PressureUnit) -> Self {
        Self::for_altitude(Length::ft(feet), unit)
    }

    /// Returns the atmospheric pressure at the `altitude` in the `unit`.
    ///
    /// # Errors
    ///
    /// Will return [`AltitudeOutOfRange`] if the altitude is above the range
    /// of the barometric formula or NaN.
    ///
    /// [`AltitudeOutOfRange`]: Error::AltitudeOutOfRange
    pub fn try_for_altitude(altitude: Length, unit: PressureUnit) -> Result<Self, Error> {
        let meters = *altitude.convert_to(LengthUnit::Meters).value();

        if in_range(meters) {
            Ok(Self::pa(barometric_pa(meters)).convert_to(unit))
        } else {
            Err(Error::AltitudeOutOfRange { meters })
        }
    }
}
