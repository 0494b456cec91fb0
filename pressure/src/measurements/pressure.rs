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

use std::str::FromStr;

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{constants, Measurement, PhysicalQuantity, UnitOfMeasure};
use crate::error::Error;

/// Pressure unit with _atm_ as pivot.
///
/// Each unit has a fixed factor which expresses one of it in atmospheres.
/// Converting between two units other than atmosphere multiplies and divides
/// by a factor, so the result carries two rounding steps.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum PressureUnit {
    /// Pound-force per square inch.
    #[default]
    Psi,
    Atmosphere,
    Pascals,
    InchesWaterColumn,
    Bar,
    Torr,
}

impl PressureUnit {
    /// Returns the factor to express a value of this unit in atmospheres.
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Psi => constants::PSI_IN_ATMOSPHERE,
            Self::Atmosphere => 1.0,
            Self::Pascals => constants::PASCAL_IN_ATMOSPHERE,
            Self::InchesWaterColumn => constants::INCH_OF_WATER_IN_ATMOSPHERE,
            Self::Bar => constants::BAR_IN_ATMOSPHERE,
            Self::Torr => constants::TORR_IN_ATMOSPHERE,
        }
    }
}

impl UnitOfMeasure<f64> for PressureUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Pressure
    }

    fn pivot() -> Self {
        Self::Atmosphere
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Psi => "psi",
            Self::Atmosphere => "atm",
            Self::Pascals => "Pa",
            Self::InchesWaterColumn => "inH2O",
            Self::Bar => "bar",
            Self::Torr => "Torr",
        }
    }

    fn from_pivot(value: f64, to: &Self) -> f64 {
        match to {
            Self::Atmosphere => value,
            _ => value / to.factor(),
        }
    }

    fn to_pivot(&self, value: &f64) -> f64 {
        match self {
            Self::Atmosphere => *value,
            _ => value * self.factor(),
        }
    }
}

impl FromStr for PressureUnit {
    type Err = Error;

    /// Parses the unit from its symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "psi" => Ok(Self::Psi),
            "atm" => Ok(Self::Atmosphere),
            "Pa" => Ok(Self::Pascals),
            "inH2O" => Ok(Self::InchesWaterColumn),
            "bar" => Ok(Self::Bar),
            "Torr" => Ok(Self::Torr),
            _ => {
                debug!("unknown pressure unit {s:?}");
                Err(Error::UnknownUnit(s.to_string()))
            }
        }
    }
}

/// A pressure measurement.
///
/// # Examples
///
/// ```
/// use pressure::prelude::*;
///
/// let p = Pressure::psi(14.7).convert_to(PressureUnit::Atmosphere);
/// assert_eq!(p.value().round(), 1.0);
/// assert_eq!(Pressure::atm(1.0).to_string(), "1.0 atm");
/// ```
pub type Pressure = Measurement<f64, PressureUnit>;

impl Pressure {
    /// Standard atmosphere at mean sea level.
    pub const STD: Self = Self::atm(1.0);

    /// Creates a pressure in psi.
    pub const fn psi(value: f64) -> Self {
        Self {
            value,
            unit: PressureUnit::Psi,
        }
    }

    /// Creates a pressure in atmospheres.
    pub const fn atm(value: f64) -> Self {
        Self {
            value,
            unit: PressureUnit::Atmosphere,
        }
    }

    /// Creates a pressure in pascals.
    pub const fn pa(value: f64) -> Self {
        Self {
            value,
            unit: PressureUnit::Pascals,
        }
    }

    /// Creates a pressure in inches of water column.
    pub const fn in_h2o(value: f64) -> Self {
        Self {
            value,
            unit: PressureUnit::InchesWaterColumn,
        }
    }

    /// Creates a pressure in bar.
    pub const fn bar(value: f64) -> Self {
        Self {
            value,
            unit: PressureUnit::Bar,
        }
    }

    /// Creates a pressure in torr.
    pub const fn torr(value: f64) -> Self {
        Self {
            value,
            unit: PressureUnit::Torr,
        }
    }
}

/// A raw value is a pressure in psi.
impl From<f64> for Pressure {
    fn from(value: f64) -> Self {
        Self::new(value, PressureUnit::default())
    }
}
