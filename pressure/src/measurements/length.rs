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

/// Length unit with _m_ as pivot.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum LengthUnit {
    Feet,
    Meters,
}

impl UnitOfMeasure<f64> for LengthUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Length
    }

    fn pivot() -> Self {
        Self::Meters
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Feet => "ft",
            Self::Meters => "m",
        }
    }

    fn from_pivot(value: f64, to: &Self) -> f64 {
        match to {
            Self::Meters => value,
            Self::Feet => value / constants::FEET_IN_METER,
        }
    }

    fn to_pivot(&self, value: &f64) -> f64 {
        match self {
            Self::Meters => *value,
            Self::Feet => value * constants::FEET_IN_METER,
        }
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ft" => Ok(Self::Feet),
            "m" => Ok(Self::Meters),
            _ => {
                debug!("unknown length unit {s:?}");
                Err(Error::UnknownUnit(s.to_string()))
            }
        }
    }
}

/// A length, e.g. an altitude above mean sea level.
///
/// Used as input to [`Pressure::for_altitude`].
///
/// [`Pressure::for_altitude`]: crate::measurements::Pressure::for_altitude
pub type Length = Measurement<f64, LengthUnit>;

impl Length {
    /// Creates a length in feet.
    pub const fn ft(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Feet,
        }
    }

    /// Creates a length in meters.
    pub const fn m(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Meters,
        }
    }
}
