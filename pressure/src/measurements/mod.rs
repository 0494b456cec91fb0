// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

//! Physical measurements tagged with their unit.
//!
//! A [`Measurement`] pairs a value with a unit that implements
//! [`UnitOfMeasure`]. Every unit of a quantity knows how to express a value in
//! the quantity's pivot unit and back, so converting between any two units
//! takes at most two steps.

use std::fmt;
use std::str::FromStr;

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

mod constants;
mod length;
mod pressure;

pub use length::{Length, LengthUnit};
pub use pressure::{Pressure, PressureUnit};

/// The physical quantity measured by a unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum PhysicalQuantity {
    Length,
    Pressure,
}

/// A closed set of units measuring one [`PhysicalQuantity`].
///
/// Conversions are routed through the [pivot] unit: a value is first
/// expressed in the pivot unit and then in the target unit.
///
/// [pivot]: UnitOfMeasure::pivot
pub trait UnitOfMeasure<T>: Copy + PartialEq {
    /// The quantity measured by this unit.
    fn quantity() -> PhysicalQuantity;

    /// The unit all conversions are routed through.
    fn pivot() -> Self;

    /// The symbol used when displaying a measurement.
    fn symbol(&self) -> &'static str;

    /// Expresses a `value` given in the pivot unit in the unit `to`.
    fn from_pivot(value: T, to: &Self) -> T;

    /// Expresses a `value` given in this unit in the pivot unit.
    fn to_pivot(&self, value: &T) -> T;
}

/// A value with its unit of measure.
///
/// Measurements are immutable. A conversion returns a new measurement and
/// leaves the original untouched. Two measurements are equal only if value
/// and unit are equal, thus `1 atm` and `101325 Pa` are not.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement<T, U> {
    pub(crate) value: T,
    pub(crate) unit: U,
}

impl<T, U> Measurement<T, U> {
    /// Creates a measurement of `value` in `unit`.
    pub const fn new(value: T, unit: U) -> Self {
        Self { value, unit }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn unit(&self) -> &U {
        &self.unit
    }
}

impl<T, U> Measurement<T, U>
where
    T: Copy,
    U: UnitOfMeasure<T>,
{
    /// Returns the value expressed in the pivot unit.
    pub fn to_pivot(&self) -> T {
        self.unit.to_pivot(&self.value)
    }

    /// Converts the measurement into the `unit`.
    ///
    /// Converting into the measurement's own unit returns an identical
    /// measurement.
    pub fn convert_to(&self, unit: U) -> Self {
        if unit == self.unit {
            return *self;
        }

        Self {
            value: U::from_pivot(self.to_pivot(), &unit),
            unit,
        }
    }
}

impl<T, U> fmt::Display for Measurement<T, U>
where
    T: fmt::Display + fmt::Debug,
    U: UnitOfMeasure<T>,
{
    /// Formats the value followed by the unit's symbol, e.g. `1.0 atm`.
    ///
    /// Without a precision the value is printed in its shortest form that
    /// still reads back to the same value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.unit.symbol();

        if let Some(precision) = f.precision() {
            write!(f, "{:.precision$} {symbol}", self.value)
        } else {
            write!(f, "{:?} {symbol}", self.value)
        }
    }
}

impl<T, U> FromStr for Measurement<T, U>
where
    T: FromStr,
    U: UnitOfMeasure<T> + FromStr<Err = Error>,
{
    type Err = Error;

    /// Parses a measurement from its displayed form, e.g. `14.7 psi`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, symbol) = s.trim().rsplit_once(' ').ok_or_else(|| {
            debug!("missing unit symbol in measurement {s:?}");
            Error::UnexpectedString
        })?;

        let value = value.trim_end().parse::<T>().map_err(|_| {
            debug!("invalid value in measurement {s:?}");
            Error::UnexpectedString
        })?;

        Ok(Self {
            value,
            unit: symbol.parse()?,
        })
    }
}
