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

//! Pressure measurements.
//!
//! This crate provides a [`Pressure`] value in one of six units (psi,
//! atmosphere, pascals, inches of water column, bar and torr) and converts it
//! between them. All conversions pivot through atmosphere. Additionally, the
//! atmospheric pressure at an altitude can be estimated with the barometric
//! formula.
//!
//! # Examples
//!
//! ```
//! use pressure::prelude::*;
//!
//! # fn main() -> Result<(), pressure::Error> {
//! // convert a tire pressure to bar
//! let tire: Pressure = "32.0 psi".parse()?;
//! let bar = tire.convert_to(PressureUnit::Bar);
//! println!("{bar:.2}"); // => "2.21 bar"
//!
//! // pressure at the top of Mount Everest
//! let summit = Pressure::try_for_altitude(Length::m(8849.0), PressureUnit::Pascals)?;
//! assert!(*summit.value() < 35_000.0);
//! #     Ok(())
//! # }
//! ```
//!
//! [`Pressure`]: crate::measurements::Pressure

mod altitude;
mod error;

pub mod measurements;

pub use error::Error;

pub mod prelude {
    pub use crate::error::Error;
    pub use crate::measurements::{
        Length, LengthUnit, Measurement, PhysicalQuantity, Pressure, PressureUnit, UnitOfMeasure,
    };
}
