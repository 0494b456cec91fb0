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

use std::error;
use std::fmt;

#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// The text is not a measurement of the form `"<value> <symbol>"`.
    UnexpectedString,
    /// The symbol doesn't name a known unit.
    UnknownUnit(String),
    /// The altitude is beyond the domain of the barometric formula.
    AltitudeOutOfRange { meters: f64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedString => {
                write!(f, "measurement should be a value followed by a unit symbol")
            }
            Self::UnknownUnit(symbol) => write!(f, "unknown unit \"{symbol}\""),
            Self::AltitudeOutOfRange { meters } => {
                write!(
                    f,
                    "altitude of {meters} m is beyond the range of the barometric formula"
                )
            }
        }
    }
}

impl error::Error for Error {}
