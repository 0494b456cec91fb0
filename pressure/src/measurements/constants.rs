// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Joe Pearson
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

pub const FEET_IN_METER: f64 = 0.3048;

// Factors to express a pressure in atmospheres.
pub const PSI_IN_ATMOSPHERE: f64 = 0.068045957064302;
pub const PASCAL_IN_ATMOSPHERE: f64 = 9.8692316931427e-6;
pub const INCH_OF_WATER_IN_ATMOSPHERE: f64 = 0.00245832;
pub const BAR_IN_ATMOSPHERE: f64 = 0.98692316931427;
pub const TORR_IN_ATMOSPHERE: f64 = 0.0013157893594089;
