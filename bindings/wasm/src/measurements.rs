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

use pressure::prelude::*;
use wasm_bindgen::prelude::*;

/// Parses the unit from its symbol or defaults to psi.
fn unit_or_default(unit: Option<String>) -> Result<PressureUnit, JsError> {
    match unit {
        Some(symbol) => Ok(symbol.parse::<PressureUnit>()?),
        None => Ok(PressureUnit::default()),
    }
}

#[wasm_bindgen(js_name = Pressure)]
pub struct JsPressure {
    inner: Pressure,
}

#[wasm_bindgen(js_class = Pressure)]
impl JsPressure {
    #[wasm_bindgen(constructor)]
    pub fn new(value: f64, unit: Option<String>) -> Result<Self, JsError> {
        Ok(Self {
            inner: Pressure::new(value, unit_or_default(unit)?),
        })
    }

    #[wasm_bindgen(js_name = forAltitude)]
    pub fn for_altitude(feet: f64, unit: Option<String>) -> Result<Self, JsError> {
        Ok(Self {
            inner: Pressure::for_altitude_ft(feet, unit_or_default(unit)?),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn value(&self) -> f64 {
        *self.inner.value()
    }

    #[wasm_bindgen(getter)]
    pub fn unit(&self) -> String {
        self.inner.unit().symbol().to_string()
    }

    #[wasm_bindgen(js_name = convertTo)]
    pub fn convert_to(&self, unit: String) -> Result<Self, JsError> {
        Ok(Self {
            inner: self.inner.convert_to(unit.parse::<PressureUnit>()?),
        })
    }

    pub fn equals(&self, other: &JsPressure) -> bool {
        self.inner == other.inner
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }

    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner)?)
    }
}

impl From<JsPressure> for Pressure {
    fn from(value: JsPressure) -> Self {
        value.inner
    }
}

impl From<Pressure> for JsPressure {
    fn from(value: Pressure) -> Self {
        Self { inner: value }
    }
}
