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

use pressure::prelude::*;

/// Rounds the value to the number of decimal places.
fn round(p: Pressure, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (p.value() * scale).round() / scale
}

#[test]
fn convert_to_atmosphere() {
    let atm = Pressure::psi(14.7).convert_to(PressureUnit::Atmosphere);
    assert_eq!(round(atm, 0), 1.0);

    let atm = Pressure::pa(14.7).convert_to(PressureUnit::Atmosphere);
    assert_eq!(*atm.value(), 0.0001450777058891977);

    let atm = Pressure::in_h2o(1234.0).convert_to(PressureUnit::Atmosphere);
    assert_eq!(round(atm, 2), 3.03);

    let atm = Pressure::atm(1.0);
    let converted = atm.convert_to(PressureUnit::Atmosphere);
    assert_eq!(converted, atm);
    assert_eq!(converted.to_string(), "1.0 atm");
}

#[test]
fn convert_to_psi() {
    let psi = Pressure::atm(35.12).convert_to(PressureUnit::Psi);
    assert_eq!(round(psi, 0), 516.0);

    let psi = Pressure::pa(444503.0).convert_to(PressureUnit::Psi);
    assert_eq!(round(psi, 0), 64.0);

    let psi = Pressure::in_h2o(10.35).convert_to(PressureUnit::Psi);
    assert_eq!(round(psi, 2), 0.37);

    let gauge = Pressure::from(1.0);
    let psi = gauge.convert_to(PressureUnit::Psi);
    assert_eq!(psi, gauge);
    assert_eq!(psi.to_string(), "1.0 psi");
}

#[test]
fn convert_to_pascals() {
    let pa = Pressure::atm(300.0).convert_to(PressureUnit::Pascals);
    assert_eq!(round(pa, 0), 30397503.0);

    let pa = Pressure::psi(314.7).convert_to(PressureUnit::Pascals);
    assert_eq!(round(pa, 0), 2169780.0);

    // two hops through atm drift from the exact 1103962 Pa
    let pa = Pressure::in_h2o(4432.0).convert_to(PressureUnit::Pascals);
    assert_eq!(round(pa, 0), 1103964.0);

    let one = Pressure::pa(1.0);
    let pa = one.convert_to(PressureUnit::Pascals);
    assert_eq!(pa, one);
    assert_eq!(pa.to_string(), "1.0 Pa");
}

#[test]
fn convert_to_inches_water_column() {
    let in_h2o = Pressure::atm(10.0).convert_to(PressureUnit::InchesWaterColumn);
    assert_eq!(round(in_h2o, 0), 4068.0);

    let in_h2o = Pressure::pa(444.0).convert_to(PressureUnit::InchesWaterColumn);
    assert_eq!(round(in_h2o, 2), 1.78);

    let in_h2o = Pressure::pa(2345.0).convert_to(PressureUnit::InchesWaterColumn);
    assert_eq!(round(in_h2o, 2), 9.41);

    let one = Pressure::in_h2o(1.0);
    let in_h2o = one.convert_to(PressureUnit::InchesWaterColumn);
    assert_eq!(in_h2o, one);
    assert_eq!(in_h2o.to_string(), "1.0 inH2O");
}

#[test]
fn convert_to_torr() {
    let torr = Pressure::atm(34.555).convert_to(PressureUnit::Torr);
    assert_eq!(round(torr, 0), 26262.0);

    let torr = Pressure::from(312.34).convert_to(PressureUnit::Torr);
    assert_eq!(round(torr, 0), 16153.0);

    let one = Pressure::torr(1.0);
    let torr = one.convert_to(PressureUnit::Torr);
    assert_eq!(torr, one);
    assert_eq!(torr.to_string(), "1.0 Torr");
}

#[test]
fn convert_to_bar() {
    let bar = Pressure::atm(876.0).convert_to(PressureUnit::Bar);
    assert_eq!(round(bar, 0), 888.0);

    let bar = Pressure::from(32.0).convert_to(PressureUnit::Bar);
    assert_eq!(round(bar, 2), 2.21);

    let one = Pressure::bar(1.0);
    let bar = one.convert_to(PressureUnit::Bar);
    assert_eq!(bar, one);
    assert_eq!(bar.to_string(), "1.0 bar");
}

#[test]
fn round_trip_psi_through_atmosphere() {
    let psi = Pressure::psi(14.7)
        .convert_to(PressureUnit::Atmosphere)
        .convert_to(PressureUnit::Psi);
    assert!((psi.value() - 14.7).abs() < 1e-12);
}

#[test]
fn same_magnitude_in_other_unit_is_not_equal() {
    let atm = Pressure::atm(1.0);
    assert_ne!(atm, Pressure::psi(1.0));
    assert_ne!(atm, atm.convert_to(PressureUnit::Psi));
}

#[test]
fn pressure_for_altitude() {
    let altitude = Length::ft(1000.0);

    let psi = Pressure::for_altitude(altitude, PressureUnit::Psi);
    let psi_ft = Pressure::for_altitude_ft(1000.0, PressureUnit::default());
    assert_eq!(round(psi, 2), 14.15);
    assert_eq!(round(psi_ft, 2), 14.15);

    let pa = Pressure::for_altitude(altitude, PressureUnit::Pascals);
    let pa_ft = Pressure::for_altitude_ft(1000.0, PressureUnit::Pascals);
    assert_eq!((pa.value() / 1000.0).round(), 98.0);
    assert_eq!((pa_ft.value() / 1000.0).round(), 98.0);

    let sea_level = Pressure::for_altitude_ft(0.0, PressureUnit::default());
    assert_eq!(round(sea_level, 1), 14.7);
}

#[test]
fn pressure_for_altitude_beyond_range() {
    let altitude = Length::m(45_000.0);

    assert!(Pressure::for_altitude(altitude, PressureUnit::Psi)
        .value()
        .is_nan());
    assert_eq!(
        Pressure::try_for_altitude(altitude, PressureUnit::Psi),
        Err(Error::AltitudeOutOfRange { meters: 45_000.0 })
    );
}
