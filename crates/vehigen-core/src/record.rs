use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use schemars::JsonSchema;
use schemars::r#gen::SchemaGenerator;
use schemars::schema::{InstanceType, Schema, SchemaObject, StringValidation};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::tables::{
    HORSE_POWER_MAX, HORSE_POWER_MIN, PLATE_DIGITS_MAX, PLATE_DIGITS_MIN, RTO_MAX, RTO_MIN,
    TANK_CAPACITY_MAX, TANK_CAPACITY_MIN,
};
use crate::types::{EmissionStandard, EngineStrokes, PowerSource, StateCode, VehicleType};

/// One synthesized vehicle registration entry.
///
/// Field order is the serialization order of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct VehicleRecord {
    pub vehicle_number: VehicleNumber,
    pub vehicle_type: VehicleType,
    pub company: String,
    pub model: String,
    pub engine_type: PowerSource,
    pub engine_horse_power: HorsePower,
    pub engine_strokes: EngineStrokes,
    pub date_of_manufacturing: NaiveDate,
    pub registration_date: NaiveDate,
    pub insurance_expiry: NaiveDate,
    pub fuel_tank_capacity: TankCapacity,
    pub owner_name: String,
    pub registration_state: StateCode,
    pub fuel_type: PowerSource,
    pub emission_standard: EmissionStandard,
}

/// Registration plate in the `SS RR LL NNNN` layout, e.g. `MH 04 KX 5521`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VehicleNumber {
    state: StateCode,
    rto: u8,
    series: String,
    digits: u16,
}

impl VehicleNumber {
    pub fn new(state: StateCode, rto: u8, series: &str, digits: u16) -> Result<Self, Error> {
        let valid_series = series.len() == 2 && series.bytes().all(|b| b.is_ascii_uppercase());
        if !(RTO_MIN..=RTO_MAX).contains(&rto)
            || !valid_series
            || !(PLATE_DIGITS_MIN..=PLATE_DIGITS_MAX).contains(&digits)
        {
            return Err(Error::invalid(
                "vehicle number",
                format!("{state} {rto:02} {series} {digits}"),
            ));
        }
        Ok(Self {
            state,
            rto,
            series: series.to_string(),
            digits,
        })
    }

    pub fn state(&self) -> StateCode {
        self.state
    }

    pub fn rto(&self) -> u8 {
        self.rto
    }

    pub fn series(&self) -> &str {
        &self.series
    }

    pub fn digits(&self) -> u16 {
        self.digits
    }
}

impl fmt::Display for VehicleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02} {} {}",
            self.state, self.rto, self.series, self.digits
        )
    }
}

impl FromStr for VehicleNumber {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::invalid("vehicle number", value);
        let parts: Vec<&str> = value.split(' ').collect();
        let [state, rto, series, digits] = parts.as_slice() else {
            return Err(invalid());
        };
        let state = state.parse::<StateCode>().map_err(|_| invalid())?;
        let rto = rto.parse::<u8>().map_err(|_| invalid())?;
        let digits = digits.parse::<u16>().map_err(|_| invalid())?;
        let number = VehicleNumber::new(state, rto, series, digits).map_err(|_| invalid())?;
        canonical(number, value).ok_or_else(invalid)
    }
}

impl TryFrom<String> for VehicleNumber {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VehicleNumber> for String {
    fn from(value: VehicleNumber) -> Self {
        value.to_string()
    }
}

impl JsonSchema for VehicleNumber {
    fn schema_name() -> String {
        "VehicleNumber".to_string()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        let states: Vec<&str> = StateCode::ALL.iter().map(|code| code.as_str()).collect();
        let pattern = format!(
            "^({}) (0[1-9]|[1-9][0-9]) [A-Z]{{2}} [1-9][0-9]{{3}}$",
            states.join("|")
        );
        pattern_schema(pattern)
    }
}

/// Engine output rendered as `"<N> HP"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HorsePower(u16);

impl HorsePower {
    pub fn new(value: u16) -> Result<Self, Error> {
        if (HORSE_POWER_MIN..=HORSE_POWER_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::invalid("horse power", value.to_string()))
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for HorsePower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} HP", self.0)
    }
}

impl FromStr for HorsePower {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .strip_suffix(" HP")
            .and_then(|number| number.parse::<u16>().ok())
            .and_then(|number| HorsePower::new(number).ok())
            .and_then(|parsed| canonical(parsed, value))
            .ok_or_else(|| Error::invalid("horse power", value))
    }
}

impl TryFrom<String> for HorsePower {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HorsePower> for String {
    fn from(value: HorsePower) -> Self {
        value.to_string()
    }
}

impl JsonSchema for HorsePower {
    fn schema_name() -> String {
        "HorsePower".to_string()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        pattern_schema("^([89][0-9]|[1-3][0-9]{2}|400) HP$".to_string())
    }
}

/// Fuel tank volume rendered as `"<N>L"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TankCapacity(u8);

impl TankCapacity {
    pub fn new(litres: u8) -> Result<Self, Error> {
        if (TANK_CAPACITY_MIN..=TANK_CAPACITY_MAX).contains(&litres) {
            Ok(Self(litres))
        } else {
            Err(Error::invalid("fuel tank capacity", litres.to_string()))
        }
    }

    pub fn litres(self) -> u8 {
        self.0
    }
}

impl fmt::Display for TankCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}L", self.0)
    }
}

impl FromStr for TankCapacity {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .strip_suffix('L')
            .and_then(|number| number.parse::<u8>().ok())
            .and_then(|number| TankCapacity::new(number).ok())
            .and_then(|parsed| canonical(parsed, value))
            .ok_or_else(|| Error::invalid("fuel tank capacity", value))
    }
}

impl TryFrom<String> for TankCapacity {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TankCapacity> for String {
    fn from(value: TankCapacity) -> Self {
        value.to_string()
    }
}

impl JsonSchema for TankCapacity {
    fn schema_name() -> String {
        "TankCapacity".to_string()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        pattern_schema("^([1-9][0-9]|100)L$".to_string())
    }
}

/// Keep `parsed` only if it renders back to exactly `text`. Rejects signs,
/// zero padding and other spellings the serializer never produces.
fn canonical<T: fmt::Display>(parsed: T, text: &str) -> Option<T> {
    (parsed.to_string() == text).then_some(parsed)
}

fn pattern_schema(pattern: String) -> Schema {
    SchemaObject {
        instance_type: Some(InstanceType::String.into()),
        string: Some(Box::new(StringValidation {
            pattern: Some(pattern),
            ..Default::default()
        })),
        ..Default::default()
    }
    .into()
}
