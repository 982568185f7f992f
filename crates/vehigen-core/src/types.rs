use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use schemars::r#gen::SchemaGenerator;
use schemars::schema::{InstanceType, Schema, SchemaObject};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Registration state codes a vehicle can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize, JsonSchema)]
pub enum StateCode {
    #[serde(rename = "MP")]
    Mp,
    #[serde(rename = "MH")]
    Mh,
    #[serde(rename = "DL")]
    Dl,
    #[serde(rename = "KA")]
    Ka,
    #[serde(rename = "UP")]
    Up,
    #[serde(rename = "RJ")]
    Rj,
    #[serde(rename = "TN")]
    Tn,
    #[serde(rename = "GJ")]
    Gj,
    #[serde(rename = "PB")]
    Pb,
    #[serde(rename = "CG")]
    Cg,
}

impl StateCode {
    pub const ALL: [StateCode; 10] = [
        StateCode::Mp,
        StateCode::Mh,
        StateCode::Dl,
        StateCode::Ka,
        StateCode::Up,
        StateCode::Rj,
        StateCode::Tn,
        StateCode::Gj,
        StateCode::Pb,
        StateCode::Cg,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StateCode::Mp => "MP",
            StateCode::Mh => "MH",
            StateCode::Dl => "DL",
            StateCode::Ka => "KA",
            StateCode::Up => "UP",
            StateCode::Rj => "RJ",
            StateCode::Tn => "TN",
            StateCode::Gj => "GJ",
            StateCode::Pb => "PB",
            StateCode::Cg => "CG",
        }
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateCode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        StateCode::ALL
            .into_iter()
            .find(|code| code.as_str() == value)
            .ok_or_else(|| Error::invalid("state code", value))
    }
}

/// Kind of vehicle; selects the company table a record draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize, JsonSchema)]
pub enum VehicleType {
    Bike,
    Car,
    Truck,
}

impl VehicleType {
    pub const ALL: [VehicleType; 3] = [VehicleType::Bike, VehicleType::Car, VehicleType::Truck];

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::Bike => "Bike",
            VehicleType::Car => "Car",
            VehicleType::Truck => "Truck",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        VehicleType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| Error::invalid("vehicle type", value))
    }
}

/// Energy source, used for both the engine type and the fuel type of a
/// record. The two fields are sampled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, JsonSchema)]
pub enum PowerSource {
    Petrol,
    Diesel,
    Electric,
}

impl PowerSource {
    pub const ALL: [PowerSource; 3] = [
        PowerSource::Petrol,
        PowerSource::Diesel,
        PowerSource::Electric,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PowerSource::Petrol => "Petrol",
            PowerSource::Diesel => "Diesel",
            PowerSource::Electric => "Electric",
        }
    }
}

impl fmt::Display for PowerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engine cycle. Serialized as the bare stroke count (`2` or `4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EngineStrokes {
    Two,
    Four,
}

impl EngineStrokes {
    pub const ALL: [EngineStrokes; 2] = [EngineStrokes::Two, EngineStrokes::Four];

    pub fn count(self) -> u8 {
        match self {
            EngineStrokes::Two => 2,
            EngineStrokes::Four => 4,
        }
    }
}

impl From<EngineStrokes> for u8 {
    fn from(value: EngineStrokes) -> Self {
        value.count()
    }
}

impl TryFrom<u8> for EngineStrokes {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(EngineStrokes::Two),
            4 => Ok(EngineStrokes::Four),
            other => Err(Error::invalid("engine strokes", other.to_string())),
        }
    }
}

impl JsonSchema for EngineStrokes {
    fn schema_name() -> String {
        "EngineStrokes".to_string()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::Integer.into()),
            enum_values: Some(vec![serde_json::json!(2), serde_json::json!(4)]),
            ..Default::default()
        }
        .into()
    }
}

/// Bharat Stage emission norm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, JsonSchema)]
pub enum EmissionStandard {
    #[serde(rename = "BS-IV")]
    BsIv,
    #[serde(rename = "BS-VI")]
    BsVi,
}

impl EmissionStandard {
    pub const ALL: [EmissionStandard; 2] = [EmissionStandard::BsIv, EmissionStandard::BsVi];

    pub fn as_str(self) -> &'static str {
        match self {
            EmissionStandard::BsIv => "BS-IV",
            EmissionStandard::BsVi => "BS-VI",
        }
    }
}

impl fmt::Display for EmissionStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
