use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::record::VehicleRecord;

/// Emit the JSON Schema for the generated `vehicles.json` document.
pub fn vehicles_json_schema() -> RootSchema {
    schema_for!(Vec<VehicleRecord>)
}
