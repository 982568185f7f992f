use chrono::NaiveDate;
use vehigen_core::{
    EmissionStandard, EngineStrokes, HorsePower, PowerSource, StateCode, TankCapacity,
    VehicleNumber, VehicleRecord, VehicleType, vehicles_json_schema,
};

const FIELD_ORDER: [&str; 15] = [
    "vehicle_number",
    "vehicle_type",
    "company",
    "model",
    "engine_type",
    "engine_horse_power",
    "engine_strokes",
    "date_of_manufacturing",
    "registration_date",
    "insurance_expiry",
    "fuel_tank_capacity",
    "owner_name",
    "registration_state",
    "fuel_type",
    "emission_standard",
];

fn sample_record() -> VehicleRecord {
    VehicleRecord {
        vehicle_number: VehicleNumber::new(StateCode::Mh, 4, "KX", 5521).expect("number"),
        vehicle_type: VehicleType::Truck,
        company: "Ashok Leyland".to_string(),
        model: "Land Cruiser".to_string(),
        engine_type: PowerSource::Diesel,
        engine_horse_power: HorsePower::new(310).expect("horse power"),
        engine_strokes: EngineStrokes::Four,
        date_of_manufacturing: NaiveDate::from_ymd_opt(2019, 3, 7).expect("date"),
        registration_date: NaiveDate::from_ymd_opt(2020, 1, 15).expect("date"),
        insurance_expiry: NaiveDate::from_ymd_opt(2027, 6, 30).expect("date"),
        fuel_tank_capacity: TankCapacity::new(90).expect("capacity"),
        owner_name: "Asha Verma".to_string(),
        registration_state: StateCode::Mh,
        fuel_type: PowerSource::Electric,
        emission_standard: EmissionStandard::BsVi,
    }
}

#[test]
fn serializes_record_in_field_order() {
    let json = serde_json::to_string_pretty(&sample_record()).expect("serialize record");
    let expected = r#"{
  "vehicle_number": "MH 04 KX 5521",
  "vehicle_type": "Truck",
  "company": "Ashok Leyland",
  "model": "Land Cruiser",
  "engine_type": "Diesel",
  "engine_horse_power": "310 HP",
  "engine_strokes": 4,
  "date_of_manufacturing": "2019-03-07",
  "registration_date": "2020-01-15",
  "insurance_expiry": "2027-06-30",
  "fuel_tank_capacity": "90L",
  "owner_name": "Asha Verma",
  "registration_state": "MH",
  "fuel_type": "Electric",
  "emission_standard": "BS-VI"
}"#;
    assert_eq!(json, expected);
}

#[test]
fn parses_serialized_record_back() {
    let record = sample_record();
    let json = serde_json::to_string(&record).expect("serialize record");
    let parsed: VehicleRecord = serde_json::from_str(&json).expect("parse record");
    assert_eq!(parsed, record);
}

#[test]
fn rejects_out_of_range_strings() {
    let mut value = serde_json::to_value(sample_record()).expect("to value");
    value["engine_horse_power"] = serde_json::json!("500 HP");
    assert!(serde_json::from_value::<VehicleRecord>(value).is_err());
}

#[test]
fn json_schema_describes_every_field() {
    let schema = serde_json::to_value(vehicles_json_schema()).expect("serialize schema");
    assert_eq!(schema["type"], "array");

    let record = &schema["definitions"]["VehicleRecord"];
    let properties = record["properties"].as_object().expect("properties");
    for field in FIELD_ORDER {
        assert!(properties.contains_key(field), "missing {field}");
    }

    let required = record["required"].as_array().expect("required");
    assert_eq!(required.len(), FIELD_ORDER.len());
}

#[test]
fn rejects_non_canonical_spellings() {
    for (field, text) in [
        ("vehicle_number", "MH 04 KX 05521"),
        ("vehicle_number", "MH +4 KX 5521"),
        ("engine_horse_power", "0310 HP"),
        ("fuel_tank_capacity", "+90L"),
    ] {
        let mut value = serde_json::to_value(sample_record()).expect("to value");
        value[field] = serde_json::json!(text);
        assert!(
            serde_json::from_value::<VehicleRecord>(value).is_err(),
            "{field} = {text} should be rejected"
        );
    }
}
