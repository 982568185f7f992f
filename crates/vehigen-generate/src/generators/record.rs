use chrono::NaiveDate;

use vehigen_core::tables::{
    HORSE_POWER_MAX, HORSE_POWER_MIN, INSURANCE_HORIZON_DAYS, TANK_CAPACITY_MAX,
    TANK_CAPACITY_MIN, companies, manufacturing_window, registration_deadline,
};
use vehigen_core::{
    EmissionStandard, EngineStrokes, HorsePower, PowerSource, StateCode, TankCapacity,
    VehicleRecord, VehicleType,
};

use crate::errors::GenerationError;
use crate::generators::vehicle_number;
use crate::source::FakeSource;

/// Build one record. `today` anchors the insurance expiry; nothing else
/// depends on the wall clock or on previously generated records.
pub fn generate_record<S: FakeSource>(
    source: &mut S,
    today: NaiveDate,
) -> Result<VehicleRecord, GenerationError> {
    let state = pick(source, &StateCode::ALL, "states")?;
    let vehicle_type = pick(source, &VehicleType::ALL, "vehicle types")?;
    let company = pick(source, companies(vehicle_type), "companies")?;
    let model = source.vehicle_model();

    let engine_type = pick(source, &PowerSource::ALL, "engine types")?;
    let fuel_type = pick(source, &PowerSource::ALL, "fuel types")?;
    let engine_strokes = pick(source, &EngineStrokes::ALL, "engine strokes")?;
    let emission_standard = pick(source, &EmissionStandard::ALL, "emission standards")?;

    let (built_from, built_to) = manufacturing_window();
    let date_of_manufacturing = source.date_between(built_from, built_to);
    let registration_date = source.date_between(date_of_manufacturing, registration_deadline());
    let insurance_expiry = source.future_date(today, INSURANCE_HORIZON_DAYS);

    let horse_power =
        source.int_between(u32::from(HORSE_POWER_MIN), u32::from(HORSE_POWER_MAX)) as u16;
    let tank_litres =
        source.int_between(u32::from(TANK_CAPACITY_MIN), u32::from(TANK_CAPACITY_MAX)) as u8;
    let owner_name = source.full_name();

    Ok(VehicleRecord {
        vehicle_number: vehicle_number(source, state)?,
        vehicle_type,
        company: company.to_string(),
        model,
        engine_type,
        engine_horse_power: HorsePower::new(horse_power)?,
        engine_strokes,
        date_of_manufacturing,
        registration_date,
        insurance_expiry,
        fuel_tank_capacity: TankCapacity::new(tank_litres)?,
        owner_name,
        registration_state: state,
        fuel_type,
        emission_standard,
    })
}

fn pick<S: FakeSource, T: Copy>(
    source: &mut S,
    items: &[T],
    table: &'static str,
) -> Result<T, GenerationError> {
    source
        .choose(items)
        .copied()
        .ok_or(GenerationError::EmptyTable(table))
}
