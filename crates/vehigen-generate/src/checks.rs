use chrono::NaiveDate;
use thiserror::Error;

use vehigen_core::VehicleRecord;
use vehigen_core::tables::{
    INSURANCE_HORIZON_DAYS, companies, manufacturing_window, registration_deadline,
};

/// A broken cross-field invariant on a generated record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("plate state {plate} differs from registration state {registered}")]
    StateMismatch { plate: String, registered: String },
    #[error("company '{company}' does not build {vehicle_type} vehicles")]
    CompanyNotForType {
        company: String,
        vehicle_type: String,
    },
    #[error("manufacturing date {0} outside the allowed window")]
    ManufacturedOutOfRange(NaiveDate),
    #[error("registration date {registered} precedes manufacturing date {manufactured}")]
    RegisteredBeforeManufactured {
        manufactured: NaiveDate,
        registered: NaiveDate,
    },
    #[error("registration date {0} after the registration deadline")]
    RegisteredAfterDeadline(NaiveDate),
    #[error("insurance expiry {expiry} not within the horizon after {today}")]
    InsuranceOutsideHorizon { expiry: NaiveDate, today: NaiveDate },
}

/// Evaluate every invariant on `record`; an empty result means it passes.
pub fn check_record(record: &VehicleRecord, today: NaiveDate) -> Vec<Violation> {
    let mut violations = Vec::new();

    if record.vehicle_number.state() != record.registration_state {
        violations.push(Violation::StateMismatch {
            plate: record.vehicle_number.state().to_string(),
            registered: record.registration_state.to_string(),
        });
    }

    if !companies(record.vehicle_type).contains(&record.company.as_str()) {
        violations.push(Violation::CompanyNotForType {
            company: record.company.clone(),
            vehicle_type: record.vehicle_type.to_string(),
        });
    }

    let (built_from, built_to) = manufacturing_window();
    if record.date_of_manufacturing < built_from || record.date_of_manufacturing > built_to {
        violations.push(Violation::ManufacturedOutOfRange(
            record.date_of_manufacturing,
        ));
    }

    if record.registration_date < record.date_of_manufacturing {
        violations.push(Violation::RegisteredBeforeManufactured {
            manufactured: record.date_of_manufacturing,
            registered: record.registration_date,
        });
    }

    if record.registration_date > registration_deadline() {
        violations.push(Violation::RegisteredAfterDeadline(record.registration_date));
    }

    let horizon = today + chrono::Duration::days(i64::from(INSURANCE_HORIZON_DAYS));
    if record.insurance_expiry <= today || record.insurance_expiry > horizon {
        violations.push(Violation::InsuranceOutsideHorizon {
            expiry: record.insurance_expiry,
            today,
        });
    }

    violations
}

#[cfg(test)]
mod tests {
    use vehigen_core::{
        EmissionStandard, EngineStrokes, HorsePower, PowerSource, StateCode, TankCapacity,
        VehicleNumber, VehicleType,
    };

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn valid_record() -> VehicleRecord {
        VehicleRecord {
            vehicle_number: VehicleNumber::new(StateCode::Tn, 12, "ZZ", 4321).unwrap(),
            vehicle_type: VehicleType::Bike,
            company: "TVS".to_string(),
            model: "Spyder".to_string(),
            engine_type: PowerSource::Petrol,
            engine_horse_power: HorsePower::new(95).unwrap(),
            engine_strokes: EngineStrokes::Two,
            date_of_manufacturing: date(2021, 5, 1),
            registration_date: date(2021, 5, 1),
            insurance_expiry: date(2027, 1, 1),
            fuel_tank_capacity: TankCapacity::new(12).unwrap(),
            owner_name: "Ravi Iyer".to_string(),
            registration_state: StateCode::Tn,
            fuel_type: PowerSource::Petrol,
            emission_standard: EmissionStandard::BsIv,
        }
    }

    #[test]
    fn valid_record_passes() {
        assert!(check_record(&valid_record(), date(2026, 10, 15)).is_empty());
    }

    #[test]
    fn detects_state_mismatch() {
        let mut record = valid_record();
        record.registration_state = StateCode::Ka;
        let violations = check_record(&record, date(2026, 10, 15));
        assert_eq!(
            violations,
            vec![Violation::StateMismatch {
                plate: "TN".to_string(),
                registered: "KA".to_string(),
            }]
        );
    }

    #[test]
    fn detects_company_from_other_table() {
        let mut record = valid_record();
        record.company = "Tata".to_string();
        let violations = check_record(&record, date(2026, 10, 15));
        assert!(matches!(
            violations.as_slice(),
            [Violation::CompanyNotForType { .. }]
        ));
    }

    #[test]
    fn detects_registration_before_manufacture() {
        let mut record = valid_record();
        record.registration_date = date(2021, 4, 30);
        let violations = check_record(&record, date(2026, 10, 15));
        assert!(matches!(
            violations.as_slice(),
            [Violation::RegisteredBeforeManufactured { .. }]
        ));
    }

    #[test]
    fn insurance_expiring_today_is_not_in_the_future() {
        let today = date(2026, 10, 15);
        let mut record = valid_record();
        record.insurance_expiry = today;
        assert!(matches!(
            check_record(&record, today).as_slice(),
            [Violation::InsuranceOutsideHorizon { .. }]
        ));
        record.insurance_expiry = date(2028, 10, 14);
        assert!(check_record(&record, today).is_empty());
        record.insurance_expiry = date(2028, 10, 15);
        assert!(!check_record(&record, today).is_empty());
    }
}
