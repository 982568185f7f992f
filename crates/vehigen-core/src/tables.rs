//! Fixed reference tables and sampling bounds.

use chrono::NaiveDate;

use crate::types::VehicleType;

pub const RTO_MIN: u8 = 1;
pub const RTO_MAX: u8 = 99;
pub const PLATE_DIGITS_MIN: u16 = 1000;
pub const PLATE_DIGITS_MAX: u16 = 9999;
pub const SERIES_LEN: usize = 2;

pub const HORSE_POWER_MIN: u16 = 80;
pub const HORSE_POWER_MAX: u16 = 400;
pub const TANK_CAPACITY_MIN: u8 = 10;
pub const TANK_CAPACITY_MAX: u8 = 100;

/// Insurance runs out at most this many days after the generation date.
pub const INSURANCE_HORIZON_DAYS: u32 = 730;

const BIKE_COMPANIES: &[&str] = &["Hero", "Bajaj", "TVS"];
const CAR_COMPANIES: &[&str] = &["Maruti Suzuki", "Hyundai", "Toyota", "Renault", "Mahindra"];
const TRUCK_COMPANIES: &[&str] = &["Tata", "Ashok Leyland", "Eicher"];

/// Manufacturers a vehicle of the given type may be attributed to.
pub fn companies(vehicle_type: VehicleType) -> &'static [&'static str] {
    match vehicle_type {
        VehicleType::Bike => BIKE_COMPANIES,
        VehicleType::Car => CAR_COMPANIES,
        VehicleType::Truck => TRUCK_COMPANIES,
    }
}

/// Model names handed out by the default vehicle-model text source. Not tied
/// to any company.
pub const VEHICLE_MODELS: &[&str] = &[
    "Fiesta",
    "Focus",
    "Taurus",
    "Mustang",
    "Explorer",
    "Expedition",
    "F-150",
    "Model T",
    "Ranchero",
    "Volt",
    "Cruze",
    "Malibu",
    "Impala",
    "Camaro",
    "Corvette",
    "Colorado",
    "Silverado",
    "El Camino",
    "CTS",
    "XTS",
    "ATS",
    "Escalade",
    "Alpine",
    "Charger",
    "LeBaron",
    "PT Cruiser",
    "Challenger",
    "Durango",
    "Grand Caravan",
    "Wrangler",
    "Grand Cherokee",
    "Roadster",
    "Model S",
    "Model 3",
    "Camry",
    "Prius",
    "Land Cruiser",
    "Accord",
    "Civic",
    "Element",
    "Sentra",
    "Altima",
    "A8",
    "A4",
    "Beetle",
    "Jetta",
    "Golf",
    "911",
    "Spyder",
    "Countach",
    "Mercielago",
    "Aventador",
    "Cayenne",
    "Fortwo",
    "XC90",
    "V90",
    "Kona",
    "Fortuner",
];

/// First and last possible manufacturing dates, inclusive.
pub fn manufacturing_window() -> (NaiveDate, NaiveDate) {
    (ymd(2018, 1, 1), ymd(2023, 12, 31))
}

/// Latest possible registration date, inclusive.
pub fn registration_deadline() -> NaiveDate {
    ymd(2024, 12, 31)
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_vehicle_type_has_companies() {
        for vehicle_type in VehicleType::ALL {
            assert!(!companies(vehicle_type).is_empty());
        }
    }

    #[test]
    fn company_tables_are_disjoint() {
        for company in companies(VehicleType::Bike) {
            assert!(!companies(VehicleType::Car).contains(company));
            assert!(!companies(VehicleType::Truck).contains(company));
        }
    }

    #[test]
    fn date_bounds_are_ordered() {
        let (from, to) = manufacturing_window();
        assert_eq!(from.to_string(), "2018-01-01");
        assert_eq!(to.to_string(), "2023-12-31");
        assert!(to < registration_deadline());
    }
}
