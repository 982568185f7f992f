use vehigen_core::tables::{PLATE_DIGITS_MAX, PLATE_DIGITS_MIN, RTO_MAX, RTO_MIN, SERIES_LEN};
use vehigen_core::{StateCode, VehicleNumber};

use crate::errors::GenerationError;
use crate::source::FakeSource;

/// Random registration plate for `state`: RTO office, two-letter series and
/// a four-digit number.
pub fn vehicle_number<S: FakeSource>(
    source: &mut S,
    state: StateCode,
) -> Result<VehicleNumber, GenerationError> {
    let rto = source.int_between(u32::from(RTO_MIN), u32::from(RTO_MAX)) as u8;
    let series: String = (0..SERIES_LEN)
        .map(|_| source.uppercase_letter())
        .collect();
    let digits =
        source.int_between(u32::from(PLATE_DIGITS_MIN), u32::from(PLATE_DIGITS_MAX)) as u16;
    Ok(VehicleNumber::new(state, rto, &series, digits)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Faker;

    #[test]
    fn plate_carries_requested_state() {
        let mut faker = Faker::seeded(9);
        for state in StateCode::ALL {
            let number = vehicle_number(&mut faker, state).expect("vehicle number");
            assert_eq!(number.state(), state);
            assert!(number.to_string().starts_with(&format!("{state} ")));
        }
    }

    #[test]
    fn plate_parts_stay_in_range() {
        let mut faker = Faker::seeded(21);
        for _ in 0..500 {
            let number = vehicle_number(&mut faker, StateCode::Dl).expect("vehicle number");
            assert!((1..=99).contains(&number.rto()));
            assert!((1000..=9999).contains(&number.digits()));
            assert_eq!(number.series().len(), 2);
            assert_eq!(number.to_string().len(), "DL 01 AB 1234".len());
        }
    }
}
