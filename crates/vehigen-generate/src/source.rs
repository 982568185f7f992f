use chrono::NaiveDate;
use fake::Fake;
use fake::faker::name::en::Name;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use vehigen_core::tables::VEHICLE_MODELS;

/// Source of randomness and fake text used by the record generator.
///
/// All ranges are inclusive. Implementations must keep results inside the
/// requested bounds; the generator relies on that for its invariants.
pub trait FakeSource {
    /// Uniform integer in `[min, max]`. Returns `min` when `max < min`.
    fn int_between(&mut self, min: u32, max: u32) -> u32;

    /// Uniform calendar date in `[from, to]`. Returns `from` when `to < from`.
    fn date_between(&mut self, from: NaiveDate, to: NaiveDate) -> NaiveDate;

    /// Freeform vehicle model name.
    fn vehicle_model(&mut self) -> String;

    /// Freeform full person name.
    fn full_name(&mut self) -> String;

    /// Uniform pick from `items`, `None` when empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let last = u32::try_from(items.len().checked_sub(1)?).ok()?;
        let idx = self.int_between(0, last) as usize;
        items.get(idx)
    }

    /// Date strictly after `today` and at most `horizon_days` after it.
    fn future_date(&mut self, today: NaiveDate, horizon_days: u32) -> NaiveDate {
        let from = today + chrono::Duration::days(1);
        let to = today + chrono::Duration::days(i64::from(horizon_days.max(1)));
        self.date_between(from, to)
    }

    /// Uppercase ASCII letter.
    fn uppercase_letter(&mut self) -> char {
        let offset = self.int_between(0, 25) as u8;
        char::from(b'A' + offset)
    }
}

/// Default [`FakeSource`] backed by ChaCha8 and the `fake` crate.
#[derive(Debug, Clone)]
pub struct Faker {
    rng: ChaCha8Rng,
}

impl Faker {
    /// Deterministic source: equal seeds produce equal batches.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }
}

impl FakeSource for Faker {
    fn int_between(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    fn date_between(&mut self, from: NaiveDate, to: NaiveDate) -> NaiveDate {
        let span = (to - from).num_days();
        if span <= 0 {
            return from;
        }
        let offset = self.rng.random_range(0..=span);
        from + chrono::Duration::days(offset)
    }

    fn vehicle_model(&mut self) -> String {
        VEHICLE_MODELS
            .choose(&mut self.rng)
            .unwrap_or(&"Civic")
            .to_string()
    }

    fn full_name(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }
}
