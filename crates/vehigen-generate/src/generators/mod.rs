mod plate;
mod record;

pub use plate::vehicle_number;
pub use record::generate_record;
