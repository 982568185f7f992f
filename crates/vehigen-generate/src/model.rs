use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use vehigen_core::{BATCH_SIZE, OUTPUT_FILE};

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Destination of the JSON document. Replaced on every run.
    pub out_path: PathBuf,
    /// Number of records in the batch.
    pub records: usize,
    /// Seed for the default fake-data source. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Generation date; insurance expiry is computed relative to it.
    pub today: NaiveDate,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(OUTPUT_FILE),
            records: BATCH_SIZE,
            seed: None,
            today: chrono::Utc::now().date_naive(),
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: Option<u64>,
    pub records: u64,
    pub by_vehicle_type: BTreeMap<String, u64>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: Option<u64>) -> Self {
        Self {
            run_id,
            seed,
            records: 0,
            by_vehicle_type: BTreeMap::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_vehicle(&mut self, vehicle_type: &str) {
        self.records += 1;
        *self
            .by_vehicle_type
            .entry(vehicle_type.to_string())
            .or_insert(0) += 1;
    }
}
