use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info, warn};

use vehigen_core::VehicleRecord;

use crate::checks::check_record;
use crate::errors::GenerationError;
use crate::generators::generate_record;
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::json::write_records_json;
use crate::source::{FakeSource, Faker};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_path: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating a batch of vehicle records.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Generate and write a batch with the default source, seeded from the
    /// options when a seed is set.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let mut source = match self.options.seed {
            Some(seed) => Faker::seeded(seed),
            None => Faker::from_entropy(),
        };
        self.run_with(&mut source)
    }

    /// Generate and write a batch drawing from `source`. Nothing is written
    /// unless every record was generated and checked.
    pub fn run_with<S: FakeSource>(
        &self,
        source: &mut S,
    ) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let mut report = GenerationReport::new(run_id.clone(), self.options.seed);

        info!(
            run_id = %run_id,
            records = self.options.records,
            seed = ?self.options.seed,
            out = %self.options.out_path.display(),
            "generation started"
        );

        let outcome = self.generate(source).and_then(|records| {
            for record in &records {
                report.record_vehicle(record.vehicle_type.as_str());
            }
            write_records_json(&self.options.out_path, &records)
        });

        let bytes_written = match outcome {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(run_id = %run_id, error = %err, "generation failed");
                return Err(err);
            }
        };

        report.bytes_written = bytes_written;
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            run_id = %run_id,
            records = report.records,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult {
            out_path: self.options.out_path.clone(),
            report,
        })
    }

    /// Produce the batch in call order without writing it.
    pub fn generate<S: FakeSource>(
        &self,
        source: &mut S,
    ) -> Result<Vec<VehicleRecord>, GenerationError> {
        if self.options.records == 0 {
            return Err(GenerationError::InvalidOptions(
                "records must be greater than zero".to_string(),
            ));
        }

        let today = self.options.today;
        let mut records = Vec::with_capacity(self.options.records);
        for index in 0..self.options.records {
            let record = generate_record(source, today)?;
            let violations = check_record(&record, today);
            if !violations.is_empty() {
                return Err(GenerationError::InvariantViolation { index, violations });
            }
            debug!(
                index,
                vehicle_number = %record.vehicle_number,
                vehicle_type = %record.vehicle_type,
                "record generated"
            );
            records.push(record);
        }
        Ok(records)
    }
}
