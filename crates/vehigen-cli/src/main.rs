mod logging;

use std::path::Path;

use clap::Parser;
use thiserror::Error;
use vehigen_generate::{GenerateOptions, GenerationEngine, GenerationError};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("logging error: {0}")]
    Logging(String),
}

/// Writes 200 fake vehicle registration records to `vehicles.json`.
#[derive(Parser, Debug)]
#[command(name = "vehigen", version, about = "Fake vehicle registration record generator")]
struct Cli {}

fn main() -> Result<(), CliError> {
    let _cli = Cli::parse();
    logging::init_logging()?;

    let engine = GenerationEngine::new(GenerateOptions::default());
    let result = engine.run()?;

    println!(
        "{}",
        confirmation_line(result.report.records, &result.out_path)
    );
    Ok(())
}

fn confirmation_line(records: u64, out_path: &Path) -> String {
    format!("Generated {records} vehicle records in {}", out_path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn confirmation_names_count_and_path() {
        assert_eq!(
            confirmation_line(200, Path::new("vehicles.json")),
            "Generated 200 vehicle records in vehicles.json"
        );
    }

    #[test]
    fn cli_accepts_no_arguments() {
        Cli::command().debug_assert();
        assert!(Cli::try_parse_from(["vehigen"]).is_ok());
        assert!(Cli::try_parse_from(["vehigen", "--count", "5"]).is_err());
    }
}
