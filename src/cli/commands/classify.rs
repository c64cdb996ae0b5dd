//! Classify Command
//!
//! Classifies individual paths without scanning, one line per path.

use crate::analyzer::classify;
use crate::cli::commands::analyze::OutputFormat;
use crate::cli::ui::Output;
use crate::types::Result;

pub fn run(paths: &[String], format: &str) -> Result<()> {
    let format = OutputFormat::parse(format)?;
    let classifications: Vec<_> = paths.iter().map(|p| classify(p)).collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&classifications)?),
        OutputFormat::Text => {
            let out = Output::new();
            for classification in &classifications {
                out.classification(classification);
            }
        }
    }
    Ok(())
}
