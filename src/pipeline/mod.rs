//! Report generation pipeline.
//!
//! - [`ReportGeneratorBuilder`]: fluent builder for a configured generator
//! - [`ReportGenerator`]: metrics, charts, composition and PDF output
//! - [`generate`]: one-shot generation with default settings
//!
//! # Example
//!
//! ```ignore
//! use proplens::{GeneratorConfig, ReportGeneratorBuilder};
//!
//! let generator = ReportGeneratorBuilder::new()
//!     .with_config(GeneratorConfig::default())
//!     .build()?;
//!
//! let report = generator.generate_report(&record, &report_config, None)?;
//! std::fs::write("report.pdf", &report.bytes)?;
//! ```

mod builder;
pub mod context;
mod orchestrator;

pub use builder::ReportGeneratorBuilder;
pub use context::{ChartCache, ComposeContext};
pub use orchestrator::{GeneratedReport, ReportGenerator, applicable_charts};

use crate::error::GenerationError;
use proplens_types::{AnalysisRecord, RealtorBrandingInfo, ReportConfiguration};
use std::sync::OnceLock;

/// Generates a report with the default configuration.
///
/// The default generator (and its chart font database) is built on first
/// use and shared by later calls.
pub fn generate(
    record: &AnalysisRecord,
    config: &ReportConfiguration,
    branding: Option<&RealtorBrandingInfo>,
) -> Result<Vec<u8>, GenerationError> {
    static DEFAULT: OnceLock<ReportGenerator> = OnceLock::new();
    DEFAULT
        .get_or_init(|| ReportGeneratorBuilder::new().assemble())
        .generate(record, config, branding)
}
