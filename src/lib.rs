//! Property investment analysis reports as paginated PDF documents.
//!
//! An [`AnalysisRecord`] is graded by the [metrics] calculator, its charts are
//! rasterized in parallel, and the requested [sections] are laid out in a fixed
//! order onto A4 pages that are finally serialized with `lopdf`.
//!
//! ```ignore
//! let bytes = proplens::generate(&record, &ReportConfiguration::default(), None)?;
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod sections;

pub use config::{GeneratorConfig, PageSettings};
pub use error::GenerationError;
pub use metrics::{KeyMetrics, evaluate, investment_score};
pub use pipeline::{GeneratedReport, ReportGenerator, ReportGeneratorBuilder, generate};
pub use sections::SectionId;

pub use proplens_charts::{ChartError, ChartKind, ChartRenderer, RenderedChart, SvgChartRenderer};
pub use proplens_executor::{ExecutorImpl, SyncExecutor};
pub use proplens_types::{
    AnalysisRecord, Comparable, InvestmentGrade, LongTermRental, PropertyDetails, PurchaseCosts,
    RealtorBrandingInfo, ReportConfiguration, SeasonalOccupancy, ShortTermRental,
};
