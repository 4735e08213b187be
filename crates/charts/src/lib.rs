//! Chart rendering for investment reports.
//!
//! Each chart is built as an SVG scene from a slice of the analysis record
//! and rasterized to PNG. [`ChartRenderer`] is the seam the report pipeline
//! depends on; [`SvgChartRenderer`] is the default implementation.

use proplens_types::AnalysisRecord;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

mod bar;
mod line;
mod radar;
mod raster;
mod ring;
pub mod series;
pub mod svg;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Chart data unavailable: {0}")]
    MissingData(&'static str),
    #[error("SVG scene rejected: {0}")]
    Svg(String),
    #[error("Could not allocate a {0}x{1} pixmap")]
    Pixmap(u32, u32),
    #[error("PNG encoding failed: {0}")]
    Encode(String),
    #[error("Chart rendering failed: {0}")]
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartKind {
    Gauge,
    CashFlow,
    RoiComparison,
    ExpenseBreakdown,
    Occupancy,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Gauge,
        ChartKind::CashFlow,
        ChartKind::RoiComparison,
        ChartKind::ExpenseBreakdown,
        ChartKind::Occupancy,
    ];

    /// Name of the image resource the chart is embedded under.
    pub fn resource_key(self) -> &'static str {
        match self {
            ChartKind::Gauge => "chart-gauge",
            ChartKind::CashFlow => "chart-cash-flow",
            ChartKind::RoiComparison => "chart-roi-comparison",
            ChartKind::ExpenseBreakdown => "chart-expense-breakdown",
            ChartKind::Occupancy => "chart-occupancy",
        }
    }
}

/// A chart rasterized to PNG.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub kind: ChartKind,
    pub png: Arc<Vec<u8>>,
    /// Intrinsic size in pixels.
    pub width: u32,
    pub height: u32,
}

impl RenderedChart {
    pub fn aspect_ratio(&self) -> f32 {
        if self.width == 0 {
            return 1.0;
        }
        self.height as f32 / self.width as f32
    }
}

/// One method per chart. Implementations must be pure over their inputs so
/// the pipeline can run them concurrently.
pub trait ChartRenderer: Send + Sync {
    fn cash_flow_projection(&self, record: &AnalysisRecord) -> Result<RenderedChart, ChartError>;

    /// Fails with [`ChartError::MissingData`] when the record has no
    /// short-term rental analysis.
    fn roi_comparison(&self, record: &AnalysisRecord) -> Result<RenderedChart, ChartError>;

    fn expense_breakdown(&self, record: &AnalysisRecord) -> Result<RenderedChart, ChartError>;

    /// Fails with [`ChartError::MissingData`] when the record has no
    /// short-term rental analysis.
    fn seasonal_occupancy(&self, record: &AnalysisRecord) -> Result<RenderedChart, ChartError>;

    fn investment_gauge(&self, score: u8) -> Result<RenderedChart, ChartError>;

    fn render(
        &self,
        kind: ChartKind,
        record: &AnalysisRecord,
        score: u8,
    ) -> Result<RenderedChart, ChartError> {
        match kind {
            ChartKind::Gauge => self.investment_gauge(score),
            ChartKind::CashFlow => self.cash_flow_projection(record),
            ChartKind::RoiComparison => self.roi_comparison(record),
            ChartKind::ExpenseBreakdown => self.expense_breakdown(record),
            ChartKind::Occupancy => self.seasonal_occupancy(record),
        }
    }
}

/// Renders charts through `resvg`. The font database is shared read-only
/// between renders.
#[derive(Clone)]
pub struct SvgChartRenderer {
    fontdb: Arc<fontdb::Database>,
}

impl std::fmt::Debug for SvgChartRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgChartRenderer")
            .field("font_faces", &self.fontdb.len())
            .finish()
    }
}

impl SvgChartRenderer {
    /// A renderer with an empty font database. Charts render, labels do not.
    pub fn without_fonts() -> Self {
        Self::with_database(Arc::new(fontdb::Database::new()))
    }

    pub fn with_database(fontdb: Arc<fontdb::Database>) -> Self {
        Self { fontdb }
    }

    /// Loads installed system fonts plus any extra font directories.
    pub fn with_system_fonts<P: AsRef<Path>>(extra_dirs: &[P]) -> Self {
        Self::with_fonts(true, extra_dirs)
    }

    /// Loads fonts from `extra_dirs`, and from the system when `system` is set.
    pub fn with_fonts<P: AsRef<Path>>(system: bool, extra_dirs: &[P]) -> Self {
        let mut db = fontdb::Database::new();
        if system {
            db.load_system_fonts();
        }
        for dir in extra_dirs {
            db.load_fonts_dir(dir);
        }
        log::debug!("Chart font database holds {} faces", db.len());
        Self::with_database(Arc::new(db))
    }

    pub fn font_count(&self) -> usize {
        self.fontdb.len()
    }

    fn finish(&self, kind: ChartKind, scene: svg::SvgScene) -> Result<RenderedChart, ChartError> {
        let (width, height) = (scene.width(), scene.height());
        let png = raster::rasterize(scene, &self.fontdb)?;
        log::debug!("Rendered {:?} chart ({} bytes)", kind, png.len());
        Ok(RenderedChart {
            kind,
            png: Arc::new(png),
            width,
            height,
        })
    }
}

impl Default for SvgChartRenderer {
    fn default() -> Self {
        #[cfg(feature = "system-fonts")]
        {
            Self::with_system_fonts::<&Path>(&[])
        }
        #[cfg(not(feature = "system-fonts"))]
        {
            Self::without_fonts()
        }
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn cash_flow_projection(&self, record: &AnalysisRecord) -> Result<RenderedChart, ChartError> {
        let projection = series::cash_flow_projection(&record.long_term_rental);
        self.finish(ChartKind::CashFlow, line::cash_flow_scene(&projection))
    }

    fn roi_comparison(&self, record: &AnalysisRecord) -> Result<RenderedChart, ChartError> {
        let cmp = series::roi_comparison(record)
            .ok_or(ChartError::MissingData("short-term rental analysis"))?;
        self.finish(ChartKind::RoiComparison, bar::roi_comparison_scene(&cmp))
    }

    fn expense_breakdown(&self, record: &AnalysisRecord) -> Result<RenderedChart, ChartError> {
        let slices = series::expense_slices(&record.long_term_rental);
        self.finish(ChartKind::ExpenseBreakdown, ring::expense_scene(&slices))
    }

    fn seasonal_occupancy(&self, record: &AnalysisRecord) -> Result<RenderedChart, ChartError> {
        let str_data = record
            .short_term_rental
            .as_ref()
            .ok_or(ChartError::MissingData("short-term rental analysis"))?;
        let subject = series::seasonal_occupancy(str_data);
        self.finish(ChartKind::Occupancy, radar::occupancy_scene(&subject))
    }

    fn investment_gauge(&self, score: u8) -> Result<RenderedChart, ChartError> {
        self.finish(ChartKind::Gauge, ring::gauge_scene(score))
    }
}
