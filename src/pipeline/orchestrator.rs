use super::context::{ChartCache, ComposeContext};
use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::metrics::evaluate;
use crate::sections::{self, SectionId};
use chrono::{Local, NaiveTime};
use proplens_charts::{ChartKind, ChartRenderer};
use proplens_executor::{Executor, ExecutorImpl};
use proplens_layout::Canvas;
use proplens_render_lopdf::{DocumentInfo, PdfRenderer};
use proplens_types::{AnalysisRecord, InvestmentGrade, RealtorBrandingInfo, ReportConfiguration};
use std::sync::Arc;
use std::time::Instant;

/// A finished report plus what went into it.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    /// Sections in the order they were composed.
    pub sections: Vec<SectionId>,
    pub grade: InvestmentGrade,
    /// Charts that rendered successfully and were available to sections.
    pub charts: Vec<ChartKind>,
}

/// Turns analysis records into PDF reports.
///
/// Holds only read-only configuration; every call allocates its own canvas,
/// cursor and chart cache, so one generator can serve concurrent callers.
pub struct ReportGenerator {
    pub(super) config: GeneratorConfig,
    pub(super) chart_renderer: Arc<dyn ChartRenderer>,
    pub(super) executor: ExecutorImpl,
}

impl std::fmt::Debug for ReportGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportGenerator")
            .field("config", &self.config)
            .field("executor", &self.executor.name())
            .finish()
    }
}

impl ReportGenerator {
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a report and returns only the PDF bytes.
    pub fn generate(
        &self,
        record: &AnalysisRecord,
        config: &ReportConfiguration,
        branding: Option<&RealtorBrandingInfo>,
    ) -> Result<Vec<u8>, GenerationError> {
        self.generate_report(record, config, branding).map(|report| report.bytes)
    }

    pub fn generate_report(
        &self,
        record: &AnalysisRecord,
        config: &ReportConfiguration,
        branding: Option<&RealtorBrandingInfo>,
    ) -> Result<GeneratedReport, GenerationError> {
        let started = Instant::now();
        let (metrics, grade) = evaluate(record);
        log::debug!("Investment score {} -> grade {}", grade.score, grade.grade);

        let charts = self.render_charts(record, config, grade.score);

        let mut canvas = Canvas::new(&self.config.layout_config());
        let ctx = ComposeContext {
            record,
            config,
            branding,
            metrics,
            grade: &grade,
            charts: &charts,
            generated_on: self.config.report_date(),
        };
        let composed = sections::compose(&ctx, &mut canvas)?;
        let page_count = canvas.page_count();

        let bytes = PdfRenderer::new(self.document_info(branding)).render(&canvas)?;
        log::info!(
            "Generated {} page report ({} sections, {} charts, {} bytes) in {:.2?}",
            page_count,
            composed.len(),
            charts.len(),
            bytes.len(),
            started.elapsed()
        );

        Ok(GeneratedReport {
            bytes,
            page_count,
            sections: composed,
            grade,
            charts: charts.kinds(),
        })
    }

    /// Renders every applicable chart through the executor. Failures are
    /// logged and the chart is left out of the cache.
    fn render_charts(
        &self,
        record: &AnalysisRecord,
        config: &ReportConfiguration,
        score: u8,
    ) -> ChartCache {
        let kinds = applicable_charts(record, config);
        let started = Instant::now();
        let renderer = Arc::clone(&self.chart_renderer);
        let shared = Arc::new(record.clone());

        let results = self.executor.execute_all_fallible(kinds.clone(), move |kind| {
            renderer.render(kind, &shared, score)
        });

        let mut cache = ChartCache::new();
        for (kind, result) in kinds.into_iter().zip(results) {
            match result {
                Ok(chart) => cache.insert(chart),
                Err(e) => log::warn!("Omitting {:?} chart: {}", kind, e),
            }
        }
        log::debug!(
            "Rendered {} charts on {} in {:.2?}",
            cache.len(),
            self.executor.name(),
            started.elapsed()
        );
        cache
    }

    fn document_info(&self, branding: Option<&RealtorBrandingInfo>) -> DocumentInfo {
        let created = match self.config.generated_on {
            Some(date) => date.and_time(NaiveTime::MIN),
            None => Local::now().naive_local(),
        };
        DocumentInfo {
            title: self.config.title.clone(),
            author: branding.and_then(|b| b.name.clone()),
            creation_date: Some(created.format("D:%Y%m%d%H%M%S").to_string()),
        }
    }
}

/// Gauge, cash flow and expenses always; the short-term charts only when
/// the section is requested and there is data to plot.
pub fn applicable_charts(record: &AnalysisRecord, config: &ReportConfiguration) -> Vec<ChartKind> {
    let mut kinds = vec![ChartKind::Gauge, ChartKind::CashFlow, ChartKind::ExpenseBreakdown];
    if record.has_short_term() && config.includes(SectionId::ShortTermRental.key()) {
        kinds.push(ChartKind::RoiComparison);
        kinds.push(ChartKind::Occupancy);
    }
    kinds
}
