use crate::metrics::KeyMetrics;
use chrono::NaiveDate;
use proplens_charts::{ChartKind, RenderedChart};
use proplens_types::{AnalysisRecord, InvestmentGrade, RealtorBrandingInfo, ReportConfiguration};
use std::collections::BTreeMap;

/// Charts rendered for one generation, at most one per kind.
#[derive(Debug, Clone, Default)]
pub struct ChartCache {
    charts: BTreeMap<ChartKind, RenderedChart>,
}

impl ChartCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first chart stored for a kind; later inserts are ignored.
    pub fn insert(&mut self, chart: RenderedChart) {
        if self.charts.contains_key(&chart.kind) {
            log::warn!("Chart {:?} already rendered; keeping the first copy", chart.kind);
            return;
        }
        self.charts.insert(chart.kind, chart);
    }

    pub fn get(&self, kind: ChartKind) -> Option<&RenderedChart> {
        self.charts.get(&kind)
    }

    pub fn kinds(&self) -> Vec<ChartKind> {
        self.charts.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

/// Read-only inputs shared by every section while one report is composed.
///
/// Built once per `generate` call after metrics and charts are ready, so no
/// section recomputes the grade or renders a chart of its own.
#[derive(Debug, Clone, Copy)]
pub struct ComposeContext<'a> {
    pub record: &'a AnalysisRecord,
    pub config: &'a ReportConfiguration,
    pub branding: Option<&'a RealtorBrandingInfo>,
    pub metrics: KeyMetrics,
    pub grade: &'a InvestmentGrade,
    pub charts: &'a ChartCache,
    pub generated_on: NaiveDate,
}
