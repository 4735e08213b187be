mod common;

use common::fixtures::*;
use common::{GeneratedPdf, TestResult, sections, test_config};
use proplens::{
    AnalysisRecord, ChartError, ChartKind, ChartRenderer, GenerationError, RenderedChart,
    ReportGeneratorBuilder, SectionId,
};
use std::sync::Arc;

/// Fails every chart.
struct BrokenRenderer;

impl ChartRenderer for BrokenRenderer {
    fn cash_flow_projection(&self, _: &AnalysisRecord) -> Result<RenderedChart, ChartError> {
        Err(ChartError::Other("backend offline".into()))
    }
    fn roi_comparison(&self, _: &AnalysisRecord) -> Result<RenderedChart, ChartError> {
        Err(ChartError::Other("backend offline".into()))
    }
    fn expense_breakdown(&self, _: &AnalysisRecord) -> Result<RenderedChart, ChartError> {
        Err(ChartError::Other("backend offline".into()))
    }
    fn seasonal_occupancy(&self, _: &AnalysisRecord) -> Result<RenderedChart, ChartError> {
        Err(ChartError::Other("backend offline".into()))
    }
    fn investment_gauge(&self, _: u8) -> Result<RenderedChart, ChartError> {
        Err(ChartError::Other("backend offline".into()))
    }
}

/// Returns bytes that claim to be a chart but are not a PNG.
struct CorruptRenderer;

impl CorruptRenderer {
    fn chart(kind: ChartKind) -> Result<RenderedChart, ChartError> {
        Ok(RenderedChart {
            kind,
            png: Arc::new(b"definitely not a png".to_vec()),
            width: 400,
            height: 300,
        })
    }
}

impl ChartRenderer for CorruptRenderer {
    fn cash_flow_projection(&self, _: &AnalysisRecord) -> Result<RenderedChart, ChartError> {
        Self::chart(ChartKind::CashFlow)
    }
    fn roi_comparison(&self, _: &AnalysisRecord) -> Result<RenderedChart, ChartError> {
        Self::chart(ChartKind::RoiComparison)
    }
    fn expense_breakdown(&self, _: &AnalysisRecord) -> Result<RenderedChart, ChartError> {
        Self::chart(ChartKind::ExpenseBreakdown)
    }
    fn seasonal_occupancy(&self, _: &AnalysisRecord) -> Result<RenderedChart, ChartError> {
        Self::chart(ChartKind::Occupancy)
    }
    fn investment_gauge(&self, _: u8) -> Result<RenderedChart, ChartError> {
        Self::chart(ChartKind::Gauge)
    }
}

#[test]
fn test_failed_charts_leave_their_slots_empty() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let generator = ReportGeneratorBuilder::new()
        .with_config(test_config())
        .with_chart_renderer(Arc::new(BrokenRenderer))
        .build()?;
    let report = generator.generate_report(&short_term_record(), &sections(&ALL_SECTIONS), None)?;

    assert!(report.charts.is_empty());
    assert!(report.sections.contains(&SectionId::ShortTermRental));

    let pdf = GeneratedPdf::from_report(report)?;
    assert_eq!(pdf.image_count(), 0);
    assert_pdf_contains_text!(pdf, "Executive Summary");
    assert_pdf_contains_text!(pdf, "Nightly Rate");
    Ok(())
}

#[test]
fn test_undecodable_chart_is_a_render_error() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let generator = ReportGeneratorBuilder::new()
        .with_config(test_config())
        .with_chart_renderer(Arc::new(CorruptRenderer))
        .build()?;
    let result = generator.generate(&scenario_record(), &sections(&["executiveSummary"]), None);

    assert!(matches!(result, Err(GenerationError::Render(_))), "got {result:?}");
    Ok(())
}
