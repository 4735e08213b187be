#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use chrono::NaiveDate;
use lopdf::Document as LopdfDocument;
use proplens::{
    AnalysisRecord, GeneratedReport, GenerationError, GeneratorConfig, RealtorBrandingInfo,
    ReportConfiguration, ReportGenerator, ReportGeneratorBuilder, SvgChartRenderer,
};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
    pub report: Option<GeneratedReport>,
}

impl GeneratedPdf {
    /// Load a PDF from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self {
            bytes,
            doc,
            report: None,
        })
    }

    pub fn from_report(report: GeneratedReport) -> Result<Self, Box<dyn std::error::Error>> {
        let mut pdf = Self::from_bytes(report.bytes.clone())?;
        pdf.report = Some(report);
        Ok(pdf)
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of one page, 1-based
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    /// Number of embedded image XObjects
    pub fn image_count(&self) -> usize {
        pdf_assertions::count_images(&self.doc)
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Settings that keep test output stable: a fixed date, no system fonts.
pub fn test_config() -> GeneratorConfig {
    GeneratorConfig {
        generated_on: NaiveDate::from_ymd_opt(2024, 3, 15),
        system_fonts: false,
        ..Default::default()
    }
}

pub fn test_generator() -> ReportGenerator {
    ReportGeneratorBuilder::new()
        .with_config(test_config())
        .with_chart_renderer(Arc::new(SvgChartRenderer::without_fonts()))
        .build()
        .expect("test configuration is valid")
}

/// Generate a report with the test generator
pub fn generate_report(
    record: &AnalysisRecord,
    config: &ReportConfiguration,
    branding: Option<&RealtorBrandingInfo>,
) -> Result<GeneratedPdf, GenerationError> {
    let report = test_generator().generate_report(record, config, branding)?;
    Ok(GeneratedPdf::from_report(report).expect("generated bytes load back as PDF"))
}

pub fn sections(keys: &[&str]) -> ReportConfiguration {
    ReportConfiguration {
        selected_sections: keys.iter().map(|k| k.to_string()).collect(),
        ..Default::default()
    }
}
