//! End-to-end report generation benchmarks
//!
//! Measures a full report with varying:
//! - Section selections (cover only, standard, detailed)
//! - Chart executors (sequential, parallel)
//!
//! Run benchmarks: `cargo bench --bench report_generation`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use proplens::{
    AnalysisRecord, ExecutorImpl, GeneratorConfig, ReportConfiguration, ReportGeneratorBuilder,
    SvgChartRenderer,
};
use serde_json::json;
use std::hint::black_box;
use std::sync::Arc;

fn bench_record() -> AnalysisRecord {
    serde_json::from_value(json!({
        "propertyAddress": "1428 Maple Avenue, Columbus, OH",
        "propertyDetails": { "propertyType": "Single Family", "price": 500000, "bedrooms": 4, "bathrooms": 2.5, "sqft": 2400 },
        "costs": { "purchasePrice": 500000, "downPayment": 100000, "closingCosts": 15000, "totalCashRequired": 120000 },
        "longTermRental": {
            "monthlyRent": 3600, "effectiveIncome": 3420, "totalExpenses": 2820, "monthlyCashFlow": 600,
            "capRate": 6.5, "annualROI": 11, "vacancyRate": 0.05, "mortgagePayment": 2100,
            "propertyTax": 500, "insurance": 120, "maintenance": 100
        },
        "strAnalysis": {
            "averageDailyRate": 210, "occupancyRate": 0.68, "monthlyRevenue": 4340,
            "monthlyCashFlow": 1250, "annualROI": 17.5
        },
        "comparables": [
            {
                "address": "1410 Maple Avenue",
                "price": 489000, "bedrooms": 4, "bathrooms": 2, "sqft": 2300, "pricePerSqft": 213
            }
        ],
        "marketNarrative": "Inventory remains below pre-2020 levels."
    }))
    .expect("benchmark record is valid")
}

fn selection(name: &str) -> ReportConfiguration {
    let all = [
        "executiveSummary",
        "propertyDetails",
        "financialAnalysis",
        "longTermRental",
        "shortTermRental",
        "comparativeAnalysis",
        "investmentRecommendations",
        "riskAssessment",
        "marketTrends",
    ];
    let keys: &[&str] = match name {
        "cover_only" => &[],
        "standard" => &all[..4],
        _ => &all,
    };
    ReportConfiguration {
        selected_sections: keys.iter().map(|k| k.to_string()).collect(),
        format: if name == "detailed" { "detailed".into() } else { "standard".into() },
        ..Default::default()
    }
}

fn benchmark_section_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_selection");
    let record = bench_record();
    let generator = ReportGeneratorBuilder::new()
        .with_config(GeneratorConfig {
            system_fonts: false,
            ..Default::default()
        })
        .with_chart_renderer(Arc::new(SvgChartRenderer::without_fonts()))
        .build()
        .expect("Failed to build generator");

    for name in ["cover_only", "standard", "detailed"] {
        let config = selection(name);
        group.bench_with_input(BenchmarkId::new("sections", name), &config, |b, config| {
            b.iter(|| {
                generator
                    .generate(black_box(&record), config, None)
                    .expect("Failed to generate report")
            });
        });
    }

    group.finish();
}

fn benchmark_chart_executor(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_executor");
    let record = bench_record();
    let config = selection("detailed");

    for parallel in [false, true] {
        let generator = ReportGeneratorBuilder::new()
            .with_config(GeneratorConfig {
                system_fonts: false,
                ..Default::default()
            })
            .with_chart_renderer(Arc::new(SvgChartRenderer::without_fonts()))
            .with_executor(ExecutorImpl::for_parallelism(parallel))
            .build()
            .expect("Failed to build generator");

        group.bench_with_input(BenchmarkId::new("parallel", parallel), &parallel, |b, _| {
            b.iter(|| {
                generator
                    .generate(black_box(&record), &config, None)
                    .expect("Failed to generate report")
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_section_selection, benchmark_chart_executor);
criterion_main!(benches);
