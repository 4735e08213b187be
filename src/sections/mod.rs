//! Report sections and the order they are composed in.
//!
//! Every section draws through the layout primitives onto the shared
//! [`Canvas`], threading one [`LayoutCursor`]. Sections never render charts;
//! they place whatever the [`ChartCache`](crate::pipeline::ChartCache) holds
//! and silently skip what it does not.

mod chrome;
mod comparables;
mod cover;
mod executive_summary;
mod financial;
mod long_term;
mod market_trends;
mod notes;
mod property_details;
mod recommendations;
mod risk;
mod short_term;
mod toc;

pub use recommendations::recommendations;
pub use risk::{RiskFactor, RiskLevel, risk_factors};

use crate::pipeline::context::ComposeContext;
use proplens_charts::ChartKind;
use proplens_layout::algorithms::pagination::ensure_space;
use proplens_layout::primitives::{place_image, sub_header, sub_header_height};
use proplens_layout::{Align, Canvas, LayoutCursor, LayoutError, new_page};
use proplens_types::{ReportConfiguration, mm};
use serde::Serialize;
use std::fmt;

/// Space a section opening needs; a header never sits alone at a page foot.
const SECTION_OPENING: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionId {
    Cover,
    TableOfContents,
    ExecutiveSummary,
    PropertyDetails,
    FinancialAnalysis,
    LongTermRental,
    ShortTermRental,
    ComparativeAnalysis,
    InvestmentRecommendations,
    RiskAssessment,
    MarketTrends,
    CustomNotes,
}

impl SectionId {
    /// Composition order. Request order is irrelevant.
    pub const CANONICAL: [SectionId; 12] = [
        SectionId::Cover,
        SectionId::TableOfContents,
        SectionId::ExecutiveSummary,
        SectionId::PropertyDetails,
        SectionId::FinancialAnalysis,
        SectionId::LongTermRental,
        SectionId::ShortTermRental,
        SectionId::ComparativeAnalysis,
        SectionId::InvestmentRecommendations,
        SectionId::RiskAssessment,
        SectionId::MarketTrends,
        SectionId::CustomNotes,
    ];

    /// Parses a requestable section identifier. The cover, table of contents
    /// and notes are driven by the format and notes fields instead.
    pub fn from_key(key: &str) -> Option<SectionId> {
        Some(match key {
            "executiveSummary" => SectionId::ExecutiveSummary,
            "propertyDetails" => SectionId::PropertyDetails,
            "financialAnalysis" => SectionId::FinancialAnalysis,
            "longTermRental" => SectionId::LongTermRental,
            "shortTermRental" => SectionId::ShortTermRental,
            "comparativeAnalysis" => SectionId::ComparativeAnalysis,
            "investmentRecommendations" => SectionId::InvestmentRecommendations,
            "riskAssessment" => SectionId::RiskAssessment,
            "marketTrends" => SectionId::MarketTrends,
            _ => return None,
        })
    }

    pub fn key(self) -> &'static str {
        match self {
            SectionId::Cover => "cover",
            SectionId::TableOfContents => "tableOfContents",
            SectionId::ExecutiveSummary => "executiveSummary",
            SectionId::PropertyDetails => "propertyDetails",
            SectionId::FinancialAnalysis => "financialAnalysis",
            SectionId::LongTermRental => "longTermRental",
            SectionId::ShortTermRental => "shortTermRental",
            SectionId::ComparativeAnalysis => "comparativeAnalysis",
            SectionId::InvestmentRecommendations => "investmentRecommendations",
            SectionId::RiskAssessment => "riskAssessment",
            SectionId::MarketTrends => "marketTrends",
            SectionId::CustomNotes => "customNotes",
        }
    }

    /// Heading used in the body and in the table of contents.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Cover => "Cover",
            SectionId::TableOfContents => "Table of Contents",
            SectionId::ExecutiveSummary => "Executive Summary",
            SectionId::PropertyDetails => "Property Details",
            SectionId::FinancialAnalysis => "Financial Analysis",
            SectionId::LongTermRental => "Long-term Rental Analysis",
            SectionId::ShortTermRental => "Short-term Rental Analysis",
            SectionId::ComparativeAnalysis => "Market Comparison",
            SectionId::InvestmentRecommendations => "Investment Recommendations",
            SectionId::RiskAssessment => "Risk Assessment",
            SectionId::MarketTrends => "Market Trends & Outlook",
            SectionId::CustomNotes => "Additional Notes",
        }
    }

    /// Whether the section is listed in the table of contents.
    fn in_contents(self) -> bool {
        !matches!(
            self,
            SectionId::Cover | SectionId::TableOfContents | SectionId::CustomNotes
        )
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The sections a configuration yields, in canonical order and without
/// duplicates. Unknown identifiers are logged and dropped. The short-term
/// section additionally needs short-term data on the record.
pub fn resolve(config: &ReportConfiguration, has_short_term: bool) -> Vec<SectionId> {
    for key in &config.selected_sections {
        if SectionId::from_key(key).is_none() {
            log::warn!("Skipping unknown report section '{}'", key);
        }
    }
    let requested = |id: SectionId| {
        config
            .selected_sections
            .iter()
            .any(|k| SectionId::from_key(k) == Some(id))
    };

    SectionId::CANONICAL
        .into_iter()
        .filter(|&id| match id {
            SectionId::Cover => true,
            SectionId::TableOfContents => config.is_detailed(),
            SectionId::CustomNotes => config.notes().is_some(),
            SectionId::ShortTermRental => {
                let wanted = requested(id);
                if wanted && !has_short_term {
                    log::debug!(
                        "Short-term rental section requested without short-term data; omitting"
                    );
                }
                wanted && has_short_term
            }
            other => requested(other),
        })
        .collect()
}

/// A table of contents line: section and the 1-based page it starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentsEntry {
    pub section: SectionId,
    pub page: usize,
}

/// Lays out the whole report onto `canvas` and returns the sections composed.
///
/// The table of contents is filled last, once every section's start page is
/// known. Footer chrome is drawn after composition so it can print the final
/// page count.
pub fn compose(
    ctx: &ComposeContext<'_>,
    canvas: &mut Canvas,
) -> Result<Vec<SectionId>, LayoutError> {
    let plan = resolve(ctx.config, ctx.record.has_short_term());
    let mut cursor = LayoutCursor::new(canvas.geometry);
    chrome::header(ctx, canvas, &mut cursor);

    let mut contents_page = None;
    let mut contents = Vec::new();
    // The cover and the contents page each stand alone. The break is taken
    // only once something follows them.
    let mut page_pending = false;

    for &section in &plan {
        if std::mem::take(&mut page_pending) {
            new_page(canvas, &mut cursor)?;
        }
        log::debug!("Composing section '{}' from page {}", section, cursor.page_index + 1);
        match section {
            SectionId::Cover => {
                cover::compose(ctx, canvas, &mut cursor)?;
                page_pending = true;
            }
            SectionId::TableOfContents => {
                contents_page = Some(cursor.page_index);
                page_pending = true;
            }
            body => {
                ensure_space(canvas, &mut cursor, mm(SECTION_OPENING))?;
                if body.in_contents() {
                    contents.push(ContentsEntry {
                        section: body,
                        page: cursor.page_index + 1,
                    });
                }
                compose_body(body, ctx, canvas, &mut cursor)?;
            }
        }
    }

    if let Some(page) = contents_page {
        toc::compose(canvas, page, &contents)?;
    }
    chrome::footer(ctx, canvas);
    Ok(plan)
}

fn compose_body(
    section: SectionId,
    ctx: &ComposeContext<'_>,
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
) -> Result<(), LayoutError> {
    match section {
        SectionId::ExecutiveSummary => executive_summary::compose(ctx, canvas, cursor),
        SectionId::PropertyDetails => property_details::compose(ctx, canvas, cursor),
        SectionId::FinancialAnalysis => financial::compose(ctx, canvas, cursor),
        SectionId::LongTermRental => long_term::compose(ctx, canvas, cursor),
        SectionId::ShortTermRental => short_term::compose(ctx, canvas, cursor),
        SectionId::ComparativeAnalysis => comparables::compose(ctx, canvas, cursor),
        SectionId::InvestmentRecommendations => recommendations::compose(ctx, canvas, cursor),
        SectionId::RiskAssessment => risk::compose(ctx, canvas, cursor),
        SectionId::MarketTrends => market_trends::compose(ctx, canvas, cursor),
        SectionId::CustomNotes => notes::compose(ctx, canvas, cursor),
        SectionId::Cover | SectionId::TableOfContents => Ok(()),
    }
}

/// Places a cached chart under an optional sub-header. Does nothing when the
/// chart was not rendered. `height` defaults to the chart's own aspect ratio;
/// oversized charts are scaled down to fit one page.
pub(crate) fn chart_block(
    ctx: &ComposeContext<'_>,
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
    kind: ChartKind,
    title: Option<&str>,
    width: f32,
    height: Option<f32>,
) -> Result<(), LayoutError> {
    let Some(chart) = ctx.charts.get(kind) else {
        log::debug!("No {:?} chart available; skipping", kind);
        return Ok(());
    };
    let heading = if title.is_some() { sub_header_height() } else { 0.0 };
    let mut width = width;
    let mut height = height.unwrap_or(width * chart.aspect_ratio());
    let usable = cursor.geometry.usable_height() - heading - mm(4.0);
    if height > usable {
        width *= usable / height;
        height = usable;
    }

    // Heading and image move to the next page together.
    ensure_space(canvas, cursor, heading + height)?;
    if let Some(title) = title {
        sub_header(canvas, cursor, title)?;
    }
    place_image(
        canvas,
        cursor,
        kind.resource_key(),
        chart.png.clone(),
        width,
        height,
        Align::Center,
    )
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use proplens_charts::RenderedChart;
    use proplens_types::{AnalysisRecord, ShortTermRental};
    use std::sync::Arc;

    fn config(keys: &[&str]) -> ReportConfiguration {
        ReportConfiguration {
            selected_sections: keys.iter().map(|k| k.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn resolve_uses_canonical_order_and_dedups() {
        let cfg =
            config(&["riskAssessment", "executiveSummary", "riskAssessment", "propertyDetails"]);
        assert_eq!(
            resolve(&cfg, false),
            vec![
                SectionId::Cover,
                SectionId::ExecutiveSummary,
                SectionId::PropertyDetails,
                SectionId::RiskAssessment
            ]
        );
    }

    #[test]
    fn resolve_skips_unknown_identifiers() {
        let cfg = config(&["floorPlan", "marketTrends"]);
        assert_eq!(resolve(&cfg, false), vec![SectionId::Cover, SectionId::MarketTrends]);
    }

    #[test]
    fn short_term_section_needs_data_and_request() {
        assert!(
            !resolve(&config(&["shortTermRental"]), false).contains(&SectionId::ShortTermRental)
        );
        assert!(resolve(&config(&["shortTermRental"]), true).contains(&SectionId::ShortTermRental));
        assert!(!resolve(&config(&["longTermRental"]), true).contains(&SectionId::ShortTermRental));
    }

    #[test]
    fn detailed_format_and_notes_add_sections() {
        let mut cfg = config(&["executiveSummary"]);
        cfg.format = "detailed".into();
        cfg.custom_notes = Some("  Seller motivated.  ".into());
        assert_eq!(
            resolve(&cfg, false),
            vec![
                SectionId::Cover,
                SectionId::TableOfContents,
                SectionId::ExecutiveSummary,
                SectionId::CustomNotes
            ]
        );

        cfg.custom_notes = Some("   ".into());
        assert!(!resolve(&cfg, false).contains(&SectionId::CustomNotes));
    }

    #[test]
    fn key_round_trips_for_requestable_sections() {
        for id in SectionId::CANONICAL {
            match SectionId::from_key(id.key()) {
                Some(parsed) => assert_eq!(parsed, id),
                None => assert!(!id.in_contents()),
            }
        }
    }

    #[test]
    fn cover_alone_fills_one_page() {
        let fixture = Fixture::new(AnalysisRecord::default());
        let (mut canvas, _) = surface();
        assert_eq!(compose(&fixture.ctx(), &mut canvas).unwrap(), vec![SectionId::Cover]);
        assert_eq!(canvas.page_count(), 1);
    }

    #[test]
    fn format_match_is_exact() {
        let mut cfg = config(&["executiveSummary"]);
        for format in ["Detailed", "DETAILED", " detailed"] {
            cfg.format = format.into();
            assert!(!resolve(&cfg, false).contains(&SectionId::TableOfContents), "{format}");
        }
    }

    #[test]
    fn contents_page_without_body_adds_no_blank_page() {
        let mut fixture = Fixture::new(AnalysisRecord::default());
        fixture.config.format = "detailed".into();
        let (mut canvas, _) = surface();

        let composed = compose(&fixture.ctx(), &mut canvas).unwrap();
        assert_eq!(composed, vec![SectionId::Cover, SectionId::TableOfContents]);
        assert_eq!(canvas.page_count(), 2);
        assert!(canvas.page_text(1).contains(&"Table of Contents"));
    }

    #[test]
    fn chart_heading_moves_with_its_image() {
        let mut fixture = Fixture::new(AnalysisRecord::default());
        fixture.charts.insert(RenderedChart {
            kind: ChartKind::CashFlow,
            png: Arc::new(vec![0u8; 8]),
            width: 600,
            height: 400,
        });
        let (mut canvas, mut cursor) = surface();
        // Room for the heading and a sliver of the chart, not the whole 80 mm.
        let bottom = cursor.geometry.content_bottom();
        cursor.set_y(bottom - mm(45.0));

        let ctx = fixture.ctx();
        chart_block(
            &ctx,
            &mut canvas,
            &mut cursor,
            ChartKind::CashFlow,
            Some("Projection"),
            mm(120.0),
            None,
        )
        .unwrap();

        assert_eq!(canvas.page_count(), 2);
        assert_eq!(canvas.find_text("Projection"), Some(1));
        assert_eq!(canvas.image_count(), 1);
        assert!(canvas.pages[0].is_empty());
        assert!(cursor.y <= bottom);
    }

    #[test]
    fn contents_lists_real_start_pages() {
        let mut record = AnalysisRecord::default();
        record.short_term_rental = Some(ShortTermRental::default());
        let mut fixture = Fixture::new(record);
        fixture.config = config(&["executiveSummary", "riskAssessment", "marketTrends"]);
        fixture.config.format = "detailed".into();

        let (mut canvas, _) = surface();
        let composed = compose(&fixture.ctx(), &mut canvas).unwrap();
        assert_eq!(composed[1], SectionId::TableOfContents);

        let toc_text = canvas.page_text(1);
        assert!(toc_text.contains(&"Table of Contents"));
        assert!(toc_text.contains(&"Executive Summary"));

        let expected_page = (2..canvas.page_count())
            .find(|&p| canvas.page_text(p).contains(&"Risk Assessment"))
            .map(|p| (p + 1).to_string())
            .unwrap();
        assert!(toc_text.contains(&expected_page.as_str()));
    }

    #[test]
    fn nothing_crosses_the_content_bottom() {
        let mut record = AnalysisRecord::default();
        record.market_narrative = Some("Inventory remains tight across the metro. ".repeat(80));
        let mut fixture = Fixture::new(record);
        fixture.config = config(&[
            "executiveSummary",
            "propertyDetails",
            "financialAnalysis",
            "longTermRental",
            "comparativeAnalysis",
            "investmentRecommendations",
            "riskAssessment",
            "marketTrends",
        ]);
        fixture.config.custom_notes = Some("Roof replaced in 2019. ".repeat(120));

        let (mut canvas, cursor) = surface();
        compose(&fixture.ctx(), &mut canvas).unwrap();
        let bottom = cursor.geometry.content_bottom();
        assert!(canvas.page_count() > 3);

        for page in &canvas.pages {
            for element in page {
                // footer chrome lives in the band below the content area
                if element.y >= bottom {
                    continue;
                }
                assert!(element.y + element.height <= bottom + 0.5, "{:?}", element);
            }
        }
    }
}
