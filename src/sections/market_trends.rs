use super::SectionId;
use crate::pipeline::context::ComposeContext;
use proplens_layout::primitives::{BulletMarker, bullet, paragraph, section_header, sub_header};
use proplens_layout::{Canvas, LayoutCursor, LayoutError, TextPreset};
use proplens_types::Palette;

const OUTLOOK: [&str; 5] = [
    "Property values increased 5-7% annually over past 5 years",
    "Strong rental demand due to population growth",
    "Interest rates currently favorable for investment",
    "Low unemployment and business growth in area",
    "Future development plans may impact property values",
];

pub(super) fn compose(
    ctx: &ComposeContext<'_>,
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
) -> Result<(), LayoutError> {
    section_header(canvas, cursor, SectionId::MarketTrends.title(), Palette::PRIMARY)?;

    // Upstream narrative is printed verbatim.
    if let Some(narrative) = ctx
        .record
        .market_narrative
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
    {
        paragraph(canvas, cursor, narrative, TextPreset::Body, Palette::SECONDARY)?;
    }

    sub_header(canvas, cursor, "Market Outlook")?;
    for item in OUTLOOK {
        bullet(canvas, cursor, item, BulletMarker::Triangle(Palette::SUCCESS))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{Fixture, all_text, surface};
    use proplens_types::AnalysisRecord;

    #[test]
    fn narrative_precedes_outlook() {
        let mut record = AnalysisRecord::default();
        record.market_narrative = Some("Inventory is tight.".into());
        let fixture = Fixture::new(record);
        let (mut canvas, mut cursor) = surface();
        compose(&fixture.ctx(), &mut canvas, &mut cursor).unwrap();

        let text = all_text(&canvas);
        let narrative = text.iter().position(|t| t == "Inventory is tight.").unwrap();
        let first_bullet = text.iter().position(|t| t == OUTLOOK[0]).unwrap();
        assert!(narrative < first_bullet);
        assert!(text.iter().any(|t| t == OUTLOOK[4]));
    }

    #[test]
    fn blank_narrative_is_skipped() {
        let mut record = AnalysisRecord::default();
        record.market_narrative = Some("   ".into());
        let fixture = Fixture::new(record);
        let (mut canvas, mut cursor) = surface();
        compose(&fixture.ctx(), &mut canvas, &mut cursor).unwrap();
        assert_eq!(all_text(&canvas)[1], "Market Outlook");
    }
}
