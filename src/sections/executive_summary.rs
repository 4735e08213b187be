use super::{SectionId, chart_block};
use crate::pipeline::context::ComposeContext;
use proplens_charts::ChartKind;
use proplens_layout::primitives::{paragraph, section_header};
use proplens_layout::{Canvas, LayoutCursor, LayoutError, TextPreset};
use proplens_types::format::currency;
use proplens_types::{AnalysisRecord, Palette};

pub(super) fn compose(
    ctx: &ComposeContext<'_>,
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
) -> Result<(), LayoutError> {
    section_header(canvas, cursor, SectionId::ExecutiveSummary.title(), Palette::PRIMARY)?;
    paragraph(canvas, cursor, &summary_text(ctx.record), TextPreset::Body, Palette::SECONDARY)?;

    let width = cursor.geometry.content_width();
    chart_block(
        ctx,
        canvas,
        cursor,
        ChartKind::CashFlow,
        Some("5-Year Cash Flow Projection"),
        width,
        Some(width * 0.5),
    )
}

/// The summary paragraph, assembled from the record's numbers.
pub(crate) fn summary_text(record: &AnalysisRecord) -> String {
    let lt = &record.long_term_rental;
    let address = record.property_address.trim();
    let address = if address.is_empty() { "the property" } else { address };

    let mut text = format!(
        "This comprehensive analysis evaluates the investment potential of {}. With a purchase price of {}, the property demonstrates ",
        address,
        currency(record.property_details.price)
    );
    if lt.monthly_cash_flow > 0.0 {
        text.push_str(&format!(
            "positive monthly cash flow of {} and an annual ROI of {:.1}%. ",
            currency(lt.monthly_cash_flow),
            proplens_types::format::finite_or_zero(lt.annual_roi)
        ));
    } else {
        text.push_str(&format!(
            "negative monthly cash flow of {}, requiring careful consideration. ",
            currency(lt.monthly_cash_flow)
        ));
    }
    if let Some(str_data) = &record.short_term_rental {
        text.push_str(&format!(
            "Short-term rental analysis indicates potential monthly revenue of {}, offering an alternative investment strategy. ",
            currency(str_data.monthly_revenue)
        ));
    }
    text.push_str(
        "This report provides detailed financial projections, market comparisons, and strategic recommendations to support your investment decision-making process.",
    );
    text
}
