use super::{SectionId, chart_block};
use crate::pipeline::context::ComposeContext;
use proplens_charts::ChartKind;
use proplens_layout::primitives::{MetricCard, metric_cards, section_header};
use proplens_layout::{Canvas, LayoutCursor, LayoutError};
use proplens_types::format::{currency, fraction_percent, percent};
use proplens_types::{Palette, mm};

/// Only reached when the record carries short-term data.
pub(super) fn compose(
    ctx: &ComposeContext<'_>,
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
) -> Result<(), LayoutError> {
    let Some(str_data) = &ctx.record.short_term_rental else {
        return Ok(());
    };
    section_header(canvas, cursor, SectionId::ShortTermRental.title(), Palette::ACCENT)?;

    let width = cursor.geometry.content_width();
    chart_block(
        ctx,
        canvas,
        cursor,
        ChartKind::RoiComparison,
        Some("Rental Strategy Comparison"),
        width,
        None,
    )?;

    let cards = [
        MetricCard::new("Nightly Rate", currency(str_data.average_daily_rate)),
        MetricCard::new("Occupancy", fraction_percent(str_data.occupancy_rate, 0)),
        MetricCard::new("Monthly Revenue", currency(str_data.monthly_revenue)),
        MetricCard::new("Annual ROI", percent(str_data.annual_roi, 1)),
    ];
    metric_cards(canvas, cursor, &cards, mm(25.0))?;

    chart_block(
        ctx,
        canvas,
        cursor,
        ChartKind::Occupancy,
        Some("Seasonal Occupancy Patterns"),
        width * 0.7,
        None,
    )
}
