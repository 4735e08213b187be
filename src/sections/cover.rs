use super::chart_block;
use crate::pipeline::context::ComposeContext;
use proplens_charts::ChartKind;
use proplens_layout::algorithms::pagination::ensure_space;
use proplens_layout::primitives::shapes::{draw_rect, draw_text, fill_rect};
use proplens_layout::primitives::text_line;
use proplens_layout::text::wrap::{truncate_to_width, wrap_text};
use proplens_layout::{
    Align, Canvas, FontFace, LayoutCursor, LayoutError, Stroke, TextPreset, TextStyle,
};
use proplens_types::{Color, Palette, Rect, mm};

const CARD_HEIGHT_MM: f32 = 35.0;
const CARD_GAP_MM: f32 = 5.0;
const CARD_VALUE: TextStyle = TextStyle {
    face: FontFace::Bold,
    size: 16.0,
};

/// Title block, executive dashboard, grade gauge and generation stamp.
pub(super) fn compose(
    ctx: &ComposeContext<'_>,
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
) -> Result<(), LayoutError> {
    cursor.advance(mm(5.0));
    text_line(
        canvas,
        cursor,
        "Property Investment",
        TextPreset::Title,
        Palette::GRADIENT_START,
        Align::Center,
    )?;
    text_line(
        canvas,
        cursor,
        "Analysis Report",
        TextPreset::Title,
        Palette::GRADIENT_END,
        Align::Center,
    )?;
    cursor.advance(mm(8.0));

    let address = ctx.record.property_address.trim();
    let address = if address.is_empty() { "Property Address" } else { address };
    for line in wrap_text(address, TextPreset::H2.into(), cursor.geometry.content_width()) {
        text_line(canvas, cursor, &line, TextPreset::H2, Palette::SECONDARY, Align::Center)?;
    }
    cursor.advance(mm(12.0));

    dashboard(ctx, canvas, cursor)?;

    chart_block(ctx, canvas, cursor, ChartKind::Gauge, None, mm(60.0), Some(mm(45.0)))?;

    let date = ctx.generated_on.format("%B %-d, %Y");
    text_line(
        canvas,
        cursor,
        &format!("Generated: {}", date),
        TextPreset::Body,
        Palette::SECONDARY,
        Align::Center,
    )?;
    if let Some(name) = ctx
        .branding
        .and_then(|b| b.name.as_deref())
        .filter(|n| !n.trim().is_empty())
    {
        text_line(
            canvas,
            cursor,
            &format!("Prepared by: {}", name.trim()),
            TextPreset::Body,
            Palette::SECONDARY,
            Align::Center,
        )?;
    }
    Ok(())
}

/// Four headline cards, each topped with a colored accent bar.
fn dashboard(
    ctx: &ComposeContext<'_>,
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
) -> Result<(), LayoutError> {
    let m = &ctx.metrics;
    let cash_flow_color = if m.cash_flow_positive { Palette::SUCCESS } else { Palette::DANGER };
    let cards = [
        ("Purchase Price", m.purchase_price_text(), Palette::PRIMARY),
        ("Monthly Cash Flow", m.monthly_cash_flow_text(), cash_flow_color),
        ("Annual ROI", m.annual_roi_text(), Palette::ACCENT),
        ("Cap Rate", m.cap_rate_text(), Palette::SECONDARY),
    ];

    let height = mm(CARD_HEIGHT_MM);
    ensure_space(canvas, cursor, height)?;
    let g = cursor.geometry;
    let page = cursor.page_index;
    let gap = mm(CARD_GAP_MM);
    let width = (g.content_width() - gap * (cards.len() - 1) as f32) / cards.len() as f32;

    let mut x = g.content_left();
    for (label, value, color) in &cards {
        draw_rect(
            canvas,
            page,
            Rect::new(x, cursor.y, width, height),
            Some(Color::rgb(250, 250, 250)),
            Some(Stroke::solid(Color::gray(220), 0.75)),
            mm(3.0),
        );
        fill_rect(canvas, page, Rect::new(x, cursor.y, width, mm(3.0)), *color);

        let center = x + width / 2.0;
        draw_text(
            canvas,
            page,
            center,
            cursor.y + mm(8.0),
            label,
            TextPreset::Small,
            Palette::SECONDARY,
            Align::Center,
        );
        let value = truncate_to_width(value, CARD_VALUE, width - mm(4.0));
        draw_text(
            canvas,
            page,
            center,
            cursor.y + mm(17.0),
            &value,
            CARD_VALUE,
            *color,
            Align::Center,
        );
        x += width + gap;
    }

    cursor.advance(height + mm(10.0));
    Ok(())
}
