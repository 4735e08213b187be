use super::{SectionId, chart_block};
use crate::pipeline::context::ComposeContext;
use proplens_charts::ChartKind;
use proplens_layout::primitives::{
    Table, TableColumn, highlight_box, section_header, styled_table, sub_header,
};
use proplens_layout::{Align, Canvas, LayoutCursor, LayoutError};
use proplens_types::format::currency;
use proplens_types::{Palette, PurchaseCosts, mm};

pub(super) fn compose(
    ctx: &ComposeContext<'_>,
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
) -> Result<(), LayoutError> {
    section_header(canvas, cursor, SectionId::FinancialAnalysis.title(), Palette::PRIMARY)?;

    let costs = &ctx.record.costs;
    sub_header(canvas, cursor, "Initial Investment Requirements")?;
    styled_table(canvas, cursor, &investment_table(costs))?;
    highlight_box(
        canvas,
        cursor,
        "Total Cash Required",
        &currency(costs.total_cash_required),
        Palette::ACCENT,
    )?;

    let side = cursor.geometry.content_width() - mm(40.0);
    chart_block(
        ctx,
        canvas,
        cursor,
        ChartKind::ExpenseBreakdown,
        Some("Monthly Expense Distribution"),
        side,
        Some(side),
    )
}

fn investment_table(costs: &PurchaseCosts) -> Table {
    let rows = [
        ("Purchase Price", costs.purchase_price),
        ("Down Payment (20%)", costs.down_payment),
        ("Closing Costs", costs.closing_costs),
        ("Initial Repairs", costs.initial_repairs),
    ];
    Table {
        columns: vec![
            TableColumn::new("Item", 2.0, Align::Left),
            TableColumn::new("Amount", 1.0, Align::Right),
        ],
        rows: rows
            .iter()
            .map(|(label, amount)| vec![label.to_string(), currency(*amount)])
            .collect(),
        header_fill: Palette::PRIMARY,
    }
}
