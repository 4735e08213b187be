use super::SectionId;
use crate::pipeline::context::ComposeContext;
use proplens_layout::primitives::{
    LedgerKind, LedgerRow, MetricCard, ledger_table, metric_cards, section_header, sub_header,
};
use proplens_layout::{Canvas, LayoutCursor, LayoutError};
use proplens_types::format::{currency, percent};
use proplens_types::{LongTermRental, Palette, mm};

pub(super) fn compose(
    ctx: &ComposeContext<'_>,
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
) -> Result<(), LayoutError> {
    section_header(canvas, cursor, SectionId::LongTermRental.title(), Palette::PRIMARY)?;
    let lt = &ctx.record.long_term_rental;

    let cards = [
        MetricCard::new("Monthly Rent", currency(lt.monthly_rent)),
        MetricCard::signed(
            "Monthly Cash Flow",
            currency(lt.monthly_cash_flow),
            lt.monthly_cash_flow > 0.0,
        ),
        MetricCard::new("Cap Rate", percent(lt.cap_rate, 2)),
        MetricCard::new("Annual ROI", percent(lt.annual_roi, 2)),
    ];
    metric_cards(canvas, cursor, &cards, mm(25.0))?;

    sub_header(canvas, cursor, "Cash Flow Analysis")?;
    ledger_table(canvas, cursor, &ledger(lt))
}

/// Income, each monthly expense, and the resulting net cash flow.
fn ledger(lt: &LongTermRental) -> Vec<LedgerRow> {
    let row = |label: &str, amount: f64, kind: LedgerKind| LedgerRow {
        label: label.to_string(),
        amount: currency(amount),
        kind,
        positive: amount > 0.0,
    };
    vec![
        row("Monthly Rental Income", lt.effective_income, LedgerKind::Income),
        row("Mortgage Payment", lt.mortgage_payment, LedgerKind::Expense),
        row("Property Tax", lt.property_tax, LedgerKind::Expense),
        row("Insurance", lt.insurance, LedgerKind::Expense),
        row("HOA/Maintenance", lt.hoa_fees + lt.maintenance, LedgerKind::Expense),
        row("Property Management", lt.property_management, LedgerKind::Expense),
        row("Net Monthly Cash Flow", lt.monthly_cash_flow, LedgerKind::Total),
    ]
}
