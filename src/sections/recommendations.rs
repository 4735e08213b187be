use super::SectionId;
use crate::metrics::grade_color;
use crate::pipeline::context::ComposeContext;
use proplens_layout::primitives::{BulletMarker, bullet, grade_badge, section_header};
use proplens_layout::{Canvas, LayoutCursor, LayoutError};
use proplens_types::format::finite_or_zero;
use proplens_types::{AnalysisRecord, Color, Palette};

pub(super) fn compose(
    ctx: &ComposeContext<'_>,
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
) -> Result<(), LayoutError> {
    section_header(canvas, cursor, SectionId::InvestmentRecommendations.title(), Palette::SUCCESS)?;
    let grade = ctx.grade;
    grade_badge(canvas, cursor, &grade.grade, &grade.description, grade_color(&grade.grade))?;

    for text in recommendations(ctx.record) {
        bullet(canvas, cursor, text, BulletMarker::Dot(tone(text)))?;
    }
    Ok(())
}

/// Recommendation catalog for a record, in display order.
pub fn recommendations(record: &AnalysisRecord) -> Vec<&'static str> {
    let lt = &record.long_term_rental;
    let roi = finite_or_zero(lt.annual_roi);
    let cash_flow = finite_or_zero(lt.monthly_cash_flow);
    let cap_rate = finite_or_zero(lt.cap_rate);
    let mut out = Vec::with_capacity(6);

    out.push(if roi >= 10.0 {
        "Strong ROI indicates excellent investment potential. Consider proceeding with purchase."
    } else if roi >= 5.0 {
        "Moderate ROI suggests reasonable investment opportunity. Compare with alternative investments."
    } else {
        "Low ROI indicates limited investment potential. Consider negotiating price or exploring other properties."
    });

    out.push(if cash_flow > 500.0 {
        "Positive cash flow provides good monthly income and financial stability."
    } else if cash_flow > 0.0 {
        "Marginal positive cash flow. Consider strategies to increase rental income or reduce expenses."
    } else {
        "Negative cash flow requires careful consideration. Ensure you can sustain monthly losses."
    });

    if let Some(str_data) = &record.short_term_rental {
        if finite_or_zero(str_data.monthly_cash_flow) > cash_flow * 1.5 {
            out.push(
                "Short-term rental shows significantly higher returns. Consider STR strategy if regulations permit.",
            );
        }
    }
    if cap_rate >= 6.0 {
        out.push("Cap rate indicates strong income relative to property value.");
    }

    out.push("Conduct professional property inspection before finalizing purchase.");
    out.push(
        "Review local market trends and economic indicators for long-term appreciation potential.",
    );
    out
}

/// Marker color picked from the wording.
fn tone(text: &str) -> Color {
    if text.contains("Strong") || text.contains("excellent") {
        Palette::SUCCESS
    } else if text.contains("Negative") || text.contains("careful") {
        Palette::WARNING
    } else if text.contains("Consider") {
        Palette::PRIMARY
    } else {
        Palette::SECONDARY
    }
}
