use super::SectionId;
use crate::pipeline::context::ComposeContext;
use proplens_layout::primitives::shapes::{draw_line, draw_text};
use proplens_layout::primitives::{risk_card, section_header};
use proplens_layout::{
    Align, Canvas, LayoutCursor, LayoutError, Stroke, TextPreset, ensure_space,
};
use proplens_types::{AnalysisRecord, Color, Palette, mm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    fn color(self) -> Color {
        match self {
            RiskLevel::Low => Palette::SUCCESS,
            RiskLevel::Medium => Palette::WARNING,
            RiskLevel::High => Palette::DANGER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskFactor {
    pub title: &'static str,
    pub level: RiskLevel,
    pub description: &'static str,
}

/// Vacancy above this fraction is rated high risk.
const VACANCY_THRESHOLD: f64 = 0.10;
const MATRIX_MM: f32 = 60.0;

pub fn risk_factors(record: &AnalysisRecord) -> Vec<RiskFactor> {
    let vacancy = if record.long_term_rental.vacancy_rate > VACANCY_THRESHOLD {
        RiskLevel::High
    } else {
        RiskLevel::Low
    };
    let mut factors = vec![
        RiskFactor {
            title: "Market Risk",
            level: RiskLevel::Medium,
            description: "Property values may fluctuate based on local market conditions.",
        },
        RiskFactor {
            title: "Vacancy Risk",
            level: vacancy,
            description: "Extended vacancy periods can impact cash flow projections.",
        },
        RiskFactor {
            title: "Maintenance Risk",
            level: RiskLevel::Medium,
            description: "Unexpected repairs may exceed budgeted amounts.",
        },
    ];
    if record.has_short_term() {
        factors.push(RiskFactor {
            title: "Regulatory Risk (STR)",
            level: RiskLevel::High,
            description: "Local STR regulations may change, affecting income potential.",
        });
    }
    factors
}

pub(super) fn compose(
    ctx: &ComposeContext<'_>,
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
) -> Result<(), LayoutError> {
    section_header(canvas, cursor, SectionId::RiskAssessment.title(), Palette::DANGER)?;
    risk_matrix(canvas, cursor)?;
    for factor in risk_factors(ctx.record) {
        risk_card(
            canvas,
            cursor,
            factor.title,
            factor.level.label(),
            factor.level.color(),
            factor.description,
        )?;
    }
    Ok(())
}

/// Empty 3x3 probability/impact grid, centered above the risk cards.
fn risk_matrix(canvas: &mut Canvas, cursor: &mut LayoutCursor) -> Result<(), LayoutError> {
    let size = mm(MATRIX_MM);
    let label = TextPreset::Caption.line_height();
    ensure_space(canvas, cursor, label + size + mm(10.0))?;

    let g = cursor.geometry;
    let page = cursor.page_index;
    let left = (g.width - size) / 2.0;
    let caption = |canvas: &mut Canvas, x: f32, y: f32, text: &str, align: Align| {
        draw_text(canvas, page, x, y, text, TextPreset::Caption, Palette::SECONDARY, align);
    };

    caption(canvas, g.width / 2.0, cursor.y, "Probability", Align::Center);
    let top = cursor.y + label + mm(2.0);
    let stroke = Stroke::solid(Palette::LIGHT, 0.5);
    for i in 0..=3 {
        let offset = i as f32 * size / 3.0;
        draw_line(canvas, page, (left, top + offset), (left + size, top + offset), stroke);
        draw_line(canvas, page, (left + offset, top), (left + offset, top + size), stroke);
    }
    caption(canvas, left + size + mm(5.0), top + size / 2.0, "Impact", Align::Left);

    cursor.set_y(top + size + mm(8.0));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{Fixture, surface};
    use proplens_layout::LayoutElement;
    use proplens_types::ShortTermRental;

    #[test]
    fn vacancy_threshold_is_exclusive() {
        let mut record = AnalysisRecord::default();
        record.long_term_rental.vacancy_rate = 0.10;
        assert_eq!(risk_factors(&record)[1].level, RiskLevel::Low);
        record.long_term_rental.vacancy_rate = 0.12;
        assert_eq!(risk_factors(&record)[1].level, RiskLevel::High);
    }

    #[test]
    fn regulatory_risk_only_with_short_term_data() {
        let mut record = AnalysisRecord::default();
        assert_eq!(risk_factors(&record).len(), 3);
        record.short_term_rental = Some(ShortTermRental::default());
        let factors = risk_factors(&record);
        assert_eq!(factors.len(), 4);
        assert_eq!(factors[3].title, "Regulatory Risk (STR)");
        assert_eq!(factors[3].level, RiskLevel::High);
    }

    #[test]
    fn matrix_precedes_the_cards() {
        let fixture = Fixture::new(AnalysisRecord::default());
        let (mut canvas, mut cursor) = surface();
        compose(&fixture.ctx(), &mut canvas, &mut cursor).unwrap();

        let text = canvas.page_text(0);
        let probability = text.iter().position(|t| *t == "Probability").unwrap();
        let market = text.iter().position(|t| *t == "Market Risk").unwrap();
        assert!(probability < market);
        assert!(text.contains(&"Impact"));

        let grid_lines = canvas.pages[0]
            .iter()
            .filter(|e| {
                matches!(&e.element, LayoutElement::Line(l) if l.stroke.color == Palette::LIGHT)
            })
            .count();
        assert!(grid_lines >= 8);
    }
}
