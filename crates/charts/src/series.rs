//! Chart data derived from an analysis record. Pure functions, no drawing.

use proplens_types::format::{currency, finite_or_zero};
use proplens_types::{
    AnalysisRecord, Color, LongTermRental, Palette, SeasonalOccupancy, ShortTermRental,
};

/// Yearly growth applied to projected cash flow.
pub const GROWTH_RATE: f64 = 0.03;
pub const PROJECTION_YEARS: usize = 5;

pub const SEASONS: [&str; 4] = ["Spring", "Summer", "Fall", "Winter"];
/// Market-average seasonal occupancy, percent.
pub const MARKET_AVERAGE_OCCUPANCY: [f64; 4] = [65.0, 75.0, 65.0, 60.0];

#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub labels: Vec<String>,
    /// Annual cash flow per year, rounded to whole dollars.
    pub annual: Vec<f64>,
    /// Running total of the unrounded annual values, rounded to whole dollars.
    pub cumulative: Vec<f64>,
}

/// Monthly net used as the projection base: effective income less total
/// expenses, or the reported monthly cash flow when neither is given.
pub fn projection_base(rental: &LongTermRental) -> f64 {
    let income = finite_or_zero(rental.effective_income);
    let expenses = finite_or_zero(rental.total_expenses);
    if income == 0.0 && expenses == 0.0 {
        finite_or_zero(rental.monthly_cash_flow)
    } else {
        income - expenses
    }
}

pub fn cash_flow_projection(rental: &LongTermRental) -> Projection {
    let first_year = projection_base(rental) * 12.0;
    let mut projection = Projection {
        labels: Vec::with_capacity(PROJECTION_YEARS),
        annual: Vec::with_capacity(PROJECTION_YEARS),
        cumulative: Vec::with_capacity(PROJECTION_YEARS),
    };
    let mut running = 0.0;
    for year in 1..=PROJECTION_YEARS {
        let value = first_year * (1.0 + GROWTH_RATE).powi(year as i32 - 1);
        running += value;
        projection.labels.push(format!("Year {}", year));
        projection.annual.push(value.round());
        projection.cumulative.push(running.round());
    }
    projection
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSlice {
    pub label: &'static str,
    pub value: f64,
    pub color: Color,
    /// Percent of the sum of all non-zero slices.
    pub share: f64,
}

impl ExpenseSlice {
    /// `Mortgage: $1,200 (52.3%)`
    pub fn legend(&self) -> String {
        format!("{}: {} ({:.1}%)", self.label, currency(self.value), self.share)
    }
}

/// Monthly cost categories with zero (or negative) entries removed.
pub fn expense_slices(rental: &LongTermRental) -> Vec<ExpenseSlice> {
    let categories = [
        ("Mortgage", rental.mortgage_payment, Palette::PRIMARY),
        ("Property Tax", rental.property_tax, Palette::SECONDARY),
        ("Insurance", rental.insurance, Palette::ACCENT),
        ("HOA/Condo Fees", rental.hoa_fees, Palette::WARNING),
        ("Maintenance", rental.maintenance, Palette::DANGER),
        ("Property Mgmt", rental.property_management, Palette::SUCCESS),
        ("Utilities", rental.utilities, Palette::DARK),
    ];
    let kept: Vec<_> = categories
        .into_iter()
        .map(|(label, value, color)| (label, finite_or_zero(value), color))
        .filter(|(_, value, _)| *value > 0.0)
        .collect();
    let total: f64 = kept.iter().map(|(_, v, _)| v).sum();

    kept.into_iter()
        .map(|(label, value, color)| ExpenseSlice {
            label,
            value,
            color,
            share: value / total * 100.0,
        })
        .collect()
}

/// Annual ROI (percent) and annual cash flow (dollars) for one strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyReturns {
    pub annual_roi: f64,
    pub annual_cash_flow: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiComparison {
    pub long_term: StrategyReturns,
    pub short_term: StrategyReturns,
}

/// Long-term versus short-term returns; `None` without short-term data.
pub fn roi_comparison(record: &AnalysisRecord) -> Option<RoiComparison> {
    let str_data = record.short_term_rental.as_ref()?;
    let lt = &record.long_term_rental;
    Some(RoiComparison {
        long_term: StrategyReturns {
            annual_roi: finite_or_zero(lt.annual_roi),
            annual_cash_flow: finite_or_zero(lt.monthly_cash_flow) * 12.0,
        },
        short_term: StrategyReturns {
            annual_roi: finite_or_zero(str_data.annual_roi),
            annual_cash_flow: finite_or_zero(str_data.monthly_cash_flow) * 12.0,
        },
    })
}

/// Seasonal occupancy in percent, spring through winter. Analyses without a
/// seasonal breakdown fall back to a typical profile.
pub fn seasonal_occupancy(str_data: &ShortTermRental) -> [f64; 4] {
    let seasons = str_data.seasonal_data.unwrap_or(SeasonalOccupancy::TYPICAL);
    seasons.fractions().map(|f| (finite_or_zero(f) * 100.0).clamp(0.0, 100.0))
}

/// Score clamped to the gauge range and its band color.
pub fn gauge_band(score: u8) -> (u8, Color) {
    let score = score.min(100);
    let color = match score {
        80.. => Palette::SUCCESS,
        60.. => Palette::ACCENT,
        40.. => Palette::WARNING,
        _ => Palette::DANGER,
    };
    (score, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rental(income: f64, expenses: f64) -> LongTermRental {
        LongTermRental {
            effective_income: income,
            total_expenses: expenses,
            ..Default::default()
        }
    }

    #[test]
    fn projection_compounds_three_percent() {
        let p = cash_flow_projection(&rental(3000.0, 2000.0));
        assert_eq!(p.labels, vec!["Year 1", "Year 2", "Year 3", "Year 4", "Year 5"]);
        assert_eq!(p.annual, vec![12000.0, 12360.0, 12731.0, 13113.0, 13506.0]);
        assert_eq!(p.cumulative[0], 12000.0);
        assert_eq!(p.cumulative[1], 24360.0);
        assert_eq!(p.cumulative[4], 63710.0);
    }

    #[test]
    fn projection_falls_back_to_reported_cash_flow() {
        let lt = LongTermRental {
            monthly_cash_flow: -50.0,
            ..Default::default()
        };
        let p = cash_flow_projection(&lt);
        assert_eq!(p.annual[0], -600.0);
        assert!(p.cumulative[4] < p.cumulative[0]);
    }

    #[test]
    fn expense_shares_ignore_zero_categories() {
        let lt = LongTermRental {
            mortgage_payment: 1500.0,
            property_tax: 300.0,
            insurance: 0.0,
            maintenance: 200.0,
            ..Default::default()
        };
        let slices = expense_slices(&lt);
        let labels: Vec<_> = slices.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Mortgage", "Property Tax", "Maintenance"]);
        let total: f64 = slices.iter().map(|s| s.share).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(slices[0].legend(), "Mortgage: $1,500 (75.0%)");
    }

    #[test]
    fn no_expenses_yields_no_slices() {
        assert!(expense_slices(&LongTermRental::default()).is_empty());
    }

    #[test]
    fn roi_comparison_requires_short_term_data() {
        let mut record = AnalysisRecord::default();
        assert!(roi_comparison(&record).is_none());

        record.long_term_rental.monthly_cash_flow = 400.0;
        record.short_term_rental = Some(ShortTermRental {
            monthly_cash_flow: 900.0,
            annual_roi: 14.0,
            ..Default::default()
        });
        let cmp = roi_comparison(&record).unwrap();
        assert_eq!(cmp.long_term.annual_cash_flow, 4800.0);
        assert_eq!(cmp.short_term.annual_cash_flow, 10800.0);
        assert_eq!(cmp.short_term.annual_roi, 14.0);
    }

    #[test]
    fn seasonal_defaults_and_scaling() {
        let typical = seasonal_occupancy(&ShortTermRental::default());
        assert_eq!(typical.map(|v| v.round()), [63.0, 77.0, 66.0, 59.0]);

        let str_data = ShortTermRental {
            seasonal_data: Some(SeasonalOccupancy {
                summer: proplens_types::Occupancy { occupancy: 0.9 },
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(seasonal_occupancy(&str_data).map(|v| v.round()), [0.0, 90.0, 0.0, 0.0]);
    }

    #[test]
    fn gauge_bands() {
        assert_eq!(gauge_band(95).1, Palette::SUCCESS);
        assert_eq!(gauge_band(80).1, Palette::SUCCESS);
        assert_eq!(gauge_band(79).1, Palette::ACCENT);
        assert_eq!(gauge_band(60).1, Palette::ACCENT);
        assert_eq!(gauge_band(40).1, Palette::WARNING);
        assert_eq!(gauge_band(39).1, Palette::DANGER);
        assert_eq!(gauge_band(150).0, 100);
    }
}
