//! Headline metrics and the letter grade derived from them.
//!
//! Scoring weighs ROI (up to 40 points), monthly cash flow (up to 30) and
//! cap rate (up to 30). Each component is a step function of its input, so
//! the total never decreases when any one input increases.

use proplens_types::format::{currency, finite_or_zero, percent};
use proplens_types::{AnalysisRecord, Color, InvestmentGrade, Palette};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyMetrics {
    pub purchase_price: f64,
    pub monthly_cash_flow: f64,
    pub annual_roi: f64,
    pub cap_rate: f64,
    pub cash_flow_positive: bool,
}

impl KeyMetrics {
    pub fn from_record(record: &AnalysisRecord) -> Self {
        let lt = &record.long_term_rental;
        let monthly_cash_flow = finite_or_zero(lt.monthly_cash_flow);
        Self {
            purchase_price: finite_or_zero(record.property_details.price),
            monthly_cash_flow,
            annual_roi: finite_or_zero(lt.annual_roi),
            cap_rate: finite_or_zero(lt.cap_rate),
            cash_flow_positive: monthly_cash_flow > 0.0,
        }
    }

    pub fn purchase_price_text(&self) -> String {
        currency(self.purchase_price)
    }

    pub fn monthly_cash_flow_text(&self) -> String {
        currency(self.monthly_cash_flow)
    }

    pub fn annual_roi_text(&self) -> String {
        percent(self.annual_roi, 1)
    }

    pub fn cap_rate_text(&self) -> String {
        percent(self.cap_rate, 1)
    }

    pub fn score(&self) -> u8 {
        investment_score(self.annual_roi, self.monthly_cash_flow, self.cap_rate)
    }

    pub fn grade(&self) -> InvestmentGrade {
        let score = self.score();
        let grade = grade_for_score(score);
        InvestmentGrade {
            score,
            grade: grade.to_string(),
            description: grade_description(grade).to_string(),
        }
    }
}

fn roi_points(roi: f64) -> u8 {
    match roi {
        r if r >= 15.0 => 40,
        r if r >= 10.0 => 30,
        r if r >= 7.0 => 20,
        r if r >= 5.0 => 10,
        r if r >= 0.0 => 5,
        _ => 0,
    }
}

fn cash_flow_points(cash_flow: f64) -> u8 {
    match cash_flow {
        c if c >= 1000.0 => 30,
        c if c >= 500.0 => 20,
        c if c >= 200.0 => 15,
        c if c >= 0.0 => 10,
        _ => 0,
    }
}

fn cap_rate_points(cap_rate: f64) -> u8 {
    match cap_rate {
        c if c >= 8.0 => 30,
        c if c >= 6.0 => 20,
        c if c >= 4.0 => 10,
        c if c >= 2.0 => 5,
        _ => 0,
    }
}

/// Weighted score in `0..=100`. NaN inputs count as zero; infinities land in
/// the top or bottom tier.
pub fn investment_score(annual_roi: f64, monthly_cash_flow: f64, cap_rate: f64) -> u8 {
    roi_points(nan_as_zero(annual_roi))
        + cash_flow_points(nan_as_zero(monthly_cash_flow))
        + cap_rate_points(nan_as_zero(cap_rate))
}

fn nan_as_zero(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

pub fn grade_for_score(score: u8) -> &'static str {
    match score {
        90.. => "A+",
        80.. => "A",
        70.. => "B+",
        60.. => "B",
        50.. => "C+",
        40.. => "C",
        20.. => "D",
        _ => "F",
    }
}

pub fn grade_description(grade: &str) -> &'static str {
    match grade {
        "A+" => "Exceptional investment opportunity",
        "A" => "Excellent investment opportunity",
        "B+" => "Strong investment with solid returns",
        "B" => "Good investment with acceptable returns",
        "C+" => "Fair investment; review the numbers closely",
        "C" => "Average investment with limited upside",
        "D" => "Below-average investment; significant concerns",
        _ => "Poor investment; not recommended",
    }
}

pub fn grade_color(grade: &str) -> Color {
    match grade {
        "A+" | "A" => Palette::SUCCESS,
        "B+" | "B" => Palette::ACCENT,
        "C+" | "C" => Palette::WARNING,
        "D" | "F" => Palette::DANGER,
        _ => Palette::SECONDARY,
    }
}

/// Metrics and grade for a record in one call.
pub fn evaluate(record: &AnalysisRecord) -> (KeyMetrics, InvestmentGrade) {
    let metrics = KeyMetrics::from_record(record);
    let grade = metrics.grade();
    (metrics, grade)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(roi: f64, cash_flow: f64, cap: f64) -> &'static str {
        grade_for_score(investment_score(roi, cash_flow, cap))
    }

    #[test]
    fn extreme_triples() {
        assert_eq!(investment_score(16.0, 1200.0, 9.0), 100);
        assert_eq!(grade(16.0, 1200.0, 9.0), "A+");
        assert_eq!(investment_score(3.0, -50.0, 1.0), 5);
        assert_eq!(grade(3.0, -50.0, 1.0), "F");
    }

    #[test]
    fn documented_scenario_is_b_plus() {
        assert_eq!(investment_score(11.0, 600.0, 6.5), 70);
        assert_eq!(grade(11.0, 600.0, 6.5), "B+");
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(roi_points(15.0), 40);
        assert_eq!(roi_points(14.99), 30);
        assert_eq!(roi_points(0.0), 5);
        assert_eq!(roi_points(-0.01), 0);
        assert_eq!(cash_flow_points(1000.0), 30);
        assert_eq!(cash_flow_points(0.0), 10);
        assert_eq!(cap_rate_points(2.0), 5);
        assert_eq!(cap_rate_points(1.99), 0);
    }

    #[test]
    fn nan_counts_as_zero() {
        assert_eq!(investment_score(f64::NAN, f64::NAN, f64::NAN), 15);
    }

    #[test]
    fn score_is_monotonic_in_each_input() {
        let samples = [
            f64::NEG_INFINITY,
            -5.0,
            0.0,
            1.9,
            2.0,
            4.0,
            5.0,
            6.0,
            7.0,
            8.0,
            10.0,
            15.0,
            199.0,
            200.0,
            500.0,
            1000.0,
            1e9,
            f64::INFINITY,
        ];
        for &a in &samples {
            for &b in &samples {
                for window in samples.windows(2) {
                    let (lo, hi) = (window[0], window[1]);
                    assert!(investment_score(lo, a, b) <= investment_score(hi, a, b));
                    assert!(investment_score(a, lo, b) <= investment_score(a, hi, b));
                    assert!(investment_score(a, b, lo) <= investment_score(a, b, hi));
                }
            }
        }
    }

    #[test]
    fn infinities_take_the_extreme_tiers() {
        assert_eq!(investment_score(f64::INFINITY, f64::INFINITY, f64::INFINITY), 100);
        assert_eq!(investment_score(f64::INFINITY, 0.0, 0.0), investment_score(1e9, 0.0, 0.0));
        assert_eq!(investment_score(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY), 0);
    }

    #[test]
    fn grade_boundaries() {
        let expected = [
            (100, "A+"),
            (90, "A+"),
            (89, "A"),
            (80, "A"),
            (70, "B+"),
            (60, "B"),
            (50, "C+"),
            (40, "C"),
            (39, "D"),
            (20, "D"),
            (19, "F"),
            (0, "F"),
        ];
        for (score, letter) in expected {
            assert_eq!(grade_for_score(score), letter, "score {}", score);
        }
    }

    #[test]
    fn key_metrics_from_record() {
        let mut record = AnalysisRecord::default();
        record.property_details.price = 500_000.0;
        record.long_term_rental.monthly_cash_flow = -120.0;
        record.long_term_rental.annual_roi = 4.26;
        record.long_term_rental.cap_rate = f64::NAN;

        let (metrics, grade) = evaluate(&record);
        assert!(!metrics.cash_flow_positive);
        assert_eq!(metrics.purchase_price_text(), "$500,000");
        assert_eq!(metrics.monthly_cash_flow_text(), "-$120");
        assert_eq!(metrics.annual_roi_text(), "4.3%");
        assert_eq!(metrics.cap_rate_text(), "0.0%");
        assert_eq!(grade.score, 5);
        assert_eq!(grade.grade, "F");
        assert_eq!(grade.description, grade_description("F"));
        assert_eq!(grade_color(&grade.grade), Palette::DANGER);
    }
}
