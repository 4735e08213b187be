//! The resolved analysis consumed by the report generator.
//!
//! All structures deserialize from camelCase JSON. Numeric fields default to
//! zero and descriptive fields to `None`, so sparse records are accepted as-is.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisRecord {
    pub property_address: String,
    pub property_details: PropertyDetails,
    pub costs: PurchaseCosts,
    pub long_term_rental: LongTermRental,
    #[serde(rename = "strAnalysis")]
    pub short_term_rental: Option<ShortTermRental>,
    pub comparables: Vec<Comparable>,
    pub market_narrative: Option<String>,
}

impl AnalysisRecord {
    pub fn has_short_term(&self) -> bool {
        self.short_term_rental.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyDetails {
    pub property_type: Option<String>,
    pub price: f64,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f32>,
    pub sqft: Option<u32>,
    pub year_built: Option<u32>,
    pub lot_size: Option<String>,
    /// Annual property tax.
    pub property_tax: f64,
    /// Monthly HOA or condo fees.
    pub hoa_fees: f64,
}

/// Cash required up front to close on the property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PurchaseCosts {
    pub purchase_price: f64,
    pub down_payment: f64,
    pub closing_costs: f64,
    pub initial_repairs: f64,
    pub total_cash_required: f64,
}

/// Monthly figures for a conventional long-term lease.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LongTermRental {
    pub monthly_rent: f64,
    pub effective_income: f64,
    pub total_expenses: f64,
    pub monthly_cash_flow: f64,
    pub cap_rate: f64,
    #[serde(rename = "annualROI")]
    pub annual_roi: f64,
    /// Fraction of the year the unit sits empty, `0.05` for 5%.
    pub vacancy_rate: f64,
    pub mortgage_payment: f64,
    pub property_tax: f64,
    pub insurance: f64,
    pub hoa_fees: f64,
    pub maintenance: f64,
    pub property_management: f64,
    pub utilities: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShortTermRental {
    pub average_daily_rate: f64,
    /// Fraction of nights booked.
    pub occupancy_rate: f64,
    pub monthly_revenue: f64,
    pub monthly_cash_flow: f64,
    #[serde(rename = "annualROI")]
    pub annual_roi: f64,
    pub seasonal_data: Option<SeasonalOccupancy>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalOccupancy {
    pub spring: Occupancy,
    pub summer: Occupancy,
    pub fall: Occupancy,
    pub winter: Occupancy,
}

impl SeasonalOccupancy {
    /// Seasonal profile assumed when the analysis carries none.
    pub const TYPICAL: SeasonalOccupancy = SeasonalOccupancy {
        spring: Occupancy { occupancy: 0.63 },
        summer: Occupancy { occupancy: 0.77 },
        fall: Occupancy { occupancy: 0.66 },
        winter: Occupancy { occupancy: 0.59 },
    };

    /// Occupancy fractions in spring, summer, fall, winter order.
    pub fn fractions(&self) -> [f64; 4] {
        [
            self.spring.occupancy,
            self.summer.occupancy,
            self.fall.occupancy,
            self.winter.occupancy,
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Occupancy {
    pub occupancy: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comparable {
    pub address: Option<String>,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: f32,
    pub sqft: Option<u32>,
    pub price_per_sqft: f64,
}
