use proplens::{AnalysisRecord, RealtorBrandingInfo};
use serde_json::{Value, json};

fn record_from(value: Value) -> AnalysisRecord {
    serde_json::from_value(value).expect("fixture matches the record schema")
}

/// Long-term numbers that score exactly 70 (ROI 11 -> 30, cash flow 600 -> 20,
/// cap rate 6.5 -> 20), no short-term data.
pub fn scenario_record() -> AnalysisRecord {
    record_from(json!({
        "propertyAddress": "1428 Maple Avenue, Columbus, OH",
        "propertyDetails": {
            "propertyType": "Single Family",
            "price": 500000,
            "bedrooms": 4,
            "bathrooms": 2.5,
            "sqft": 2400,
            "yearBuilt": 1998,
            "lotSize": "0.25 acres",
            "propertyTax": 6000,
            "hoaFees": 0
        },
        "costs": {
            "purchasePrice": 500000,
            "downPayment": 100000,
            "closingCosts": 15000,
            "initialRepairs": 5000,
            "totalCashRequired": 120000
        },
        "longTermRental": {
            "monthlyRent": 3600,
            "effectiveIncome": 3420,
            "totalExpenses": 2820,
            "monthlyCashFlow": 600,
            "capRate": 6.5,
            "annualROI": 11,
            "vacancyRate": 0.05,
            "mortgagePayment": 2100,
            "propertyTax": 500,
            "insurance": 120,
            "hoaFees": 0,
            "maintenance": 100,
            "propertyManagement": 0,
            "utilities": 0
        },
        "comparables": [
            {
                "address": "1410 Maple Avenue",
                "price": 489000, "bedrooms": 4, "bathrooms": 2, "sqft": 2300, "pricePerSqft": 213
            },
            {
                "address": "77 Northwood Boulevard Extension Unit 4, Columbus",
                "price": 515000, "bedrooms": 4, "bathrooms": 3, "sqft": 2550, "pricePerSqft": 202
            }
        ],
        "marketNarrative": "Columbus inventory remains below pre-2020 levels."
    }))
}

/// The scenario record plus a short-term analysis that beats long-term cash flow.
pub fn short_term_record() -> AnalysisRecord {
    let mut record = scenario_record();
    record.short_term_rental = Some(
        serde_json::from_value(json!({
            "averageDailyRate": 210,
            "occupancyRate": 0.68,
            "monthlyRevenue": 4340,
            "monthlyCashFlow": 1250,
            "annualROI": 17.5,
            "seasonalData": {
                "spring": { "occupancy": 0.62 },
                "summer": { "occupancy": 0.81 },
                "fall": { "occupancy": 0.66 },
                "winter": { "occupancy": 0.55 }
            }
        }))
        .expect("fixture matches the short-term schema"),
    );
    record
}

pub fn branding() -> RealtorBrandingInfo {
    serde_json::from_value(json!({
        "name": "Dana Reyes",
        "company": "Harbor Realty Group",
        "phone": "(614) 555-0142",
        "email": "dana@harborrealty.example"
    }))
    .expect("fixture matches the branding schema")
}

pub const ALL_SECTIONS: [&str; 9] = [
    "executiveSummary",
    "propertyDetails",
    "financialAnalysis",
    "longTermRental",
    "shortTermRental",
    "comparativeAnalysis",
    "investmentRecommendations",
    "riskAssessment",
    "marketTrends",
];
