pub mod color;
pub mod format;
pub mod geometry;
pub mod record;
pub mod report;

pub use color::{Color, Palette};
pub use geometry::{PT_PER_MM, Rect, Size, mm};
pub use record::{
    AnalysisRecord, Comparable, LongTermRental, Occupancy, PropertyDetails, PurchaseCosts,
    SeasonalOccupancy, ShortTermRental,
};
pub use report::{InvestmentGrade, RealtorBrandingInfo, ReportConfiguration};
