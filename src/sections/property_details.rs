use super::SectionId;
use crate::pipeline::context::ComposeContext;
use proplens_layout::primitives::{section_header, two_column};
use proplens_layout::{Canvas, LayoutCursor, LayoutError};
use proplens_types::format::{currency, group_thousands, or_na};
use proplens_types::{AnalysisRecord, Palette};

pub(super) fn compose(
    ctx: &ComposeContext<'_>,
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
) -> Result<(), LayoutError> {
    section_header(canvas, cursor, SectionId::PropertyDetails.title(), Palette::PRIMARY)?;
    let (left, right) = detail_columns(ctx.record);
    two_column(canvas, cursor, &left, &right)
}

type Pairs = Vec<(String, String)>;

fn detail_columns(record: &AnalysisRecord) -> (Pairs, Pairs) {
    let d = &record.property_details;
    let address = Some(record.property_address.trim()).filter(|a| !a.is_empty());

    let left = vec![
        pair("Address", or_na(address)),
        pair("Property Type", or_na(d.property_type.as_deref())),
        pair("Bedrooms", or_na(d.bedrooms)),
        pair("Bathrooms", or_na(d.bathrooms)),
        pair(
            "Square Footage",
            d.sqft
                .map(|s| format!("{} sq ft", group_thousands(u64::from(s))))
                .unwrap_or_else(|| "N/A".to_string()),
        ),
    ];
    let right = vec![
        pair("Year Built", or_na(d.year_built)),
        pair("Lot Size", or_na(d.lot_size.as_deref())),
        pair("Purchase Price", currency(d.price)),
        pair("Property Tax", format!("{}/year", currency(d.property_tax))),
        pair("HOA/Condo Fees", format!("{}/month", currency(d.hoa_fees))),
    ];
    (left, right)
}

fn pair(label: &str, value: String) -> (String, String) {
    (label.to_string(), value)
}
