use super::SectionId;
use crate::pipeline::context::ComposeContext;
use proplens_layout::primitives::{Table, TableColumn, paragraph, section_header, styled_table};
use proplens_layout::{Align, Canvas, LayoutCursor, LayoutError, TextPreset};
use proplens_types::format::{currency, group_thousands};
use proplens_types::{Comparable, Palette};

const MAX_ROWS: usize = 5;
const MAX_ADDRESS_CHARS: usize = 30;

pub(super) fn compose(
    ctx: &ComposeContext<'_>,
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
) -> Result<(), LayoutError> {
    section_header(canvas, cursor, SectionId::ComparativeAnalysis.title(), Palette::PRIMARY)?;
    paragraph(
        canvas,
        cursor,
        "Analysis of comparable properties in the area:",
        TextPreset::Body,
        Palette::SECONDARY,
    )?;
    styled_table(canvas, cursor, &comparables_table(&ctx.record.comparables))
}

fn comparables_table(comparables: &[Comparable]) -> Table {
    Table {
        columns: vec![
            TableColumn::new("Property", 3.0, Align::Left),
            TableColumn::new("Price", 1.4, Align::Right),
            TableColumn::new("Bed/Bath", 1.1, Align::Center),
            TableColumn::new("Sq Ft", 1.0, Align::Right),
            TableColumn::new("$/Sq Ft", 1.0, Align::Right),
        ],
        rows: comparables.iter().take(MAX_ROWS).map(row).collect(),
        header_fill: Palette::PRIMARY,
    }
}

fn row(comp: &Comparable) -> Vec<String> {
    vec![
        short_address(comp.address.as_deref()),
        currency(comp.price),
        format!("{}b/{}ba", comp.bedrooms, comp.bathrooms),
        comp.sqft
            .map(|s| group_thousands(u64::from(s)))
            .unwrap_or_else(|| "N/A".to_string()),
        currency(comp.price_per_sqft),
    ]
}

fn short_address(address: Option<&str>) -> String {
    match address.map(str::trim).filter(|a| !a.is_empty()) {
        None => "N/A".to_string(),
        Some(a) if a.chars().count() > MAX_ADDRESS_CHARS => {
            format!("{}...", a.chars().take(MAX_ADDRESS_CHARS).collect::<String>())
        }
        Some(a) => a.to_string(),
    }
}
