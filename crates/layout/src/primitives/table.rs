use super::shapes::{draw_rect, draw_text, fill_rect};
use crate::algorithms::pagination::ensure_space;
use crate::elements::Stroke;
use crate::text::wrap::truncate_to_width;
use crate::typography::{Align, TextPreset, TextStyle};
use crate::{Canvas, LayoutCursor, LayoutError};
use proplens_types::{Color, Palette, Rect, mm};

const CELL_PADDING: f32 = 5.0;

#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    /// Share of the content width relative to the other columns.
    pub weight: f32,
    pub align: Align,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, weight: f32, align: Align) -> Self {
        Self {
            header: header.into(),
            weight,
            align,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub header_fill: Color,
}

impl Table {
    fn column_widths(&self, total: f32) -> Vec<f32> {
        let sum: f32 = self.columns.iter().map(|c| c.weight.max(0.0)).sum();
        if sum <= 0.0 {
            let even = total / self.columns.len().max(1) as f32;
            return vec![even; self.columns.len()];
        }
        self.columns
            .iter()
            .map(|c| total * c.weight.max(0.0) / sum)
            .collect()
    }
}

fn row_height() -> f32 {
    TextPreset::Body.line_height() + 2.0 * CELL_PADDING
}

/// Header row plus striped body rows.
///
/// Space for the header and the first row is reserved together. Each later
/// row passes through the page-break policy and the header is repeated at
/// the top of every continuation page. An empty body draws the header only.
pub fn styled_table(
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
    table: &Table,
) -> Result<(), LayoutError> {
    let row_height = row_height();
    let widths = table.column_widths(cursor.geometry.content_width());

    let first_block = if table.rows.is_empty() { row_height } else { row_height * 2.0 };
    ensure_space(canvas, cursor, first_block)?;
    draw_header(canvas, cursor, table, &widths, row_height);

    for (index, row) in table.rows.iter().enumerate() {
        if ensure_space(canvas, cursor, row_height)? {
            log::debug!("Table continued on page {}", cursor.page_index + 1);
            // The header plus a row always fits on a fresh page.
            draw_header(canvas, cursor, table, &widths, row_height);
        }
        let fill = if index % 2 == 1 { Some(Palette::STRIPE) } else { Some(Color::WHITE) };
        draw_row(
            canvas,
            cursor,
            row,
            table,
            &widths,
            row_height,
            fill,
            TextPreset::Body.into(),
            Palette::SECONDARY,
        );
    }

    cursor.advance(mm(4.0));
    Ok(())
}

fn draw_header(
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
    table: &Table,
    widths: &[f32],
    row_height: f32,
) {
    let headers: Vec<String> = table.columns.iter().map(|c| c.header.clone()).collect();
    draw_row(
        canvas,
        cursor,
        &headers,
        table,
        widths,
        row_height,
        Some(table.header_fill),
        TextPreset::Body.emphasised(),
        Color::WHITE,
    );
}

#[allow(clippy::too_many_arguments)]
fn draw_row(
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
    cells: &[String],
    table: &Table,
    widths: &[f32],
    row_height: f32,
    fill: Option<Color>,
    style: TextStyle,
    color: Color,
) {
    let page = cursor.page_index;
    let mut x = cursor.geometry.content_left();
    let width: f32 = widths.iter().sum();
    draw_rect(
        canvas,
        page,
        Rect::new(x, cursor.y, width, row_height),
        fill,
        Some(Stroke::solid(Palette::LIGHT, 0.5)),
        0.0,
    );

    let text_y = cursor.y + (row_height - style.size) / 2.0;
    for (column, (cell_width, spec)) in widths.iter().zip(&table.columns).enumerate() {
        let cell = cells.get(column).map(String::as_str).unwrap_or("");
        let inner = (cell_width - 2.0 * CELL_PADDING).max(0.0);
        let content = truncate_to_width(cell, style, inner);
        let anchor = match spec.align {
            Align::Left => x + CELL_PADDING,
            Align::Center => x + cell_width / 2.0,
            Align::Right => x + cell_width - CELL_PADDING,
        };
        draw_text(canvas, page, anchor, text_y, &content, style, color, spec.align);
        x += cell_width;
    }
    cursor.advance(row_height);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerKind {
    Income,
    Expense,
    Total,
}

impl LedgerKind {
    fn symbol(self) -> &'static str {
        match self {
            LedgerKind::Income => "+",
            LedgerKind::Expense => "-",
            LedgerKind::Total => "=",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LedgerRow {
    pub label: String,
    pub amount: String,
    pub kind: LedgerKind,
    /// Sign of the underlying value; colors the total row.
    pub positive: bool,
}

/// Label and amount rows. Income amounts are green, the total row sits on a
/// light band in bold and is colored by its sign.
pub fn ledger_table(
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
    rows: &[LedgerRow],
) -> Result<(), LayoutError> {
    let row_height = mm(8.0);
    let preset = TextPreset::Body;
    let g = cursor.geometry;

    for row in rows {
        ensure_space(canvas, cursor, row_height)?;
        let page = cursor.page_index;
        let text_y = cursor.y + (row_height - preset.size()) / 2.0;
        let is_total = row.kind == LedgerKind::Total;

        if is_total {
            fill_rect(
                canvas,
                page,
                Rect::new(g.content_left(), cursor.y, g.content_width(), row_height),
                Palette::LIGHT,
            );
        }
        let style = if is_total { preset.emphasised() } else { preset.into() };
        let amount_color = match row.kind {
            LedgerKind::Income => Palette::SUCCESS,
            LedgerKind::Expense => Palette::SECONDARY,
            LedgerKind::Total => {
                if row.positive { Palette::SUCCESS } else { Palette::DANGER }
            }
        };

        draw_text(
            canvas,
            page,
            g.content_left() + mm(5.0),
            text_y,
            &row.label,
            style,
            Palette::SECONDARY,
            Align::Left,
        );
        draw_text(
            canvas,
            page,
            g.content_right() - mm(45.0),
            text_y,
            row.kind.symbol(),
            style,
            Palette::MUTED,
            Align::Center,
        );
        draw_text(
            canvas,
            page,
            g.content_right() - mm(5.0),
            text_y,
            &row.amount,
            style,
            amount_color,
            Align::Right,
        );
        cursor.advance(row_height);
    }

    cursor.advance(mm(6.0));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FontFace, LayoutConfig, LayoutElement};

    fn table(rows: usize) -> Table {
        Table {
            columns: vec![
                TableColumn::new("Item", 2.0, Align::Left),
                TableColumn::new("Amount", 1.0, Align::Right),
            ],
            rows: (0..rows)
                .map(|i| vec![format!("Row {}", i), format!("${}", i)])
                .collect(),
            header_fill: Palette::PRIMARY,
        }
    }

    fn setup() -> (Canvas, LayoutCursor) {
        let config = LayoutConfig::default();
        (Canvas::new(&config), LayoutCursor::new(config.geometry))
    }

    #[test]
    fn empty_table_renders_header_only() {
        let (mut canvas, mut cursor) = setup();
        styled_table(&mut canvas, &mut cursor, &table(0)).unwrap();
        assert_eq!(canvas.page_text(0), vec!["Item", "Amount"]);
    }

    #[test]
    fn header_cells_are_bold() {
        let (mut canvas, mut cursor) = setup();
        styled_table(&mut canvas, &mut cursor, &table(1)).unwrap();
        let faces: Vec<FontFace> = canvas.pages[0]
            .iter()
            .filter_map(|e| match &e.element {
                LayoutElement::Text(t) => Some(t.face),
                _ => None,
            })
            .collect();
        assert_eq!(
            faces,
            vec![FontFace::Bold, FontFace::Bold, FontFace::Regular, FontFace::Regular]
        );
    }

    #[test]
    fn long_table_repeats_header_on_each_page() {
        let (mut canvas, mut cursor) = setup();
        styled_table(&mut canvas, &mut cursor, &table(80)).unwrap();

        assert!(canvas.page_count() >= 2);
        for page in 0..canvas.page_count() {
            assert_eq!(canvas.page_text(page)[0], "Item");
        }
        let bottom = cursor.geometry.content_bottom();
        for element in canvas.pages.iter().flatten() {
            assert!(element.y + element.height <= bottom + 0.01);
        }
    }

    #[test]
    fn ledger_total_row_colored_by_sign() {
        let (mut canvas, mut cursor) = setup();
        let rows = vec![
            LedgerRow {
                label: "Monthly Rental Income".into(),
                amount: "$2,400".into(),
                kind: LedgerKind::Income,
                positive: true,
            },
            LedgerRow {
                label: "Net Monthly Cash Flow".into(),
                amount: "-$50".into(),
                kind: LedgerKind::Total,
                positive: false,
            },
        ];
        ledger_table(&mut canvas, &mut cursor, &rows).unwrap();

        let total = canvas.pages[0]
            .iter()
            .find_map(|e| match &e.element {
                LayoutElement::Text(t) if t.content == "-$50" => Some(t.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(total.color, Palette::DANGER);
        assert_eq!(total.face, FontFace::Bold);
    }
}
