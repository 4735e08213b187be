use super::shapes::draw_text;
use crate::algorithms::pagination::ensure_space;
use crate::text::wrap::truncate_to_width;
use crate::typography::{Align, TextPreset};
use crate::{Canvas, LayoutCursor, LayoutError};
use proplens_types::{Palette, mm};

const ROW_HEIGHT_MM: f32 = 8.0;
const VALUE_OFFSET_MM: f32 = 35.0;
const GUTTER_MM: f32 = 10.0;

/// Two side-by-side `label: value` columns with a fixed row height.
///
/// Each column advances on its own; the cursor ends below the taller one.
pub fn two_column(
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
    left: &[(String, String)],
    right: &[(String, String)],
) -> Result<(), LayoutError> {
    let row_height = mm(ROW_HEIGHT_MM);
    let rows = left.len().max(right.len());
    ensure_space(canvas, cursor, rows as f32 * row_height)?;

    let g = cursor.geometry;
    let column_width = (g.content_width() - mm(GUTTER_MM)) / 2.0;
    let start = cursor.y;

    let left_end =
        draw_column(canvas, cursor.page_index, g.content_left(), start, column_width, left);
    let right_end = draw_column(
        canvas,
        cursor.page_index,
        g.content_left() + column_width + mm(GUTTER_MM),
        start,
        column_width,
        right,
    );

    cursor.set_y(left_end.max(right_end) + mm(4.0));
    Ok(())
}

fn draw_column(
    canvas: &mut Canvas,
    page: usize,
    x: f32,
    start: f32,
    width: f32,
    pairs: &[(String, String)],
) -> f32 {
    let preset = TextPreset::Small;
    let value_width = width - mm(VALUE_OFFSET_MM);
    let mut y = start;
    for (label, value) in pairs {
        draw_text(
            canvas,
            page,
            x,
            y,
            &format!("{}:", label),
            preset.emphasised(),
            Palette::SECONDARY,
            Align::Left,
        );
        let value = truncate_to_width(value, preset.into(), value_width);
        draw_text(
            canvas,
            page,
            x + mm(VALUE_OFFSET_MM),
            y,
            &value,
            preset,
            Palette::SECONDARY,
            Align::Left,
        );
        y += mm(ROW_HEIGHT_MM);
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutConfig;

    fn pairs(n: usize) -> Vec<(String, String)> {
        (0..n).map(|i| (format!("Label {}", i), format!("Value {}", i))).collect()
    }

    #[test]
    fn cursor_ends_below_taller_column() {
        let config = LayoutConfig::default();
        let mut canvas = Canvas::new(&config);
        let mut cursor = LayoutCursor::new(config.geometry);
        let start = cursor.y;

        two_column(&mut canvas, &mut cursor, &pairs(2), &pairs(5)).unwrap();

        let expected = start + 5.0 * mm(ROW_HEIGHT_MM) + mm(4.0);
        assert!((cursor.y - expected).abs() < 0.01);
        // label + value per pair
        assert_eq!(canvas.pages[0].len(), 14);
    }

    #[test]
    fn right_column_starts_at_same_offset() {
        let config = LayoutConfig::default();
        let mut canvas = Canvas::new(&config);
        let mut cursor = LayoutCursor::new(config.geometry);
        two_column(&mut canvas, &mut cursor, &pairs(1), &pairs(1)).unwrap();
        let page = &canvas.pages[0];
        assert_eq!(page[0].y, page[2].y);
        assert!(page[2].x > page[0].x);
    }
}
