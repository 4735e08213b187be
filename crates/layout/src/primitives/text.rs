use super::shapes::{draw_line, draw_text, fill_circle, fill_polygon, fill_rect};
use crate::algorithms::pagination::ensure_space;
use crate::elements::Stroke;
use crate::text::wrap::wrap_text;
use crate::typography::{Align, TextPreset};
use crate::{Canvas, LayoutCursor, LayoutError};
use proplens_types::{Color, Palette, Rect, mm};

/// One line of text at the cursor, anchored to the content box per `align`.
pub fn text_line(
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
    text: &str,
    preset: TextPreset,
    color: Color,
    align: Align,
) -> Result<(), LayoutError> {
    let line_height = preset.line_height();
    ensure_space(canvas, cursor, line_height)?;
    let g = cursor.geometry;
    let x = match align {
        Align::Left => g.content_left(),
        Align::Center => g.content_left() + g.content_width() / 2.0,
        Align::Right => g.content_right(),
    };
    draw_text(canvas, cursor.page_index, x, cursor.y, text, preset, color, align);
    cursor.advance(line_height);
    Ok(())
}

/// Accent bar, H1 heading and an underline rule as wide as the heading.
pub fn section_header(
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
    title: &str,
    color: Color,
) -> Result<(), LayoutError> {
    // Keep the header with at least the start of its content.
    ensure_space(canvas, cursor, mm(40.0))?;

    let preset = TextPreset::H1;
    let left = cursor.geometry.content_left();
    let page = cursor.page_index;
    let y = cursor.y;

    fill_rect(
        canvas,
        page,
        Rect::new(left - mm(5.0), y - 2.0, mm(1.2), preset.size() + 6.0),
        color,
    );
    let width = draw_text(canvas, page, left, y, title, preset, color, Align::Left);
    let rule_y = y + preset.size() + 3.0;
    draw_line(canvas, page, (left, rule_y), (left + width, rule_y), Stroke::solid(color, 1.4));

    cursor.advance(preset.size() + mm(8.0));
    Ok(())
}

/// Vertical space a [`sub_header`] takes, gap included.
pub fn sub_header_height() -> f32 {
    TextPreset::H3.line_height() + mm(2.0)
}

/// H3 heading in the secondary color.
pub fn sub_header(
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
    title: &str,
) -> Result<(), LayoutError> {
    ensure_space(canvas, cursor, mm(30.0))?;
    let preset = TextPreset::H3;
    draw_text(
        canvas,
        cursor.page_index,
        cursor.geometry.content_left(),
        cursor.y,
        title,
        preset,
        Palette::SECONDARY,
        Align::Left,
    );
    cursor.advance(sub_header_height());
    Ok(())
}

/// Wrapped text across the content width. Lines are placed one at a time so
/// long paragraphs continue on the next page.
pub fn paragraph(
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
    text: &str,
    preset: TextPreset,
    color: Color,
) -> Result<(), LayoutError> {
    let width = cursor.geometry.content_width();
    for line in wrap_text(text, preset.into(), width) {
        text_line(canvas, cursor, &line, preset, color, Align::Left)?;
    }
    cursor.advance(preset.size() * 0.6);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BulletMarker {
    Dot(Color),
    Triangle(Color),
}

/// A marker followed by wrapped body text indented past it.
pub fn bullet(
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
    text: &str,
    marker: BulletMarker,
) -> Result<(), LayoutError> {
    let preset = TextPreset::Body;
    let line_height = preset.line_height();
    let indent = mm(8.0);
    let left = cursor.geometry.content_left();
    let lines = wrap_text(text, preset.into(), cursor.geometry.content_width() - indent);

    for (i, line) in lines.iter().enumerate() {
        ensure_space(canvas, cursor, line_height)?;
        if i == 0 {
            let mid = cursor.y + preset.size() * 0.45;
            match marker {
                BulletMarker::Dot(color) => {
                    fill_circle(canvas, cursor.page_index, (left + mm(2.0), mid), mm(1.2), color)
                }
                BulletMarker::Triangle(color) => fill_polygon(
                    canvas,
                    cursor.page_index,
                    vec![
                        (left + mm(2.0), mid - mm(1.5)),
                        (left + mm(4.0), mid + mm(1.0)),
                        (left, mid + mm(1.0)),
                    ],
                    color,
                ),
            }
        }
        draw_text(
            canvas,
            cursor.page_index,
            left + indent,
            cursor.y,
            line,
            preset,
            Palette::SECONDARY,
            Align::Left,
        );
        cursor.advance(line_height);
    }
    cursor.advance(mm(2.0));
    Ok(())
}
