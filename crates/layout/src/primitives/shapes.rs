use crate::elements::{LineElement, RectElement, Stroke, TextElement};
use crate::typography::{Align, TextStyle};
use crate::{Canvas, LayoutElement, PositionedElement};
use proplens_types::{Color, Rect};

/// Places one run of text with its top edge at `y`. Returns the run width.
#[allow(clippy::too_many_arguments)]
pub fn draw_text(
    canvas: &mut Canvas,
    page: usize,
    x: f32,
    y: f32,
    text: &str,
    style: impl Into<TextStyle>,
    color: Color,
    align: Align,
) -> f32 {
    let style = style.into();
    let width = style.measure(text);
    if text.is_empty() {
        return 0.0;
    }
    let left = align.origin(x, width);
    canvas.push(
        page,
        PositionedElement::new(
            Rect::new(left, y, width, style.size),
            LayoutElement::Text(TextElement {
                content: text.to_string(),
                face: style.face,
                size: style.size,
                color,
            }),
        ),
    );
    width
}

pub fn fill_rect(canvas: &mut Canvas, page: usize, bounds: Rect, color: Color) {
    draw_rect(canvas, page, bounds, Some(color), None, 0.0);
}

pub fn draw_rect(
    canvas: &mut Canvas,
    page: usize,
    bounds: Rect,
    fill: Option<Color>,
    stroke: Option<Stroke>,
    radius: f32,
) {
    canvas.push(
        page,
        PositionedElement::new(
            bounds,
            LayoutElement::Rectangle(RectElement {
                fill,
                stroke,
                radius,
            }),
        ),
    );
}

pub fn draw_line(
    canvas: &mut Canvas,
    page: usize,
    from: (f32, f32),
    to: (f32, f32),
    stroke: Stroke,
) {
    let bounds = Rect::new(
        from.0.min(to.0),
        from.1.min(to.1),
        (to.0 - from.0).abs(),
        (to.1 - from.1).abs(),
    );
    canvas.push(
        page,
        PositionedElement::new(bounds, LayoutElement::Line(LineElement { from, to, stroke })),
    );
}

pub fn fill_circle(
    canvas: &mut Canvas,
    page: usize,
    center: (f32, f32),
    radius: f32,
    color: Color,
) {
    canvas.push(
        page,
        PositionedElement::new(
            Rect::new(center.0 - radius, center.1 - radius, radius * 2.0, radius * 2.0),
            LayoutElement::Ellipse(color),
        ),
    );
}

pub fn fill_polygon(canvas: &mut Canvas, page: usize, points: Vec<(f32, f32)>, color: Color) {
    let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
    let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
    for &(x, y) in &points {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    if points.is_empty() {
        return;
    }
    canvas.push(
        page,
        PositionedElement::new(
            Rect::new(min_x, min_y, max_x - min_x, max_y - min_y),
            LayoutElement::Polygon { points, fill: color },
        ),
    );
}
