use crate::algorithms::pagination::ensure_space;
use crate::elements::ImageElement;
use crate::output::SharedData;
use crate::typography::Align;
use crate::{Canvas, LayoutCursor, LayoutElement, LayoutError, PositionedElement};
use proplens_types::{Rect, mm};

/// Places an image box of fixed size at the cursor and registers its bytes
/// under `resource` on the canvas.
pub fn place_image(
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
    resource: &str,
    data: SharedData,
    width: f32,
    height: f32,
    align: Align,
) -> Result<(), LayoutError> {
    ensure_space(canvas, cursor, height)?;
    let g = cursor.geometry;
    let x = match align {
        Align::Left => g.content_left(),
        Align::Center => g.content_left() + (g.content_width() - width) / 2.0,
        Align::Right => g.content_right() - width,
    };

    canvas.register_image(resource, data);
    canvas.push(
        cursor.page_index,
        PositionedElement::new(
            Rect::new(x, cursor.y, width, height),
            LayoutElement::Image(ImageElement {
                resource: resource.to_string(),
            }),
        ),
    );
    cursor.advance(height + mm(4.0));
    Ok(())
}
