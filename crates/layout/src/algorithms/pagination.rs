use crate::{Canvas, LayoutCursor, LayoutError};

pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

// Absorbs float noise from summed line heights.
const EPSILON: f32 = 0.01;

/// Checks whether a block of `required` height fits below the cursor.
pub fn check_fit(cursor: &LayoutCursor, required: f32) -> BreakAnalysis {
    let available = cursor.remaining();
    BreakAnalysis {
        should_break: required > available + EPSILON,
        remaining_height: available,
    }
}

/// Page-break policy. Starts a new page when `required` does not fit below
/// the cursor. Returns whether a break happened.
///
/// A block taller than a whole fresh page can never be placed and is
/// reported as [`LayoutError::ElementTooLarge`].
pub fn ensure_space(
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
    required: f32,
) -> Result<bool, LayoutError> {
    let usable = cursor.geometry.usable_height();
    if required > usable + EPSILON {
        return Err(LayoutError::ElementTooLarge(required, usable));
    }
    if check_fit(cursor, required).should_break {
        new_page(canvas, cursor)?;
        return Ok(true);
    }
    Ok(false)
}

/// Unconditional page break. The cursor lands at the top margin of the new
/// page.
pub fn new_page(canvas: &mut Canvas, cursor: &mut LayoutCursor) -> Result<(), LayoutError> {
    let page = canvas.add_page()?;
    cursor.move_to_page(page);
    Ok(())
}
