use super::SectionId;
use crate::pipeline::context::ComposeContext;
use proplens_layout::primitives::{note_box, section_header};
use proplens_layout::{Canvas, LayoutCursor, LayoutError};
use proplens_types::{Palette, mm};

pub(super) fn compose(
    ctx: &ComposeContext<'_>,
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
) -> Result<(), LayoutError> {
    let Some(notes) = ctx.config.notes() else {
        return Ok(());
    };
    section_header(canvas, cursor, SectionId::CustomNotes.title(), Palette::SECONDARY)?;
    note_box(canvas, cursor, notes, mm(50.0))
}
