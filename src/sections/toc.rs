use super::ContentsEntry;
use proplens_layout::primitives::shapes::{draw_line, draw_text};
use proplens_layout::primitives::section_header;
use proplens_layout::{Align, Canvas, LayoutCursor, LayoutError, Stroke, TextPreset};
use proplens_types::{Palette, mm};

const ROW_MM: f32 = 8.0;

/// Fills the reserved contents page. Called after every section is laid out
/// so the page numbers are the real start pages.
pub(super) fn compose(
    canvas: &mut Canvas,
    page: usize,
    entries: &[ContentsEntry],
) -> Result<(), LayoutError> {
    let mut cursor = LayoutCursor {
        page_index: page,
        y: canvas.geometry.content_top(),
        geometry: canvas.geometry,
    };
    section_header(canvas, &mut cursor, "Table of Contents", Palette::PRIMARY)?;

    let g = cursor.geometry;
    let body = TextPreset::Body;
    let title_x = g.content_left() + mm(8.0);
    for (index, entry) in entries.iter().enumerate() {
        if cursor.y + body.line_height() > g.content_bottom() {
            log::warn!("Table of contents truncated after {} entries", index);
            break;
        }
        let y = cursor.y;
        draw_text(
            canvas,
            page,
            g.content_left(),
            y,
            &format!("{}.", index + 1),
            body.emphasised(),
            Palette::SECONDARY,
            Align::Left,
        );
        let title_width = draw_text(
            canvas,
            page,
            title_x,
            y,
            entry.section.title(),
            body,
            Palette::SECONDARY,
            Align::Left,
        );
        let number_width = draw_text(
            canvas,
            page,
            g.content_right(),
            y,
            &entry.page.to_string(),
            body,
            Palette::SECONDARY,
            Align::Right,
        );

        let leader_y = y + body.size() * 0.8;
        let from = title_x + title_width + mm(3.0);
        let to = g.content_right() - number_width - mm(3.0);
        if to > from {
            draw_line(
                canvas,
                page,
                (from, leader_y),
                (to, leader_y),
                Stroke::dashed(Palette::LIGHT, 0.75, 1.0, 1.0),
            );
        }
        cursor.advance(mm(ROW_MM));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SectionId;
    use crate::sections::test_support::surface;
    use proplens_layout::LayoutElement;

    #[test]
    fn entries_are_numbered_with_leaders() {
        let (mut canvas, _) = surface();
        canvas.add_page().unwrap();
        let entries = [
            ContentsEntry {
                section: SectionId::ExecutiveSummary,
                page: 3,
            },
            ContentsEntry {
                section: SectionId::MarketTrends,
                page: 7,
            },
        ];
        compose(&mut canvas, 1, &entries).unwrap();

        assert!(canvas.pages[0].is_empty());
        let text = canvas.page_text(1);
        for expected in [
            "Table of Contents",
            "1.",
            "Executive Summary",
            "3",
            "2.",
            "Market Trends & Outlook",
            "7",
        ] {
            assert!(text.contains(&expected), "missing {expected}");
        }
        let leaders = canvas.pages[1]
            .iter()
            .filter(|e| matches!(&e.element, LayoutElement::Line(l) if l.stroke.dash.is_some()))
            .count();
        assert_eq!(leaders, 2);
    }
}
