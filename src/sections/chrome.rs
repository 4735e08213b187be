//! Branding header on the first page and the footer band on every page.

use crate::pipeline::context::ComposeContext;
use proplens_layout::primitives::gradient_band;
use proplens_layout::primitives::shapes::{draw_text, fill_rect};
use proplens_layout::{Align, Canvas, LayoutCursor, TextPreset};
use proplens_types::{Color, Palette, Rect, mm};

const DISCLAIMER: &str =
    "This report is for informational purposes only. Consult professionals before making investment decisions.";

const BAND_HEIGHT_MM: f32 = 35.0;
const GRADIENT_STEPS: usize = 20;
/// Where first-page content starts below the band.
const CONTENT_START_MM: f32 = 45.0;

/// Draws the branding band across the top of the first page and moves the
/// cursor below it. Without branding the page is left untouched.
pub(super) fn header(ctx: &ComposeContext<'_>, canvas: &mut Canvas, cursor: &mut LayoutCursor) {
    let Some(branding) = ctx.branding else {
        return;
    };
    let g = cursor.geometry;
    let page = cursor.page_index;
    gradient_band(
        canvas,
        page,
        Rect::new(0.0, 0.0, g.width, mm(BAND_HEIGHT_MM)),
        Palette::GRADIENT_START,
        Palette::GRADIENT_END,
        GRADIENT_STEPS,
    );

    // Logos are never fetched; the text keeps the logo's slot so layout
    // matches branded documents that do carry one.
    let x = if branding.logo_url.is_some() {
        g.content_left() + mm(30.0)
    } else {
        g.content_left()
    };
    let mut y = mm(7.0);
    if let Some(name) = non_blank(&branding.name) {
        draw_text(canvas, page, x, y, name, TextPreset::H3, Color::WHITE, Align::Left);
        y += mm(6.0);
    }
    for line in [&branding.company, &branding.phone, &branding.email] {
        if let Some(line) = non_blank(line) {
            draw_text(canvas, page, x, y, line, TextPreset::Small, Color::WHITE, Align::Left);
            y += mm(4.0);
        }
    }

    cursor.set_y(cursor.y.max(mm(CONTENT_START_MM)));
}

/// Light band with the disclaimer, contact line and `Page i of N` on every
/// page. Runs after composition so the total is final.
pub(super) fn footer(ctx: &ComposeContext<'_>, canvas: &mut Canvas) {
    let g = canvas.geometry;
    let band = (g.height - g.content_bottom()).min(mm(20.0));
    let top = g.height - band;
    let total = canvas.page_count();
    let contact = ctx.branding.and_then(|b| b.contact_line());

    for page in 0..total {
        fill_rect(canvas, page, Rect::new(0.0, top, g.width, band), Palette::LIGHT);
        draw_text(
            canvas,
            page,
            g.width / 2.0,
            top + mm(5.0),
            DISCLAIMER,
            TextPreset::Caption,
            Palette::SECONDARY,
            Align::Center,
        );
        let line_y = top + mm(11.5);
        if let Some(contact) = &contact {
            draw_text(
                canvas,
                page,
                g.content_left(),
                line_y,
                contact,
                TextPreset::Small,
                Palette::SECONDARY,
                Align::Left,
            );
        }
        draw_text(
            canvas,
            page,
            g.content_right(),
            line_y,
            &format!("Page {} of {}", page + 1, total),
            TextPreset::Small,
            Palette::SECONDARY,
            Align::Right,
        );
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{Fixture, surface};
    use proplens_types::{AnalysisRecord, RealtorBrandingInfo};

    #[test]
    fn header_is_skipped_without_branding() {
        let fixture = Fixture::new(AnalysisRecord::default());
        let (mut canvas, mut cursor) = surface();
        let start = cursor.y;
        header(&fixture.ctx(), &mut canvas, &mut cursor);
        assert!(canvas.pages[0].is_empty());
        assert_eq!(cursor.y, start);
    }

    #[test]
    fn header_prints_branding_and_moves_cursor() {
        let mut fixture = Fixture::new(AnalysisRecord::default());
        fixture.branding = Some(RealtorBrandingInfo {
            name: Some("Dana Reyes".into()),
            company: Some("Harbor Realty".into()),
            email: Some("dana@harbor.example".into()),
            ..Default::default()
        });
        let (mut canvas, mut cursor) = surface();
        header(&fixture.ctx(), &mut canvas, &mut cursor);

        let text = canvas.page_text(0);
        assert_eq!(text, vec!["Dana Reyes", "Harbor Realty", "dana@harbor.example"]);
        assert_eq!(cursor.y, mm(CONTENT_START_MM));
    }

    #[test]
    fn footer_numbers_every_page() {
        let mut fixture = Fixture::new(AnalysisRecord::default());
        fixture.branding = Some(RealtorBrandingInfo {
            phone: Some("555-0100".into()),
            ..Default::default()
        });
        let (mut canvas, _) = surface();
        canvas.add_page().unwrap();
        canvas.add_page().unwrap();
        footer(&fixture.ctx(), &mut canvas);

        for page in 0..3 {
            let text = canvas.page_text(page);
            assert!(text.contains(&DISCLAIMER));
            assert!(text.contains(&"555-0100"));
            let label = format!("Page {} of 3", page + 1);
            assert!(text.contains(&label.as_str()));
        }
    }
}
