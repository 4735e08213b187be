use super::shapes::{draw_rect, draw_text, fill_rect};
use crate::algorithms::pagination::{ensure_space, new_page};
use crate::elements::Stroke;
use crate::text::wrap::wrap_text;
use crate::typography::{Align, TextPreset};
use crate::{Canvas, LayoutCursor, LayoutError};
use proplens_types::{Color, Palette, Rect, mm};

/// Full-width colored box with a label on the left and a value on the right.
pub fn highlight_box(
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
    label: &str,
    value: &str,
    color: Color,
) -> Result<(), LayoutError> {
    let height = mm(20.0);
    ensure_space(canvas, cursor, height)?;
    let g = cursor.geometry;
    let page = cursor.page_index;

    draw_rect(
        canvas,
        page,
        Rect::new(g.content_left(), cursor.y, g.content_width(), height),
        Some(color),
        None,
        mm(3.0),
    );
    let label_y = cursor.y + (height - TextPreset::H3.size()) / 2.0;
    draw_text(
        canvas,
        page,
        g.content_left() + mm(10.0),
        label_y,
        label,
        TextPreset::H3,
        Color::WHITE,
        Align::Left,
    );
    let value_y = cursor.y + (height - TextPreset::H2.size()) / 2.0;
    draw_text(
        canvas,
        page,
        g.content_right() - mm(10.0),
        value_y,
        value,
        TextPreset::H2,
        Color::WHITE,
        Align::Right,
    );

    cursor.advance(height + mm(8.0));
    Ok(())
}

#[derive(Debug, Clone)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub value_color: Color,
}

impl MetricCard {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            value_color: Palette::PRIMARY,
        }
    }

    /// Value drawn green when `positive`, red otherwise.
    pub fn signed(label: impl Into<String>, value: impl Into<String>, positive: bool) -> Self {
        Self {
            value_color: if positive { Palette::SUCCESS } else { Palette::DANGER },
            ..Self::new(label, value)
        }
    }
}

/// A row of equal-width cards, label on top, value centered below.
pub fn metric_cards(
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
    cards: &[MetricCard],
    height: f32,
) -> Result<(), LayoutError> {
    if cards.is_empty() {
        return Ok(());
    }
    ensure_space(canvas, cursor, height)?;
    let g = cursor.geometry;
    let page = cursor.page_index;
    let gap = mm(5.0);
    let width = (g.content_width() - gap * (cards.len() - 1) as f32) / cards.len() as f32;

    let mut x = g.content_left();
    for card in cards {
        draw_rect(
            canvas,
            page,
            Rect::new(x, cursor.y, width, height),
            Some(Palette::STRIPE),
            Some(Stroke::solid(Palette::LIGHT, 0.75)),
            mm(2.0),
        );
        let center = x + width / 2.0;
        draw_text(
            canvas,
            page,
            center,
            cursor.y + height * 0.22,
            &card.label,
            TextPreset::Small,
            Palette::SECONDARY,
            Align::Center,
        );
        draw_text(
            canvas,
            page,
            center,
            cursor.y + height * 0.52,
            &card.value,
            TextPreset::H3,
            card.value_color,
            Align::Center,
        );
        x += width + gap;
    }

    cursor.advance(height + mm(8.0));
    Ok(())
}

/// Centered `Grade: X` badge shaded from the grade color, with the grade
/// description underneath.
pub fn grade_badge(
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
    grade: &str,
    description: &str,
    color: Color,
) -> Result<(), LayoutError> {
    let width = mm(120.0);
    let height = mm(30.0);
    let caption_height = TextPreset::Body.line_height();
    ensure_space(canvas, cursor, height + caption_height + mm(4.0))?;

    let g = cursor.geometry;
    let page = cursor.page_index;
    let x = (g.width - width) / 2.0;

    // Layered fills fade toward white at the top edge.
    for i in 0..10 {
        let fade = 1.0 - i as f32 * 0.08;
        let shade = Color::WHITE.lerp(color, fade);
        let inset = mm(i as f32);
        draw_rect(
            canvas,
            page,
            Rect::new(x, cursor.y + inset, width, height - inset),
            Some(shade),
            None,
            mm(3.0),
        );
    }
    let text_y = cursor.y + (height - TextPreset::H1.size()) / 2.0;
    draw_text(
        canvas,
        page,
        g.width / 2.0,
        text_y,
        &format!("Grade: {}", grade),
        TextPreset::H1,
        Color::WHITE,
        Align::Center,
    );
    draw_text(
        canvas,
        page,
        g.width / 2.0,
        cursor.y + height + mm(2.0),
        description,
        TextPreset::Body,
        Palette::SECONDARY,
        Align::Center,
    );

    cursor.advance(height + caption_height + mm(8.0));
    Ok(())
}

/// Bordered card with a colored level stripe, a title, a level badge and a
/// wrapped description.
pub fn risk_card(
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
    title: &str,
    level: &str,
    level_color: Color,
    description: &str,
) -> Result<(), LayoutError> {
    let g = cursor.geometry;
    let small = TextPreset::Small;
    let lines = wrap_text(description, small.into(), g.content_width() - mm(15.0));
    let height = mm(25.0).max(mm(14.0) + lines.len() as f32 * small.line_height());
    ensure_space(canvas, cursor, height)?;
    let page = cursor.page_index;
    let y = cursor.y;

    draw_rect(
        canvas,
        page,
        Rect::new(g.content_left(), y, g.content_width(), height),
        Some(Palette::STRIPE),
        Some(Stroke::solid(Palette::LIGHT, 0.75)),
        mm(2.0),
    );
    fill_rect(canvas, page, Rect::new(g.content_left(), y, mm(3.0), height), level_color);
    draw_text(
        canvas,
        page,
        g.content_left() + mm(8.0),
        y + mm(3.0),
        title,
        TextPreset::H3,
        Palette::SECONDARY,
        Align::Left,
    );

    let badge = Rect::new(g.content_right() - mm(30.0), y + mm(3.0), mm(25.0), mm(8.0));
    draw_rect(canvas, page, badge, Some(level_color), None, mm(2.0));
    draw_text(
        canvas,
        page,
        badge.x + badge.width / 2.0,
        badge.y + (badge.height - small.size()) / 2.0,
        level,
        small,
        Color::WHITE,
        Align::Center,
    );

    let mut line_y = y + mm(12.0);
    for line in &lines {
        draw_text(
            canvas,
            page,
            g.content_left() + mm(8.0),
            line_y,
            line,
            small,
            Palette::SECONDARY,
            Align::Left,
        );
        line_y += small.line_height();
    }

    cursor.advance(height + mm(5.0));
    Ok(())
}

/// Rounded box holding wrapped body text.
///
/// The box is at least `min_height` tall. Text too long for the current page
/// continues in a new box on the next page rather than failing.
pub fn note_box(
    canvas: &mut Canvas,
    cursor: &mut LayoutCursor,
    text: &str,
    min_height: f32,
) -> Result<(), LayoutError> {
    let preset = TextPreset::Body;
    let line_height = preset.line_height();
    let padding = mm(5.0);
    let g = cursor.geometry;
    let lines = wrap_text(text, preset.into(), g.content_width() - 2.0 * padding);

    let mut remaining: &[String] = &lines;
    let mut first = true;
    while !remaining.is_empty() {
        ensure_space(canvas, cursor, line_height + 2.0 * padding)?;
        let fit = ((cursor.remaining() - 2.0 * padding) / line_height).floor() as usize;
        let take = fit.clamp(1, remaining.len());
        let (chunk, rest) = remaining.split_at(take);

        let mut height = chunk.len() as f32 * line_height + 2.0 * padding;
        if first {
            height = height.max(min_height.min(cursor.remaining()));
        }
        let page = cursor.page_index;
        draw_rect(
            canvas,
            page,
            Rect::new(g.content_left(), cursor.y, g.content_width(), height),
            Some(Palette::STRIPE),
            Some(Stroke::solid(Palette::LIGHT, 0.75)),
            mm(3.0),
        );
        let mut y = cursor.y + padding;
        for line in chunk {
            draw_text(
                canvas,
                page,
                g.content_left() + padding,
                y,
                line,
                preset,
                Palette::SECONDARY,
                Align::Left,
            );
            y += line_height;
        }
        cursor.advance(height);

        remaining = rest;
        first = false;
        if !remaining.is_empty() {
            new_page(canvas, cursor)?;
        }
    }

    cursor.advance(mm(5.0));
    Ok(())
}

/// Horizontal gradient built from `steps` vertical strips.
pub fn gradient_band(
    canvas: &mut Canvas,
    page: usize,
    bounds: Rect,
    from: Color,
    to: Color,
    steps: usize,
) {
    let steps = steps.max(1);
    let strip = bounds.width / steps as f32;
    for i in 0..steps {
        let t = if steps == 1 { 0.0 } else { i as f32 / (steps - 1) as f32 };
        // Overlap by a hair so no seams show between strips.
        let rect = Rect::new(bounds.x + strip * i as f32, bounds.y, strip + 0.5, bounds.height);
        fill_rect(canvas, page, rect, from.lerp(to, t));
    }
}
