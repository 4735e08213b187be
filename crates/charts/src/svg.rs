//! A small SVG scene writer for chart layouts.

use proplens_types::{Color, Palette};
use std::f32::consts::PI;

pub const FONT_FAMILY: &str = "Helvetica, Arial, Liberation Sans, DejaVu Sans, sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// An SVG document on a white background.
pub struct SvgScene {
    width: u32,
    height: u32,
    body: String,
}

impl SvgScene {
    pub fn new(width: u32, height: u32) -> Self {
        let mut scene = Self {
            width,
            height,
            body: String::new(),
        };
        scene.rect(0.0, 0.0, width as f32, height as f32, Color::WHITE, 1.0);
        scene
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, fill: Color, opacity: f32) {
        self.body.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" fill-opacity="{:.2}"/>"#,
            x,
            y,
            w.max(0.0),
            h.max(0.0),
            fill.to_hex(),
            opacity
        ));
    }

    pub fn line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        stroke: Color,
        width: f32,
        dash: Option<&str>,
    ) {
        self.body.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.2}"{}/>"#,
            from.0,
            from.1,
            to.0,
            to.1,
            stroke.to_hex(),
            width,
            dash_attr(dash)
        ));
    }

    pub fn polyline(
        &mut self,
        points: &[(f32, f32)],
        stroke: Color,
        width: f32,
        dash: Option<&str>,
    ) {
        self.body.push_str(&format!(
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{:.2}" stroke-linejoin="round"{}/>"#,
            points_attr(points),
            stroke.to_hex(),
            width,
            dash_attr(dash)
        ));
    }

    /// Closed shape with a translucent fill and an outline.
    pub fn polygon(
        &mut self,
        points: &[(f32, f32)],
        fill: Color,
        fill_opacity: f32,
        stroke: Color,
        dash: Option<&str>,
    ) {
        self.body.push_str(&format!(
            r#"<polygon points="{}" fill="{}" fill-opacity="{:.2}" stroke="{}" stroke-width="2"{}/>"#,
            points_attr(points),
            fill.to_hex(),
            fill_opacity,
            stroke.to_hex(),
            dash_attr(dash)
        ));
    }

    pub fn circle(&mut self, center: (f32, f32), r: f32, fill: Color) {
        self.body.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            center.0,
            center.1,
            r,
            fill.to_hex()
        ));
    }

    /// Unfilled circle, used to draw a complete ring in one stroke.
    pub fn ring(&mut self, center: (f32, f32), r: f32, thickness: f32, stroke: Color) {
        self.body.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="{}" stroke-width="{:.2}"/>"#,
            center.0,
            center.1,
            r,
            stroke.to_hex(),
            thickness
        ));
    }

    /// Annular sector between angles `start` and `end` (radians, clockwise
    /// on screen, zero pointing right).
    pub fn ring_segment(
        &mut self,
        center: (f32, f32),
        outer: f32,
        inner: f32,
        start: f32,
        end: f32,
        fill: Color,
    ) {
        let sweep = end - start;
        if sweep <= f32::EPSILON {
            return;
        }
        let large = if sweep > PI { 1 } else { 0 };
        let point = |r: f32, a: f32| (center.0 + r * a.cos(), center.1 + r * a.sin());
        let (o1, o2) = (point(outer, start), point(outer, end));
        let (i2, i1) = (point(inner, end), point(inner, start));
        self.body.push_str(&format!(
            r#"<path d="M {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2} Z" fill="{}" stroke="white" stroke-width="2"/>"#,
            o1.0, o1.1, outer, outer, large, o2.0, o2.1,
            i2.0, i2.1, inner, inner, large, i1.0, i1.1,
            fill.to_hex()
        ));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &mut self,
        x: f32,
        y: f32,
        content: &str,
        size: f32,
        anchor: Anchor,
        bold: bool,
        color: Color,
    ) {
        self.body.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-family="{}" font-size="{:.1}" font-weight="{}" text-anchor="{}" fill="{}">{}</text>"#,
            x,
            y,
            FONT_FAMILY,
            size,
            if bold { "bold" } else { "normal" },
            anchor.as_str(),
            color.to_hex(),
            escape_xml(content)
        ));
    }

    /// Legend entry: a color swatch followed by its label.
    pub fn legend_item(&mut self, x: f32, y: f32, label: &str, color: Color) {
        self.rect(x, y - 10.0, 14.0, 10.0, color, 1.0);
        self.text(x + 20.0, y, label, 13.0, Anchor::Start, false, Palette::SECONDARY);
    }

    /// Horizontal gridlines with right-aligned tick labels along the left
    /// edge of a plot area. The zero line is drawn darker.
    pub fn value_grid(
        &mut self,
        plot: PlotArea,
        axis: (f64, f64, f64),
        label: impl Fn(f64) -> String,
    ) {
        let (lo, hi, step) = axis;
        let ticks = ((hi - lo) / step).round() as usize;
        for i in 0..=ticks {
            let value = lo + step * i as f64;
            let y = plot.y_for(value, lo, hi);
            let color = if value.abs() < step * 1e-6 { Palette::MUTED } else { Palette::LIGHT };
            self.line((plot.left, y), (plot.right, y), color, 1.0, None);
            self.text(
                plot.left - 10.0,
                y + 4.0,
                &label(value),
                12.0,
                Anchor::End,
                false,
                Palette::MUTED,
            );
        }
    }

    pub fn finish(self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">{body}</svg>"#,
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

/// Plot rectangle inside a chart, in pixels.
#[derive(Debug, Clone, Copy)]
pub struct PlotArea {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PlotArea {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Vertical pixel position of `value` on an axis spanning `lo..hi`.
    pub fn y_for(&self, value: f64, lo: f64, hi: f64) -> f32 {
        let t = if hi > lo { ((value - lo) / (hi - lo)) as f32 } else { 0.0 };
        self.bottom - t * (self.bottom - self.top)
    }
}

fn dash_attr(dash: Option<&str>) -> String {
    dash.map(|d| format!(r#" stroke-dasharray="{}""#, d))
        .unwrap_or_default()
}

fn points_attr(points: &[(f32, f32)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Round axis bounds and a step that cover `[min, max]` with about five
/// intervals. Zero is always inside the range.
pub fn nice_axis(min: f64, max: f64) -> (f64, f64, f64) {
    let lo = min.min(0.0);
    let hi = max.max(0.0);
    let span = hi - lo;
    if span <= f64::EPSILON {
        return (0.0, 1.0, 0.2);
    }
    let raw = span / 5.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);
    let axis_min = (lo / step).floor() * step;
    let axis_max = (hi / step).ceil() * step;
    (axis_min, axis_max, step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml("HOA & <Fees>"), "HOA &amp; &lt;Fees&gt;");
    }

    #[test]
    fn scene_wraps_body_in_svg_root() {
        let mut scene = SvgScene::new(200, 100);
        scene.text(10.0, 20.0, "Cash & Flow", 12.0, Anchor::Start, true, Color::BLACK);
        let svg = scene.finish();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 200 100""#));
        assert!(svg.contains("Cash &amp; Flow"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn zero_sweep_segment_is_skipped() {
        let mut scene = SvgScene::new(10, 10);
        let before = scene.body.len();
        scene.ring_segment((5.0, 5.0), 4.0, 2.0, 1.0, 1.0, Color::BLACK);
        assert_eq!(scene.body.len(), before);
    }

    #[test]
    fn nice_axis_brackets_data() {
        let (lo, hi, step) = nice_axis(12000.0, 63710.0);
        assert_eq!(lo, 0.0);
        assert!(hi >= 63710.0);
        assert!(step > 0.0);
        assert!(((hi - lo) / step).round() <= 10.0);

        let (lo, hi, _) = nice_axis(-3000.0, -600.0);
        assert!(lo <= -3000.0);
        assert_eq!(hi, 0.0);

        assert_eq!(nice_axis(0.0, 0.0), (0.0, 1.0, 0.2));
    }
}
