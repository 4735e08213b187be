//! Translates positioned elements into PDF content stream operators.
//!
//! Layout coordinates have their origin at the top-left corner with y
//! growing downward; PDF user space grows upward from the bottom-left, so
//! every y coordinate is flipped against the page height here.

use crate::error::RenderError;
use proplens_layout::{FontFace, LayoutElement, PositionedElement, RectElement, Stroke, TextElement};
use proplens_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use std::collections::HashMap;

/// Control point distance for approximating a quarter circle with a cubic
/// bezier.
const KAPPA: f32 = 0.552_284_8;

/// Resource name of each font face in the shared resources dictionary.
pub(crate) fn font_resource(face: FontFace) -> &'static str {
    match face {
        FontFace::Regular => "F1",
        FontFace::Bold => "F2",
        FontFace::Oblique => "F3",
    }
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(FontFace, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

pub(crate) struct PageContext<'a> {
    page_index: usize,
    page_height: f32,
    content: Content,
    state: PageRenderState,
    /// Resource key to XObject name.
    images: &'a HashMap<String, String>,
}

impl<'a> PageContext<'a> {
    pub(crate) fn new(
        page_index: usize,
        page_height: f32,
        images: &'a HashMap<String, String>,
    ) -> Self {
        Self {
            page_index,
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
            images,
        }
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    pub(crate) fn draw_element(&mut self, el: &PositionedElement) -> Result<(), RenderError> {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Rectangle(rect) => self.draw_rect(rect, el),
            LayoutElement::Line(line) => {
                self.set_stroke(&line.stroke);
                self.op("m", vec![line.from.0.into(), self.flip(line.from.1).into()]);
                self.op("l", vec![line.to.0.into(), self.flip(line.to.1).into()]);
                self.op("S", vec![]);
                self.clear_dash(&line.stroke);
            }
            LayoutElement::Ellipse(color) => {
                self.set_fill_color(*color);
                self.ellipse_path(el);
                self.op("f", vec![]);
            }
            LayoutElement::Polygon { points, fill } => {
                if points.len() < 3 {
                    return Ok(());
                }
                self.set_fill_color(*fill);
                self.op("m", vec![points[0].0.into(), self.flip(points[0].1).into()]);
                for (x, y) in &points[1..] {
                    self.op("l", vec![(*x).into(), self.flip(*y).into()]);
                }
                self.op("h", vec![]);
                self.op("f", vec![]);
            }
            LayoutElement::Image(image) => {
                let name = self
                    .images
                    .get(&image.resource)
                    .ok_or_else(|| {
                        RenderError::MissingResource(self.page_index + 1, image.resource.clone())
                    })?
                    .clone();
                let bottom = self.flip(el.y + el.height);
                self.op("q", vec![]);
                self.op(
                    "cm",
                    vec![
                        el.width.into(),
                        0.into(),
                        0.into(),
                        el.height.into(),
                        el.x.into(),
                        bottom.into(),
                    ],
                );
                self.op("Do", vec![Object::Name(name.into_bytes())]);
                self.op("Q", vec![]);
            }
        }
        Ok(())
    }

    fn flip(&self, y: f32) -> f32 {
        self.page_height - y
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) {
        if text.content.trim().is_empty() {
            return;
        }
        self.op("BT", vec![]);
        if self.state.font != Some((text.face, text.size)) {
            self.op("Tf", vec![font_resource(text.face).into(), text.size.into()]);
            self.state.font = Some((text.face, text.size));
        }
        self.set_fill_color(text.color);
        let baseline = self.flip(el.y + text.size * 0.8);
        self.op("Td", vec![el.x.into(), baseline.into()]);
        self.op("Tj", vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)]);
        self.op("ET", vec![]);
    }

    fn draw_rect(&mut self, rect: &RectElement, el: &PositionedElement) {
        let paint = match (rect.fill, &rect.stroke) {
            (Some(_), Some(_)) => "B",
            (Some(_), None) => "f",
            (None, Some(_)) => "S",
            (None, None) => return,
        };
        if let Some(fill) = rect.fill {
            self.set_fill_color(fill);
        }
        if let Some(stroke) = &rect.stroke {
            self.set_stroke(stroke);
        }

        let radius = rect.radius.min(el.width / 2.0).min(el.height / 2.0).max(0.0);
        if radius > 0.0 {
            self.rounded_rect_path(el, radius);
        } else {
            let bottom = self.flip(el.y + el.height);
            self.op("re", vec![el.x.into(), bottom.into(), el.width.into(), el.height.into()]);
        }
        self.op(paint, vec![]);

        if let Some(stroke) = &rect.stroke {
            self.clear_dash(stroke);
        }
    }

    fn rounded_rect_path(&mut self, el: &PositionedElement, r: f32) {
        let (x0, x1) = (el.x, el.x + el.width);
        let (y0, y1) = (self.flip(el.y + el.height), self.flip(el.y));
        let k = r * KAPPA;
        self.op("m", vec![(x0 + r).into(), y0.into()]);
        self.op("l", vec![(x1 - r).into(), y0.into()]);
        self.curve((x1 - r + k, y0), (x1, y0 + r - k), (x1, y0 + r));
        self.op("l", vec![x1.into(), (y1 - r).into()]);
        self.curve((x1, y1 - r + k), (x1 - r + k, y1), (x1 - r, y1));
        self.op("l", vec![(x0 + r).into(), y1.into()]);
        self.curve((x0 + r - k, y1), (x0, y1 - r + k), (x0, y1 - r));
        self.op("l", vec![x0.into(), (y0 + r).into()]);
        self.curve((x0, y0 + r - k), (x0 + r - k, y0), (x0 + r, y0));
        self.op("h", vec![]);
    }

    fn ellipse_path(&mut self, el: &PositionedElement) {
        let (rx, ry) = (el.width / 2.0, el.height / 2.0);
        let (cx, cy) = (el.x + rx, self.flip(el.y + ry));
        let (kx, ky) = (rx * KAPPA, ry * KAPPA);
        self.op("m", vec![(cx + rx).into(), cy.into()]);
        self.curve((cx + rx, cy + ky), (cx + kx, cy + ry), (cx, cy + ry));
        self.curve((cx - kx, cy + ry), (cx - rx, cy + ky), (cx - rx, cy));
        self.curve((cx - rx, cy - ky), (cx - kx, cy - ry), (cx, cy - ry));
        self.curve((cx + kx, cy - ry), (cx + rx, cy - ky), (cx + rx, cy));
        self.op("h", vec![]);
    }

    fn curve(&mut self, c1: (f32, f32), c2: (f32, f32), end: (f32, f32)) {
        self.op(
            "c",
            vec![c1.0.into(), c1.1.into(), c2.0.into(), c2.1.into(), end.0.into(), end.1.into()],
        );
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit();
            self.op("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, stroke: &Stroke) {
        if self.state.stroke_color != Some(stroke.color) {
            let [r, g, b] = stroke.color.to_unit();
            self.op("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(stroke.color);
        }
        if self.state.line_width != Some(stroke.width) {
            self.op("w", vec![stroke.width.into()]);
            self.state.line_width = Some(stroke.width);
        }
        if let Some([dash, gap]) = stroke.dash {
            self.op("d", vec![vec![dash.into(), gap.into()].into(), 0.into()]);
        }
    }

    fn clear_dash(&mut self, stroke: &Stroke) {
        if stroke.dash.is_some() {
            self.op("d", vec![Vec::<Object>::new().into(), 0.into()]);
        }
    }
}

/// Encodes text for the WinAnsiEncoding used by the standard fonts.
/// Characters outside the encoding become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}
