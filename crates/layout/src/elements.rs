use crate::fonts::FontFace;
use proplens_types::{Color, Rect};

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub face: FontFace,
    pub size: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectElement {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
    /// Corner radius, `0.0` for square corners.
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    /// Dash and gap lengths. `None` draws a solid line.
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub fn dashed(color: Color, width: f32, dash: f32, gap: f32) -> Self {
        Self {
            color,
            width,
            dash: Some([dash, gap]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineElement {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub stroke: Stroke,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    /// Key into the document's image resources.
    pub resource: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rectangle(RectElement),
    Line(LineElement),
    /// Filled ellipse inscribed in the element bounds.
    Ellipse(Color),
    /// Filled polygon through absolute page points.
    Polygon { points: Vec<(f32, f32)>, fill: Color },
    Image(ImageElement),
}

/// An element placed at absolute page coordinates (points, y downward).
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

impl PositionedElement {
    pub fn new(bounds: Rect, element: LayoutElement) -> Self {
        Self {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            element,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.element {
            LayoutElement::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}
