use crate::fonts::FontFace;

/// Fixed text presets. Every text primitive selects one of these rather than
/// a literal font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextPreset {
    Title,
    H1,
    H2,
    H3,
    Body,
    Small,
    Caption,
}

impl TextPreset {
    pub fn size(self) -> f32 {
        match self {
            TextPreset::Title => 32.0,
            TextPreset::H1 => 24.0,
            TextPreset::H2 => 18.0,
            TextPreset::H3 => 14.0,
            TextPreset::Body => 11.0,
            TextPreset::Small => 9.0,
            TextPreset::Caption => 8.0,
        }
    }

    pub fn face(self) -> FontFace {
        match self {
            TextPreset::Title | TextPreset::H1 | TextPreset::H2 | TextPreset::H3 => FontFace::Bold,
            TextPreset::Body | TextPreset::Small => FontFace::Regular,
            TextPreset::Caption => FontFace::Oblique,
        }
    }

    pub fn line_height(self) -> f32 {
        self.size() * 1.3
    }

    pub fn measure(self, text: &str) -> f32 {
        self.face().measure(text, self.size())
    }

    /// Same size, bold face. Used for emphasised labels inside body text.
    pub fn emphasised(self) -> TextStyle {
        TextStyle {
            face: FontFace::Bold,
            size: self.size(),
        }
    }
}

/// A concrete face and size, resolved from a preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    pub size: f32,
}

impl TextStyle {
    pub fn measure(&self, text: &str) -> f32 {
        self.face.measure(text, self.size)
    }
}

impl From<TextPreset> for TextStyle {
    fn from(preset: TextPreset) -> Self {
        TextStyle {
            face: preset.face(),
            size: preset.size(),
        }
    }
}

/// Horizontal anchoring of a text run relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// Left edge of a run of `width` anchored at `x`.
    pub fn origin(self, x: f32, width: f32) -> f32 {
        match self {
            Align::Left => x,
            Align::Center => x - width / 2.0,
            Align::Right => x - width,
        }
    }
}
