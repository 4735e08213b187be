use serde::{Deserialize, Deserializer, Serialize, de};

/// An opaque sRGB color.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// Linear interpolation between two colors, `t` clamped to `0..=1`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Components scaled to `0.0..=1.0`, the form PDF color operators take.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    pub fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with #, got: {}", s))?;

        let channel = |digits: &str, name: &str| {
            u8::from_str_radix(digits, 16).map_err(|e| format!("Invalid {} component: {}", name, e))
        };

        match hex.len() {
            3 => Ok(Color::rgb(
                channel(&hex[0..1].repeat(2), "red")?,
                channel(&hex[1..2].repeat(2), "green")?,
                channel(&hex[2..3].repeat(2), "blue")?,
            )),
            6 => Ok(Color::rgb(
                channel(&hex[0..2], "red")?,
                channel(&hex[2..4], "green")?,
                channel(&hex[4..6], "blue")?,
            )),
            _ => Err(format!(
                "Invalid hex color length: expected 3 or 6, got {}",
                hex.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color::rgb(r, g, b)),
        }
    }
}

/// The report palette. Every colored element in the document and the
/// charts draws from these entries.
pub struct Palette;

impl Palette {
    pub const PRIMARY: Color = Color::rgb(41, 128, 185);
    pub const SECONDARY: Color = Color::rgb(52, 73, 94);
    pub const ACCENT: Color = Color::rgb(26, 188, 156);
    pub const SUCCESS: Color = Color::rgb(46, 204, 113);
    pub const WARNING: Color = Color::rgb(241, 196, 15);
    pub const DANGER: Color = Color::rgb(231, 76, 60);
    pub const LIGHT: Color = Color::rgb(236, 240, 241);
    pub const DARK: Color = Color::rgb(44, 62, 80);
    pub const GRADIENT_START: Color = Color::rgb(103, 126, 234);
    pub const GRADIENT_END: Color = Color::rgb(118, 75, 162);

    /// Muted grey used for secondary text such as captions and footers.
    pub const MUTED: Color = Color::rgb(127, 140, 141);
    /// Alternating stripe fill for table bodies.
    pub const STRIPE: Color = Color::rgb(248, 249, 250);

    /// Green for gains, red for losses.
    pub fn signed(value: f64) -> Color {
        if value >= 0.0 { Self::SUCCESS } else { Self::DANGER }
    }
}
