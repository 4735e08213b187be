use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Block has a height of {0:.2} which exceeds the total page content height of {1:.2}.")]
    ElementTooLarge(f32, f32),
    #[error("Page limit of {0} reached; cannot allocate another page.")]
    PageLimitExceeded(usize),
}

pub mod algorithms {
    pub mod pagination;
}
pub mod text {
    pub mod wrap;
}

mod elements;
pub mod config;
pub mod cursor;
pub mod fonts;
pub mod output;
pub mod primitives;
pub mod typography;

pub use self::config::{LayoutConfig, PageGeometry};
pub use self::cursor::LayoutCursor;
pub use self::elements::{
    ImageElement, LayoutElement, LineElement, PositionedElement, RectElement, Stroke, TextElement,
};
pub use self::fonts::FontFace;
pub use self::output::{Canvas, SharedData};
pub use self::typography::{Align, TextPreset, TextStyle};

pub use self::algorithms::pagination::{ensure_space, new_page};

pub use proplens_types::geometry::{Rect, Size};
