//! PDF output for laid-out report pages using lopdf.
//!
//! The layout crate produces a [`Canvas`](proplens_layout::Canvas) of
//! absolutely positioned elements; [`PdfRenderer`] turns it into a PDF
//! byte buffer with base-14 Helvetica fonts and embedded PNG images.

mod content;
mod error;
mod images;
mod renderer;

pub use content::to_win_ansi;
pub use error::RenderError;
pub use renderer::{DocumentInfo, PdfRenderer};
