//! Drawing primitives.
//!
//! Block primitives take the canvas and the cursor, declare the vertical
//! space they need through [`ensure_space`](crate::algorithms::pagination::ensure_space),
//! draw, and leave the cursor below the block. The `draw_*` helpers in
//! [`shapes`] place single elements at absolute coordinates and never move
//! the cursor; chrome and fixed layouts use them directly.

pub mod boxes;
pub mod columns;
pub mod image;
pub mod shapes;
pub mod table;
pub mod text;

pub use boxes::{
    MetricCard, grade_badge, gradient_band, highlight_box, metric_cards, note_box, risk_card,
};
pub use columns::two_column;
pub use image::place_image;
pub use table::{LedgerKind, LedgerRow, Table, TableColumn, ledger_table, styled_table};
pub use text::{
    BulletMarker, bullet, paragraph, section_header, sub_header, sub_header_height, text_line,
};
