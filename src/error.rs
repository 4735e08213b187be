use proplens_layout::LayoutError;
use proplens_render_lopdf::RenderError;
use thiserror::Error;

/// Everything that can abort a report. Chart failures are not here; they
/// only drop the chart.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
