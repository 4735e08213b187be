use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Internal PDF library error: {0}")]
    PdfLibError(String),
    #[error("Image resource '{0}' could not be decoded: {1}")]
    Image(String, String),
    #[error("Page {0} references unknown image resource '{1}'")]
    MissingResource(usize, String),
    #[error("Cannot write a document without pages")]
    EmptyDocument,
}

impl From<lopdf::Error> for RenderError {
    fn from(e: lopdf::Error) -> Self {
        RenderError::PdfLibError(e.to_string())
    }
}
