use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to assemble the document: {0}")]
    Document(#[from] docx_rs::DocxError),

    #[error("Failed to write the report file: {0}")]
    Io(#[from] std::io::Error),
}
