use thiserror::Error;

pub type AnvilResult<T> = Result<T, AnvilError>;

#[derive(Error, Debug)]
pub enum AnvilError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load workbook: {0}")]
    Load(String),

    #[error("Failed to save workbook: {0}")]
    Save(#[from] rust_xlsxwriter::XlsxError),

    #[error("'{0}' not found in the sheet")]
    MissingLabel(String),

    #[error("The cell two rows below '{0}' does not contain a numeric value")]
    NonNumericValue(String),

    #[error("No numeric values found in the '{0}' column")]
    EmptySeries(String),

    #[error("Not enough data points below {0}% strain")]
    InsufficientData(f64),

    #[error("Label '{0}' not found in the sheet")]
    LabelNotFound(String),

    #[error("Stress and strain lengths mismatch: {stress} stress vs {strain} strain samples")]
    LengthMismatch { stress: usize, strain: usize },
}
