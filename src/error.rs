use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum NNError {
    // Construction errors
    InvalidDimension(String),

    // Shape contract violations at forward/predict/train entry
    DimensionMismatch(String),

    // File operations (model save/load)
    IoError(std::io::Error),
    SerializationError(Box<bincode::ErrorKind>),
}

impl fmt::Display for NNError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NNError::InvalidDimension(msg) => write!(f, "Invalid dimension: {}", msg),
            NNError::DimensionMismatch(msg) => write!(f, "Dimension mismatch: {}", msg),
            NNError::IoError(err) => write!(f, "I/O error: {}", err),
            NNError::SerializationError(err) => write!(f, "Serialization error: {}", err),
        }
    }
}

impl From<std::io::Error> for NNError {
    fn from(err: std::io::Error) -> NNError {
        NNError::IoError(err)
    }
}

impl From<Box<bincode::ErrorKind>> for NNError {
    fn from(err: Box<bincode::ErrorKind>) -> NNError {
        NNError::SerializationError(err)
    }
}

impl Error for NNError {}

pub type Result<T> = std::result::Result<T, NNError>;
