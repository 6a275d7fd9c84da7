use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input ended before a value for {axis} was read")]
    UnexpectedEof { axis: char },

    #[error("Invalid value for {axis} coordinate: '{input}'")]
    InvalidNumber { axis: char, input: String },

    #[error("Colatitude is undefined at the origin (radius = 0)")]
    UndefinedColatitude,

    #[error("Failed to load config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Failed to load scene {}: {message}", path.display())]
    Scene { path: PathBuf, message: String },
}

impl GeometryError {
    pub fn invalid_number(axis: char, input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            axis,
            input: input.into(),
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Config {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn scene(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Scene {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
