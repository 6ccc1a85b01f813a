use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("spot not found: {0}")]
    SpotNotFound(String),

    #[error("bad spot data: {0}")]
    Data(#[from] serde_json::Error),

    #[error("failed to read spot data: {0}")]
    Io(#[from] std::io::Error),
}
