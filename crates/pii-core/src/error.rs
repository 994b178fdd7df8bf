use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Entity detection failed: {0}")]
    EntityDetection(String),
}

pub type Result<T> = std::result::Result<T, Error>;
