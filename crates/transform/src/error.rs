use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Discovery(#[from] skillport_discovery::Error),

    #[error(transparent)]
    Platform(#[from] skillport_platforms::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
