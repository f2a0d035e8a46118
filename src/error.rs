use std::path::PathBuf;

pub type ReplayResult<T> = Result<T, ReplayError>;

#[derive(thiserror::Error, Debug)]
pub enum ReplayError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("animation has no frames")]
    EmptyAnimation,

    #[error("font error: {0}")]
    Font(String),

    #[error("display error: {0}")]
    Display(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl ReplayError {
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    pub fn display(msg: impl Into<String>) -> Self {
        Self::Display(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
