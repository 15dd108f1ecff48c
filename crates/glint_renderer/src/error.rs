use thiserror::Error;

/// Errors raised while setting up a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type RenderResult<T> = Result<T, RenderError>;
