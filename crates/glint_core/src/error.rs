use glint_math::GeometryError;
use thiserror::Error;

/// Errors that can occur while building or loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("Invalid light source: {0}")]
    InvalidLight(String),

    #[error("Invalid scene: {0}")]
    Invalid(String),
}

pub type SceneResult<T> = Result<T, SceneError>;
