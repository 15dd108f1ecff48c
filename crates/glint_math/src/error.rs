use thiserror::Error;

/// Errors raised while constructing vectors, points and shapes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid value for {what}: {value}")]
    InvalidValue { what: &'static str, value: f64 },

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

pub type GeometryResult<T> = Result<T, GeometryError>;

/// Rejects NaN components, naming the offending one.
pub(crate) fn check_components(x: f64, y: f64, z: f64) -> GeometryResult<()> {
    for (what, value) in [("x", x), ("y", y), ("z", z)] {
        if value.is_nan() {
            return Err(GeometryError::InvalidValue { what, value });
        }
    }
    Ok(())
}
