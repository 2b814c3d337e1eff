use thiserror::Error;

/// Top-level error type for the Planis geometry kernel.
#[derive(Debug, Error)]
pub enum PlanisError {
    #[error(transparent)]
    Quantity(#[from] QuantityError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to the quantity and tolerance layer.
///
/// Geometric degeneracies (collinear circumcircle points, parallel lines,
/// zero-length directions) are not errors; they surface as `None` from the
/// operation in question.
#[derive(Debug, Error)]
pub enum QuantityError {
    #[error("tolerance precision {digits} is out of range [{min}, {max}] decimal digits")]
    PrecisionOutOfRange { digits: u32, min: u32, max: u32 },
}

/// Errors related to geometric construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{entity} needs at least {minimum} vertices, got {actual}")]
    TooFewVertices {
        entity: &'static str,
        minimum: usize,
        actual: usize,
    },
}

/// Convenience type alias for results using [`PlanisError`].
pub type Result<T> = std::result::Result<T, PlanisError>;
