use thiserror::Error;

/// Top-level error type for the Contura kernel.
#[derive(Debug, Error)]
pub enum ConturaError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors related to geometric construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("arc radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error(
        "arc endpoint ({x}, {y}) is not on the supporting circle: \
         distance to center is {distance}, radius is {radius}"
    )]
    PointOffCircle {
        x: f64,
        y: f64,
        distance: f64,
        radius: f64,
    },

    #[error("polyline requires at least 2 points, got {0}")]
    PolylineTooShort(usize),
}

/// Errors related to contour structure and contour sets.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("segment index {index} is out of range for a contour of {len} segments")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("contour not found in set")]
    ContourNotFound,
}

/// Convenience type alias for results using [`ConturaError`].
pub type Result<T> = std::result::Result<T, ConturaError>;
