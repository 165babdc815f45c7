//! Error type shared by the fill, clip and shape operations.

/// Everything that can go wrong when geometry is handed to the core.
///
/// All variants are recoverable: the operation that returns one has drawn
/// nothing.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RasterError {
    #[error("invalid geometry: {reason}")]
    InvalidGeometry { reason: &'static str },

    #[error("polygon needs at least {needed} vertices, got {got}")]
    TooFewVertices { needed: usize, got: usize },

    #[error("circle radius must be positive, got {0}")]
    InvalidRadius(i32),

    #[error("vertex is {distance:.2} units from an existing vertex (minimum {minimum})")]
    VertexTooClose { distance: f64, minimum: f64 },

    #[error("quarter must be in 1..=4, got {0}")]
    InvalidQuarter(u8),
}

pub type Result<T> = std::result::Result<T, RasterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = RasterError::TooFewVertices { needed: 3, got: 2 };
        assert_eq!(e.to_string(), "polygon needs at least 3 vertices, got 2");
        let e = RasterError::InvalidGeometry {
            reason: "polygon is not convex",
        };
        assert_eq!(e.to_string(), "invalid geometry: polygon is not convex");
        assert_eq!(
            RasterError::InvalidRadius(0).to_string(),
            "circle radius must be positive, got 0"
        );
    }
}
