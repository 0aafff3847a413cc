use thiserror::Error;

#[derive(Debug, Error)]
pub enum PcvError {
    #[error("degree too high for point count: can't draw an order {order} curve through {points} control points")]
    DegreeTooHigh { order: usize, points: usize },

    #[error("order must be positive")]
    ZeroOrder,

    #[error("Invalid sampling step: {0} (must be finite and greater than 0)")]
    InvalidStep(f64),

    #[error("A curve needs at least one control point")]
    EmptyControlPoints,

    #[error("Basis has {basis} functions but {points} control points were given")]
    DimensionMismatch { basis: usize, points: usize },

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl PcvError {
    /// Whether this is one of the order/point-count diagnostics a caller
    /// reports to the user instead of treating as a fault.
    pub fn is_order_diagnostic(&self) -> bool {
        matches!(self, Self::DegreeTooHigh { .. } | Self::ZeroOrder)
    }
}

pub type Result<T> = std::result::Result<T, PcvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_too_high_message() {
        let err = PcvError::DegreeTooHigh { order: 5, points: 4 };
        let msg = err.to_string();
        assert!(msg.starts_with("degree too high for point count"));
        assert!(msg.contains("order 5"));
        assert!(msg.contains("4 control points"));
        assert!(err.is_order_diagnostic());
    }

    #[test]
    fn test_zero_order_message() {
        assert_eq!(PcvError::ZeroOrder.to_string(), "order must be positive");
        assert!(PcvError::ZeroOrder.is_order_diagnostic());
        assert!(!PcvError::InvalidStep(0.0).is_order_diagnostic());
    }
}
