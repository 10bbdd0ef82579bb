use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum WheelError {
    #[error("Invalid wheel size {0}: must be finite and greater than zero")]
    InvalidGeometry(f64),
    #[error("Snap point set is empty")]
    EmptySnapSet,
    #[error("Pointer produced a non-finite angle")]
    NonFiniteAngle,
    #[error("Invalid spring configuration: {0}")]
    InvalidSpring(&'static str),
}
