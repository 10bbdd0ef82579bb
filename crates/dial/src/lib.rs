//! Angle tracking, quantization and snapping for a ten-segment score wheel.
//!
//! Nothing in this crate depends on a GUI toolkit. Hosts feed pointer
//! positions into a [`selector::WheelSelector`], advance it with
//! [`selector::WheelSelector::tick`] once per frame, and drain score notices
//! from its [`outbox::Outbox`].

pub mod chart;
pub mod colors;
pub mod error;
pub mod geometry;
pub mod haptics;
pub mod macros;
pub mod outbox;
pub mod rotation;
pub mod score;
pub mod selector;
pub mod spring;

pub use error::WheelError;
pub use geometry::Point;
pub use score::{Score, WheelPosition};
