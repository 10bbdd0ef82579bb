pub mod haptics;
pub mod runtime;
