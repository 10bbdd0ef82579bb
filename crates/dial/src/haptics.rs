use std::time::Duration;

/// Vibration backend. Implementations must return immediately.
pub trait Haptics {
    fn pulse(&self, duration: Duration);
}

/// Discards every pulse.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Haptics for Silent {
    fn pulse(&self, _duration: Duration) {}
}
