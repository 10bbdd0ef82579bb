use dial::haptics::Haptics;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use std::time::Duration;

/// Desktop stand-in for a vibration motor: rings the display bell.
#[derive(Debug, Clone, Copy)]
pub struct DisplayBell {
    pub enabled: bool,
}

impl DisplayBell {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Haptics for DisplayBell {
    fn pulse(&self, duration: Duration) {
        if !self.enabled {
            return;
        }
        log::trace!("Haptic pulse ({} ms)", duration.as_millis());
        if let Some(display) = gdk::Display::default() {
            display.beep();
        }
    }
}
