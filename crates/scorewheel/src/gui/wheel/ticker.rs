use dial::selector::WheelSelector;
use std::time::Duration;

/// Feeds frame-clock timestamps into a snap animation. One ticker lives for
/// one tick-callback registration.
#[derive(Debug, Default)]
pub struct SnapTicker {
    last_frame: Option<i64>,
}

impl SnapTicker {
    /// Advances `selector` to `frame_time` (microseconds). Breaks once the
    /// wheel is at rest so the frame clock can go idle.
    pub fn advance(&mut self, selector: &mut WheelSelector, frame_time: i64) -> glib::ControlFlow {
        let dt = self
            .last_frame
            .replace(frame_time)
            .map(|prev| Duration::from_micros((frame_time - prev).max(0) as u64))
            .unwrap_or_default();

        if selector.tick(dt) {
            glib::ControlFlow::Continue
        } else {
            glib::ControlFlow::Break
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dial::Point;
    use dial::rotation::RotationValue;
    use dial::spring::SpringConfig;

    const FRAME_US: i64 = 16_667;

    fn selector() -> WheelSelector {
        WheelSelector::new(300.0, RotationValue::default(), SpringConfig::default()).unwrap()
    }

    #[test]
    fn test_idle_wheel_stops_at_first_frame() {
        let mut selector = selector();
        let mut ticker = SnapTicker::default();
        assert_eq!(ticker.advance(&mut selector, 0), glib::ControlFlow::Break);
    }

    #[test]
    fn test_runs_until_snap_settles() {
        let mut selector = selector();
        selector.on_start(Point::new(250.0, 150.0)).unwrap();
        // one radian clockwise on screen
        selector
            .on_update(Point::new(150.0 + 100.0 * 1f64.cos(), 150.0 + 100.0 * 1f64.sin()))
            .unwrap();
        selector.on_end().unwrap();
        assert!(selector.is_animating());

        let mut ticker = SnapTicker::default();
        let mut now = 0;
        let mut frames = 0;
        while ticker.advance(&mut selector, now) == glib::ControlFlow::Continue {
            now += FRAME_US;
            frames += 1;
            assert!(frames < 1_000, "snap never settled");
        }

        assert!(frames > 1);
        assert!(!selector.is_animating());
        assert_eq!(
            ticker.advance(&mut selector, now + FRAME_US),
            glib::ControlFlow::Break
        );
    }
}
