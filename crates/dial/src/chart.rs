use crate::colors::{self, SEGMENT_PALETTE};
use crate::error::WheelError;
use crate::geometry::{Point, SEGMENT_ANGLE, SEGMENT_COUNT, normalize_angle};
use palette::Srgb;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt::Write;
use std::sync::{Arc, OnceLock};

/// One pie slice, spanning `[start, start + SEGMENT_ANGLE)` clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub color: Srgb<u8>,
}

impl Wedge {
    pub fn sweep(&self) -> f64 {
        SEGMENT_ANGLE
    }

    fn rim_point(angle: f64, radius: f64) -> Point {
        Point::new(radius * angle.cos() + radius, radius * angle.sin() + radius)
    }

    /// SVG path data: rim arc then back to the center.
    pub fn path_data(&self, radius: f64) -> String {
        let from = Self::rim_point(self.start, radius);
        let to = Self::rim_point(self.end, radius);
        format!(
            "M {} {} A {r} {r} 0 0 1 {} {} L {r} {r} Z",
            from.x,
            from.y,
            to.x,
            to.y,
            r = radius
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    size: f64,
    wedges: Vec<Wedge>,
}

impl Chart {
    pub fn build(size: f64) -> Result<Self, WheelError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(WheelError::InvalidGeometry(size));
        }

        let mut start = 0.0;
        let wedges = (0..SEGMENT_COUNT)
            .map(|index| {
                let end = normalize_angle(start + SEGMENT_ANGLE);
                let wedge = Wedge {
                    index,
                    start,
                    end,
                    color: SEGMENT_PALETTE[SEGMENT_COUNT - 1 - index],
                };
                start = end;
                wedge
            })
            .collect();

        Ok(Self { size, wedges })
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }

    pub fn wedges(&self) -> &[Wedge] {
        &self.wedges
    }

    pub fn to_svg(&self) -> String {
        let (size, radius) = (self.size, self.radius());
        let mut svg = format!(
            "<svg width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\" xmlns='http://www.w3.org/2000/svg'>"
        );
        for wedge in &self.wedges {
            let _ = write!(
                svg,
                "<path d=\"{}\" fill=\"{}\" />",
                wedge.path_data(radius),
                colors::to_hex(wedge.color)
            );
        }
        svg.push_str("</svg>");
        svg
    }
}

/// Sizes kept by [`cached`]; the oldest is dropped when a new size arrives.
pub const CACHE_CAPACITY: usize = 4;

static CHARTS: OnceLock<Mutex<VecDeque<Arc<Chart>>>> = OnceLock::new();

/// Builds the chart for `size` once and hands out shared copies while that
/// size stays among the last [`CACHE_CAPACITY`] requested.
pub fn cached(size: f64) -> Result<Arc<Chart>, WheelError> {
    let cache = CHARTS.get_or_init(|| Mutex::new(VecDeque::with_capacity(CACHE_CAPACITY)));
    let mut charts = cache.lock();
    if let Some(chart) = charts.iter().find(|c| c.size.to_bits() == size.to_bits()) {
        return Ok(chart.clone());
    }

    let chart = Arc::new(Chart::build(size)?);
    log::debug!("Built wheel chart for size {}", size);
    if charts.len() == CACHE_CAPACITY {
        charts.pop_front();
    }
    charts.push_back(chart.clone());
    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_for_300_has_each_color_once() {
        let svg = Chart::build(300.0).unwrap().to_svg();
        assert_eq!(svg.matches("<path ").count(), 10);
        for color in SEGMENT_PALETTE {
            let fill = format!("fill=\"{}\"", colors::to_hex(color));
            assert_eq!(svg.matches(&fill).count(), 1, "{fill}");
        }
        assert!(svg.starts_with("<svg width=\"300\" height=\"300\" viewBox=\"0 0 300 300\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_wedges_are_contiguous_and_reverse_colored() {
        let chart = Chart::build(300.0).unwrap();
        let wedges = chart.wedges();
        assert_eq!(wedges[0].start, 0.0);
        assert_eq!(wedges[0].color, SEGMENT_PALETTE[9]);
        assert_eq!(wedges[9].color, SEGMENT_PALETTE[0]);
        for pair in wedges.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_first_path_starts_on_right_edge() {
        let chart = Chart::build(300.0).unwrap();
        let d = chart.wedges()[0].path_data(chart.radius());
        assert!(d.starts_with("M 300 150 A 150 150 0 0 1 "), "{d}");
        assert!(d.ends_with(" L 150 150 Z"));
    }

    #[test]
    fn test_invalid_size() {
        assert_eq!(Chart::build(0.0), Err(WheelError::InvalidGeometry(0.0)));
        assert_eq!(Chart::build(-3.0), Err(WheelError::InvalidGeometry(-3.0)));
        assert!(Chart::build(f64::NAN).is_err());
    }

    #[test]
    fn test_cached_reuses_chart_and_stays_bounded() {
        let first = cached(212.0).unwrap();
        assert!(Arc::ptr_eq(&first, &cached(212.0).unwrap()));
        assert!(cached(-1.0).is_err());

        for size in (1..=CACHE_CAPACITY).map(|i| 212.0 + i as f64) {
            cached(size).unwrap();
        }
        let rebuilt = cached(212.0).unwrap();
        assert!(!Arc::ptr_eq(&first, &rebuilt));
        assert_eq!(*rebuilt, *first);
        assert!(CHARTS.get().unwrap().lock().len() <= CACHE_CAPACITY);
    }
}
