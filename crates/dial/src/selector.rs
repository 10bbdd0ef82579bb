use crate::error::WheelError;
use crate::geometry::{
    Point, full_turns, normalize_angle, pointer_angle, snap_point, snap_points, unwrap_delta,
};
use crate::outbox::Outbox;
use crate::rotation::RotationValue;
use crate::score::{Score, WheelPosition};
use crate::spring::{Spring, SpringConfig};
use std::time::Duration;

/// State captured when a drag begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Normalized pointer angle at gesture start.
    pub initial_angle: f64,
    /// Rotation at gesture start.
    pub offset: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Dragging(DragSession),
    Snapping(Spring),
}

/// Turns pointer gestures into wheel rotation and score notices.
#[derive(Debug)]
pub struct WheelSelector {
    center: Point,
    angle: RotationValue,
    phase: Phase,
    spring_config: SpringConfig,
    outbox: Outbox,
}

impl WheelSelector {
    /// Creates a selector for a square widget of side `size`. The initial
    /// score of 1 is queued without a haptic pulse.
    pub fn new(
        size: f64,
        angle: RotationValue,
        spring_config: SpringConfig,
    ) -> Result<Self, WheelError> {
        spring_config.validate()?;
        let mut selector = Self {
            center: Point::default(),
            angle,
            phase: Phase::Idle,
            spring_config,
            outbox: Outbox::default(),
        };
        selector.resize(size)?;
        selector.outbox.push(Score::default(), false);
        Ok(selector)
    }

    pub fn resize(&mut self, size: f64) -> Result<(), WheelError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(WheelError::InvalidGeometry(size));
        }
        self.center = Point::new(size / 2.0, size / 2.0);
        Ok(())
    }

    pub fn set_spring_config(&mut self, config: SpringConfig) -> Result<(), WheelError> {
        config.validate()?;
        self.spring_config = config;
        Ok(())
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn angle(&self) -> &RotationValue {
        &self.angle
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn position(&self) -> WheelPosition {
        WheelPosition::from_angle(self.angle.get())
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Snapping(_))
    }

    pub fn outbox_mut(&mut self) -> &mut Outbox {
        &mut self.outbox
    }

    fn normalized_pointer_angle(&self, pointer: Point) -> Result<f64, WheelError> {
        let angle = pointer_angle(self.center, pointer);
        if angle.is_finite() {
            Ok(normalize_angle(angle))
        } else {
            Err(WheelError::NonFiniteAngle)
        }
    }

    /// Begins a drag. A running snap animation is abandoned and its current
    /// value becomes the drag offset.
    pub fn on_start(&mut self, pointer: Point) -> Result<(), WheelError> {
        let initial_angle = self.normalized_pointer_angle(pointer)?;
        if self.is_animating() {
            log::debug!("Drag interrupted snap at {:.3} rad", self.angle.get());
        }
        self.phase = Phase::Dragging(DragSession {
            initial_angle,
            offset: self.angle.get(),
        });
        Ok(())
    }

    /// Moves the wheel with the pointer and queues the resulting score.
    ///
    /// A notice is queued on every call, whether or not the segment changed.
    pub fn on_update(&mut self, pointer: Point) -> Result<(), WheelError> {
        let Phase::Dragging(session) = self.phase else {
            log::trace!("Ignoring pointer update outside a drag");
            return Ok(());
        };

        let current = self.normalized_pointer_angle(pointer)?;
        let delta = unwrap_delta(session.initial_angle - current);
        self.angle.set(session.offset + delta);

        self.outbox.push(self.position().score(), true);
        Ok(())
    }

    /// Releases the wheel: picks the nearest segment center, keeps the whole
    /// turns already taken, and starts the spring toward it. The score of the
    /// target segment is queued right away.
    pub fn on_end(&mut self) -> Result<(), WheelError> {
        if !matches!(self.phase, Phase::Dragging(_)) {
            log::trace!("Ignoring release outside a drag");
            return Ok(());
        }

        let current = self.angle.get();
        if !current.is_finite() {
            self.phase = Phase::Idle;
            return Err(WheelError::NonFiniteAngle);
        }

        let snap = snap_point(normalize_angle(current), 0.0, &snap_points())?;
        let target = full_turns(current) + snap;
        log::debug!("Snapping {:.3} -> {:.3} rad", current, target);

        let spring = Spring::new(current, target, 0.0, self.spring_config);
        self.phase = if spring.is_settled() {
            self.angle.set(target);
            Phase::Idle
        } else {
            Phase::Snapping(spring)
        };

        self.outbox.push(WheelPosition::from_angle(snap).score(), true);
        Ok(())
    }

    /// Advances the snap animation by `dt`. Returns `true` while it is still
    /// running.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Phase::Snapping(spring) = &mut self.phase else {
            return false;
        };

        let value = spring.step(dt);
        let settled = spring.is_settled();
        self.angle.set(value);
        if settled {
            self.phase = Phase::Idle;
        }
        !settled
    }
}
