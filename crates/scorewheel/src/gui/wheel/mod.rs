pub mod model;
pub mod ticker;
pub mod view;

pub use model::WheelModel;
pub use ticker::SnapTicker;
pub use view::draw;

pub const NUMERAL_WIDTH: f64 = 40.0;
pub const NUMERAL_HEIGHT: f64 = 45.0;
pub const NUMERAL_INSET: f64 = 0.2; // fraction of the radius kept clear outside the numerals
pub const SHADOW_RADIUS: f64 = 0.32; // relative to canvas size
pub const HUB_RADIUS: f64 = 0.3;
pub const KNOB_SIZE: f64 = 0.09;
pub const KNOB_OFFSET: f64 = 0.35; // knob center above the wheel center
