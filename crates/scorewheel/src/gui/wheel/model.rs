use crate::config::Config;
use crate::gui::assets::{self, WheelAssets};
use dial::WheelError;
use dial::chart::{self, Chart};
use dial::rotation::RotationValue;
use dial::selector::WheelSelector;
use std::sync::Arc;

pub struct WheelModel {
    pub selector: WheelSelector,
    pub chart: Arc<Chart>,
    /// Chart rasterized once per size; `None` falls back to vector drawing.
    pub chart_surface: Option<cairo::ImageSurface>,
    pub assets: WheelAssets,
}

impl WheelModel {
    pub fn new(config: &Config, angle: RotationValue) -> Result<Self, WheelError> {
        let size = config.wheel.size;
        let chart = chart::cached(size)?;
        let selector = WheelSelector::new(size, angle, config.spring)?;
        let dir = assets::resolve_dir(config.assets.dir.as_deref());

        Ok(Self {
            selector,
            chart_surface: super::view::render_chart(&chart),
            chart,
            assets: WheelAssets::load(dir.as_deref()),
        })
    }

    pub fn size(&self) -> f64 {
        self.chart.size()
    }

    /// Applies a reloaded config. Geometry and spring changes take effect on
    /// the next gesture.
    pub fn apply(&mut self, config: &Config) -> Result<(), WheelError> {
        self.selector.set_spring_config(config.spring)?;

        if config.wheel.size != self.size() {
            let chart = chart::cached(config.wheel.size)?;
            self.selector.resize(config.wheel.size)?;
            self.chart_surface = super::view::render_chart(&chart);
            self.chart = chart;
        }

        let dir = assets::resolve_dir(config.assets.dir.as_deref());
        self.assets = WheelAssets::load(dir.as_deref());
        Ok(())
    }
}
