use gdk_pixbuf::Pixbuf;
use std::path::{Path, PathBuf};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Numeral artwork, in score order. The display name is the file stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Numeral {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
}

impl Numeral {
    pub fn value(self) -> u8 {
        self as u8 + 1
    }
}

const KNOB: &str = "knob";

pub fn image_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.png"))
}

/// `scorewheel/images` under the XDG data home, then every XDG data dir.
fn get_image_directories() -> Vec<PathBuf> {
    let xdg = xdg::BaseDirectories::new();
    let mut dirs = Vec::new();

    if let Some(home) = xdg.get_data_home() {
        dirs.push(home.join("scorewheel").join("images"));
    }

    dirs.extend(
        xdg.get_data_dirs()
            .into_iter()
            .map(|p| p.join("scorewheel").join("images")),
    );
    dirs
}

pub fn resolve_dir(configured: Option<&Path>) -> Option<PathBuf> {
    configured
        .map(Path::to_path_buf)
        .or_else(|| get_image_directories().into_iter().find(|d| d.is_dir()))
}

/// Images drawn on the wheel. Anything that fails to load stays `None` and
/// is skipped when drawing.
#[derive(Clone, Default)]
pub struct WheelAssets {
    pub numerals: Vec<Option<Pixbuf>>,
    pub knob: Option<Pixbuf>,
}

impl WheelAssets {
    pub fn load(dir: Option<&Path>) -> Self {
        let Some(dir) = dir else {
            log::warn!("No image directory found; numerals and knob will not be drawn");
            return Self::default();
        };

        Self {
            numerals: Numeral::iter()
                .map(|n| Self::load_image(dir, &n.to_string()))
                .collect(),
            knob: Self::load_image(dir, KNOB),
        }
    }

    fn load_image(dir: &Path, name: &str) -> Option<Pixbuf> {
        let path = image_path(dir, name);
        Pixbuf::from_file(&path)
            .inspect_err(|e| log::warn!("Failed to load {}: {}", path.display(), e))
            .ok()
    }
}
