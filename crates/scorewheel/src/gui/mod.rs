pub mod app;
pub mod assets;
pub mod theme;
pub mod wheel;
