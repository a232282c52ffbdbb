pub mod draw;
pub mod headless;
pub mod viewer2d;
