//! Static lookup tables: themes, entrance animations and their speeds.

pub mod animations;
pub mod themes;

pub use animations::AnimationClass;
pub use themes::{Theme, ThemeCatalog};
