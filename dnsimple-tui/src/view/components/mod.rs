//! Widgets shared by several pages.

pub mod modal;
pub mod spinner;
pub mod statusbar;
pub mod tabbar;
