// src/open/mod.rs
//! Open module - dispatch decisions and handing files to external viewers.

pub mod content;
pub mod dispatch;
pub mod launcher;
pub mod shortcut;

pub use content::{ContentProvider, FileUriProvider};
pub use dispatch::{Dispatcher, OpenAction};
pub use launcher::{Launcher, SystemLauncher};
pub use shortcut::Shortcut;
