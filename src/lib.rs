pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::headless::{HeadlessPage, HeadlessSession, Node, RecordingMap};
pub use crate::config::SiteConfig;
pub use crate::core::controller::{detect_features, PageController, Wiring};
pub use crate::utils::error::{PageError, Result};
