//! Core game module - states, events, config loading, and cursor capture.
//!
//! This module provides the foundation that the controller and the demo
//! world build upon.

mod capture;
mod config;
mod error;
mod events;
mod plugin;
mod states;
mod tween;

pub use capture::*;
pub use config::*;
pub use error::ConfigError;
pub use events::*;
pub use plugin::CorePlugin;
pub use states::*;
pub use tween::*;
