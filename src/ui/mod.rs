//! UI module - HUD and pause overlay.

mod hud;
mod plugin;

pub use hud::{InteractionPrompt, SignPanel};
pub use plugin::UiPlugin;
