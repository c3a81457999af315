//! World module - demo room and interactable props.

mod interactables;
mod level;
mod plugin;

pub use interactables::{Door, FlickerLamp, Lever, OpenSign, PressButton, Sign, SIGN_READ_SECONDS};
pub use level::{LevelGeometry, RoomLayout};
pub use plugin::{setup_level, WorldPlugin};
