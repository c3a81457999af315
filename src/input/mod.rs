//! Input module - named action bindings over the raw keyboard state.

mod actions;

pub use actions::{axis_vector, ActionBindings};
