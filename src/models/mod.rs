pub mod shortcut;
pub mod timer;
